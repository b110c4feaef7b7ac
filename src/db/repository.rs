//! Database repository for CRUD operations.
//!
//! Every read normalizes NULL columns to type-appropriate defaults so the
//! admin UI never observes an undefined field. Writes are last-write-wins;
//! there is no version column or conditional update.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Artist, ContactMessage, CreateArtistRequest, CreateContactRequest, CreateDonationRequest,
    CreateEventRequest, CreateMerchandiseRequest, CreateNewsRequest, CreateStaffRequest, Donation,
    DonationStatus, Event, MerchandiseItem, NewsArticle, Session, SiteStats, StaffMember,
    UpdateArtistRequest, UpdateContactRequest, UpdateDonationRequest, UpdateEventRequest,
    UpdateMerchandiseRequest, UpdateNewsRequest, UpdateStaffRequest, User,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== STAFF OPERATIONS ====================

    /// List all staff members, ordered by name.
    pub async fn list_staff(&self) -> Result<Vec<StaffMember>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, role, image, bio, created_at, updated_at FROM staff ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(staff_from_row).collect())
    }

    /// Get a staff member by ID.
    pub async fn get_staff(&self, id: &str) -> Result<Option<StaffMember>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, role, image, bio, created_at, updated_at FROM staff WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(staff_from_row))
    }

    /// Create a new staff member.
    pub async fn create_staff(
        &self,
        request: &CreateStaffRequest,
    ) -> Result<StaffMember, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO staff (id, name, role, image, bio, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.image)
        .bind(&request.bio)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(StaffMember {
            id,
            name: request.name.clone(),
            role: request.role.clone(),
            image: request.image.clone(),
            bio: request.bio.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a staff member. The whole record is replaced; `created_at` is preserved.
    pub async fn update_staff(
        &self,
        id: &str,
        request: &UpdateStaffRequest,
    ) -> Result<StaffMember, AppError> {
        let existing = self
            .get_staff(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Staff member {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE staff SET name = ?, role = ?, image = ?, bio = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&request.name)
        .bind(&request.role)
        .bind(&request.image)
        .bind(&request.bio)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(StaffMember {
            id: id.to_string(),
            name: request.name.clone(),
            role: request.role.clone(),
            image: request.image.clone(),
            bio: request.bio.clone(),
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a staff member.
    pub async fn delete_staff(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Staff member {} not found", id)));
        }

        Ok(())
    }

    // ==================== EVENT OPERATIONS ====================

    /// List events, newest first. `is_active` narrows to active or retired events.
    pub async fn list_events(&self, is_active: Option<bool>) -> Result<Vec<Event>, AppError> {
        const COLS: &str = "id, title, description, date, location, image_url, \
             registration_required, max_attendees, attendees_count, is_active, created_at, updated_at";

        let rows = match is_active {
            Some(active) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM events WHERE is_active = ? ORDER BY date DESC"
                ))
                .bind(active as i32)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("SELECT {COLS} FROM events ORDER BY date DESC"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.iter().map(event_from_row).collect())
    }

    /// Get an event by ID.
    pub async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, description, date, location, image_url, registration_required, \
             max_attendees, attendees_count, is_active, created_at, updated_at \
             FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(event_from_row))
    }

    /// Create a new event.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO events (id, title, description, date, location, image_url, \
             registration_required, max_attendees, attendees_count, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, 1, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.date)
        .bind(&request.location)
        .bind(&request.image_url)
        .bind(request.registration_required as i32)
        .bind(request.max_attendees)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            date: request.date.clone(),
            location: request.location.clone(),
            image_url: request.image_url.clone(),
            registration_required: request.registration_required,
            max_attendees: request.max_attendees,
            attendees_count: 0,
            is_active: true,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update an event. The whole record is replaced; `created_at` is preserved.
    pub async fn update_event(
        &self,
        id: &str,
        request: &UpdateEventRequest,
    ) -> Result<Event, AppError> {
        let existing = self
            .get_event(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE events SET title = ?, description = ?, date = ?, location = ?, image_url = ?, \
             registration_required = ?, max_attendees = ?, attendees_count = ?, is_active = ?, \
             updated_at = ? WHERE id = ?",
        )
        .bind(&request.title)
        .bind(&request.description)
        .bind(&request.date)
        .bind(&request.location)
        .bind(&request.image_url)
        .bind(request.registration_required as i32)
        .bind(request.max_attendees)
        .bind(request.attendees_count)
        .bind(request.is_active as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Event {
            id: id.to_string(),
            title: request.title.clone(),
            description: request.description.clone(),
            date: request.date.clone(),
            location: request.location.clone(),
            image_url: request.image_url.clone(),
            registration_required: request.registration_required,
            max_attendees: request.max_attendees,
            attendees_count: request.attendees_count,
            is_active: request.is_active,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an event.
    pub async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Event {} not found", id)));
        }

        Ok(())
    }

    // ==================== DONATION OPERATIONS ====================

    /// List donations, most recent first, optionally filtered by status.
    pub async fn list_donations(
        &self,
        status: Option<DonationStatus>,
    ) -> Result<Vec<Donation>, AppError> {
        const COLS: &str = "id, amount, currency, donor_name, donor_email, message, \
             transaction_id, payment_method, status, donor_id, created_at";

        let rows = match status {
            Some(status) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM donations WHERE status = ? ORDER BY created_at DESC"
                ))
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM donations ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(donation_from_row).collect())
    }

    /// Get a donation by ID.
    pub async fn get_donation(&self, id: &str) -> Result<Option<Donation>, AppError> {
        let row = sqlx::query(
            "SELECT id, amount, currency, donor_name, donor_email, message, transaction_id, \
             payment_method, status, donor_id, created_at FROM donations WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(donation_from_row))
    }

    /// Record a new donation.
    pub async fn create_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<Donation, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO donations (id, amount, currency, donor_name, donor_email, message, \
             transaction_id, payment_method, status, donor_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(request.amount)
        .bind(&request.currency)
        .bind(&request.donor_name)
        .bind(&request.donor_email)
        .bind(&request.message)
        .bind(&request.transaction_id)
        .bind(&request.payment_method)
        .bind(request.status.as_str())
        .bind(request.donor_id)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Donation {
            id,
            amount: request.amount,
            currency: request.currency.clone(),
            donor_name: request.donor_name.clone(),
            donor_email: request.donor_email.clone(),
            message: request.message.clone(),
            transaction_id: request.transaction_id.clone(),
            payment_method: request.payment_method.clone(),
            status: request.status,
            donor_id: request.donor_id,
            created_at: now,
        })
    }

    /// Update a donation. The whole record is replaced; `created_at` is preserved.
    pub async fn update_donation(
        &self,
        id: &str,
        request: &UpdateDonationRequest,
    ) -> Result<Donation, AppError> {
        let existing = self
            .get_donation(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Donation {} not found", id)))?;

        sqlx::query(
            "UPDATE donations SET amount = ?, currency = ?, donor_name = ?, donor_email = ?, \
             message = ?, transaction_id = ?, payment_method = ?, status = ?, donor_id = ? \
             WHERE id = ?",
        )
        .bind(request.amount)
        .bind(&request.currency)
        .bind(&request.donor_name)
        .bind(&request.donor_email)
        .bind(&request.message)
        .bind(&request.transaction_id)
        .bind(&request.payment_method)
        .bind(request.status.as_str())
        .bind(request.donor_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Donation {
            id: id.to_string(),
            amount: request.amount,
            currency: request.currency.clone(),
            donor_name: request.donor_name.clone(),
            donor_email: request.donor_email.clone(),
            message: request.message.clone(),
            transaction_id: request.transaction_id.clone(),
            payment_method: request.payment_method.clone(),
            status: request.status,
            donor_id: request.donor_id,
            created_at: existing.created_at,
        })
    }

    /// Delete a donation.
    pub async fn delete_donation(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM donations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Donation {} not found", id)));
        }

        Ok(())
    }

    // ==================== MERCHANDISE OPERATIONS ====================

    /// List merchandise ordered by name, with optional availability and category filters.
    pub async fn list_merchandise(
        &self,
        is_available: Option<bool>,
        category: Option<&str>,
    ) -> Result<Vec<MerchandiseItem>, AppError> {
        const COLS: &str = "id, name, description, price, image_url, category, stock_quantity, \
             is_available, created_at, updated_at";

        let rows = match (is_available, category) {
            (Some(available), Some(category)) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM merchandise WHERE is_available = ? AND category = ? ORDER BY name"
                ))
                .bind(available as i32)
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(available), None) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM merchandise WHERE is_available = ? ORDER BY name"
                ))
                .bind(available as i32)
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(category)) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM merchandise WHERE category = ? ORDER BY name"
                ))
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query(&format!("SELECT {COLS} FROM merchandise ORDER BY name"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.iter().map(merchandise_from_row).collect())
    }

    /// Get a merchandise item by ID.
    pub async fn get_merchandise(&self, id: &str) -> Result<Option<MerchandiseItem>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, price, image_url, category, stock_quantity, \
             is_available, created_at, updated_at FROM merchandise WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(merchandise_from_row))
    }

    /// Create a new merchandise item.
    pub async fn create_merchandise(
        &self,
        request: &CreateMerchandiseRequest,
    ) -> Result<MerchandiseItem, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO merchandise (id, name, description, price, image_url, category, \
             stock_quantity, is_available, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.price)
        .bind(&request.image_url)
        .bind(&request.category)
        .bind(request.stock_quantity)
        .bind(request.is_available as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(MerchandiseItem {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price,
            image_url: request.image_url.clone(),
            category: request.category.clone(),
            stock_quantity: request.stock_quantity,
            is_available: request.is_available,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a merchandise item. The whole record is replaced; `created_at` is preserved.
    pub async fn update_merchandise(
        &self,
        id: &str,
        request: &UpdateMerchandiseRequest,
    ) -> Result<MerchandiseItem, AppError> {
        let existing = self
            .get_merchandise(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Merchandise item {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE merchandise SET name = ?, description = ?, price = ?, image_url = ?, \
             category = ?, stock_quantity = ?, is_available = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.price)
        .bind(&request.image_url)
        .bind(&request.category)
        .bind(request.stock_quantity)
        .bind(request.is_available as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(MerchandiseItem {
            id: id.to_string(),
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price,
            image_url: request.image_url.clone(),
            category: request.category.clone(),
            stock_quantity: request.stock_quantity,
            is_available: request.is_available,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a merchandise item.
    pub async fn delete_merchandise(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM merchandise WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Merchandise item {} not found",
                id
            )));
        }

        Ok(())
    }

    // ==================== ARTIST OPERATIONS ====================

    /// List artists ordered by name, optionally only featured ones.
    pub async fn list_artists(&self, is_featured: Option<bool>) -> Result<Vec<Artist>, AppError> {
        const COLS: &str =
            "id, name, bio, genre, image_url, social_links, is_featured, created_at, updated_at";

        let rows = match is_featured {
            Some(featured) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM artists WHERE is_featured = ? ORDER BY name"
                ))
                .bind(featured as i32)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!("SELECT {COLS} FROM artists ORDER BY name"))
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.iter().map(artist_from_row).collect())
    }

    /// Get an artist by ID.
    pub async fn get_artist(&self, id: &str) -> Result<Option<Artist>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, bio, genre, image_url, social_links, is_featured, created_at, \
             updated_at FROM artists WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(artist_from_row))
    }

    /// Create a new artist.
    pub async fn create_artist(&self, request: &CreateArtistRequest) -> Result<Artist, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO artists (id, name, bio, genre, image_url, social_links, is_featured, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.bio)
        .bind(&request.genre)
        .bind(&request.image_url)
        .bind(&request.social_links)
        .bind(request.is_featured as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Artist {
            id,
            name: request.name.clone(),
            bio: request.bio.clone(),
            genre: request.genre.clone(),
            image_url: request.image_url.clone(),
            social_links: request.social_links.clone(),
            is_featured: request.is_featured,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update an artist. The whole record is replaced; `created_at` is preserved.
    pub async fn update_artist(
        &self,
        id: &str,
        request: &UpdateArtistRequest,
    ) -> Result<Artist, AppError> {
        let existing = self
            .get_artist(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE artists SET name = ?, bio = ?, genre = ?, image_url = ?, social_links = ?, \
             is_featured = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&request.name)
        .bind(&request.bio)
        .bind(&request.genre)
        .bind(&request.image_url)
        .bind(&request.social_links)
        .bind(request.is_featured as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(Artist {
            id: id.to_string(),
            name: request.name.clone(),
            bio: request.bio.clone(),
            genre: request.genre.clone(),
            image_url: request.image_url.clone(),
            social_links: request.social_links.clone(),
            is_featured: request.is_featured,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete an artist.
    pub async fn delete_artist(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Artist {} not found", id)));
        }

        Ok(())
    }

    // ==================== NEWS OPERATIONS ====================

    /// List news articles, newest first, optionally filtered by publication state.
    pub async fn list_news(
        &self,
        is_published: Option<bool>,
    ) -> Result<Vec<NewsArticle>, AppError> {
        const COLS: &str = "id, title, content, author, image_url, published_at, is_published, \
             created_at, updated_at";

        let rows = match is_published {
            Some(published) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM news WHERE is_published = ? ORDER BY published_at DESC"
                ))
                .bind(published as i32)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM news ORDER BY published_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(news_from_row).collect())
    }

    /// Get a news article by ID.
    pub async fn get_news(&self, id: &str) -> Result<Option<NewsArticle>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, content, author, image_url, published_at, is_published, \
             created_at, updated_at FROM news WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(news_from_row))
    }

    /// Create a new news article.
    pub async fn create_news(&self, request: &CreateNewsRequest) -> Result<NewsArticle, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO news (id, title, content, author, image_url, published_at, is_published, \
             created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&request.title)
        .bind(&request.content)
        .bind(&request.author)
        .bind(&request.image_url)
        .bind(&request.published_at)
        .bind(request.is_published as i32)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(NewsArticle {
            id,
            title: request.title.clone(),
            content: request.content.clone(),
            author: request.author.clone(),
            image_url: request.image_url.clone(),
            published_at: request.published_at.clone(),
            is_published: request.is_published,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a news article. The whole record is replaced; `created_at` is preserved.
    pub async fn update_news(
        &self,
        id: &str,
        request: &UpdateNewsRequest,
    ) -> Result<NewsArticle, AppError> {
        let existing = self
            .get_news(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("News article {} not found", id)))?;

        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "UPDATE news SET title = ?, content = ?, author = ?, image_url = ?, published_at = ?, \
             is_published = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&request.title)
        .bind(&request.content)
        .bind(&request.author)
        .bind(&request.image_url)
        .bind(&request.published_at)
        .bind(request.is_published as i32)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(NewsArticle {
            id: id.to_string(),
            title: request.title.clone(),
            content: request.content.clone(),
            author: request.author.clone(),
            image_url: request.image_url.clone(),
            published_at: request.published_at.clone(),
            is_published: request.is_published,
            created_at: existing.created_at,
            updated_at: now,
        })
    }

    /// Delete a news article.
    pub async fn delete_news(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM news WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("News article {} not found", id)));
        }

        Ok(())
    }

    // ==================== CONTACT MESSAGE OPERATIONS ====================

    /// List contact messages, most recent first, optionally filtered by read state.
    pub async fn list_contact_messages(
        &self,
        is_read: Option<bool>,
    ) -> Result<Vec<ContactMessage>, AppError> {
        const COLS: &str = "id, name, email, subject, message, phone, is_read, created_at";

        let rows = match is_read {
            Some(read) => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM contact_messages WHERE is_read = ? ORDER BY created_at DESC"
                ))
                .bind(read as i32)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {COLS} FROM contact_messages ORDER BY created_at DESC"
                ))
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(contact_from_row).collect())
    }

    /// Get a contact message by ID.
    pub async fn get_contact_message(&self, id: &str) -> Result<Option<ContactMessage>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, email, subject, message, phone, is_read, created_at \
             FROM contact_messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(contact_from_row))
    }

    /// Store a message submitted through the public contact form.
    pub async fn create_contact_message(
        &self,
        request: &CreateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO contact_messages (id, name, email, subject, message, phone, is_read, \
             created_at) VALUES (?, ?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.subject)
        .bind(&request.message)
        .bind(&request.phone)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactMessage {
            id,
            name: request.name.clone(),
            email: request.email.clone(),
            subject: request.subject.clone(),
            message: request.message.clone(),
            phone: request.phone.clone(),
            is_read: false,
            created_at: now,
        })
    }

    /// Mark a contact message read or unread.
    pub async fn update_contact_message(
        &self,
        id: &str,
        request: &UpdateContactRequest,
    ) -> Result<ContactMessage, AppError> {
        let mut existing = self
            .get_contact_message(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Message {} not found", id)))?;

        sqlx::query("UPDATE contact_messages SET is_read = ? WHERE id = ?")
            .bind(request.is_read as i32)
            .bind(id)
            .execute(&self.pool)
            .await?;

        existing.is_read = request.is_read;
        Ok(existing)
    }

    /// Delete a contact message.
    pub async fn delete_contact_message(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Message {} not found", id)));
        }

        Ok(())
    }

    // ==================== USER & SESSION OPERATIONS ====================

    /// Look up a user by email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, full_name, is_active, is_admin, created_at \
             FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Look up a user by ID.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, AppError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, full_name, is_active, is_admin, created_at \
             FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(user_from_row))
    }

    /// Create a user account.
    pub async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        full_name: &str,
        is_admin: bool,
    ) -> Result<User, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, full_name, is_active, is_admin, \
             created_at) VALUES (?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&id)
        .bind(email)
        .bind(password_hash)
        .bind(full_name)
        .bind(is_admin as i32)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            full_name: full_name.to_string(),
            is_active: true,
            is_admin,
            created_at: now,
        })
    }

    /// List every user account, oldest first.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query(
            "SELECT id, email, password_hash, full_name, is_active, is_admin, created_at \
             FROM users ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(user_from_row).collect())
    }

    /// Grant or revoke a user's admin flag.
    pub async fn set_user_admin(&self, id: &str, is_admin: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE id = ?")
            .bind(is_admin as i32)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }

    /// Issue a new session token for a user.
    pub async fn create_session(
        &self,
        user_id: &str,
        ttl_minutes: i64,
    ) -> Result<Session, AppError> {
        let token = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(ttl_minutes);

        sqlx::query(
            "INSERT INTO sessions (token, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&token)
        .bind(user_id)
        .bind(now.to_rfc3339())
        .bind(expires_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(Session {
            token,
            user_id: user_id.to_string(),
            created_at: now.to_rfc3339(),
            expires_at: expires_at.to_rfc3339(),
        })
    }

    /// Look up a session by token.
    pub async fn get_session(&self, token: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query(
            "SELECT token, user_id, created_at, expires_at FROM sessions WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(|row| Session {
            token: row.get("token"),
            user_id: row.get("user_id"),
            created_at: row.get("created_at"),
            expires_at: row.get("expires_at"),
        }))
    }

    /// Revoke a session. Revoking an unknown token is not an error.
    pub async fn delete_session(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Drop sessions that have passed their expiry.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        let now = Utc::now().to_rfc3339();
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(&now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    // ==================== DASHBOARD STATS ====================

    /// Aggregate the dashboard overview numbers in a single query pass.
    pub async fn site_stats(&self) -> Result<SiteStats, AppError> {
        let row = sqlx::query(
            r#"SELECT
                (SELECT COUNT(*) FROM staff) AS total_staff,
                (SELECT COUNT(*) FROM events) AS total_events,
                (SELECT COUNT(*) FROM donations) AS total_donations,
                (SELECT COUNT(*) FROM merchandise) AS total_merchandise,
                (SELECT COUNT(*) FROM artists) AS total_artists,
                (SELECT COUNT(*) FROM news) AS total_news,
                (SELECT COALESCE(SUM(amount), 0.0) FROM donations WHERE status = 'completed') AS total_donated,
                (SELECT COUNT(*) FROM contact_messages) AS total_messages,
                (SELECT COUNT(*) FROM contact_messages WHERE is_read = 0) AS unread_messages
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(SiteStats {
            total_staff: row.get("total_staff"),
            total_events: row.get("total_events"),
            total_donations: row.get("total_donations"),
            total_merchandise: row.get("total_merchandise"),
            total_artists: row.get("total_artists"),
            total_news: row.get("total_news"),
            total_donated: row.get("total_donated"),
            total_messages: row.get("total_messages"),
            unread_messages: row.get("unread_messages"),
        })
    }
}

// Helper functions for row conversion. NULL columns are normalized to
// type-appropriate defaults here, in one place per resource.

fn staff_from_row(row: &sqlx::sqlite::SqliteRow) -> StaffMember {
    let role: Option<String> = row.get("role");
    let image: Option<String> = row.get("image");
    let bio: Option<String> = row.get("bio");
    StaffMember {
        id: row.get("id"),
        name: row.get("name"),
        role: role.unwrap_or_default(),
        image: image.unwrap_or_default(),
        bio: bio.unwrap_or_default(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn event_from_row(row: &sqlx::sqlite::SqliteRow) -> Event {
    let description: Option<String> = row.get("description");
    let location: Option<String> = row.get("location");
    let image_url: Option<String> = row.get("image_url");
    let registration_required: i32 = row.get("registration_required");
    let is_active: i32 = row.get("is_active");
    Event {
        id: row.get("id"),
        title: row.get("title"),
        description: description.unwrap_or_default(),
        date: row.get("date"),
        location: location.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
        registration_required: registration_required != 0,
        max_attendees: row.get("max_attendees"),
        attendees_count: row.get("attendees_count"),
        is_active: is_active != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn donation_from_row(row: &sqlx::sqlite::SqliteRow) -> Donation {
    let donor_name: Option<String> = row.get("donor_name");
    let donor_email: Option<String> = row.get("donor_email");
    let message: Option<String> = row.get("message");
    let transaction_id: Option<String> = row.get("transaction_id");
    let payment_method: Option<String> = row.get("payment_method");
    let status: String = row.get("status");
    Donation {
        id: row.get("id"),
        amount: row.get("amount"),
        currency: row.get("currency"),
        donor_name: donor_name.unwrap_or_default(),
        donor_email: donor_email.unwrap_or_default(),
        message: message.unwrap_or_default(),
        transaction_id: transaction_id.unwrap_or_default(),
        payment_method: payment_method.unwrap_or_default(),
        status: DonationStatus::from_str(&status).unwrap_or_default(),
        donor_id: row.get("donor_id"),
        created_at: row.get("created_at"),
    }
}

fn merchandise_from_row(row: &sqlx::sqlite::SqliteRow) -> MerchandiseItem {
    let description: Option<String> = row.get("description");
    let image_url: Option<String> = row.get("image_url");
    let category: Option<String> = row.get("category");
    let is_available: i32 = row.get("is_available");
    MerchandiseItem {
        id: row.get("id"),
        name: row.get("name"),
        description: description.unwrap_or_default(),
        price: row.get("price"),
        image_url: image_url.unwrap_or_default(),
        category: category.unwrap_or_default(),
        stock_quantity: row.get("stock_quantity"),
        is_available: is_available != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn artist_from_row(row: &sqlx::sqlite::SqliteRow) -> Artist {
    let bio: Option<String> = row.get("bio");
    let genre: Option<String> = row.get("genre");
    let image_url: Option<String> = row.get("image_url");
    let social_links: Option<String> = row.get("social_links");
    let is_featured: i32 = row.get("is_featured");
    Artist {
        id: row.get("id"),
        name: row.get("name"),
        bio: bio.unwrap_or_default(),
        genre: genre.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
        social_links: social_links.unwrap_or_default(),
        is_featured: is_featured != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn news_from_row(row: &sqlx::sqlite::SqliteRow) -> NewsArticle {
    let content: Option<String> = row.get("content");
    let author: Option<String> = row.get("author");
    let image_url: Option<String> = row.get("image_url");
    let is_published: i32 = row.get("is_published");
    NewsArticle {
        id: row.get("id"),
        title: row.get("title"),
        content: content.unwrap_or_default(),
        author: author.unwrap_or_default(),
        image_url: image_url.unwrap_or_default(),
        published_at: row.get("published_at"),
        is_published: is_published != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn contact_from_row(row: &sqlx::sqlite::SqliteRow) -> ContactMessage {
    let email: Option<String> = row.get("email");
    let subject: Option<String> = row.get("subject");
    let message: Option<String> = row.get("message");
    let phone: Option<String> = row.get("phone");
    let is_read: i32 = row.get("is_read");
    ContactMessage {
        id: row.get("id"),
        name: row.get("name"),
        email: email.unwrap_or_default(),
        subject: subject.unwrap_or_default(),
        message: message.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        is_read: is_read != 0,
        created_at: row.get("created_at"),
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> User {
    let full_name: Option<String> = row.get("full_name");
    let is_active: i32 = row.get("is_active");
    let is_admin: i32 = row.get("is_admin");
    User {
        id: row.get("id"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        full_name: full_name.unwrap_or_default(),
        is_active: is_active != 0,
        is_admin: is_admin != 0,
        created_at: row.get("created_at"),
    }
}
