//! Per-resource adapters for the generic client and controller.
//!
//! One thin unit type per manageable resource; draft defaults mirror what
//! the dashboard's "add" forms start out with.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    now_rfc3339, Artist, Donation, DonationStatus, Event, MerchandiseItem, NewsArticle,
    StaffMember,
};

/// Binding between a record type and its backend collection.
pub trait ResourceAdapter {
    type Record: Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Path segment and log name, e.g. "staff".
    const NAME: &'static str;
    /// Label used in alert messages, e.g. "staff member".
    const LABEL: &'static str;

    fn collection_path() -> String {
        format!("/api/{}", Self::NAME)
    }

    fn record_path(id: &str) -> String {
        format!("/api/{}/{}", Self::NAME, id)
    }

    fn id(record: &Self::Record) -> &str;

    /// Fresh draft for the Adding editor. The provisional id is replaced by
    /// the backend's durable one on save.
    fn draft(provisional_id: String) -> Self::Record;
}

pub struct StaffResource;

impl ResourceAdapter for StaffResource {
    type Record = StaffMember;

    const NAME: &'static str = "staff";
    const LABEL: &'static str = "staff member";

    fn id(record: &StaffMember) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> StaffMember {
        StaffMember {
            id: provisional_id,
            name: String::new(),
            role: String::new(),
            image: String::new(),
            bio: String::new(),
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        }
    }
}

pub struct EventsResource;

impl ResourceAdapter for EventsResource {
    type Record = Event;

    const NAME: &'static str = "events";
    const LABEL: &'static str = "event";

    fn id(record: &Event) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> Event {
        Event {
            id: provisional_id,
            title: String::new(),
            description: String::new(),
            date: now_rfc3339(),
            location: String::new(),
            image_url: String::new(),
            registration_required: false,
            max_attendees: None,
            attendees_count: 0,
            is_active: true,
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        }
    }
}

pub struct DonationsResource;

impl ResourceAdapter for DonationsResource {
    type Record = Donation;

    const NAME: &'static str = "donations";
    const LABEL: &'static str = "donation";

    fn id(record: &Donation) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> Donation {
        Donation {
            id: provisional_id,
            amount: 0.0,
            currency: "USD".to_string(),
            donor_name: String::new(),
            donor_email: String::new(),
            message: String::new(),
            transaction_id: String::new(),
            payment_method: "credit_card".to_string(),
            status: DonationStatus::Completed,
            donor_id: 0,
            created_at: now_rfc3339(),
        }
    }
}

pub struct MerchandiseResource;

impl ResourceAdapter for MerchandiseResource {
    type Record = MerchandiseItem;

    const NAME: &'static str = "merchandise";
    const LABEL: &'static str = "merchandise item";

    fn id(record: &MerchandiseItem) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> MerchandiseItem {
        MerchandiseItem {
            id: provisional_id,
            name: String::new(),
            description: String::new(),
            price: 0.0,
            image_url: String::new(),
            category: "clothing".to_string(),
            stock_quantity: 0,
            is_available: true,
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        }
    }
}

pub struct ArtistsResource;

impl ResourceAdapter for ArtistsResource {
    type Record = Artist;

    const NAME: &'static str = "artists";
    const LABEL: &'static str = "artist";

    fn id(record: &Artist) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> Artist {
        Artist {
            id: provisional_id,
            name: String::new(),
            bio: String::new(),
            genre: String::new(),
            image_url: String::new(),
            social_links: String::new(),
            is_featured: false,
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        }
    }
}

pub struct NewsResource;

impl ResourceAdapter for NewsResource {
    type Record = NewsArticle;

    const NAME: &'static str = "news";
    const LABEL: &'static str = "news article";

    fn id(record: &NewsArticle) -> &str {
        &record.id
    }

    fn draft(provisional_id: String) -> NewsArticle {
        NewsArticle {
            id: provisional_id,
            title: String::new(),
            content: String::new(),
            author: String::new(),
            image_url: String::new(),
            published_at: now_rfc3339(),
            is_published: false,
            created_at: now_rfc3339(),
            updated_at: now_rfc3339(),
        }
    }
}
