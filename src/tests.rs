//! Integration tests for the Foundation backend.
//!
//! Each test spins up a real server on an ephemeral port with its own
//! temporary database. Controller tests drive the admin client layer
//! against that live server.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::client::controller::{EditorMode, ListController};
use crate::client::dashboard::DashboardShell;
use crate::client::resources::{
    ArtistsResource, DonationsResource, EventsResource, ResourceAdapter, StaffResource,
};
use crate::client::sample::{featured_artists_or_sample, sample_artists};
use crate::client::ApiClient;
use crate::config::Config;
use crate::db::{init_database, seed_admin, Repository};
use crate::{create_router, AppState};

const ADMIN_EMAIL: &str = "admin@example.org";
const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Test fixture for integration tests.
struct TestFixture {
    /// Client with the admin bearer token attached.
    client: Client,
    /// Client without credentials.
    anon: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_session_ttl(30).await
    }

    async fn with_session_ttl(ttl_minutes: i64) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database and seed the admin account
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            admin_email: ADMIN_EMAIL.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            session_ttl_minutes: ttl_minutes,
        };

        seed_admin(&repo, &config).await.expect("Failed to seed admin");

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        // Sign in once and build a pre-authorized client
        let anon = Client::new();
        let login_resp = anon
            .post(format!("{}/api/auth/login", base_url))
            .json(&json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .send()
            .await
            .expect("Login request failed");
        let login_body: Value = login_resp.json().await.expect("Login body");
        let token = login_body["data"]["token"]
            .as_str()
            .expect("Login token")
            .to_string();

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        let client = Client::builder().default_headers(headers).build().unwrap();

        TestFixture {
            client,
            anon,
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// A signed-in ApiClient for controller tests.
    async fn api_client(&self) -> ApiClient {
        let mut client = ApiClient::new(self.base_url.clone());
        assert!(!client.is_authenticated());
        client
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("ApiClient login");
        assert!(client.is_authenticated());
        client
    }
}

/// An ApiClient pointed at a port nobody listens on.
fn dead_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9")
}

// ==================== SERVER BASICS ====================

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_welcome_root() {
    let fixture = TestFixture::new().await;

    let resp = fixture.anon.get(fixture.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Foundation"));
}

// ==================== AUTHENTICATION ====================

#[tokio::test]
async fn test_login_wrong_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": ADMIN_EMAIL, "password": "wrong" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_write_requires_auth() {
    let fixture = TestFixture::new().await;

    // Anonymous reads are allowed
    let list_resp = fixture
        .anon
        .get(fixture.url("/api/staff"))
        .send()
        .await
        .unwrap();
    assert_eq!(list_resp.status(), 200);

    // Anonymous writes are not
    let create_resp = fixture
        .anon
        .post(fixture.url("/api/staff"))
        .json(&json!({ "name": "Intruder", "role": "None" }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 401);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let fixture = TestFixture::new().await;

    let logout_resp = fixture
        .client
        .post(fixture.url("/api/auth/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(logout_resp.status(), 200);

    let create_resp = fixture
        .client
        .post(fixture.url("/api/staff"))
        .json(&json!({ "name": "After Logout", "role": "None" }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 401);
}

#[tokio::test]
async fn test_expired_session_rejected() {
    let fixture = TestFixture::with_session_ttl(-1).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/staff"))
        .json(&json!({ "name": "Too Late", "role": "None" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let fixture = TestFixture::new().await;

    let first = fixture
        .anon
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "email": "volunteer@example.com",
            "password": "volunteer-pass",
            "full_name": "New Volunteer"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(first.status(), 200);
    let body: Value = first.json().await.unwrap();
    assert_eq!(body["data"]["email"], "volunteer@example.com");
    assert_eq!(body["data"]["is_admin"], false);
    // The hash never crosses the wire
    assert!(body["data"].get("password_hash").is_none());

    let second = fixture
        .anon
        .post(fixture.url("/api/auth/register"))
        .json(&json!({
            "email": "volunteer@example.com",
            "password": "another-pass"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), 400);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn test_toggle_admin_grants_write_access() {
    let fixture = TestFixture::new().await;

    fixture
        .anon
        .post(fixture.url("/api/auth/register"))
        .json(&json!({ "email": "junior@example.com", "password": "junior-pass" }))
        .send()
        .await
        .unwrap();

    // A regular account can sign in but not write
    let login_body: Value = fixture
        .anon
        .post(fixture.url("/api/auth/login"))
        .json(&json!({ "email": "junior@example.com", "password": "junior-pass" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let junior_token = login_body["data"]["token"].as_str().unwrap().to_string();

    let denied = fixture
        .anon
        .post(fixture.url("/api/staff"))
        .bearer_auth(&junior_token)
        .json(&json!({ "name": "Sneaky", "role": "None" }))
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), 401);

    // Admin promotes the account
    let users: Value = fixture
        .client
        .get(fixture.url("/api/admin/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let junior_id = users["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["email"] == "junior@example.com")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let toggled: Value = fixture
        .client
        .patch(fixture.url(&format!("/api/admin/users/{}/toggle-admin", junior_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(toggled["data"]["is_admin"], true);

    // The admin check runs per request, so the existing session now passes
    let allowed = fixture
        .anon
        .post(fixture.url("/api/staff"))
        .bearer_auth(&junior_token)
        .json(&json!({ "name": "Promoted", "role": "Member" }))
        .send()
        .await
        .unwrap();
    assert_eq!(allowed.status(), 200);
}

// ==================== RESOURCE CRUD ====================

#[tokio::test]
async fn test_staff_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let create_resp = fixture
        .client
        .post(fixture.url("/api/staff"))
        .json(&json!({
            "name": "Jordan Banda",
            "role": "Coordinator",
            "bio": "Runs day-to-day operations."
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["success"], true);
    let staff_id = create_body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(create_body["data"]["name"], "Jordan Banda");
    // Missing fields come back normalized, not null
    assert_eq!(create_body["data"]["image"], "");

    // Get
    let get_resp = fixture
        .anon
        .get(fixture.url(&format!("/api/staff/{}", staff_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["role"], "Coordinator");

    // Update
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/staff/{}", staff_id)))
        .json(&json!({ "name": "Jordan Banda", "role": "Head of Finance" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["role"], "Head of Finance");

    // List reflects the update
    let list_resp = fixture
        .anon
        .get(fixture.url("/api/staff"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let rows = list_body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["role"], "Head of Finance");

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/staff/{}", staff_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    // Gone from the list
    let list_resp = fixture
        .anon
        .get(fixture.url("/api/staff"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert!(list_body["data"].as_array().unwrap().is_empty());

    // Second delete reports not found
    let second_delete = fixture
        .client
        .delete(fixture.url(&format!("/api/staff/{}", staff_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(second_delete.status(), 404);
}

#[tokio::test]
async fn test_staff_list_sorted_by_name() {
    let fixture = TestFixture::new().await;

    for name in ["Zola Phiri", "Amara Jere"] {
        let resp = fixture
            .client
            .post(fixture.url("/api/staff"))
            .json(&json!({ "name": name, "role": "Member" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let list_resp = fixture
        .anon
        .get(fixture.url("/api/staff"))
        .send()
        .await
        .unwrap();
    let body: Value = list_resp.json().await.unwrap();
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Amara Jere");
    assert_eq!(rows[1]["name"], "Zola Phiri");
}

#[tokio::test]
async fn test_staff_validation_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/staff"))
        .json(&json!({ "name": "", "role": "Ghost" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_event_max_attendees_can_be_cleared() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({
            "title": "Summer Block Party",
            "date": "2026-09-12T18:00:00+00:00",
            "max_attendees": 100
        }))
        .send()
        .await
        .unwrap();
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["data"]["max_attendees"], 100);
    let event_id = create_body["data"]["id"].as_str().unwrap().to_string();

    // The admin emptied the field: the cap is cleared, not kept
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .json(&json!({
            "title": "Summer Block Party",
            "date": "2026-09-12T18:00:00+00:00",
            "max_attendees": null
        }))
        .send()
        .await
        .unwrap();
    let update_body: Value = update_resp.json().await.unwrap();
    assert!(update_body["data"]["max_attendees"].is_null());
}

#[tokio::test]
async fn test_event_list_hides_inactive_by_default() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/events"))
        .json(&json!({ "title": "Retired Workshop", "date": "2024-01-01T10:00:00+00:00" }))
        .send()
        .await
        .unwrap();
    let create_body: Value = create_resp.json().await.unwrap();
    let event_id = create_body["data"]["id"].as_str().unwrap().to_string();

    fixture
        .client
        .put(fixture.url(&format!("/api/events/{}", event_id)))
        .json(&json!({
            "title": "Retired Workshop",
            "date": "2024-01-01T10:00:00+00:00",
            "is_active": false
        }))
        .send()
        .await
        .unwrap();

    let default_list: Value = fixture
        .anon
        .get(fixture.url("/api/events"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(default_list["data"].as_array().unwrap().is_empty());

    let inactive_list: Value = fixture
        .anon
        .get(fixture.url("/api/events?is_active=false"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(inactive_list["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_donation_amount_must_not_be_negative() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/donations"))
        .json(&json!({ "amount": -5.0, "donor_name": "Oops" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_donation_status_filter() {
    let fixture = TestFixture::new().await;

    for (amount, status) in [(25.0, "completed"), (10.0, "pending")] {
        let resp = fixture
            .client
            .post(fixture.url("/api/donations"))
            .json(&json!({ "amount": amount, "donor_name": "Donor", "status": status }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let completed: Value = fixture
        .anon
        .get(fixture.url("/api/donations?status=completed"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = completed["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["amount"], 25.0);

    // Unknown status names are rejected rather than matching nothing
    let bogus = fixture
        .anon
        .get(fixture.url("/api/donations?status=chargeback"))
        .send()
        .await
        .unwrap();
    assert_eq!(bogus.status(), 400);
}

#[tokio::test]
async fn test_merchandise_crud_and_availability_filter() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/merchandise"))
        .json(&json!({
            "name": "Foundation Hoodie",
            "price": 35.0,
            "category": "clothing",
            "stock_quantity": 12
        }))
        .send()
        .await
        .unwrap();
    let create_body: Value = create_resp.json().await.unwrap();
    let item_id = create_body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(create_body["data"]["is_available"], true);

    // Pull the item from the store without touching stock
    fixture
        .client
        .put(fixture.url(&format!("/api/merchandise/{}", item_id)))
        .json(&json!({
            "name": "Foundation Hoodie",
            "price": 35.0,
            "category": "clothing",
            "stock_quantity": 12,
            "is_available": false
        }))
        .send()
        .await
        .unwrap();

    let store_list: Value = fixture
        .anon
        .get(fixture.url("/api/merchandise"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(store_list["data"].as_array().unwrap().is_empty());

    let pulled_list: Value = fixture
        .anon
        .get(fixture.url("/api/merchandise?is_available=false"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = pulled_list["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["stock_quantity"], 12);
}

#[tokio::test]
async fn test_artist_featured_filter() {
    let fixture = TestFixture::new().await;

    for (name, featured) in [("Headliner", true), ("Newcomer", false)] {
        fixture
            .client
            .post(fixture.url("/api/artists"))
            .json(&json!({ "name": name, "genre": "Hip-Hop", "is_featured": featured }))
            .send()
            .await
            .unwrap();
    }

    let featured: Value = fixture
        .anon
        .get(fixture.url("/api/artists?is_featured=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = featured["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Headliner");

    let all: Value = fixture
        .anon
        .get(fixture.url("/api/artists"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_news_ordered_newest_first() {
    let fixture = TestFixture::new().await;

    for (title, published_at) in [
        ("Older Story", "2024-03-01T08:00:00+00:00"),
        ("Newer Story", "2025-03-01T08:00:00+00:00"),
    ] {
        fixture
            .client
            .post(fixture.url("/api/news"))
            .json(&json!({ "title": title, "published_at": published_at, "is_published": true }))
            .send()
            .await
            .unwrap();
    }

    let list: Value = fixture
        .anon
        .get(fixture.url("/api/news?is_published=true"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = list["data"].as_array().unwrap();
    assert_eq!(rows[0]["title"], "Newer Story");
    assert_eq!(rows[1]["title"], "Older Story");
}

#[tokio::test]
async fn test_contact_flow() {
    let fixture = TestFixture::new().await;

    // Anyone can submit through the public form
    let submit_resp = fixture
        .anon
        .post(fixture.url("/api/contact"))
        .json(&json!({
            "name": "Curious Visitor",
            "email": "visitor@example.com",
            "message": "How do I volunteer?"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(submit_resp.status(), 200);
    let submit_body: Value = submit_resp.json().await.unwrap();
    let message_id = submit_body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(submit_body["data"]["is_read"], false);

    // Reading the inbox is admin-only
    let anon_list = fixture
        .anon
        .get(fixture.url("/api/contact"))
        .send()
        .await
        .unwrap();
    assert_eq!(anon_list.status(), 401);

    let list: Value = fixture
        .client
        .get(fixture.url("/api/contact?is_read=false"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["data"].as_array().unwrap().len(), 1);

    // Mark read, then delete
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/contact/{}", message_id)))
        .json(&json!({ "is_read": true }))
        .send()
        .await
        .unwrap();
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["is_read"], true);

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/contact/{}", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .get(fixture.url("/api/donations/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp2 = fixture
        .client
        .delete(fixture.url("/api/artists/non-existent-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp2.status(), 404);
}

// ==================== DASHBOARD STATS ====================

#[tokio::test]
async fn test_stats_aggregation() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/staff"))
        .json(&json!({ "name": "Counted Person", "role": "Member" }))
        .send()
        .await
        .unwrap();

    for (amount, status) in [(25.0, "completed"), (10.0, "pending")] {
        fixture
            .client
            .post(fixture.url("/api/donations"))
            .json(&json!({ "amount": amount, "donor_name": "Donor", "status": status }))
            .send()
            .await
            .unwrap();
    }

    fixture
        .anon
        .post(fixture.url("/api/contact"))
        .json(&json!({ "name": "V", "email": "v@example.com", "message": "Hi" }))
        .send()
        .await
        .unwrap();

    let stats: Value = fixture
        .client
        .get(fixture.url("/api/admin/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats["data"]["total_staff"], 1);
    assert_eq!(stats["data"]["total_donations"], 2);
    // Only completed donations count towards the total
    assert_eq!(stats["data"]["total_donated"], 25.0);
    assert_eq!(stats["data"]["total_messages"], 1);
    assert_eq!(stats["data"]["unread_messages"], 1);

    // Stats require a session
    let anon_stats = fixture
        .anon
        .get(fixture.url("/api/admin/stats"))
        .send()
        .await
        .unwrap();
    assert_eq!(anon_stats.status(), 401);
}

#[tokio::test]
async fn test_dashboard_shell_loads_stats() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    fixture
        .client
        .post(fixture.url("/api/artists"))
        .json(&json!({ "name": "Counted Artist" }))
        .send()
        .await
        .unwrap();

    let mut shell = DashboardShell::new();
    let stats = shell.load_stats(&client).await.expect("stats load");
    assert_eq!(stats.total_artists, 1);
    assert!(shell.stats().is_some());
}

// ==================== LIST CONTROLLER ====================

#[tokio::test]
async fn test_controller_full_cycle() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<StaffResource>::new(client.clone());
    assert!(controller.is_loading());

    controller.mount().await;
    assert!(!controller.is_loading());
    assert!(controller.error().is_none());
    assert!(controller.items().is_empty());

    // Add
    controller.add();
    assert_eq!(controller.editor_mode(), Some(EditorMode::Adding));
    controller.set_field("name", "Chimwemwe Gondwe");
    controller.set_field("role", "Spokesperson");
    controller.save().await;

    assert!(controller.editor_mode().is_none());
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].name, "Chimwemwe Gondwe");
    // The backend replaced the provisional id with a durable one
    let durable_id = controller.items()[0].id.clone();
    assert!(durable_id.parse::<i64>().is_err());

    // Create-then-list: the record is visible to a fresh reader
    let listed = client.list::<StaffResource>().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Chimwemwe Gondwe");

    // Edit
    let record = controller.items()[0].clone();
    controller.edit(&record);
    assert_eq!(controller.editor_mode(), Some(EditorMode::Editing));
    controller.set_field("role", "Creative Director");
    controller.save().await;

    assert_eq!(controller.items()[0].role, "Creative Director");
    let listed = client.list::<StaffResource>().await.unwrap();
    assert_eq!(listed[0].role, "Creative Director");

    // Remove, confirmed
    controller.remove(&durable_id, |_| true).await;
    assert!(controller.items().is_empty());
    assert!(controller.take_alert().is_none());

    let listed = client.list::<StaffResource>().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_controller_cancel_discards_draft() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<StaffResource>::new(client.clone());
    controller.mount().await;

    controller.add();
    controller.set_field("name", "Never Saved");
    controller.cancel();

    assert!(controller.editor_mode().is_none());
    assert!(controller.items().is_empty());

    // Nothing reached the backend
    let listed = client.list::<StaffResource>().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_api_client_logout_detaches_token() {
    let fixture = TestFixture::new().await;
    let mut client = fixture.api_client().await;

    client.logout().await.expect("logout");
    assert!(!client.is_authenticated());

    // Writes fail once the session is revoked
    let mut draft = StaffResource::draft("0".to_string());
    draft.name = "After Logout".to_string();
    draft.role = "Member".to_string();
    assert!(client.create::<StaffResource>(&draft).await.is_none());
}

#[tokio::test]
async fn test_controller_remove_cancelled() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut draft = StaffResource::draft("0".to_string());
    draft.name = "Keep Me".to_string();
    draft.role = "Member".to_string();
    let created = client
        .create::<StaffResource>(&draft)
        .await
        .expect("create staff");

    let mut controller = ListController::<StaffResource>::new(client.clone());
    controller.mount().await;
    assert_eq!(controller.items().len(), 1);

    // Declined confirmation: no backend call, row remains
    controller.remove(&created.id, |_| false).await;
    assert_eq!(controller.items().len(), 1);
    assert!(controller.take_alert().is_none());

    let listed = client.list::<StaffResource>().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_controller_second_delete_alerts_and_keeps_collection() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut draft = StaffResource::draft("0".to_string());
    draft.name = "Twice Deleted".to_string();
    draft.role = "Member".to_string();
    let created = client
        .create::<StaffResource>(&draft)
        .await
        .expect("create staff");

    let mut controller = ListController::<StaffResource>::new(client.clone());
    controller.mount().await;
    assert_eq!(controller.items().len(), 1);

    // Another session already deleted the record
    assert!(client.delete::<StaffResource>(&created.id).await);

    // The controller's delete fails; the local collection is left unchanged
    controller.remove(&created.id, |_| true).await;
    assert_eq!(controller.items().len(), 1);
    assert_eq!(
        controller.take_alert().as_deref(),
        Some("Failed to delete staff member")
    );
}

#[tokio::test]
async fn test_controller_save_failure_keeps_editor_open() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<StaffResource>::new(client);
    controller.mount().await;

    // A draft with no name fails backend validation
    controller.add();
    controller.set_field("bio", "No name given");
    controller.save().await;

    assert_eq!(controller.editor_mode(), Some(EditorMode::Adding));
    assert_eq!(
        controller.take_alert().as_deref(),
        Some("Failed to add staff member")
    );
    assert!(controller.items().is_empty());
}

#[tokio::test]
async fn test_controller_donation_row_display() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<DonationsResource>::new(client);
    controller.mount().await;

    controller.add();
    controller.set_field("amount", "25");
    controller.set_field("donor_name", "Jane");
    controller.set_field("donor_email", "jane@example.com");
    controller.save().await;

    assert_eq!(controller.items().len(), 1);
    let row = &controller.items()[0];
    assert_eq!(row.donor_name, "Jane");
    assert_eq!(row.amount_display(), "USD 25.00");
}

#[tokio::test]
async fn test_controller_max_attendees_coercion() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<EventsResource>::new(client);
    controller.mount().await;

    controller.add();
    controller.set_field("title", "Open Mic Night");
    controller.set_field("max_attendees", "100");
    assert_eq!(controller.draft().unwrap().max_attendees, Some(100));
    controller.save().await;
    assert_eq!(controller.items()[0].max_attendees, Some(100));

    // Emptying the input clears the cap to null
    let record = controller.items()[0].clone();
    controller.edit(&record);
    controller.set_field("max_attendees", "");
    assert_eq!(controller.draft().unwrap().max_attendees, None);
    controller.save().await;

    let updated = &controller.items()[0];
    assert_eq!(updated.max_attendees, None);
    assert!(!updated.attendees_display().contains('/'));
}

#[tokio::test]
async fn test_controller_numeric_coercion_decimal() {
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;

    let mut controller = ListController::<DonationsResource>::new(client);
    controller.mount().await;

    controller.add();
    controller.set_field("amount", "19.99");
    assert_eq!(controller.draft().unwrap().amount, 19.99);
}

// ==================== FAILURE BOUNDARIES & FALLBACKS ====================

#[tokio::test]
async fn test_mount_error_sets_generic_message() {
    let mut controller = ListController::<StaffResource>::new(dead_client());
    controller.mount().await;

    assert!(!controller.is_loading());
    assert!(controller.items().is_empty());
    assert_eq!(
        controller.error(),
        Some("An error occurred while fetching staff")
    );
}

#[tokio::test]
async fn test_list_or_empty_swallows_backend_errors() {
    let client = dead_client();
    let artists = client.list_or_empty::<ArtistsResource>().await;
    assert!(artists.is_empty());
}

#[tokio::test]
async fn test_members_section_falls_back_to_sample() {
    // Backend unreachable: the sample list keeps the section populated
    let artists = featured_artists_or_sample(&dead_client()).await;
    assert_eq!(artists.len(), 5);
    assert_eq!(artists[0].name, sample_artists()[0].name);

    // Backend reachable but empty: same fallback
    let fixture = TestFixture::new().await;
    let client = fixture.api_client().await;
    let artists = featured_artists_or_sample(&client).await;
    assert_eq!(artists.len(), 5);

    // With live data the sample is not used
    fixture
        .client
        .post(fixture.url("/api/artists"))
        .json(&json!({ "name": "Live Artist" }))
        .send()
        .await
        .unwrap();
    let artists = featured_artists_or_sample(&client).await;
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Live Artist");
}
