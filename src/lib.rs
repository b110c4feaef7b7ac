//! Foundation Website Backend
//!
//! REST backend with SQLite persistence for the foundation's public site and
//! admin dashboard, plus the UI-framework-independent admin client layer
//! (resource facade, list controller, dashboard shell).

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes; the session middleware lets public reads through
    let api_routes = Router::new()
        // Staff
        .route("/staff", get(api::list_staff).post(api::create_staff))
        .route(
            "/staff/{id}",
            get(api::get_staff)
                .put(api::update_staff)
                .delete(api::delete_staff),
        )
        // Events
        .route("/events", get(api::list_events).post(api::create_event))
        .route(
            "/events/{id}",
            get(api::get_event)
                .put(api::update_event)
                .delete(api::delete_event),
        )
        // Donations
        .route(
            "/donations",
            get(api::list_donations).post(api::create_donation),
        )
        .route(
            "/donations/{id}",
            get(api::get_donation)
                .put(api::update_donation)
                .delete(api::delete_donation),
        )
        // Merchandise
        .route(
            "/merchandise",
            get(api::list_merchandise).post(api::create_merchandise_item),
        )
        .route(
            "/merchandise/{id}",
            get(api::get_merchandise_item)
                .put(api::update_merchandise_item)
                .delete(api::delete_merchandise_item),
        )
        // Artists
        .route("/artists", get(api::list_artists).post(api::create_artist))
        .route(
            "/artists/{id}",
            get(api::get_artist)
                .put(api::update_artist)
                .delete(api::delete_artist),
        )
        // News
        .route("/news", get(api::list_news).post(api::create_news_article))
        .route(
            "/news/{id}",
            get(api::get_news_article)
                .put(api::update_news_article)
                .delete(api::delete_news_article),
        )
        // Contact
        .route(
            "/contact",
            get(api::list_contact_messages).post(api::create_contact_message),
        )
        .route(
            "/contact/{id}",
            get(api::get_contact_message)
                .put(api::update_contact_message)
                .delete(api::delete_contact_message),
        )
        // Admin
        .route("/admin/stats", get(api::get_stats))
        .route("/admin/users", get(api::list_users))
        .route(
            "/admin/users/{id}/toggle-admin",
            patch(api::toggle_user_admin),
        )
        // Auth
        .route("/auth/register", post(api::register))
        .route("/auth/login", post(api::login))
        .route("/auth/logout", post(api::logout))
        // Session validation for everything that is not public
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    // Root and health check (no auth required)
    let public_routes = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(public_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint.
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the Foundation API" }))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
