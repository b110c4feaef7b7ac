//! Configuration module for the Foundation backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Email of the seeded admin account
    pub admin_email: String,
    /// Password of the seeded admin account
    pub admin_password: String,
    /// Lifetime of an admin session token, in minutes
    pub session_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("FOUNDATION_DB_PATH")
            .unwrap_or_else(|_| "./data/foundation.sqlite".to_string())
            .into();

        let bind_addr = env::var("FOUNDATION_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .expect("Invalid FOUNDATION_BIND_ADDR format");

        let log_level = env::var("FOUNDATION_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let admin_email = env::var("FOUNDATION_ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@foundation.org".to_string());

        let admin_password =
            env::var("FOUNDATION_ADMIN_PASSWORD").unwrap_or_else(|_| "change-me".to_string());

        let session_ttl_minutes = env::var("FOUNDATION_SESSION_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            db_path,
            bind_addr,
            log_level,
            admin_email,
            admin_password,
            session_ttl_minutes,
        }
    }
}
