//! Data models for the Foundation website.
//!
//! These models match the admin frontend interfaces exactly for seamless
//! interoperability; field names stay snake_case on the wire.

mod artist;
mod contact;
mod donation;
mod event;
mod merchandise;
mod news;
mod staff;
mod stats;
mod user;

pub use artist::*;
pub use contact::*;
pub use donation::*;
pub use event::*;
pub use merchandise::*;
pub use news::*;
pub use staff::*;
pub use stats::*;
pub use user::*;

/// Default for timestamp fields a caller left out: the current time as RFC 3339.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
