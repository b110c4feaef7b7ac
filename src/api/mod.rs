//! REST API handlers, one file per resource.
//!
//! This module holds the success envelope they all share; the error side of
//! the envelope is produced by [`AppError`].

mod artists;
mod auth;
mod contact;
mod donations;
mod events;
mod merchandise;
mod news;
mod staff;
mod stats;
mod users;

pub use artists::*;
pub use auth::*;
pub use contact::*;
pub use donations::*;
pub use events::*;
pub use merchandise::*;
pub use news::*;
pub use staff::*;
pub use stats::*;
pub use users::*;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// What every handler returns: the success envelope or a mapped error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Wrap payload data in the success envelope.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data,
    })
}
