//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON bodies so every handler
//! fails the same way.
//!
//! | Error | Status |
//! |---|---|
//! | `Validation` | 400, with per-field messages |
//! | `NotFound` | 404 |
//! | `Integrity` | 409 |
//! | `Parse`, `Database`, `Internal` | 500, generic message |
//!
//! Details of 500 responses are logged and never sent to the client.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use stagebook_core::errors::{BookingError, FieldErrors};
use tracing::error;

/// Message returned for every 500 response.
pub const GENERIC_FAILURE: &str = "An error occurred. The request could not be completed.";

/// Application error wrapper that provides HTTP status code mapping
///
/// ```ignore
/// async fn handler(State(state): State<Arc<ApiState>>) -> Result<Json<VenuePage>, AppError> {
///     let mut conn = state.db_pool.acquire().await?;
///     let page = pages::venue_page(&mut PgDirectory::new(&mut conn), 1, time::now()).await?;
///     Ok(Json(page))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Integrity(_) => StatusCode::CONFLICT,
            BookingError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self.0 {
            BookingError::Validation(fields) => {
                json!({ "error": "Validation failed", "fields": fields })
            }
            BookingError::NotFound(_) | BookingError::Integrity(_) => {
                json!({ "error": self.0.to_string() })
            }
            other => {
                error!("Request failed: {:?}", other);
                json!({ "error": GENERIC_FAILURE })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// A body that is not the expected JSON shape is reported under the `body`
/// field, like any other invalid input.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let mut fields = FieldErrors::new();
        fields.add("body", rejection.body_text());
        AppError(BookingError::Validation(fields))
    }
}

/// Pool and transaction failures surface as database errors.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError(BookingError::Database(eyre::Report::new(err)))
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
