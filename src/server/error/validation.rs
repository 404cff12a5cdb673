use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A field value that does not satisfy its format or range rule.
///
/// Every message states the rule that was violated so the caller knows how to fix
/// the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("National ID must contain between 8 and 10 numeric digits")]
    InvalidNationalId,

    #[error("Invalid email format, expected user@domain.tld")]
    InvalidEmail,

    #[error("Course code must have the format AAA111 (3 uppercase letters followed by 3 digits)")]
    InvalidCourseCode,

    #[error("Schedule must have at least 5 characters")]
    InvalidSchedule,

    #[error("Semester must be between 1 and 12, got {0}")]
    SemesterOutOfRange(i32),

    #[error("Credits must be between 1 and 6, got {0}")]
    CreditsOutOfRange(i32),
}

/// Converts validation errors into 400 Bad Request responses carrying the rule message.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
