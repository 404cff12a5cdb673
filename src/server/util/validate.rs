//! Field-level validation for student and course records.
//!
//! Every rule the registry enforces on a single field lives here. Parameter models call
//! these functions when they are built from a create request and again for each field a
//! partial update supplies, so a record can never reach the data layer with a malformed
//! value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::error::validation::ValidationError;

static NATIONAL_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8,10}$").expect("national ID pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

static COURSE_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("course code pattern is valid"));

/// Minimum number of characters a schedule must keep after trimming.
pub const MIN_SCHEDULE_LEN: usize = 5;

pub const SEMESTER_RANGE: std::ops::RangeInclusive<i32> = 1..=12;
pub const CREDITS_RANGE: std::ops::RangeInclusive<i32> = 1..=6;

/// Accepts a national ID made of exactly 8 to 10 ASCII digits.
///
/// # Returns
/// - `Ok(String)` - The value, unchanged
/// - `Err(ValidationError::InvalidNationalId)` - Wrong length or a non-digit character
pub fn validate_national_id(value: String) -> Result<String, ValidationError> {
    if NATIONAL_ID_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidNationalId)
    }
}

/// Accepts an email shaped like `local@domain.tld`.
///
/// The local part may use letters, digits and `._%+-`, the domain letters, digits and
/// `.-`, and the top-level domain needs at least two letters.
pub fn validate_email(value: String) -> Result<String, ValidationError> {
    if EMAIL_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Accepts a course code of exactly three uppercase letters followed by three digits.
pub fn validate_course_code(value: String) -> Result<String, ValidationError> {
    if COURSE_CODE_PATTERN.is_match(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidCourseCode)
    }
}

/// Trims a schedule and accepts it when at least five characters remain.
///
/// # Returns
/// - `Ok(String)` - The trimmed schedule, which is what gets stored
/// - `Err(ValidationError::InvalidSchedule)` - Fewer than five characters after trimming
pub fn validate_schedule(value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.chars().count() >= MIN_SCHEDULE_LEN {
        Ok(trimmed.to_string())
    } else {
        Err(ValidationError::InvalidSchedule)
    }
}

pub fn validate_semester(value: i32) -> Result<i32, ValidationError> {
    if SEMESTER_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::SemesterOutOfRange(value))
    }
}

pub fn validate_credits(value: i32) -> Result<i32, ValidationError> {
    if CREDITS_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::CreditsOutOfRange(value))
    }
}
