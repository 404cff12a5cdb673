//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// natural keys (national IDs, course codes) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a valid, counter-unique national ID (8 digits for the first ninety million calls).
pub fn national_id_for(id: u64) -> String {
    format!("{}", 10_000_000 + id)
}

/// Builds a valid course code in `AAA111` form that is unique per counter value.
///
/// The three digits come from the low part of the counter and the letters encode the
/// remainder in base 26.
pub fn course_code_for(id: u64) -> String {
    let high = id / 1000;
    let letter = |n: u64| (b'A' + (n % 26) as u8) as char;

    format!(
        "{}{}{}{:03}",
        letter(high / 676),
        letter(high / 26),
        letter(high),
        id % 1000
    )
}

/// Creates a student, a course and an enrollment linking them.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, course, enrollment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrollment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::student::Model,
        entity::course::Model,
        entity::enrollment::Model,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let enrollment =
        crate::factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    Ok((student, course, enrollment))
}
