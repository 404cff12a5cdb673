//! Enrollment factory for linking test students to test courses.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an enrollment linking the given student and course.
///
/// Skips the duplicate and schedule-conflict rules; the database constraints
/// still apply.
///
/// # Arguments
/// - `db` - Database connection
/// - `student_id` - ID of an existing student
/// - `course_id` - ID of an existing course
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        id: ActiveValue::NotSet,
        student_id: ActiveValue::Set(student_id),
        course_id: ActiveValue::Set(course_id),
        enrolled_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
