//! Enrollment fixtures for creating in-memory test data.

use chrono::Utc;
use entity::enrollment;

/// Creates an enrollment entity model linking the given student and course.
///
/// The enrollment ID is `1` and `enrolled_at` is the current time.
///
/// # Arguments
/// - `student_id` - ID of the enrolled student
/// - `course_id` - ID of the course
///
/// # Returns
/// - `enrollment::Model` - In-memory enrollment entity
pub fn entity(student_id: i32, course_id: i32) -> enrollment::Model {
    enrollment::Model {
        id: 1,
        student_id,
        course_id,
        enrolled_at: Utc::now(),
    }
}
