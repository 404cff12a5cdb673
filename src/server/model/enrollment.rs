//! Domain model for the student–course link.

use chrono::{DateTime, Utc};

use crate::model::enrollment::EnrollmentDto;

/// One student enrolled in one course.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn from_entity(entity: entity::enrollment::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            course_id: entity.course_id,
            enrolled_at: entity.enrolled_at,
        }
    }

    pub fn into_dto(self) -> EnrollmentDto {
        EnrollmentDto {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            enrolled_at: self.enrolled_at,
        }
    }
}
