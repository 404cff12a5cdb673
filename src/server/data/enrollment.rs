//! Enrollment data repository for database operations.
//!
//! Provides the `EnrollmentRepository` for the link rows between students and courses.
//! Business rules (duplicate and schedule checks) are enforced by the enrollment service;
//! this repository only reads and writes rows.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::enrollment::Enrollment;

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an enrollment stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(DbErr)` - Database error, including a unique violation if the pair exists or
    ///   a foreign key violation if either side is missing
    pub async fn create(&self, student_id: i32, course_id: i32) -> Result<Enrollment, DbErr> {
        let entity = entity::enrollment::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            course_id: ActiveValue::Set(course_id),
            enrolled_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Enrollment::from_entity(entity))
    }

    /// Finds the enrollment for an exact student/course pair.
    pub async fn find(&self, student_id: i32, course_id: i32) -> Result<Option<Enrollment>, DbErr> {
        let entity = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Enrollment::from_entity))
    }

    /// Deletes the enrollment for an exact student/course pair.
    ///
    /// # Returns
    /// - `Ok(true)` - The enrollment existed and was removed
    /// - `Ok(false)` - The student was not enrolled in the course
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, student_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every enrollment of a student, returning how many were removed.
    pub async fn delete_by_student(&self, student_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes every enrollment in a course, returning how many were removed.
    pub async fn delete_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
