//! Course factory for creating test course entities.

use crate::factory::helpers::{course_code_for, next_id};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// Each default course gets a counter-unique code and schedule, so creating
/// several default courses never trips the schedule-conflict rule.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .code("INF202")
///     .credits(3)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::course::Model,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with unique default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::course::entity_builder()
            .code(course_code_for(id))
            .name(format!("Course {}", id))
            .schedule(format!("Slot {} 8:00-10:00", id))
            .build();

        Self { db, entity }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.entity.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.entity.credits = credits;
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.entity.schedule = schedule.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.entity.code),
            name: ActiveValue::Set(self.entity.name),
            credits: ActiveValue::Set(self.entity.credits),
            schedule: ActiveValue::Set(self.entity.schedule),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
///
/// Shorthand for `CourseFactory::new(db).build().await`.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
