//! Student factory for creating test student entities.

use crate::factory::helpers::{national_id_for, next_id};
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// Default values are sourced from the student fixture, with a counter-unique
/// national ID, name and email so several students can coexist in one database.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .national_id("87654321")
///     .semester(8)
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::student::Model,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with unique default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::student::entity_builder()
            .national_id(national_id_for(id))
            .name(format!("Student {}", id))
            .email(format!("student{}@uni.edu", id))
            .build();

        Self { db, entity }
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.entity.national_id = national_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.entity.email = email.into();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.entity.semester = semester;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            national_id: ActiveValue::Set(self.entity.national_id),
            name: ActiveValue::Set(self.entity.name),
            email: ActiveValue::Set(self.entity.email),
            semester: ActiveValue::Set(self.entity.semester),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
