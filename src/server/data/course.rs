//! Course data repository for database operations.
//!
//! Provides the `CourseRepository` for creating, querying, updating and deleting course
//! records, and for resolving a student's courses through the enrollment table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::course::{Course, CreateCourseParams, UpdateCourseParams};

/// Repository providing database operations for course management.
pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new course record.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course with its generated ID
    /// - `Err(DbErr)` - Database error, including unique violations on the code
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, DbErr> {
        let entity = entity::course::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(params.name),
            credits: ActiveValue::Set(params.credits),
            schedule: ActiveValue::Set(params.schedule),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let entity = entity::prelude::Course::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Finds the course holding `code`, optionally ignoring one course.
    ///
    /// # Arguments
    /// - `code` - Course code to look up
    /// - `excluding` - ID of a course to leave out of the search
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - Another course already uses this code
    /// - `Ok(None)` - The code is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_code(
        &self,
        code: &str,
        excluding: Option<i32>,
    ) -> Result<Option<Course>, DbErr> {
        let mut query =
            entity::prelude::Course::find().filter(entity::course::Column::Code.eq(code));

        if let Some(id) = excluding {
            query = query.filter(entity::course::Column::Id.ne(id));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Course::from_entity))
    }

    /// Gets every course in insertion order with optional filters.
    ///
    /// # Arguments
    /// - `credits` - Exact credit count to filter on, if any
    /// - `code` - Substring the course code must contain, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - Matching courses ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        credits: Option<i32>,
        code: Option<&str>,
    ) -> Result<Vec<Course>, DbErr> {
        let mut query = entity::prelude::Course::find();

        if let Some(credits) = credits {
            query = query.filter(entity::course::Column::Credits.eq(credits));
        }
        if let Some(code) = code {
            query = query.filter(entity::course::Column::Code.contains(code));
        }

        let entities = query
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Gets the courses a student is enrolled in, in the order they were enrolled.
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - Enrolled courses, empty if the student has none or doesn't exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<Course>, DbErr> {
        let entities = entity::prelude::Course::find()
            .inner_join(entity::prelude::Enrollment)
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Course::from_entity).collect())
    }

    /// Applies the supplied fields of a partial update.
    ///
    /// # Returns
    /// - `Ok(Course)` - The course after the update
    /// - `Err(DbErr::RecordNotFound)` - No course exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including unique violations
    pub async fn update(&self, id: i32, params: UpdateCourseParams) -> Result<Course, DbErr> {
        let course = entity::prelude::Course::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Course with id {} not found",
                id
            )))?;

        let mut active_model: entity::course::ActiveModel = course.clone().into();
        if let Some(code) = params.code {
            active_model.code = ActiveValue::Set(code);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(credits) = params.credits {
            active_model.credits = ActiveValue::Set(credits);
        }
        if let Some(schedule) = params.schedule {
            active_model.schedule = ActiveValue::Set(schedule);
        }

        if !active_model.is_changed() {
            return Ok(Course::from_entity(course));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Course::from_entity(entity))
    }

    /// Deletes a course.
    ///
    /// # Returns
    /// - `Ok(true)` - A course was deleted
    /// - `Ok(false)` - No course had this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
