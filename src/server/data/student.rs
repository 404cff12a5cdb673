//! Student data repository for database operations.
//!
//! Provides the `StudentRepository` for creating, querying, updating and deleting student
//! records, and for resolving the students enrolled in a course through the enrollment table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::student::{CreateStudentParams, Student, UpdateStudentParams};

/// Repository providing database operations for student management.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or an open transaction
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new student record.
    ///
    /// # Arguments
    /// - `params` - Validated student fields
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student with its generated ID
    /// - `Err(DbErr)` - Database error, including unique violations on the national ID
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            national_id: ActiveValue::Set(params.national_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            semester: ActiveValue::Set(params.semester),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The student exists
    /// - `Ok(None)` - No student has this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds the student holding `national_id`, optionally ignoring one student.
    ///
    /// The exclusion lets an update keep its own national ID without reporting a clash
    /// with itself.
    ///
    /// # Arguments
    /// - `national_id` - National ID to look up
    /// - `excluding` - ID of a student to leave out of the search
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Another student already holds this national ID
    /// - `Ok(None)` - The national ID is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_national_id(
        &self,
        national_id: &str,
        excluding: Option<i32>,
    ) -> Result<Option<Student>, DbErr> {
        let mut query = entity::prelude::Student::find()
            .filter(entity::student::Column::NationalId.eq(national_id));

        if let Some(id) = excluding {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        let entity = query.one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Gets every student in insertion order, optionally restricted to one semester.
    ///
    /// # Arguments
    /// - `semester` - Exact semester to filter on, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Matching students ordered by ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, semester: Option<i32>) -> Result<Vec<Student>, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(semester) = semester {
            query = query.filter(entity::student::Column::Semester.eq(semester));
        }

        let entities = query
            .order_by_asc(entity::student::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets the students enrolled in a course, in the order they enrolled.
    ///
    /// # Arguments
    /// - `course_id` - ID of the course
    ///
    /// # Returns
    /// - `Ok(Vec<Student>)` - Enrolled students, empty if the course has none or doesn't exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<Student>, DbErr> {
        let entities = entity::prelude::Student::find()
            .inner_join(entity::prelude::Enrollment)
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Applies the supplied fields of a partial update.
    ///
    /// Fields left as `None` in `params` keep their stored value.
    ///
    /// # Arguments
    /// - `id` - ID of the student to update
    /// - `params` - Validated fields to change
    ///
    /// # Returns
    /// - `Ok(Student)` - The student after the update
    /// - `Err(DbErr::RecordNotFound)` - No student exists with the specified ID
    /// - `Err(DbErr)` - Other database error, including unique violations
    pub async fn update(&self, id: i32, params: UpdateStudentParams) -> Result<Student, DbErr> {
        let student = entity::prelude::Student::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Student with id {} not found",
                id
            )))?;

        let mut active_model: entity::student::ActiveModel = student.clone().into();
        if let Some(national_id) = params.national_id {
            active_model.national_id = ActiveValue::Set(national_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(semester) = params.semester {
            active_model.semester = ActiveValue::Set(semester);
        }

        if !active_model.is_changed() {
            return Ok(Student::from_entity(student));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Student::from_entity(entity))
    }

    /// Deletes a student.
    ///
    /// Enrollments referencing the student are removed by the foreign key cascade; services
    /// also delete them explicitly within the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - A student was deleted
    /// - `Ok(false)` - No student had this ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
