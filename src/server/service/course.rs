use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository},
    error::AppError,
    model::course::{Course, CourseWithStudents, CreateCourseParams, UpdateCourseParams},
};

const DUPLICATE_CODE: &str = "A course with this code already exists";

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::DuplicateKey)` - Another course already uses the code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCourseParams) -> Result<Course, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_code(&params.code, None).await?.is_some() {
            tracing::debug!("Rejected course with taken code {}", params.code);
            return Err(AppError::DuplicateKey(DUPLICATE_CODE.to_string()));
        }

        let course = repo.create(params).await.map_err(|e| {
            AppError::on_unique_violation(e, AppError::DuplicateKey(DUPLICATE_CODE.to_string()))
        })?;

        txn.commit().await?;

        tracing::info!("Created course {} ({})", course.id, course.code);

        Ok(course)
    }

    /// Gets all courses in insertion order.
    ///
    /// `credits` filters on an exact credit count and `code` keeps courses whose code
    /// contains the fragment. Both filters combine.
    pub async fn get_all(
        &self,
        credits: Option<i32>,
        code: Option<&str>,
    ) -> Result<Vec<Course>, AppError> {
        let repo = CourseRepository::new(self.db);

        Ok(repo.get_all(credits, code).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        let repo = CourseRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Gets a course along with its enrolled students.
    /// Returns None if the course doesn't exist
    pub async fn get_with_students(&self, id: i32) -> Result<Option<CourseWithStudents>, AppError> {
        let Some(course) = CourseRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let students = StudentRepository::new(self.db).get_by_course(id).await?;

        Ok(Some(CourseWithStudents { course, students }))
    }

    /// Applies a partial update to a course.
    ///
    /// # Returns
    /// - `Ok(Some(Course))` - The updated course
    /// - `Ok(None)` - No course exists with the specified ID
    /// - `Err(AppError::DuplicateKey)` - The new code belongs to another course
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCourseParams,
    ) -> Result<Option<Course>, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(code) = &params.code {
            if repo.find_by_code(code, Some(id)).await?.is_some() {
                tracing::debug!("Rejected update of course {} to taken code {}", id, code);
                return Err(AppError::DuplicateKey(DUPLICATE_CODE.to_string()));
            }
        }

        let course = repo.update(id, params).await.map_err(|e| {
            AppError::on_unique_violation(e, AppError::DuplicateKey(DUPLICATE_CODE.to_string()))
        })?;

        txn.commit().await?;

        tracing::info!("Updated course {}", id);

        Ok(Some(course))
    }

    /// Deletes a course and every enrollment referencing it.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let removed = EnrollmentRepository::new(&txn).delete_by_course(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted course {} and {} enrollment(s)", id, removed);

        Ok(true)
    }
}
