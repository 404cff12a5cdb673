use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository},
    error::AppError,
    model::student::{CreateStudentParams, Student, StudentWithCourses, UpdateStudentParams},
};

const DUPLICATE_NATIONAL_ID: &str = "A student with this national ID already exists";

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new student.
    ///
    /// The national ID check and the insert share one transaction. If a concurrent request
    /// inserts the same national ID in between, the unique index rejects the insert and the
    /// same `DuplicateKey` error is returned.
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(AppError::DuplicateKey)` - Another student already holds the national ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        if repo
            .find_by_national_id(&params.national_id, None)
            .await?
            .is_some()
        {
            tracing::debug!("Rejected student with taken national ID {}", params.national_id);
            return Err(AppError::DuplicateKey(DUPLICATE_NATIONAL_ID.to_string()));
        }

        let student = repo.create(params).await.map_err(|e| {
            AppError::on_unique_violation(e, AppError::DuplicateKey(DUPLICATE_NATIONAL_ID.to_string()))
        })?;

        txn.commit().await?;

        tracing::info!("Created student {} ({})", student.id, student.national_id);

        Ok(student)
    }

    /// Gets all students in insertion order, optionally filtered by semester.
    pub async fn get_all(&self, semester: Option<i32>) -> Result<Vec<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.get_all(semester).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Student>, AppError> {
        let repo = StudentRepository::new(self.db);

        Ok(repo.find_by_id(id).await?)
    }

    /// Gets a student along with the courses it is enrolled in.
    /// Returns None if the student doesn't exist
    pub async fn get_with_courses(&self, id: i32) -> Result<Option<StudentWithCourses>, AppError> {
        let Some(student) = StudentRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let courses = CourseRepository::new(self.db).get_by_student(id).await?;

        Ok(Some(StudentWithCourses { student, courses }))
    }

    /// Applies a partial update to a student.
    ///
    /// A supplied national ID is checked against every other student; keeping the current
    /// one is never a conflict.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - The updated student
    /// - `Ok(None)` - No student exists with the specified ID
    /// - `Err(AppError::DuplicateKey)` - The new national ID belongs to another student
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStudentParams,
    ) -> Result<Option<Student>, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }

        if let Some(national_id) = &params.national_id {
            if repo
                .find_by_national_id(national_id, Some(id))
                .await?
                .is_some()
            {
                tracing::debug!("Rejected update of student {} to taken national ID", id);
                return Err(AppError::DuplicateKey(DUPLICATE_NATIONAL_ID.to_string()));
            }
        }

        let student = repo.update(id, params).await.map_err(|e| {
            AppError::on_unique_violation(e, AppError::DuplicateKey(DUPLICATE_NATIONAL_ID.to_string()))
        })?;

        txn.commit().await?;

        tracing::info!("Updated student {}", id);

        Ok(Some(student))
    }

    /// Deletes a student and every enrollment referencing it.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = StudentRepository::new(&txn);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let removed = EnrollmentRepository::new(&txn).delete_by_student(id).await?;
        repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!("Deleted student {} and {} enrollment(s)", id, removed);

        Ok(true)
    }
}
