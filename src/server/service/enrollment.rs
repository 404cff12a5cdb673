//! Enrollment business rules.
//!
//! Enrolling a student checks, in order, that both sides exist, that the pair is not
//! already enrolled and that none of the student's current courses meets at the same
//! schedule as the target course. Schedules clash only when their strings are identical.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, enrollment::EnrollmentRepository, student::StudentRepository},
    error::AppError,
    model::{course::Course, enrollment::Enrollment, student::Student},
};

const ALREADY_ENROLLED: &str = "Student is already enrolled in this course";

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enrolls a student in a course.
    ///
    /// All checks and the insert run in one transaction. The unique index over the pair
    /// backs the duplicate check when two requests race.
    ///
    /// # Arguments
    /// - `student_id` - ID of the student to enroll
    /// - `course_id` - ID of the target course
    ///
    /// # Returns
    /// - `Ok(Enrollment)` - The created enrollment
    /// - `Err(AppError::NotFound)` - The student or the course doesn't exist
    /// - `Err(AppError::Conflict)` - Already enrolled, or a schedule conflict
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn enroll(&self, student_id: i32, course_id: i32) -> Result<Enrollment, AppError> {
        let txn = self.db.begin().await?;
        let course_repo = CourseRepository::new(&txn);
        let enrollment_repo = EnrollmentRepository::new(&txn);

        if StudentRepository::new(&txn)
            .find_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        let course = course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if enrollment_repo.find(student_id, course_id).await?.is_some() {
            tracing::debug!(
                "Rejected repeated enrollment of student {} in course {}",
                student_id,
                course_id
            );
            return Err(AppError::Conflict(ALREADY_ENROLLED.to_string()));
        }

        let current = course_repo.get_by_student(student_id).await?;
        if let Some(clash) = current.iter().find(|c| c.schedule == course.schedule) {
            tracing::debug!(
                "Rejected enrollment of student {} in course {}: clashes with {}",
                student_id,
                course.code,
                clash.code
            );
            return Err(AppError::Conflict(format!(
                "Schedule conflict: {} meets at the same time as {} ({})",
                course.code, clash.code, course.schedule
            )));
        }

        let enrollment = enrollment_repo
            .create(student_id, course_id)
            .await
            .map_err(|e| {
                AppError::on_unique_violation(e, AppError::Conflict(ALREADY_ENROLLED.to_string()))
            })?;

        txn.commit().await?;

        tracing::info!("Enrolled student {} in course {}", student_id, course_id);

        Ok(enrollment)
    }

    /// Removes a student from a course.
    /// Returns true if the enrollment existed, false otherwise
    pub async fn unenroll(&self, student_id: i32, course_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let removed = EnrollmentRepository::new(&txn)
            .delete(student_id, course_id)
            .await?;

        txn.commit().await?;

        if removed {
            tracing::info!("Unenrolled student {} from course {}", student_id, course_id);
        }

        Ok(removed)
    }

    /// Gets the courses of a student, empty if the student doesn't exist.
    pub async fn courses_of_student(&self, student_id: i32) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    /// Gets the students of a course, empty if the course doesn't exist.
    pub async fn students_of_course(&self, course_id: i32) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db)
            .get_by_course(course_id)
            .await?)
    }
}
