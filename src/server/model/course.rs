//! Domain & parameter models for course operations.

use crate::{
    model::course::{CourseDto, CourseWithStudentsDto, CreateCourseDto, UpdateCourseDto},
    server::{
        error::validation::ValidationError,
        model::student::Student,
        util::validate::{validate_course_code, validate_credits, validate_schedule},
    },
};

/// The course domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub schedule: String,
}

impl Course {
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            credits: entity.credits,
            schedule: entity.schedule,
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            code: self.code,
            name: self.name,
            credits: self.credits,
            schedule: self.schedule,
        }
    }
}

/// A course together with every enrolled student, in enrollment order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseWithStudents {
    pub course: Course,
    pub students: Vec<Student>,
}

impl CourseWithStudents {
    pub fn into_dto(self) -> CourseWithStudentsDto {
        CourseWithStudentsDto {
            id: self.course.id,
            code: self.course.code,
            name: self.course.name,
            credits: self.course.credits,
            schedule: self.course.schedule,
            students: self.students.into_iter().map(Student::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new course.
///
/// The schedule is stored trimmed.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub schedule: String,
}

impl CreateCourseParams {
    /// Validates the fields and builds the parameters.
    ///
    /// # Returns
    /// - `Ok(CreateCourseParams)` - Every field satisfies its rule
    /// - `Err(ValidationError)` - The first field that violates its rule
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: i32,
        schedule: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            code: validate_course_code(code.into())?,
            name: name.into(),
            credits: validate_credits(credits)?,
            schedule: validate_schedule(schedule.into())?,
        })
    }

    pub fn from_dto(dto: CreateCourseDto) -> Result<Self, ValidationError> {
        Self::new(dto.code, dto.name, dto.credits, dto.schedule)
    }
}

/// Parameters for a partial course update.
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub schedule: Option<String>,
}

impl UpdateCourseParams {
    pub fn from_dto(dto: UpdateCourseDto) -> Result<Self, ValidationError> {
        Ok(Self {
            code: dto.code.map(validate_course_code).transpose()?,
            name: dto.name,
            credits: dto.credits.map(validate_credits).transpose()?,
            schedule: dto.schedule.map(validate_schedule).transpose()?,
        })
    }
}
