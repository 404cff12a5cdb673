//! Domain & parameter models for student operations.

use crate::{
    model::student::{CreateStudentDto, StudentDto, StudentWithCoursesDto, UpdateStudentDto},
    server::{
        error::validation::ValidationError,
        model::course::Course,
        util::validate::{validate_email, validate_national_id, validate_semester},
    },
};

/// The student domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i32,
}

impl Student {
    /// Converts an entity model to the student domain model.
    ///
    /// This conversion happens at the data layer boundary to ensure entity models
    /// never leak into service or controller layers.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            national_id: entity.national_id,
            name: entity.name,
            email: entity.email,
            semester: entity.semester,
        }
    }

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            national_id: self.national_id,
            name: self.name,
            email: self.email,
            semester: self.semester,
        }
    }
}

/// A student together with every course it is enrolled in, in enrollment order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentWithCourses {
    pub student: Student,
    pub courses: Vec<Course>,
}

impl StudentWithCourses {
    pub fn into_dto(self) -> StudentWithCoursesDto {
        StudentWithCoursesDto {
            id: self.student.id,
            national_id: self.student.national_id,
            name: self.student.name,
            email: self.student.email,
            semester: self.student.semester,
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new student.
///
/// Built through `new` or `from_dto`, both of which validate every field.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i32,
}

impl CreateStudentParams {
    /// Validates the fields and builds the parameters.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - Every field satisfies its rule
    /// - `Err(ValidationError)` - The first field that violates its rule
    pub fn new(
        national_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        semester: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            national_id: validate_national_id(national_id.into())?,
            name: name.into(),
            email: validate_email(email.into())?,
            semester: validate_semester(semester)?,
        })
    }

    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, ValidationError> {
        Self::new(dto.national_id, dto.name, dto.email, dto.semester)
    }
}

/// Parameters for a partial student update.
///
/// `None` fields are left untouched. Supplied fields are validated by `from_dto`.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub semester: Option<i32>,
}

impl UpdateStudentParams {
    pub fn from_dto(dto: UpdateStudentDto) -> Result<Self, ValidationError> {
        Ok(Self {
            national_id: dto.national_id.map(validate_national_id).transpose()?,
            name: dto.name,
            email: dto.email.map(validate_email).transpose()?,
            semester: dto.semester.map(validate_semester).transpose()?,
        })
    }
}
