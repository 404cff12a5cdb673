use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        course::CourseDto,
        student::{CreateStudentDto, StudentDto, StudentWithCoursesDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        model::{
            course::Course,
            student::{CreateStudentParams, Student, UpdateStudentParams},
        },
        service::{enrollment::EnrollmentService, student::StudentService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StudentFilter {
    /// Only return students in this semester
    pub semester: Option<i32>,
}

fn student_not_found() -> AppError {
    AppError::NotFound("Student not found".to_string())
}

/// Create a new student.
///
/// Validates the national ID, email and semester before inserting. The national ID must
/// not belong to another student.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student creation data
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - A field is invalid or the national ID is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid field or duplicate national ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::from_dto(payload)?;

    let student = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List students in insertion order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Optional exact semester filter
///
/// # Returns
/// - `200 OK` - Matching students
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    params(StudentFilter),
    responses(
        (status = 200, description = "List of students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service.get_all(filter.semester).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a student by ID.
///
/// # Returns
/// - `200 OK` - The student
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service.get_by_id(id).await?.ok_or_else(student_not_found)?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Get a student together with the courses it is enrolled in.
///
/// # Returns
/// - `200 OK` - The student with its courses
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}/courses",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student with enrolled courses", body = StudentWithCoursesDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_with_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let student = service
        .get_with_courses(id)
        .await?
        .ok_or_else(student_not_found)?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Update a student.
///
/// Only the supplied fields are validated and changed.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated student
/// - `400 Bad Request` - A supplied field is invalid or the national ID is taken
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid field or duplicate national ID", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = UpdateStudentParams::from_dto(payload)?;

    let student = service.update(id, params).await?.ok_or_else(student_not_found)?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Delete a student and all of its enrollments.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No student with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    if !service.delete(id).await? {
        return Err(student_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student deleted successfully".to_string(),
        }),
    ))
}

/// List the courses a student is enrolled in.
///
/// Unlike `/students/{id}/courses`, an unknown student yields an empty list.
#[utoipa::path(
    get,
    path = "/students/{id}/courses-list",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Courses of the student", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_student_courses(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let courses = service.courses_of_student(id).await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
