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
        course::{CourseDto, CourseWithStudentsDto, CreateCourseDto, UpdateCourseDto},
        student::StudentDto,
    },
    server::{
        error::AppError,
        model::{
            course::{Course, CreateCourseParams, UpdateCourseParams},
            student::Student,
        },
        service::{course::CourseService, enrollment::EnrollmentService},
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseFilter {
    /// Only return courses worth exactly this many credits
    pub credits: Option<i32>,
    /// Only return courses whose code contains this fragment
    pub code: Option<String>,
}

fn course_not_found() -> AppError {
    AppError::NotFound("Course not found".to_string())
}

/// Create a new course.
///
/// # Returns
/// - `201 Created` - The created course
/// - `400 Bad Request` - A field is invalid or the code is taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid field or duplicate code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let params = CreateCourseParams::from_dto(payload)?;

    let course = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

/// List courses in insertion order.
///
/// Both filters are optional and combine when given together.
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    params(CourseFilter),
    responses(
        (status = 200, description = "List of courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let courses = service
        .get_all(filter.credits, filter.code.as_deref())
        .await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course details", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service.get_by_id(id).await?.ok_or_else(course_not_found)?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Get a course together with its enrolled students.
#[utoipa::path(
    get,
    path = "/courses/{id}/students",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course with enrolled students", body = CourseWithStudentsDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_with_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let course = service
        .get_with_students(id)
        .await?
        .ok_or_else(course_not_found)?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Update a course.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Course ID to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - A supplied field is invalid or the code is taken
/// - `404 Not Found` - No course with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid field or duplicate code", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    let params = UpdateCourseParams::from_dto(payload)?;

    let course = service.update(id, params).await?.ok_or_else(course_not_found)?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course and all of its enrollments.
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted course", body = MessageDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CourseService::new(&state.db);

    if !service.delete(id).await? {
        return Err(course_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Course deleted successfully".to_string(),
        }),
    ))
}

/// List the students enrolled in a course, empty if the course doesn't exist.
#[utoipa::path(
    get,
    path = "/courses/{id}/students-list",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Students of the course", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_course_students(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let students = service.students_of_course(id).await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
