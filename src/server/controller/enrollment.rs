use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        enrollment::EnrollmentCreatedDto,
    },
    server::{error::AppError, service::enrollment::EnrollmentService, state::AppState},
};

/// Tag for grouping enrollment endpoints in OpenAPI documentation
pub static ENROLLMENT_TAG: &str = "enrollment";

/// Student/course pair addressed by the enrollment endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnrollmentParams {
    pub student_id: i32,
    pub course_id: i32,
}

/// Enroll a student in a course.
///
/// Rejects the request when either side is missing, when the student is already enrolled
/// or when one of the student's courses has the exact same schedule.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Student and course IDs
///
/// # Returns
/// - `201 Created` - Confirmation with the created enrollment
/// - `404 Not Found` - Student or course not found
/// - `409 Conflict` - Already enrolled or schedule conflict
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    params(EnrollmentParams),
    responses(
        (status = 201, description = "Successfully enrolled", body = EnrollmentCreatedDto),
        (status = 404, description = "Student or course not found", body = ErrorDto),
        (status = 409, description = "Already enrolled or schedule conflict", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll(
    State(state): State<AppState>,
    Query(params): Query<EnrollmentParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    let enrollment = service.enroll(params.student_id, params.course_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentCreatedDto {
            message: "Student enrolled successfully".to_string(),
            enrollment: enrollment.into_dto(),
        }),
    ))
}

/// Remove a student from a course.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - The student is not enrolled in the course
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/enrollments",
    tag = ENROLLMENT_TAG,
    params(EnrollmentParams),
    responses(
        (status = 200, description = "Successfully unenrolled", body = MessageDto),
        (status = 404, description = "Enrollment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unenroll(
    State(state): State<AppState>,
    Query(params): Query<EnrollmentParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = EnrollmentService::new(&state.db);

    if !service.unenroll(params.student_id, params.course_id).await? {
        return Err(AppError::NotFound("Enrollment not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Student unenrolled successfully".to_string(),
        }),
    ))
}
