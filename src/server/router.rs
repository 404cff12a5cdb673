use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ServiceInfoDto},
        course::{CourseDto, CourseWithStudentsDto, CreateCourseDto, UpdateCourseDto},
        enrollment::{EnrollmentCreatedDto, EnrollmentDto},
        student::{CreateStudentDto, StudentDto, StudentWithCoursesDto, UpdateStudentDto},
    },
    server::{
        controller::{
            course,
            enrollment,
            root::{self, DOCS_PATH, OPENAPI_PATH},
            student,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "University Registry API"),
    paths(
        root::index,
        student::create_student,
        student::list_students,
        student::get_student,
        student::get_student_with_courses,
        student::update_student,
        student::delete_student,
        student::list_student_courses,
        course::create_course,
        course::list_courses,
        course::get_course,
        course::get_course_with_students,
        course::update_course,
        course::delete_course,
        course::list_course_students,
        enrollment::enroll,
        enrollment::unenroll,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ServiceInfoDto,
        StudentDto,
        StudentWithCoursesDto,
        CreateStudentDto,
        UpdateStudentDto,
        CourseDto,
        CourseWithStudentsDto,
        CreateCourseDto,
        UpdateCourseDto,
        EnrollmentDto,
        EnrollmentCreatedDto,
    )),
    tags(
        (name = "root", description = "Service metadata"),
        (name = "student", description = "Student records"),
        (name = "course", description = "Course records"),
        (name = "enrollment", description = "Enrollments between students and courses"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route(
            "/students",
            post(student::create_student).get(student::list_students),
        )
        .route(
            "/students/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/students/{id}/courses",
            get(student::get_student_with_courses),
        )
        .route(
            "/students/{id}/courses-list",
            get(student::list_student_courses),
        )
        .route(
            "/courses",
            post(course::create_course).get(course::list_courses),
        )
        .route(
            "/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/courses/{id}/students",
            get(course::get_course_with_students),
        )
        .route(
            "/courses/{id}/students-list",
            get(course::list_course_students),
        )
        .route(
            "/enrollments",
            post(enrollment::enroll).delete(enrollment::unenroll),
        )
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}
