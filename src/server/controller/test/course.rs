use super::*;
use crate::{
    model::{
        course::{CourseDto, CourseWithStudentsDto, CreateCourseDto, UpdateCourseDto},
        student::StudentDto,
    },
    server::controller::course::{
        create_course, delete_course, get_course, get_course_with_students, list_course_students,
        list_courses, update_course, CourseFilter,
    },
};

fn calculus() -> CreateCourseDto {
    CreateCourseDto {
        code: "MAT101".to_string(),
        name: "Calc".to_string(),
        credits: 4,
        schedule: "Mon 8:00-10:00".to_string(),
    }
}

/// Tests course creation, including validation and duplicate codes.
///
/// Expected: 201, then 400 for a lowercase code and 400 for a repeated code
#[tokio::test]
async fn creates_course() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone());

    let response = create_course(State(state.clone()), Json(calculus()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
    let course: CourseDto = read_json(response).await;
    assert_eq!(course.code, "MAT101");

    let lowercase = CreateCourseDto {
        code: "mat102".to_string(),
        ..calculus()
    };
    let response = create_course(State(state.clone()), Json(lowercase))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = create_course(State(state), Json(calculus()))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = read_json(response).await;
    assert_eq!(body.error, "A course with this code already exists");
}

/// Tests listing courses with the credits and code filters.
///
/// Expected: 200 with only the matching course
#[tokio::test]
async fn lists_courses_with_filters() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone());

    let target = factory::course::CourseFactory::new(db)
        .code("INF301")
        .credits(5)
        .build()
        .await
        .unwrap();
    factory::course::CourseFactory::new(db)
        .code("INF302")
        .credits(3)
        .build()
        .await
        .unwrap();

    let response = list_courses(
        State(state),
        Query(CourseFilter {
            credits: Some(5),
            code: Some("INF".to_string()),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let courses: Vec<CourseDto> = read_json(response).await;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, target.id);
}

/// Tests the course detail endpoints.
///
/// Expected: 200 with enrolled students, 404 for an unknown course
#[tokio::test]
async fn returns_course_with_students() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone());

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db)
        .await
        .unwrap();

    let response = get_course_with_students(State(state.clone()), Path(course.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let body: CourseWithStudentsDto = read_json(response).await;
    assert_eq!(body.students.len(), 1);
    assert_eq!(body.students[0].id, student.id);

    let response = get_course(State(state), Path(999999))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Tests updating the schedule of a course.
///
/// Expected: 200 with the trimmed schedule, 400 for a too-short schedule
#[tokio::test]
async fn updates_course() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone());

    let course = factory::create_course(db).await.unwrap();

    let response = update_course(
        State(state.clone()),
        Path(course.id),
        Json(UpdateCourseDto {
            schedule: Some("  Thu 16:00-18:00  ".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: CourseDto = read_json(response).await;
    assert_eq!(updated.schedule, "Thu 16:00-18:00");
    assert_eq!(updated.credits, course.credits);

    let response = update_course(
        State(state),
        Path(course.id),
        Json(UpdateCourseDto {
            schedule: Some(" Mon ".to_string()),
            ..Default::default()
        }),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Tests deleting a course and listing its students afterwards.
///
/// Expected: 200, then 404 on repeat and an empty student list
#[tokio::test]
async fn deletes_course() {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let state = AppState::new(db.clone());

    let (_, course, _) = factory::helpers::create_enrollment_with_dependencies(db)
        .await
        .unwrap();

    let response = delete_course(State(state.clone()), Path(course.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete_course(State(state.clone()), Path(course.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = list_course_students(State(state), Path(course.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);
    let students: Vec<StudentDto> = read_json(response).await;
    assert!(students.is_empty());
}
