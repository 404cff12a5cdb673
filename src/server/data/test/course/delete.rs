use super::*;

/// Tests that deleting a course cascades to its enrollments at the database level.
///
/// Expected: Ok(true) and no enrollment left for the course
#[tokio::test]
async fn deletes_course_and_cascades_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_student, course, enrollment) =
        factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);

    let db_enrollment = entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?;
    assert!(db_enrollment.is_none());

    Ok(())
}

/// Tests deleting a course that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    assert!(!repo.delete(999999).await?);

    Ok(())
}
