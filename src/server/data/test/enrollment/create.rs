use super::*;

/// Tests creating an enrollment.
///
/// Expected: Ok with the pair stored
#[tokio::test]
async fn creates_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(student.id, course.id).await?;

    assert_eq!(enrollment.student_id, student.id);
    assert_eq!(enrollment.course_id, course.id);

    let count = Enrollment::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests the unique index over the enrollment pair.
///
/// Expected: Err(DbErr) on the repeated pair, one row persisted
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);
    let result = repo.create(student.id, course.id).await;

    assert!(result.is_err());
    let count = Enrollment::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests referential integrity on insert.
///
/// Expected: Err(DbErr) when the course doesn't exist
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = EnrollmentRepository::new(db);
    let result = repo.create(student.id, 999999).await;

    assert!(result.is_err());

    Ok(())
}
