use super::*;

/// Tests resolving the students of a course through the enrollment table.
///
/// Verifies that only enrolled students are returned, in enrollment order.
///
/// Expected: Ok with enrolled students
#[tokio::test]
async fn returns_enrolled_students_in_enrollment_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let _not_enrolled = factory::create_student(db).await?;

    factory::create_enrollment(db, second.id, course.id).await?;
    factory::create_enrollment(db, first.id, course.id).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_by_course(course.id).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests resolving students of a course that doesn't exist.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let students = repo.get_by_course(999999).await?;

    assert!(students.is_empty());

    Ok(())
}
