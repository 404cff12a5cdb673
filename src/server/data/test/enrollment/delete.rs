use super::*;

/// Tests removing one enrollment pair.
///
/// Expected: Ok(true) then Ok(false) on repeat
#[tokio::test]
async fn deletes_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);
    assert!(repo.delete(student.id, course.id).await?);
    assert!(!repo.delete(student.id, course.id).await?);

    Ok(())
}

/// Tests removing all enrollments of one student.
///
/// Verifies other students' enrollments in the same course are untouched.
///
/// Expected: Ok(2) with one enrollment left
#[tokio::test]
async fn deletes_all_enrollments_of_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;

    factory::create_enrollment(db, student.id, first.id).await?;
    factory::create_enrollment(db, student.id, second.id).await?;
    factory::create_enrollment(db, other.id, first.id).await?;

    let repo = EnrollmentRepository::new(db);
    assert_eq!(repo.delete_by_student(student.id).await?, 2);

    let remaining = Enrollment::find()
        .filter(entity::enrollment::Column::StudentId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);
    assert_eq!(Enrollment::find().count(db).await?, 1);

    Ok(())
}

/// Tests removing all enrollments in one course.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_all_enrollments_in_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);
    assert_eq!(repo.delete_by_course(course.id).await?, 1);
    assert_eq!(repo.delete_by_course(course.id).await?, 0);

    Ok(())
}
