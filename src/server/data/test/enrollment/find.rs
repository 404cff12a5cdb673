use super::*;

/// Tests finding an enrollment by exact pair.
///
/// Verifies the lookup matches on both columns, not either one.
///
/// Expected: Some for the enrolled pair, None for mixed pairs
#[tokio::test]
async fn finds_exact_pair_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) =
        factory::helpers::create_enrollment_with_dependencies(db).await?;
    let other_student = factory::create_student(db).await?;
    let other_course = factory::create_course(db).await?;

    let repo = EnrollmentRepository::new(db);

    let found = repo.find(student.id, course.id).await?;
    assert_eq!(found.map(|e| e.id), Some(enrollment.id));

    assert!(repo.find(other_student.id, course.id).await?.is_none());
    assert!(repo.find(student.id, other_course.id).await?.is_none());

    Ok(())
}
