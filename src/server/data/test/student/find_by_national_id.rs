use super::*;

/// Tests looking up a taken national ID.
///
/// Expected: Ok(Some) with the owning student
#[tokio::test]
async fn finds_student_holding_national_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let found = repo.find_by_national_id(&student.national_id, None).await?;

    assert_eq!(found.map(|s| s.id), Some(student.id));

    Ok(())
}

/// Tests that the excluded student is ignored.
///
/// Verifies that a student does not clash with its own national ID, which is what an
/// update relies on.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_excluded_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let found = repo
        .find_by_national_id(&student.national_id, Some(student.id))
        .await?;

    assert!(found.is_none());

    Ok(())
}
