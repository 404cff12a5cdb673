use super::*;

/// Tests a partial update.
///
/// Verifies that only the supplied fields change and omitted fields keep their value.
///
/// Expected: Ok with only semester and email changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let updated = repo
        .update(
            student.id,
            UpdateStudentParams {
                email: Some("new@uni.edu".to_string()),
                semester: Some(7),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, student.id);
    assert_eq!(updated.email, "new@uni.edu");
    assert_eq!(updated.semester, 7);
    assert_eq!(updated.national_id, student.national_id);
    assert_eq!(updated.name, student.name);

    Ok(())
}

/// Tests updating a student that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(999999, UpdateStudentParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
