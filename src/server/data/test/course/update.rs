use super::*;

/// Tests a partial update.
///
/// Expected: Ok with only credits changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo
        .update(
            course.id,
            UpdateCourseParams {
                credits: Some(2),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.credits, 2);
    assert_eq!(updated.code, course.code);
    assert_eq!(updated.name, course.name);
    assert_eq!(updated.schedule, course.schedule);

    Ok(())
}

/// Tests updating a course to a code another course already uses.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn rejects_code_taken_by_other_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_course(db).await?;
    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .update(
            course.id,
            UpdateCourseParams {
                code: Some(taken.code.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
