use super::*;

/// Tests creating a new course.
///
/// Expected: Ok with course created and schedule stored trimmed
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(CreateCourseParams::new("MAT101", "Calc", 4, "  Mon 8:00-10:00 ").unwrap())
        .await?;

    assert_eq!(course.code, "MAT101");
    assert_eq!(course.credits, 4);
    assert_eq!(course.schedule, "Mon 8:00-10:00");

    let db_course = entity::prelude::Course::find_by_id(course.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_course.schedule, "Mon 8:00-10:00");

    Ok(())
}

/// Tests the unique constraint on the course code.
///
/// Expected: Err(DbErr) on second insert
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .code("INF202")
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let result = repo
        .create(CreateCourseParams::new("INF202", "Other", 3, "Tue 8:00-10:00").unwrap())
        .await;

    assert!(result.is_err());

    Ok(())
}
