use super::*;

/// Tests resolving a student's courses through the enrollment table.
///
/// Expected: Ok with enrolled courses only, in enrollment order
#[tokio::test]
async fn returns_enrolled_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;
    let _other = factory::create_course(db).await?;

    factory::create_enrollment(db, student.id, first.id).await?;
    factory::create_enrollment(db, student.id, second.id).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_by_student(student.id).await?;

    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
