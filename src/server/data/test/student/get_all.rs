use super::*;

/// Tests listing students in insertion order.
///
/// Expected: Ok with all students ordered by ID
#[tokio::test]
async fn lists_students_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    let third = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all(None).await?;

    let ids: Vec<i32> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests the exact semester filter.
///
/// Expected: Ok with only students of the requested semester
#[tokio::test]
async fn filters_by_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::student::StudentFactory::new(db)
        .semester(1)
        .build()
        .await?;
    let fifth = factory::student::StudentFactory::new(db)
        .semester(5)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .semester(10)
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let students = repo.get_all(Some(5)).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, fifth.id);

    let none = repo.get_all(Some(12)).await?;
    assert!(none.is_empty());

    Ok(())
}
