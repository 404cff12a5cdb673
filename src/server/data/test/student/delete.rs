use super::*;

/// Tests deleting an existing student.
///
/// Expected: Ok(true) and student no longer in database
#[tokio::test]
async fn deletes_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.delete(student.id).await?);

    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?;
    assert!(db_student.is_none());

    Ok(())
}

/// Tests deleting a student that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    assert!(!repo.delete(999999).await?);

    Ok(())
}
