use super::*;

/// Tests creating a new student.
///
/// Verifies that the repository inserts the student with a generated ID and that the
/// record is queryable afterwards.
///
/// Expected: Ok with student created
#[tokio::test]
async fn creates_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams::new("1234567890", "Ana", "ana@uni.edu", 3).unwrap())
        .await?;

    assert!(student.id > 0);
    assert_eq!(student.national_id, "1234567890");
    assert_eq!(student.name, "Ana");
    assert_eq!(student.email, "ana@uni.edu");
    assert_eq!(student.semester, 3);

    let db_student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?;
    assert!(db_student.is_some());

    Ok(())
}

/// Tests the unique constraint on the national ID.
///
/// Verifies that inserting a second student with an existing national ID fails at the
/// database level even without an application-level check.
///
/// Expected: Err(DbErr) on second insert
#[tokio::test]
async fn rejects_duplicate_national_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .create(
            CreateStudentParams::new(existing.national_id.clone(), "Other", "o@uni.edu", 1)
                .unwrap(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
