use super::*;

/// Tests the exact credits filter.
///
/// Expected: Ok with only courses of the requested credit count
#[tokio::test]
async fn filters_by_credits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let three = factory::course::CourseFactory::new(db)
        .credits(3)
        .build()
        .await?;
    factory::course::CourseFactory::new(db)
        .credits(4)
        .build()
        .await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_all(Some(3), None).await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, three.id);

    Ok(())
}

/// Tests the substring filter on the course code, alone and combined with credits.
///
/// Expected: Ok with courses whose code contains the fragment
#[tokio::test]
async fn filters_by_code_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registry_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mat101 = factory::course::CourseFactory::new(db)
        .code("MAT101")
        .credits(4)
        .build()
        .await?;
    let mat202 = factory::course::CourseFactory::new(db)
        .code("MAT202")
        .credits(3)
        .build()
        .await?;
    factory::course::CourseFactory::new(db)
        .code("FIS101")
        .credits(4)
        .build()
        .await?;

    let repo = CourseRepository::new(db);

    let mat: Vec<i32> = repo
        .get_all(None, Some("MAT"))
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(mat, vec![mat101.id, mat202.id]);

    let mat_four: Vec<i32> = repo
        .get_all(Some(4), Some("MAT"))
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(mat_four, vec![mat101.id]);

    let all = repo.get_all(None, None).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
