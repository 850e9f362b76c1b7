use super::*;

/// Tests looking a person up by phone number.
///
/// Expected: Ok(Some) for a registered phone, Ok(None) otherwise
#[tokio::test]
async fn find_by_phone_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::person::create_person(db).await?;

    let repo = PersonRepository::new(db);

    let found = repo.find_by_phone(&person.phone).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, person.id);

    let missing = repo.find_by_phone("5559999999").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the admin existence check used at startup.
///
/// Expected: false with only client accounts, true once an admin exists
#[tokio::test]
async fn admin_exists_ignores_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);

    factory::person::create_person(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::person::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
