use super::*;

/// Tests creating a new person account.
///
/// Expected: Ok with person created
#[tokio::test]
async fn creates_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let person = repo
        .create(SignupParams {
            displayname: "Avery".to_string(),
            phone: "5550001111".to_string(),
            password_hash: "digest".to_string(),
            role: Role::Client,
        })
        .await?;

    assert_eq!(person.displayname, "Avery");
    assert_eq!(person.phone, "5550001111");
    assert_eq!(person.role, Role::Client);

    Ok(())
}

/// Tests that the phone column rejects duplicates.
///
/// Expected: Err on the second insert with the same phone
#[tokio::test]
async fn duplicate_phone_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonRepository::new(db);
    let params = SignupParams {
        displayname: "Avery".to_string(),
        phone: "5550001111".to_string(),
        password_hash: "digest".to_string(),
        role: Role::Client,
    };

    repo.create(params.clone()).await?;
    let duplicate = repo.create(params).await;

    assert!(duplicate.is_err());

    Ok(())
}
