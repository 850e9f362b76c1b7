use super::*;

/// Tests the admin-only single-appointment read.
///
/// Expected: Ok for an admin, Err(Unauthorized) for the owner
#[tokio::test]
async fn get_requires_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;
    let appointment = factory::appointment::create_appointment(db, owner.id).await?;

    let service = AppointmentService::new(db);

    let found = service
        .get(&Caller::from_entity(&admin), appointment.id)
        .await
        .unwrap();
    assert_eq!(found.id, appointment.id);

    let denied = service
        .get(&Caller::from_entity(&owner), appointment.id)
        .await;
    assert!(matches!(denied, Err(AppError::Unauthorized(_))));

    Ok(())
}

/// Tests the owner listing, which only the owner themselves may call.
///
/// Expected: Ok with the owner's appointments, Err(Unauthorized) for others
#[tokio::test]
async fn list_by_owner_requires_matching_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let other = factory::person::create_person(db).await?;

    factory::appointment::create_appointment(db, owner.id).await?;
    factory::appointment::create_appointment(db, owner.id).await?;

    let service = AppointmentService::new(db);

    let listed = service
        .list_by_owner(&Caller::from_entity(&owner), owner.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);

    let denied = service
        .list_by_owner(&Caller::from_entity(&other), owner.id)
        .await;
    assert!(matches!(denied, Err(AppError::Unauthorized(_))));

    Ok(())
}

/// Tests the owner listing for an account that no longer exists.
///
/// The caller id matches the requested owner, so the ownership check passes
/// and the directory lookup must catch the missing person.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn list_by_owner_missing_person_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let caller = Caller {
        id: 4242,
        role: Role::Client,
    };

    let service = AppointmentService::new(db);
    let result = service.list_by_owner(&caller, 4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the admin status listings.
///
/// Each listing returns exactly the appointments in its status and nothing
/// else, and none of them is callable by a client.
///
/// Expected: Ok with status-pure lists for the admin
#[tokio::test]
async fn status_listings_are_admin_only_and_pure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;

    factory::appointment::create_appointment_with_status(db, owner.id, Status::Waiting).await?;
    factory::appointment::create_appointment_with_status(db, owner.id, Status::Accepted).await?;
    factory::appointment::create_appointment_with_status(db, owner.id, Status::Accepted).await?;
    factory::appointment::create_appointment_with_status(db, owner.id, Status::Modify).await?;
    factory::appointment::create_appointment_with_status(db, owner.id, Status::Canceled).await?;

    let admin_caller = Caller::from_entity(&admin);
    let service = AppointmentService::new(db);

    let requested = service.list_requested(&admin_caller).await.unwrap();
    assert_eq!(requested.len(), 1);
    assert!(requested.iter().all(|a| a.status == Status::Waiting));

    let accepted = service.list_accepted(&admin_caller).await.unwrap();
    assert_eq!(accepted.len(), 2);
    assert!(accepted.iter().all(|a| a.status == Status::Accepted));

    let unconfirmed = service.list_unconfirmed(&admin_caller).await.unwrap();
    assert_eq!(unconfirmed.len(), 1);
    assert!(unconfirmed.iter().all(|a| a.status == Status::Modify));

    let owner_caller = Caller::from_entity(&owner);
    assert!(matches!(
        service.list_requested(&owner_caller).await,
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        service.list_accepted(&owner_caller).await,
        Err(AppError::Unauthorized(_))
    ));
    assert!(matches!(
        service.list_unconfirmed(&owner_caller).await,
        Err(AppError::Unauthorized(_))
    ));

    Ok(())
}
