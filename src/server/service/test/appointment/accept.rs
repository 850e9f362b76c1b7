use super::*;

/// Tests the full request-and-confirm flow.
///
/// The owner creates a request, an admin accepts it, and an admin read shows
/// the preferred slot copied into the selected slot with status ACCEPTED.
///
/// Expected: Ok at every step
#[tokio::test]
async fn request_then_accept_confirms_preferred_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;
    let owner_caller = Caller::from_entity(&owner);
    let admin_caller = Caller::from_entity(&admin);

    let service = AppointmentService::new(db);
    let created = service
        .create(
            &owner_caller,
            CreateAppointmentParams {
                owner_id: owner.id,
                day_preferred: day(2024, 6, 1),
                hour_preferred: 10,
                description: None,
            },
        )
        .await
        .unwrap();

    service.admin_accept(&admin_caller, created.id).await.unwrap();

    let stored = service.get(&admin_caller, created.id).await.unwrap();
    assert_eq!(stored.status, Status::Accepted);
    assert_eq!(stored.day_selected, Some(day(2024, 6, 1)));
    assert_eq!(stored.hour_selected, Some(10));
    assert_eq!(stored.day_preferred, day(2024, 6, 1));
    assert_eq!(stored.hour_preferred, 10);

    Ok(())
}

/// Tests accepting from the MODIFY state.
///
/// Expected: Ok with the current preferred slot confirmed
#[tokio::test]
async fn admin_accept_from_modify_uses_current_preferred() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;
    let appointment =
        factory::appointment::create_appointment_with_status(db, owner.id, Status::Modify).await?;

    let service = AppointmentService::new(db);
    let accepted = service
        .admin_accept(&Caller::from_entity(&admin), appointment.id)
        .await
        .unwrap();

    assert_eq!(accepted.status, Status::Accepted);
    assert_eq!(accepted.day_selected, Some(appointment.day_preferred));
    assert_eq!(accepted.hour_selected, Some(appointment.hour_preferred));

    Ok(())
}

/// Tests that a client caller cannot run the admin accept.
///
/// Expected: Err(Unauthorized), record unchanged
#[tokio::test]
async fn admin_accept_requires_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let appointment = factory::appointment::create_appointment(db, owner.id).await?;

    let service = AppointmentService::new(db);
    let result = service
        .admin_accept(&Caller::from_entity(&owner), appointment.id)
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    let repo = AppointmentRepository::new(db);
    let stored = repo.find_by_id(appointment.id).await?.unwrap();
    assert_eq!(stored.status, Status::Waiting);

    Ok(())
}

/// Tests accepting an appointment that is already confirmed.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn admin_accept_rejects_already_accepted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;
    let appointment =
        factory::appointment::create_appointment_with_status(db, owner.id, Status::Accepted)
            .await?;

    let service = AppointmentService::new(db);
    let result = service
        .admin_accept(&Caller::from_entity(&admin), appointment.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests accepting an appointment that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn admin_accept_missing_appointment_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::person::create_admin(db).await?;

    let service = AppointmentService::new(db);
    let result = service.admin_accept(&Caller::from_entity(&admin), 4242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the owner accepting a proposed slot.
///
/// Verifies the status moves to ACCEPTED while both slots stay as they were.
///
/// Expected: Ok
#[tokio::test]
async fn client_accept_keeps_slots_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let appointment = factory::appointment::AppointmentFactory::new(db, owner.id)
        .selected(day(2026, 7, 3), 14)
        .status(Status::Modify)
        .build()
        .await?;

    let service = AppointmentService::new(db);
    let accepted = service
        .client_accept(&Caller::from_entity(&owner), appointment.id)
        .await
        .unwrap();

    assert_eq!(accepted.status, Status::Accepted);
    assert_eq!(accepted.day_selected, Some(day(2026, 7, 3)));
    assert_eq!(accepted.hour_selected, Some(14));
    assert_eq!(accepted.day_preferred, appointment.day_preferred);

    Ok(())
}

/// Tests a non-owner client trying to accept somebody else's appointment.
///
/// Expected: Err(Unauthorized), record unchanged
#[tokio::test]
async fn client_accept_by_non_owner_is_unauthorized() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let other = factory::person::create_person(db).await?;
    let appointment = factory::appointment::create_appointment(db, owner.id).await?;

    let service = AppointmentService::new(db);
    let result = service
        .client_accept(&Caller::from_entity(&other), appointment.id)
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    let repo = AppointmentRepository::new(db);
    let stored = repo.find_by_id(appointment.id).await?.unwrap();
    assert_eq!(stored.status, Status::Waiting);
    assert_eq!(stored.version, appointment.version);

    Ok(())
}
