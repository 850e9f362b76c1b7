use super::*;

/// Tests an admin canceling an appointment.
///
/// Expected: Ok with status CANCELED
#[tokio::test]
async fn admin_cancel_sets_canceled() -> Result<(), DbErr> {
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
    let canceled = service
        .admin_cancel(&Caller::from_entity(&admin), appointment.id)
        .await
        .unwrap();

    assert_eq!(canceled.status, Status::Canceled);

    Ok(())
}

/// Tests that a client caller cannot run the admin cancel.
///
/// Expected: Err(Unauthorized)
#[tokio::test]
async fn admin_cancel_requires_admin_role() -> Result<(), DbErr> {
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
        .admin_cancel(&Caller::from_entity(&owner), appointment.id)
        .await;

    assert!(matches!(result, Err(AppError::Unauthorized(_))));

    Ok(())
}

/// Tests that no transition moves a canceled appointment.
///
/// Every lifecycle operation against a CANCELED record fails and the record
/// stays CANCELED.
///
/// Expected: Err(BadRequest) for each operation
#[tokio::test]
async fn canceled_is_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let admin = factory::person::create_admin(db).await?;
    let appointment =
        factory::appointment::create_appointment_with_status(db, owner.id, Status::Canceled)
            .await?;

    let owner_caller = Caller::from_entity(&owner);
    let admin_caller = Caller::from_entity(&admin);
    let slot = Slot {
        day: day(2026, 9, 1),
        hour: 12,
    };

    let service = AppointmentService::new(db);

    let accept = service.admin_accept(&admin_caller, appointment.id).await;
    assert!(matches!(accept, Err(AppError::BadRequest(_))));

    let change = service
        .admin_change(&admin_caller, appointment.id, slot)
        .await;
    assert!(matches!(change, Err(AppError::BadRequest(_))));

    let cancel = service.admin_cancel(&admin_caller, appointment.id).await;
    assert!(matches!(cancel, Err(AppError::BadRequest(_))));

    let confirm = service.client_accept(&owner_caller, appointment.id).await;
    assert!(matches!(confirm, Err(AppError::BadRequest(_))));

    let reschedule = service
        .client_change(&owner_caller, appointment.id, slot)
        .await;
    assert!(matches!(reschedule, Err(AppError::BadRequest(_))));

    let repo = AppointmentRepository::new(db);
    let stored = repo.find_by_id(appointment.id).await?.unwrap();
    assert_eq!(stored.status, Status::Canceled);

    Ok(())
}
