use super::*;

/// Tests deleting an existing appointment.
///
/// Expected: Ok(true), record gone from the database
#[tokio::test]
async fn delete_removes_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::person::create_person(db).await?;
    let appointment = factory::appointment::create_appointment(db, owner.id).await?;

    let repo = AppointmentRepository::new(db);
    let deleted = repo.delete(appointment.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(appointment.id).await?.is_none());

    Ok(())
}

/// Tests deleting an appointment that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_missing_appointment_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppointmentRepository::new(db);
    let deleted = repo.delete(4242).await?;

    assert!(!deleted);

    Ok(())
}
