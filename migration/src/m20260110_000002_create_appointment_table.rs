use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260110_000001_create_person_table::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(date(Appointment::DayPreferred))
                    .col(integer(Appointment::HourPreferred))
                    .col(date_null(Appointment::DaySelected))
                    .col(integer_null(Appointment::HourSelected))
                    .col(string_null(Appointment::Description))
                    .col(integer(Appointment::OwnerId))
                    .col(string_len(Appointment::Status, 16))
                    .col(integer(Appointment::Version))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt))
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_owner")
                            .from(Appointment::Table, Appointment::OwnerId)
                            .to(Person::Table, Person::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    DayPreferred,
    HourPreferred,
    DaySelected,
    HourSelected,
    Description,
    OwnerId,
    Status,
    Version,
    CreatedAt,
    UpdatedAt,
}
