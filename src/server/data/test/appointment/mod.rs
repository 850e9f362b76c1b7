use crate::server::{
    data::appointment::AppointmentRepository,
    model::appointment::{AppointmentPatch, CreateAppointmentParams, Slot, Status},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayofmonth).unwrap()
}
