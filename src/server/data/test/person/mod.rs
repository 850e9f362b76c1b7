use crate::server::{
    data::person::PersonRepository,
    model::person::{Role, SignupParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
