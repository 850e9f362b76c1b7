use sea_orm::entity::prelude::*;

/// Lifecycle status of an appointment.
///
/// `Waiting` is the initial state of a client request, `Accepted` means an
/// admin confirmed a slot, `Modify` means an admin proposed an alternate slot
/// that awaits the client's response, and `Canceled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "WAITING")]
    Waiting,
    #[sea_orm(string_value = "ACCEPTED")]
    Accepted,
    #[sea_orm(string_value = "MODIFY")]
    Modify,
    #[sea_orm(string_value = "CANCELED")]
    Canceled,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub day_preferred: Date,
    pub hour_preferred: i32,
    pub day_selected: Option<Date>,
    pub hour_selected: Option<i32>,
    pub description: Option<String>,
    pub owner_id: i32,
    pub status: Status,
    /// Optimistic concurrency counter, bumped on every mutation.
    pub version: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::OwnerId",
        to = "super::person::Column::Id"
    )]
    Person,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
