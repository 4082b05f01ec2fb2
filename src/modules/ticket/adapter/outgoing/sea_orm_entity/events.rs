use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub location: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub event_date: DateTimeWithTimeZone,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub base_price: Decimal,

    #[sea_orm(column_name = "created_by", column_type = "Uuid")]
    pub created_by: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedBy",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Users,

    #[sea_orm(has_many = "crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::Entity")]
    Tickets,
}

impl Related<crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Tickets.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
