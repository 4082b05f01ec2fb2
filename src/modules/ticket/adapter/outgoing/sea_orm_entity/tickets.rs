use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 32, unique)]
    pub ticket_number: String,

    #[sea_orm(column_name = "event_id", column_type = "Uuid")]
    pub event_id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub buyer_name: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub buyer_email: String,

    #[sea_orm(column_type = "Text", string_len = 50, nullable)]
    pub buyer_phone: Option<String>,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,

    #[sea_orm(column_type = "Text", string_len = 64, unique)]
    pub qr_code: String,

    /// "active" | "used" | "cancelled"
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub used_at: Option<DateTimeWithTimeZone>,

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
        belongs_to = "crate::modules::ticket::adapter::outgoing::sea_orm_entity::events::Entity",
        from = "Column::EventId",
        to = "crate::modules::ticket::adapter::outgoing::sea_orm_entity::events::Column::Id"
    )]
    Events,

    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::CreatedBy",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Users,
}

impl Related<crate::modules::ticket::adapter::outgoing::sea_orm_entity::events::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.buyer_email {
            self.buyer_email = Set(email.trim().to_lowercase());
        }

        if !insert {
            use chrono::Utc;
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
