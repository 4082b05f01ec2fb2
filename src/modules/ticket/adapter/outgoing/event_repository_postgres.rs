use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ticket::adapter::outgoing::sea_orm_entity::events::{
    self, ActiveModel, Column, Entity,
};
use crate::ticket::application::domain::entities::Event;
use crate::ticket::application::ports::outgoing::event_repository::{
    EventRepository, EventRepositoryError, NewEvent,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct EventRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EventRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventRepository for EventRepositoryPostgres {
    async fn find_or_create(&self, event: NewEvent) -> Result<Event, EventRepositoryError> {
        let existing = Entity::find()
            .filter(Column::Name.eq(&event.name))
            .filter(Column::Location.eq(&event.location))
            .filter(Column::EventDate.eq(event.event_date.fixed_offset()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(model) = existing {
            return Ok(model_to_event(model));
        }

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(event.name),
            location: Set(event.location),
            event_date: Set(event.event_date.fixed_offset()),
            base_price: Set(event.base_price),
            created_by: Set(event.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_event(result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_event(model: events::Model) -> Event {
    Event {
        id: model.id,
        name: model.name,
        location: model.location,
        event_date: model.event_date.into(),
        base_price: model.base_price,
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> EventRepositoryError {
    EventRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
