use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::{
    self, ActiveModel, Column, Entity,
};
use crate::ticket::application::domain::entities::{Ticket, TicketStatus};
use crate::ticket::application::ports::outgoing::ticket_repository::{
    NewTicket, TicketRepository, TicketRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TicketRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TicketRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TicketRepository for TicketRepositoryPostgres {
    async fn create(&self, ticket: NewTicket) -> Result<Ticket, TicketRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            ticket_number: Set(ticket.ticket_number),
            event_id: Set(ticket.event_id),
            buyer_name: Set(ticket.buyer_name),
            buyer_email: Set(ticket.buyer_email),
            buyer_phone: Set(ticket.buyer_phone),
            price: Set(ticket.price),
            qr_code: Set(ticket.qr_code),
            status: Set(TicketStatus::Active.as_str().to_string()),
            used_at: Set(None),
            created_by: Set(ticket.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_insert_error)?;

        model_to_ticket(result)
    }

    async fn transition_status(
        &self,
        ticket_id: Uuid,
        from: TicketStatus,
        to: TicketStatus,
        used_at: Option<DateTime<Utc>>,
    ) -> Result<bool, TicketRepositoryError> {
        // Single conditional UPDATE; the status filter is what makes this a
        // compare-and-swap. rows_affected == 0 means another writer moved
        // the ticket out of `from` first.
        let mut update = Entity::update_many()
            .col_expr(Column::Status, Expr::value(to.as_str()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(ticket_id))
            .filter(Column::Status.eq(from.as_str()));

        if let Some(ts) = used_at {
            update = update.col_expr(Column::UsedAt, Expr::value(ts.fixed_offset()));
        }

        let result = update.exec(&*self.db).await.map_err(map_db_err)?;

        Ok(result.rows_affected == 1)
    }

    async fn update_buyer_email(
        &self,
        ticket_id: Uuid,
        buyer_email: &str,
    ) -> Result<(), TicketRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::BuyerEmail, Expr::value(buyer_email))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(ticket_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TicketRepositoryError::TicketNotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_ticket(model: tickets::Model) -> Result<Ticket, TicketRepositoryError> {
    let status = model
        .status
        .parse::<TicketStatus>()
        .map_err(TicketRepositoryError::DatabaseError)?;

    Ok(Ticket {
        id: model.id,
        ticket_number: model.ticket_number,
        event_id: model.event_id,
        buyer_name: model.buyer_name,
        buyer_email: model.buyer_email,
        buyer_phone: model.buyer_phone,
        price: model.price,
        qr_code: model.qr_code,
        status,
        used_at: model.used_at.map(Into::into),
        created_by: model.created_by,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_insert_error(e: DbErr) -> TicketRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        TicketRepositoryError::DuplicateEntry
    } else if msg.contains("foreign key") || msg.contains("23503") {
        TicketRepositoryError::InvalidEventReference
    } else {
        TicketRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> TicketRepositoryError {
    TicketRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
