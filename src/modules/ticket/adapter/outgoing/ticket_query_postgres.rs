use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::ticket::adapter::outgoing::sea_orm_entity::events;
use crate::modules::ticket::adapter::outgoing::sea_orm_entity::tickets::{self, Column, Entity};
use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::ports::outgoing::ticket_query::{
    PageRequest, PageResult, SalesStats, TicketListFilter, TicketQuery, TicketQueryError,
    TicketView,
};

const RECENT_TICKETS: u64 = 10;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TicketQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TicketQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Joins ticket rows with their events in memory. One extra query per
    /// batch instead of per row.
    async fn attach_events(
        &self,
        rows: Vec<tickets::Model>,
    ) -> Result<Vec<TicketView>, TicketQueryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut event_ids: Vec<Uuid> = rows.iter().map(|t| t.event_id).collect();
        event_ids.sort();
        event_ids.dedup();

        let events_by_id: HashMap<Uuid, events::Model> = events::Entity::find()
            .filter(events::Column::Id.is_in(event_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        rows.into_iter()
            .map(|ticket| {
                let event = events_by_id.get(&ticket.event_id).ok_or_else(|| {
                    TicketQueryError::DatabaseError(format!(
                        "Event {} missing for ticket {}",
                        ticket.event_id, ticket.id
                    ))
                })?;
                model_to_view(ticket, event)
            })
            .collect()
    }

    async fn view_for(
        &self,
        ticket: Option<tickets::Model>,
    ) -> Result<Option<TicketView>, TicketQueryError> {
        let Some(ticket) = ticket else {
            return Ok(None);
        };

        self.attach_events(vec![ticket])
            .await
            .map(|mut views| views.pop())
    }
}

#[async_trait]
impl TicketQuery for TicketQueryPostgres {
    async fn find_by_id(&self, ticket_id: Uuid) -> Result<Option<TicketView>, TicketQueryError> {
        let ticket = Entity::find_by_id(ticket_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.view_for(ticket).await
    }

    async fn find_by_qr_code(
        &self,
        qr_code: &str,
    ) -> Result<Option<TicketView>, TicketQueryError> {
        let ticket = Entity::find()
            .filter(Column::QrCode.eq(qr_code))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.view_for(ticket).await
    }

    async fn list(
        &self,
        filter: TicketListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TicketView>, TicketQueryError> {
        let mut query = Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(event_id) = filter.event_id {
            query = query.filter(Column::EventId.eq(event_id));
        }

        // Search covers event names too; resolve matching event ids first so
        // the main query stays on one table.
        if let Some(ref search) = filter.search {
            let pattern = like_pattern(search);

            let matching_event_ids = events::Entity::find()
                .filter(Expr::col(events::Column::Name).ilike(&pattern))
                .select_only()
                .column(events::Column::Id)
                .into_tuple::<Uuid>()
                .all(&*self.db)
                .await
                .map_err(map_db_err)?;

            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::TicketNumber).ilike(&pattern))
                    .add(Expr::col(Column::BuyerName).ilike(&pattern))
                    .add(Expr::col(Column::BuyerEmail).ilike(&pattern))
                    .add(Column::EventId.is_in(matching_event_ids)),
            );
        }

        query = query.order_by_desc(Column::CreatedAt);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = (page.page.saturating_sub(1) as u64) * page.limit as u64;
        let rows = query
            .offset(offset)
            .limit(page.limit as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = self.attach_events(rows).await?;

        Ok(PageResult {
            items,
            page: page.page,
            limit: page.limit,
            total,
        })
    }

    async fn sales_stats(&self) -> Result<SalesStats, TicketQueryError> {
        let now = Utc::now();

        let total_tickets = Entity::find().count(&*self.db).await.map_err(map_db_err)?;

        let active_tickets = Entity::find()
            .filter(Column::Status.eq(TicketStatus::Active.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let used_tickets = Entity::find()
            .filter(Column::Status.eq(TicketStatus::Used.as_str()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Cancelled tickets never count toward revenue
        let total_revenue = self
            .revenue(Condition::all().add(Column::Status.ne(TicketStatus::Cancelled.as_str())))
            .await?;

        let todays_sales = Entity::find()
            .filter(Column::CreatedAt.gte(day_start(now).fixed_offset()))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let monthly_revenue = self
            .revenue(
                Condition::all()
                    .add(Column::Status.ne(TicketStatus::Cancelled.as_str()))
                    .add(Column::CreatedAt.gte(month_start(now).fixed_offset())),
            )
            .await?;

        let recent_rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(RECENT_TICKETS)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;
        let recent_tickets = self.attach_events(recent_rows).await?;

        Ok(SalesStats {
            total_tickets,
            active_tickets,
            used_tickets,
            total_revenue,
            todays_sales,
            monthly_revenue,
            recent_tickets,
        })
    }
}

impl TicketQueryPostgres {
    async fn revenue(&self, condition: Condition) -> Result<Decimal, TicketQueryError> {
        let sum: Option<Option<Decimal>> = Entity::find()
            .select_only()
            .column_as(Column::Price.sum(), "revenue")
            .filter(condition)
            .into_tuple()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(sum.flatten().unwrap_or(Decimal::ZERO))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_view(
    ticket: tickets::Model,
    event: &events::Model,
) -> Result<TicketView, TicketQueryError> {
    let status = ticket
        .status
        .parse::<TicketStatus>()
        .map_err(TicketQueryError::DatabaseError)?;

    Ok(TicketView {
        id: ticket.id,
        ticket_number: ticket.ticket_number,
        buyer_name: ticket.buyer_name,
        buyer_email: ticket.buyer_email,
        buyer_phone: ticket.buyer_phone,
        price: ticket.price,
        qr_code: ticket.qr_code,
        status,
        used_at: ticket.used_at.map(Into::into),
        created_at: ticket.created_at.into(),
        updated_at: ticket.updated_at.into(),
        event_id: event.id,
        event_name: event.name.clone(),
        event_location: event.location.clone(),
        event_date: event.event_date.into(),
    })
}

fn like_pattern(search: &str) -> String {
    format!("%{}%", search.trim())
}

fn day_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&now.date_naive().and_time(NaiveTime::MIN))
}

fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let first = now.date_naive().with_day(1).unwrap_or(now.date_naive());
    Utc.from_utc_datetime(&first.and_time(NaiveTime::MIN))
}

fn map_db_err(e: DbErr) -> TicketQueryError {
    TicketQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
