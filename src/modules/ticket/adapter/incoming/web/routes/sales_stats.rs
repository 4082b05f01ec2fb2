use actix_web::{get, web, Responder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::auth::adapter::incoming::web::extractors::AdminAccess;
use crate::shared::api::ApiResponse;
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::use_cases::sales_stats::SalesStatsError;
use crate::AppState;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatsDto {
    pub total_tickets: u64,
    pub active_tickets: u64,
    pub used_tickets: u64,

    /// Revenue over active and used tickets; cancelled tickets excluded
    #[schema(example = "12500.00")]
    pub total_revenue: Decimal,

    /// Tickets sold since midnight UTC
    pub todays_sales: u64,

    #[schema(example = "4300.00")]
    pub monthly_revenue: Decimal,

    /// Most recent sales, newest first
    pub recent_tickets: Vec<TicketDto>,
}

/// Sales dashboard statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Aggregated sales statistics"),
        (status = 403, description = "Caller is not an admin"),
    )
)]
#[get("/api/admin/stats")]
pub async fn sales_stats_handler(_admin: AdminAccess, data: web::Data<AppState>) -> impl Responder {
    match data.sales_stats_use_case.execute().await {
        Ok(stats) => ApiResponse::success(SalesStatsDto {
            total_tickets: stats.total_tickets,
            active_tickets: stats.active_tickets,
            used_tickets: stats.used_tickets,
            total_revenue: stats.total_revenue,
            todays_sales: stats.todays_sales,
            monthly_revenue: stats.monthly_revenue,
            recent_tickets: stats
                .recent_tickets
                .into_iter()
                .map(TicketDto::from)
                .collect(),
        }),
        Err(SalesStatsError::QueryError(ref e)) => {
            error!(error = %e, "Sales statistics query failed");
            ApiResponse::internal_error()
        }
    }
}
