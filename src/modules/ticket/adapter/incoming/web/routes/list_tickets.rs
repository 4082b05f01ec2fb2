use actix_web::{get, web, Responder};
use serde::Deserialize;
use std::str::FromStr;
use tracing::error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedStaff;
use crate::shared::api::{ApiResponse, PaginationMeta};
use crate::ticket::adapter::incoming::web::dto::TicketDto;
use crate::ticket::application::domain::entities::TicketStatus;
use crate::ticket::application::ports::outgoing::ticket_query::{
    PageRequest, TicketListFilter,
};
use crate::ticket::application::use_cases::list_tickets::ListTicketsError;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListTicketsQuery {
    /// 1-based page number
    pub page: Option<u32>,

    /// Page size, capped server-side
    pub limit: Option<u32>,

    /// Substring match over ticket number, buyer name/email and event name
    pub search: Option<String>,

    /// "active" | "used" | "cancelled"
    pub status: Option<String>,

    pub event_id: Option<Uuid>,
}

/// List tickets
///
/// Paginated ticket listing with optional search and status/event filters.
/// Any authenticated staff role can list.
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "tickets",
    params(ListTicketsQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Page of tickets"),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Missing or invalid token"),
    )
)]
#[get("/api/tickets")]
pub async fn list_tickets_handler(
    _staff: AuthenticatedStaff,
    query: web::Query<ListTicketsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let status = match query.status.as_deref() {
        Some(raw) => match TicketStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e),
        },
        None => None,
    };

    let filter = TicketListFilter {
        search: query.search,
        status,
        event_id: query.event_id,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(1).max(1),
        limit: query.limit.unwrap_or(10),
    };

    match data.list_tickets_use_case.execute(filter, page).await {
        Ok(result) => {
            let pagination = PaginationMeta::new(result.page, result.limit, result.total);
            let tickets: Vec<TicketDto> = result.items.into_iter().map(TicketDto::from).collect();
            ApiResponse::success_with_pagination(tickets, pagination)
        }
        Err(ListTicketsError::QueryError(ref e)) => {
            error!(error = %e, "Ticket listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{access_token, test_token_provider};
    use crate::tests::support::fixtures::ticket_view;
    use crate::ticket::application::ports::outgoing::ticket_query::{PageResult, TicketView};
    use crate::ticket::application::use_cases::list_tickets::IListTicketsUseCase;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockListTwoTickets {
        expected_status: Option<TicketStatus>,
    }

    #[async_trait]
    impl IListTicketsUseCase for MockListTwoTickets {
        async fn execute(
            &self,
            filter: TicketListFilter,
            page: PageRequest,
        ) -> Result<PageResult<TicketView>, ListTicketsError> {
            assert_eq!(filter.status, self.expected_status);
            Ok(PageResult {
                items: vec![
                    ticket_view(TicketStatus::Active),
                    ticket_view(TicketStatus::Used),
                ],
                page: page.page,
                limit: page.limit,
                total: 25,
            })
        }
    }

    async fn call(
        app_state: actix_web::web::Data<crate::AppState>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_tickets_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((
                "Authorization",
                format!("Bearer {}", access_token(UserRole::Scanner)),
            ))
            .to_request();

        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_list_tickets_with_pagination_meta() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tickets(MockListTwoTickets {
                expected_status: None,
            })
            .build();

        let resp = call(app_state, "/api/tickets?page=2&limit=10").await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["meta"]["pagination"]["page"], 2);
        assert_eq!(body["meta"]["pagination"]["total"], 25);
        assert_eq!(body["meta"]["pagination"]["totalPages"], 3);
        assert_eq!(body["meta"]["pagination"]["hasPrev"], true);
    }

    #[actix_web::test]
    async fn test_list_tickets_passes_status_filter() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tickets(MockListTwoTickets {
                expected_status: Some(TicketStatus::Used),
            })
            .build();

        let resp = call(app_state, "/api/tickets?status=used").await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_list_tickets_rejects_unknown_status() {
        let app_state = TestAppStateBuilder::default().build();

        let resp = call(app_state, "/api/tickets?status=refunded").await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_list_tickets_requires_auth() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(test_token_provider()))
                .service(list_tickets_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/tickets").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
