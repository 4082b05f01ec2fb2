use async_trait::async_trait;

use crate::ticket::application::ports::outgoing::ticket_query::SalesStats;
use crate::ticket::application::ports::outgoing::{TicketQuery, TicketQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SalesStatsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ISalesStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<SalesStats, SalesStatsError>;
}

#[derive(Clone)]
pub struct SalesStatsUseCase<Q>
where
    Q: TicketQuery,
{
    query: Q,
}

impl<Q> SalesStatsUseCase<Q>
where
    Q: TicketQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISalesStatsUseCase for SalesStatsUseCase<Q>
where
    Q: TicketQuery,
{
    async fn execute(&self) -> Result<SalesStats, SalesStatsError> {
        self.query
            .sales_stats()
            .await
            .map_err(|TicketQueryError::DatabaseError(e)| SalesStatsError::QueryError(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::application::ports::outgoing::ticket_query::{
        PageRequest, PageResult, TicketListFilter, TicketView,
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    struct FixedStatsQuery {
        should_fail: bool,
    }

    #[async_trait]
    impl TicketQuery for FixedStatsQuery {
        async fn find_by_id(
            &self,
            _ticket_id: Uuid,
        ) -> Result<Option<TicketView>, TicketQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn find_by_qr_code(
            &self,
            _qr_code: &str,
        ) -> Result<Option<TicketView>, TicketQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn list(
            &self,
            _filter: TicketListFilter,
            _page: PageRequest,
        ) -> Result<PageResult<TicketView>, TicketQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn sales_stats(&self) -> Result<SalesStats, TicketQueryError> {
            if self.should_fail {
                return Err(TicketQueryError::DatabaseError("boom".to_string()));
            }
            Ok(SalesStats {
                total_tickets: 12,
                active_tickets: 7,
                used_tickets: 4,
                total_revenue: Decimal::new(110000, 2),
                todays_sales: 3,
                monthly_revenue: Decimal::new(45000, 2),
                recent_tickets: Vec::new(),
            })
        }
    }

    #[tokio::test]
    async fn test_sales_stats_passthrough() {
        let use_case = SalesStatsUseCase::new(FixedStatsQuery { should_fail: false });

        let stats = use_case.execute().await.unwrap();
        assert_eq!(stats.total_tickets, 12);
        assert_eq!(stats.total_revenue, Decimal::new(110000, 2));
    }

    #[tokio::test]
    async fn test_sales_stats_query_error() {
        let use_case = SalesStatsUseCase::new(FixedStatsQuery { should_fail: true });

        let result = use_case.execute().await;
        assert!(matches!(result, Err(SalesStatsError::QueryError(_))));
    }
}
