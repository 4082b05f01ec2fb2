use async_trait::async_trait;

use crate::ticket::application::domain::entities::ScanVerdict;
use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::ports::outgoing::{TicketQuery, TicketQueryError};

/// Read-only verdict for a presented QR code. Never mutates ticket state;
/// a scanner UI uses this to preview the ticket before committing the
/// redemption.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScanResult {
    pub ticket: Option<TicketView>,
    pub is_valid: bool,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ScanTicketError {
    #[error("QR data is required")]
    EmptyQrData,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IScanTicketUseCase: Send + Sync {
    async fn execute(&self, qr_data: &str) -> Result<ScanResult, ScanTicketError>;
}

#[derive(Clone)]
pub struct ScanTicketUseCase<Q>
where
    Q: TicketQuery,
{
    query: Q,
}

impl<Q> ScanTicketUseCase<Q>
where
    Q: TicketQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IScanTicketUseCase for ScanTicketUseCase<Q>
where
    Q: TicketQuery,
{
    async fn execute(&self, qr_data: &str) -> Result<ScanResult, ScanTicketError> {
        let qr_data = qr_data.trim();
        if qr_data.is_empty() {
            return Err(ScanTicketError::EmptyQrData);
        }

        let ticket = self
            .query
            .find_by_qr_code(qr_data)
            .await
            .map_err(|TicketQueryError::DatabaseError(e)| ScanTicketError::QueryError(e))?;

        // An unknown code is a normal scan outcome (forged or mistyped),
        // not an error.
        let Some(ticket) = ticket else {
            let verdict = ScanVerdict::unknown_code();
            return Ok(ScanResult {
                ticket: None,
                is_valid: verdict.is_valid,
                message: verdict.message,
            });
        };

        let verdict = ScanVerdict::for_status(ticket.status, ticket.used_at);
        Ok(ScanResult {
            ticket: Some(ticket),
            is_valid: verdict.is_valid,
            message: verdict.message,
        })
    }
}
