use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::ticket::application::ports::outgoing::TicketNotifier;
use crate::ticket::application::ports::outgoing::ticket_query::TicketView;
use crate::ticket::application::use_cases::issue_ticket::{
    IIssueTicketUseCase, IssueTicketError, IssueTicketRequest,
};

// ============================================================================
// Issuance Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct TicketIssuanceOutput {
    pub ticket: TicketView,
    pub message: String,
}

// ============================================================================
// Ticket Issuance (Orchestration Layer)
// ============================================================================

/// Creates the ticket, then delivers the email in the background. The sale is
/// committed the moment the ticket row exists; email delivery never blocks or
/// fails the issuance itself.
#[derive(Clone)]
pub struct TicketIssuanceOrchestrator {
    issue_ticket_use_case: Arc<dyn IIssueTicketUseCase + Send + Sync>,
    notifier: Arc<dyn TicketNotifier + Send + Sync>,
}

impl TicketIssuanceOrchestrator {
    pub fn new(
        issue_ticket_use_case: Arc<dyn IIssueTicketUseCase + Send + Sync>,
        notifier: Arc<dyn TicketNotifier + Send + Sync>,
    ) -> Self {
        Self {
            issue_ticket_use_case,
            notifier,
        }
    }

    /// Orchestrates a complete sale:
    /// 1. Issues the ticket (event resolution + insert)
    /// 2. Sends the ticket email as a background task with retries
    pub async fn issue_ticket(
        &self,
        request: IssueTicketRequest,
        created_by: Uuid,
    ) -> Result<TicketIssuanceOutput, IssueTicketError> {
        let ticket = self
            .issue_ticket_use_case
            .execute(request, created_by)
            .await?;

        let notifier = self.notifier.clone();
        let ticket_for_email = ticket.clone();

        tokio::spawn(async move {
            let max_retries = 3;
            for attempt in 1..=max_retries {
                match notifier.send_ticket_email(&ticket_for_email).await {
                    Ok(_) => return,
                    Err(e) if attempt < max_retries => {
                        tracing::warn!(
                            "Email attempt {}/{} failed for ticket {}: {}. Retrying...",
                            attempt,
                            max_retries,
                            ticket_for_email.ticket_number,
                            e
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            "All {} email attempts failed for ticket {}: {}",
                            max_retries,
                            ticket_for_email.ticket_number,
                            e
                        );
                    }
                }
            }
        });

        // Return immediately - don't wait for email
        Ok(TicketIssuanceOutput {
            ticket,
            message: "Ticket created successfully. The QR code has been emailed to the buyer."
                .to_string(),
        })
    }
}
