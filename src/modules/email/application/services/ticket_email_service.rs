use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::email::application::ports::outgoing::EmailSender;
use crate::qr::qr_image_url;
use crate::ticket::application::ports::outgoing::ticket_notifier::{
    TicketNotificationError, TicketNotifier,
};
use crate::ticket::application::ports::outgoing::ticket_query::TicketView;

const EMAIL_QR_SIZE: u32 = 200;

/// Renders and sends the ticket email with the embedded QR code image.
#[derive(Clone)]
pub struct TicketEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for TicketEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl TicketEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn render_subject(ticket: &TicketView) -> String {
        format!("Your ticket for {}", ticket.event_name)
    }

    fn render_body(ticket: &TicketView) -> String {
        let qr_url = qr_image_url(&ticket.qr_code, EMAIL_QR_SIZE);
        format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #4a2c82;">Nebula Tickets</h1>
  <p>Hi {buyer_name},</p>
  <p>Your ticket for <strong>{event_name}</strong> is confirmed. Show the QR code below at the entrance.</p>
  <div style="text-align: center; margin: 24px 0;">
    <img src="{qr_url}" alt="Ticket QR code" width="{size}" height="{size}" />
  </div>
  <table style="width: 100%; border-collapse: collapse;">
    <tr><td style="padding: 4px 0;"><strong>Ticket number</strong></td><td>{ticket_number}</td></tr>
    <tr><td style="padding: 4px 0;"><strong>Event</strong></td><td>{event_name}</td></tr>
    <tr><td style="padding: 4px 0;"><strong>Location</strong></td><td>{event_location}</td></tr>
    <tr><td style="padding: 4px 0;"><strong>Date</strong></td><td>{event_date}</td></tr>
    <tr><td style="padding: 4px 0;"><strong>Price</strong></td><td>{price}</td></tr>
  </table>
  <p style="color: #888; font-size: 12px;">Each QR code admits one entry. Keep this email safe.</p>
</div>"#,
            buyer_name = ticket.buyer_name,
            event_name = ticket.event_name,
            event_location = ticket.event_location,
            event_date = ticket.event_date.format("%Y-%m-%d %H:%M UTC"),
            price = ticket.price,
            ticket_number = ticket.ticket_number,
            qr_url = qr_url,
            size = EMAIL_QR_SIZE,
        )
    }
}

#[async_trait]
impl TicketNotifier for TicketEmailService {
    async fn send_ticket_email(&self, ticket: &TicketView) -> Result<(), TicketNotificationError> {
        let subject = Self::render_subject(ticket);
        let body = Self::render_body(ticket);

        self.sender
            .send_email(&ticket.buyer_email, &subject, &body)
            .await
            .map_err(TicketNotificationError::EmailSendingFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
    use crate::tests::support::fixtures::ticket_view;
    use crate::ticket::application::domain::entities::TicketStatus;

    #[tokio::test]
    async fn test_sends_to_buyer_with_embedded_qr_image() {
        let sender = Arc::new(MockEmailSender::new());
        let service = TicketEmailService::new(sender.clone());
        let ticket = ticket_view(TicketStatus::Active);

        service.send_ticket_email(&ticket).await.unwrap();

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "jane@example.com");
        assert_eq!(subject, "Your ticket for Concert A");
        assert!(body.contains("NBL-12345678ABCD"));
        assert!(body.contains(
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=NEBULA-1717286400000-a1b2c3d4e"
        ));
    }

    #[tokio::test]
    async fn test_sender_failure_is_mapped() {
        struct FailingSender;

        #[async_trait]
        impl EmailSender for FailingSender {
            async fn send_email(&self, _: &str, _: &str, _: &str) -> Result<(), String> {
                Err("connection refused".to_string())
            }
        }

        let service = TicketEmailService::new(Arc::new(FailingSender));
        let result = service
            .send_ticket_email(&ticket_view(TicketStatus::Active))
            .await;

        match result {
            Err(TicketNotificationError::EmailSendingFailed(msg)) => {
                assert_eq!(msg, "connection refused")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
