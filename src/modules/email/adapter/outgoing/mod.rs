pub mod mock_sender;
pub mod smtp_sender;

pub use mock_sender::MockEmailSender;
pub use smtp_sender::SmtpEmailSender;
