use async_trait::async_trait;

/// Outgoing port for delivering ticket emails. Implementations own the
/// transport; callers only see an opaque error string.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<(), String>;
}
