pub mod smtp;

pub use smtp::SmtpMailer;

use async_trait::async_trait;

use crate::app::Result;

/// Outbound mail transport.
///
/// One call delivers the digest to every configured recipient. Errors are
/// not retried anywhere; a failed send fails the run.
#[async_trait]
pub trait Mailer {
    async fn send(&self, subject: &str, html_body: &str, text_body: &str) -> Result<()>;
}
