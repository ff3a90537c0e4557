use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::app::Result;
use crate::config::EmailConfig;
use crate::mailer::Mailer;

pub struct SmtpMailer {
    config: EmailConfig,
}

impl SmtpMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let smtp = &self.config.smtp;

        let builder = if smtp.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
        };

        let credentials = Credentials::new(smtp.username.clone(), smtp.password.clone());

        Ok(builder.port(smtp.port).credentials(credentials).build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, subject: &str, html_body: &str, text_body: &str) -> Result<()> {
        let from: Mailbox = self.config.sender().parse()?;

        let mut builder = Message::builder().from(from).subject(subject);
        for recipient in &self.config.to {
            builder = builder.to(recipient.parse()?);
        }

        let message = builder.multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_body.to_string()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
        )?;

        self.transport()?.send(message).await?;

        tracing::info!(
            recipients = self.config.to.len(),
            subject,
            "digest sent"
        );

        Ok(())
    }
}
