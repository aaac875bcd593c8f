//! SMTP notifier for the administrator mailbox.

use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::settings;
use crate::error::IntakeError;

#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    admin: Mailbox,
}

impl Mailer {
    /// Build the shared transport once at start-up.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = settings();
        let creds = Credentials::new(cfg.smtp_user.clone(), cfg.smtp_pass.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.smtp_host)?
            .credentials(creds)
            .build();
        let from: Mailbox = format!("Event Registration Bot <{}>", cfg.smtp_user).parse()?;
        let admin: Mailbox = cfg.admin_email.parse()?;

        Ok(Mailer {
            transport,
            from,
            admin,
        })
    }

    /// Deliver one HTML notification to the administrator recipient.
    /// Awaited within the request, never retried, no delivery tracking.
    pub async fn notify(&self, subject: &str, html: String) -> Result<(), IntakeError> {
        let mail = Message::builder()
            .from(self.from.clone())
            .to(self.admin.clone())
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| IntakeError::Delivery(e.to_string()))?;

        self.transport
            .send(mail)
            .await
            .map_err(|e| IntakeError::Delivery(e.to_string()))?;
        Ok(())
    }
}
