//! Runtime configuration for the registration server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Recipient of every registration notification.
    pub admin_email: String,
    /// SMTP relay host (STARTTLS).
    pub smtp_host: String,
    /// SMTP username; doubles as the From address of outbound mail.
    pub smtp_user: String,
    pub smtp_pass: String,
    /// Media-host unsigned upload endpoint.
    pub media_upload_url: String,
    /// Upload preset forwarded with every media upload.
    pub media_upload_preset: String,
}

impl Settings {
    fn from_env() -> Self {
        let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".into());
        let smtp_user = env::var("SMTP_USER").expect("SMTP_USER must be set");
        let smtp_pass = env::var("SMTP_PASS").expect("SMTP_PASS must be set");
        let media_upload_url =
            env::var("MEDIA_UPLOAD_URL").expect("MEDIA_UPLOAD_URL must be set");
        let media_upload_preset = env::var("MEDIA_UPLOAD_PRESET").unwrap_or_default();

        Settings {
            admin_email,
            smtp_host,
            smtp_user,
            smtp_pass,
            media_upload_url,
            media_upload_preset,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
