//! HTTP surface: one intake endpoint per event type plus the health probe.

pub mod fiesta;
pub mod health;
pub mod routes;
pub mod street;

use actix_multipart::form::MultipartFormConfig;
use actix_multipart::MultipartError;
use actix_web::{error::InternalError, web, HttpRequest, HttpResponse};
use serde::Serialize;

/// JSON acknowledgment returned by both intake endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn created() -> Self {
        Ack {
            success: true,
            message: "Registration successful".into(),
        }
    }

    /// One generic failure shape for every pipeline error; callers never
    /// learn which step failed (see `IntakeError`).
    pub fn failure() -> Self {
        Ack {
            success: false,
            message: "Server error".into(),
        }
    }
}

/// Map undecodable JSON bodies onto the same generic failure acknowledgment.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        log::error!("rejected submission payload: {err}");
        InternalError::from_response(
            err,
            HttpResponse::InternalServerError().json(Ack::failure()),
        )
        .into()
    })
}

/// Same policy for multipart submissions; attachments stay in memory.
pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(25 * 1024 * 1024)
        .memory_limit(25 * 1024 * 1024)
        .error_handler(|err: MultipartError, _req: &HttpRequest| {
            log::error!("rejected multipart submission: {err}");
            InternalError::from_response(
                err,
                HttpResponse::InternalServerError().json(Ack::failure()),
            )
            .into()
        })
}
