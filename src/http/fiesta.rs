//! Soccer Fiesta registration intake.

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::NewFiestaRegistration;
use crate::db::registration_repo;
use crate::error::IntakeError;
use crate::http::Ack;
use crate::intake::{normalize, render};
use crate::mailer::Mailer;
use crate::metrics;

/// Flat field set of the fiesta form; unknown fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiestaRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub secondary_phone: Option<String>,
    pub country: String,
    pub state: String,
    pub age: i32,
    pub marital_status: String,
    #[serde(default)]
    pub bio: Option<String>,
}

/// POST /api/register/soccer-fiesta
#[post("/register/soccer-fiesta")]
pub async fn register_fiesta(
    info: web::Json<FiestaRequest>,
    db: web::Data<PgPool>,
    mailer: web::Data<Mailer>,
) -> impl Responder {
    match run_pipeline(info.into_inner(), &db, &mailer).await {
        Ok(id) => {
            log::info!("soccer fiesta registration {id} stored");
            metrics::REGISTRATIONS
                .with_label_values(&["soccer_fiesta"])
                .inc();
            HttpResponse::Created().json(Ack::created())
        }
        Err(err) => {
            log::error!("soccer fiesta registration failed: {err}");
            HttpResponse::InternalServerError().json(Ack::failure())
        }
    }
}

/// normalize → persist → notify; any error aborts the remaining steps.
async fn run_pipeline(
    req: FiestaRequest,
    db: &PgPool,
    mailer: &Mailer,
) -> Result<Uuid, IntakeError> {
    // 1) normalize
    let reg = NewFiestaRegistration {
        first_name: normalize::required("firstName", &req.first_name)?,
        last_name: normalize::required("lastName", &req.last_name)?,
        email: normalize::required("email", &req.email)?,
        phone_number: normalize::required("phoneNumber", &req.phone_number)?,
        secondary_phone: normalize::optional(req.secondary_phone),
        country: normalize::required("country", &req.country)?,
        state: normalize::required("state", &req.state)?,
        age: req.age,
        marital_status: normalize::required("maritalStatus", &req.marital_status)?,
        bio: normalize::optional(req.bio),
    };

    // 2) persist (the store assigns id + createdAt)
    let (id, _created_at) = registration_repo::create_fiesta(db, &reg).await?;

    // 3) notify the administrator; the record stays even if this fails
    let html = render::fiesta_email(&reg);
    mailer.notify("New Soccer Fiesta Registration", html).await?;

    Ok(id)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_fiesta);
}
