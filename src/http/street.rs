//! Street Soccer registration intake (multipart: fields + image attachments).

use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{post, web, HttpResponse, Responder};
use futures::future::try_join_all;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::NewStreetRegistration;
use crate::db::registration_repo;
use crate::error::IntakeError;
use crate::http::Ack;
use crate::intake::{normalize, render};
use crate::mailer::Mailer;
use crate::media::MediaUploader;
use crate::metrics;

/// Wire format kept compatible with the original form: five numbered player
/// slots plus repeated `images` file parts. Slots are collapsed into one
/// ordered roster at the boundary.
#[derive(Debug, MultipartForm)]
pub struct StreetRequest {
    #[multipart(rename = "teamName")]
    pub team_name: Text<String>,
    pub community: Text<String>,
    #[multipart(rename = "captainName")]
    pub captain_name: Text<String>,
    pub email: Text<String>,
    pub phone: Text<String>,
    pub player1: Option<Text<String>>,
    pub player2: Option<Text<String>>,
    pub player3: Option<Text<String>>,
    pub player4: Option<Text<String>>,
    pub player5: Option<Text<String>>,
    #[multipart(rename = "additionalInfo")]
    pub additional_info: Option<Text<String>>,
    #[multipart(limit = "10MiB")]
    pub images: Vec<Bytes>,
}

/// POST /api/register/street-soccer
#[post("/register/street-soccer")]
pub async fn register_street(
    MultipartForm(form): MultipartForm<StreetRequest>,
    db: web::Data<PgPool>,
    uploader: web::Data<MediaUploader>,
    mailer: web::Data<Mailer>,
) -> impl Responder {
    match run_pipeline(form, &db, &uploader, &mailer).await {
        Ok(id) => {
            log::info!("street soccer registration {id} stored");
            metrics::REGISTRATIONS
                .with_label_values(&["street_soccer"])
                .inc();
            HttpResponse::Created().json(Ack::created())
        }
        Err(err) => {
            log::error!("street soccer registration failed: {err}");
            HttpResponse::InternalServerError().json(Ack::failure())
        }
    }
}

/// normalize → upload attachments → persist → notify.
async fn run_pipeline(
    form: StreetRequest,
    db: &PgPool,
    uploader: &MediaUploader,
    mailer: &Mailer,
) -> Result<Uuid, IntakeError> {
    // 1) normalize the flat fields and collapse the numbered player slots
    let mut reg = NewStreetRegistration {
        team_name: normalize::required("teamName", &form.team_name)?,
        community: normalize::required("community", &form.community)?,
        captain_name: normalize::required("captainName", &form.captain_name)?,
        email: normalize::required("email", &form.email)?,
        phone: normalize::required("phone", &form.phone)?,
        players: normalize::collect_players([
            form.player1.map(Text::into_inner),
            form.player2.map(Text::into_inner),
            form.player3.map(Text::into_inner),
            form.player4.map(Text::into_inner),
            form.player5.map(Text::into_inner),
        ]),
        additional_info: normalize::optional(form.additional_info.map(Text::into_inner)),
        images: Vec::new(),
    };

    // 2) upload all attachments concurrently; one failure fails the batch,
    //    and nothing is persisted in that case
    reg.images = try_join_all(form.images.iter().enumerate().map(|(i, img)| {
        let name = img
            .file_name
            .clone()
            .unwrap_or_else(|| format!("attachment-{}", i + 1));
        uploader.upload(name, img.data.clone())
    }))
    .await?;
    normalize::assign_player_images(&mut reg.players, &reg.images);

    // 3) persist
    let (id, _created_at) = registration_repo::create_street(db, &reg).await?;

    // 4) notify; the persisted record is authoritative even when this fails
    let html = render::street_email(&reg);
    mailer.notify("New Street Soccer Registration", html).await?;

    Ok(id)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register_street);
}
