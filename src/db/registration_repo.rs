//! Insert-only repositories for the two registration tables.
//!
//! The store is write-once, read-never: no fetch, list, update or delete is
//! exposed anywhere in this service.

use chrono::{DateTime, Utc};
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::db::models::{NewFiestaRegistration, NewStreetRegistration};

/// Insert one Soccer Fiesta registration; the store assigns id + createdAt.
pub async fn create_fiesta(
    db: &PgPool,
    reg: &NewFiestaRegistration,
) -> Result<(Uuid, DateTime<Utc>), sqlx::Error> {
    sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
        r#"
        INSERT INTO fiesta_registrations
            (first_name, last_name, email, phone_number, secondary_phone,
             country, state, age, marital_status, bio)
        VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10)
        RETURNING id, created_at
        "#,
    )
    .bind(&reg.first_name)
    .bind(&reg.last_name)
    .bind(&reg.email)
    .bind(&reg.phone_number)
    .bind(&reg.secondary_phone)
    .bind(&reg.country)
    .bind(&reg.state)
    .bind(reg.age)
    .bind(&reg.marital_status)
    .bind(&reg.bio)
    .fetch_one(db)
    .await
}

/// Insert one Street Soccer registration; the store assigns id + createdAt.
pub async fn create_street(
    db: &PgPool,
    reg: &NewStreetRegistration,
) -> Result<(Uuid, DateTime<Utc>), sqlx::Error> {
    sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
        r#"
        INSERT INTO street_registrations
            (team_name, community, captain_name, email, phone,
             players, additional_info, images)
        VALUES ($1,$2,$3,$4,$5,$6,$7,$8)
        RETURNING id, created_at
        "#,
    )
    .bind(&reg.team_name)
    .bind(&reg.community)
    .bind(&reg.captain_name)
    .bind(&reg.email)
    .bind(&reg.phone)
    .bind(Json(&reg.players))
    .bind(&reg.additional_info)
    .bind(&reg.images)
    .fetch_one(db)
    .await
}
