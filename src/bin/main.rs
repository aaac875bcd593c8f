use actix_web::{middleware::Logger, web, App, HttpServer};
use fiesta_server::{http, mailer::Mailer, media::MediaUploader, metrics};
use sqlx::postgres::PgPoolOptions;
use std::env;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

    // Postgres pool
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create Postgres pool");

    // Registration tables (append-only; no pre-existing data to migrate)
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    // Outbound collaborators, built once and injected into every handler
    let mailer = Mailer::from_env()?;
    let uploader = MediaUploader::from_env();

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(web::Data::new(mailer.clone()))
            .app_data(web::Data::new(uploader.clone()))
            .app_data(http::json_config())
            .app_data(http::multipart_config())
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    Ok(())
}
