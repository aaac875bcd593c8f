use std::net::TcpListener;

use actix_web::{web, App, HttpResponse, HttpServer};
use bytes::Bytes;
use futures::future::try_join_all;
use url::Url;

use fiesta_server::error::IntakeError;
use fiesta_server::media::MediaUploader;

/// In-process stand-in for the media host: one happy path, one path that
/// only answers with the non-TLS URL, one that rejects, one that answers
/// with an empty body.
fn spawn_fake_host() -> (std::net::SocketAddr, actix_web::dev::ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(|| {
        App::new()
            .route(
                "/upload",
                web::post().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({
                        "secure_url": "https://media.example/hosted.jpg",
                        "url": "http://media.example/hosted.jpg"
                    }))
                }),
            )
            .route(
                "/plain",
                web::post().to(|| async {
                    HttpResponse::Ok().json(serde_json::json!({
                        "url": "http://media.example/plain.jpg"
                    }))
                }),
            )
            .route(
                "/reject",
                web::post().to(|| async { HttpResponse::InternalServerError().finish() }),
            )
            .route(
                "/empty",
                web::post().to(|| async { HttpResponse::Ok().json(serde_json::json!({})) }),
            )
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();

    let handle = server.handle();
    actix_rt::spawn(server);
    (addr, handle)
}

fn uploader_for(addr: std::net::SocketAddr, path: &str) -> MediaUploader {
    let endpoint = Url::parse(&format!("http://{addr}{path}")).unwrap();
    MediaUploader::new(endpoint, "unit-preset".into())
}

#[actix_rt::test]
async fn upload_resolves_the_secure_hosted_url() {
    let (addr, handle) = spawn_fake_host();

    let url = uploader_for(addr, "/upload")
        .upload("team.jpg".into(), Bytes::from_static(b"jpeg bytes"))
        .await
        .unwrap();
    assert_eq!(url, "https://media.example/hosted.jpg");

    handle.stop(true).await;
}

#[actix_rt::test]
async fn upload_falls_back_to_the_plain_url() {
    let (addr, handle) = spawn_fake_host();

    let url = uploader_for(addr, "/plain")
        .upload("team.jpg".into(), Bytes::from_static(b"jpeg bytes"))
        .await
        .unwrap();
    assert_eq!(url, "http://media.example/plain.jpg");

    handle.stop(true).await;
}

#[actix_rt::test]
async fn host_rejection_is_an_upload_error() {
    let (addr, handle) = spawn_fake_host();

    let result = uploader_for(addr, "/reject")
        .upload("team.jpg".into(), Bytes::from_static(b"jpeg bytes"))
        .await;
    assert!(matches!(result, Err(IntakeError::Upload(_))));

    handle.stop(true).await;
}

#[actix_rt::test]
async fn a_response_without_a_url_is_an_upload_error() {
    let (addr, handle) = spawn_fake_host();

    let result = uploader_for(addr, "/empty")
        .upload("team.jpg".into(), Bytes::from_static(b"jpeg bytes"))
        .await;
    assert!(matches!(result, Err(IntakeError::Upload(_))));

    handle.stop(true).await;
}

#[actix_rt::test]
async fn one_rejected_upload_fails_the_whole_batch() {
    let (addr, handle) = spawn_fake_host();

    let good = uploader_for(addr, "/upload");
    let bad = uploader_for(addr, "/reject");

    // the pipeline awaits the batch jointly, so the first failure wins and
    // nothing downstream (persist, notify) runs
    let result = try_join_all(vec![
        good.upload("one.jpg".into(), Bytes::from_static(b"a")),
        bad.upload("two.jpg".into(), Bytes::from_static(b"b")),
    ])
    .await;
    assert!(matches!(result, Err(IntakeError::Upload(_))));

    handle.stop(true).await;
}
