use super::*;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let dir = tempfile::tempdir().unwrap();
    let app = static_routes(dir.path(), dir.path());
    let resp = app.oneshot(get_request("/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn media_files_are_served() {
    let media = tempfile::tempdir().unwrap();
    std::fs::write(media.path().join("intro.mp4"), b"not really a video").unwrap();
    let pkg = tempfile::tempdir().unwrap();

    let app = static_routes(pkg.path(), media.path());
    let resp = app.oneshot(get_request("/media/intro.mp4")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"not really a video");
}

#[tokio::test]
async fn pkg_files_are_served() {
    let pkg = tempfile::tempdir().unwrap();
    std::fs::write(pkg.path().join("playgate.js"), b"export {}").unwrap();
    let media = tempfile::tempdir().unwrap();

    let app = static_routes(pkg.path(), media.path());
    let resp = app.oneshot(get_request("/pkg/playgate.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_media_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = static_routes(dir.path(), dir.path());
    let resp = app.oneshot(get_request("/media/missing.mp4")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
