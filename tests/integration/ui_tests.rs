//! Integration tests for the client UI route.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use image_squeezer::{create_router, RouterConfig, TranscodeService};

fn ui_request() -> Request<Body> {
    Request::builder().uri("/").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_ui_served_at_root() {
    let router = create_router(TranscodeService::new(), RouterConfig::new().with_tracing(false));

    let response = router.oneshot(ui_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();

    assert!(html.contains(r#"data-upload-path="/upload""#));
    assert!(html.contains(r#"<option value="medium" selected>Medium</option>"#));
    assert!(html.contains("compressed-image.jpg"));
}

#[tokio::test]
async fn test_ui_can_be_disabled() {
    let router = create_router(
        TranscodeService::new(),
        RouterConfig::new().with_tracing(false).with_ui(false),
    );

    let response = router.oneshot(ui_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let router = create_router(TranscodeService::new(), RouterConfig::new().with_tracing(false));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
