use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use snip_core::{Application, TenantRegistry};
use snip_engine::{RandomGenerator, ShortenerService};
use snip_gateway::{App, AppState};
use snip_store::InMemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

fn demo_app() -> Application {
    Application {
        id: "demo".to_string(),
        key: "abc".to_string(),
        url: "https://s.example.com".to_string(),
        name: None,
        characters: "ABCDEFGHJKLMNPQRSTUVWXYZ".to_string(),
        max_length: 5,
    }
}

fn test_router() -> Router {
    let shortener = Arc::new(ShortenerService::new(
        InMemoryStore::new(),
        RandomGenerator::new(),
    ));
    let registry = TenantRegistry::new(vec![demo_app()]);
    App::router(AppState::new(shortener, registry))
}

async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn shorten_answers_with_the_short_url() {
    let router = test_router();

    let response = get(
        &router,
        "/shorten/demo?api=abc&uri=https%3A%2F%2Flong.example%2Fx",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_string(response).await;
    assert!(body.starts_with("https://s.example.com/"));
    assert_eq!(body.len(), "https://s.example.com/".len() + 5);
}

#[tokio::test]
async fn shorten_twice_returns_the_same_short_url() {
    let router = test_router();
    let uri = "/shorten/demo?api=abc&uri=https%3A%2F%2Flong.example%2Fx";

    let first = body_string(get(&router, uri).await).await;
    let second = body_string(get(&router, uri).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn shorten_with_wrong_key_is_rejected() {
    let router = test_router();

    let response = get(
        &router,
        "/shorten/demo?api=wrong&uri=https%3A%2F%2Flong.example%2Fx",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "API key not found!"
    );
}

#[tokio::test]
async fn shorten_under_unknown_application_is_rejected() {
    let router = test_router();

    // A valid key does not help when the tenant id does not match.
    let response = get(
        &router,
        "/shorten/other?api=abc&uri=https%3A%2F%2Flong.example%2Fx",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "API key not found!"
    );
}

#[tokio::test]
async fn shorten_without_uri_is_rejected() {
    let router = test_router();

    let response = get(&router, "/shorten/demo?api=abc").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Please provide an uri= GET parameter!"
    );
}

#[tokio::test]
async fn shorten_with_empty_uri_is_rejected() {
    let router = test_router();

    let response = get(&router, "/shorten/demo?api=abc&uri=").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Please provide an uri= GET parameter!"
    );
}

#[tokio::test]
async fn shorten_without_api_key_is_rejected() {
    let router = test_router();

    let response = get(&router, "/shorten/demo?uri=https%3A%2F%2Flong.example%2Fx").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "API key not found!"
    );
}

#[tokio::test]
async fn resolve_redirects_to_the_original_uri() {
    let router = test_router();

    let short_url = body_string(
        get(
            &router,
            "/shorten/demo?api=abc&uri=https%3A%2F%2Flong.example%2Fx",
        )
        .await,
    )
    .await;
    let code = short_url.rsplit('/').next().unwrap();

    let response = get(&router, &format!("/s/demo/{code}")).await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://long.example/x"
    );
}

#[tokio::test]
async fn resolve_accepts_any_method() {
    let router = test_router();

    let short_url = body_string(
        get(
            &router,
            "/shorten/demo?api=abc&uri=https%3A%2F%2Flong.example%2Fx",
        )
        .await,
    )
    .await;
    let code = short_url.rsplit('/').next().unwrap();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/s/demo/{code}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
}

#[tokio::test]
async fn resolve_unknown_code_is_404() {
    let router = test_router();

    let response = get(&router, "/s/demo/doesnotexist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Short code not found!"
    );
}

#[tokio::test]
async fn resolve_under_unknown_application_is_rejected() {
    let router = test_router();

    let response = get(&router, "/s/other/whatever").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        "Application identifier not found!"
    );
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let router = test_router();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/shorten/demo")
                .header(header::ORIGIN, "https://caller.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let router = test_router();

    let response = get(&router, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}
