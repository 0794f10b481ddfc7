//! Integration tests for the generic procedure gateway endpoint.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use intranet_axum::bootstrap::{CorsConfig, build_context};
use intranet_axum::routes::create_router;
use intranet_db::{SqlitePool, SqliteProcedureStore, setup_test_database};

async fn test_app() -> Router {
    app_over(setup_test_database().await.unwrap()).await
}

async fn app_over(pool: SqlitePool) -> Router {
    let ctx = build_context(pool).await.unwrap();
    create_router(ctx, &CorsConfig::AllowAll)
}

fn post_call(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/common/call")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn hello_endpoint_returns_title_and_server_date() {
    let app = test_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/common/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(json["title"].as_str().unwrap().contains("Intranet"));
    // YYYY/MM/DD
    assert_eq!(json["serverDate"].as_str().unwrap().len(), 10);
}

#[tokio::test]
async fn ping_dispatches_to_seeded_procedure() {
    let app = test_app().await;
    let response = app.oneshot(post_call(r#"{"FromApi":"ping"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
    assert_eq!(body_string(response).await, r#"["pong"]"#);
}

#[tokio::test]
async fn echo_round_trips_the_envelope_byte_for_byte() {
    let app = test_app().await;
    // Field order and spacing must survive the trip untouched.
    let raw = r#"{ "x": 1,   "FromApi": "Echo", "nested": {"a": [1,2]} }"#;
    let response = app.oneshot(post_call(raw)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, raw);
}

#[tokio::test]
async fn malformed_body_is_rejected_with_400_every_time() {
    let app = test_app().await;

    for _ in 0..2 {
        let response = app.clone().oneshot(post_call("{{{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["title"], "Bad Request");
        assert_eq!(json["status"], 400);
        assert!(json["detail"].as_str().unwrap().contains("Invalid JSON"));
    }
}

#[tokio::test]
async fn non_object_body_is_rejected_with_400() {
    let app = test_app().await;
    let response = app.oneshot(post_call(r#"[1, 2, 3]"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_routing_field_is_rejected_with_400() {
    let app = test_app().await;

    for raw in [r#"{"x":1}"#, r#"{"FromApi":""}"#, r#"{"FromApi":"   "}"#] {
        let response = app.clone().oneshot(post_call(raw)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {raw:?}");

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(json["detail"].as_str().unwrap().contains("FromApi"));
    }
}

#[tokio::test]
async fn unknown_target_yields_400_naming_the_derived_target() {
    let app = test_app().await;
    let response = app.oneshot(post_call(r#"{"FromApi":"FooBar"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["title"], "Invalid API Call");
    assert!(json["detail"].as_str().unwrap().contains("P_FOOBAR"));
}

#[tokio::test]
async fn failing_procedure_yields_500_with_generic_detail() {
    let pool = setup_test_database().await.unwrap();
    // Registered before the command table is built, so dispatch reaches it.
    SqliteProcedureStore::new(pool.clone())
        .define("P_BROKEN", "SELECT FROM")
        .await
        .unwrap();
    let app = app_over(pool).await;

    let response = app.oneshot(post_call(r#"{"FromApi":"broken"}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], 500);
    // Backend internals must not leak into the response.
    assert!(!json["detail"].as_str().unwrap().contains("SELECT"));
}
