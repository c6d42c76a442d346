// tests/server_routes.rs
//
// Drive the assembled router in-process: routing, static files, bundle
// serving, and the greeting API. No live listener is started.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use saluton::create_app;

// ── Helpers ─────────────────────────────────────────────────

fn app() -> Router {
    create_app().expect("templates should load")
}

async fn get(path: &str) -> Response {
    app()
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ════════════════════════════════════════════════════════════
// Catch-all 404
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn unmatched_path_returns_the_fixed_404() {
    let response = get("/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "404 not found");
}

#[tokio::test]
async fn missing_static_file_also_falls_through_to_404() {
    let response = get("/css/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "404 not found");
}

// ════════════════════════════════════════════════════════════
// Home page
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn home_page_renders_the_react_world_message() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("React World"));
    assert!(page.contains("id=\"hello-world\""));
    assert!(page.contains("id=\"component-tree\""));
}

#[tokio::test]
async fn home_page_references_both_hashed_bundles() {
    let page = body_string(get("/").await).await;
    assert!(page.contains("/js/hello_world.js?v="));
    assert!(page.contains("/js/component_tree.js?v="));
}

// ════════════════════════════════════════════════════════════
// Static files
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn static_files_are_served_byte_for_byte() {
    let expected = std::fs::read("public/css/main.css").expect("stylesheet exists");

    let response = get("/css/main.css").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body.as_ref(), expected.as_slice());
}

// ════════════════════════════════════════════════════════════
// Bundle routes
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn bundle_routes_serve_javascript_with_immutable_caching() {
    for path in ["/js/hello_world.js", "/js/component_tree.js"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );

        let js = body_string(response).await;
        assert!(js.contains("sayHello"), "{path} should embed the greeting util");
    }
}

#[tokio::test]
async fn component_tree_bundle_nests_the_greeting_two_levels_deep() {
    let js = body_string(get("/js/component_tree.js").await).await;

    // Greeting input and both container units survive bundling, with the
    // root App wrapping Content.
    assert!(js.contains("React World"));
    let content = js.find("function Content").expect("Content unit present");
    let app_unit = js.find("function App").expect("App unit present");
    assert!(content < app_unit);
    assert!(js.contains("appendChild(Content("));
}

// ════════════════════════════════════════════════════════════
// Greeting API
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn greet_api_round_trips_the_name() {
    let request = Request::post("/api/greet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Axum"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload: serde_json::Value =
        serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(payload["greeting"], "Hello Axum!");
}

#[tokio::test]
async fn greet_form_renders_a_personalized_page() {
    let request = Request::post("/greet")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Tower"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Hello Tower!"));
}

// ════════════════════════════════════════════════════════════
// Body-parser rejections (stack defaults, no custom middleware)
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn malformed_json_body_gets_the_stack_default_rejection() {
    let request = Request::post("/api/greet")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn missing_form_field_gets_the_stack_default_rejection() {
    let request = Request::post("/greet")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("nom=Tower"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());
}
