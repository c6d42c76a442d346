// ./src/server.rs
//
// Application assembly and the listener. Request flow: business routes and
// bundle routes first, then the static file tree, then the catch-all 404.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::assets;
use crate::config::Config;
use crate::routes;
use crate::views::{ViewError, Views};

/// Directory served verbatim for static assets.
const PUBLIC_DIR: &str = "public";

/// Shared application state: the loaded view engine.
#[derive(Clone)]
pub struct AppState {
    pub views: Arc<Views>,
}

/// Assembles the full application: business routes, bundle routes, static
/// files, and the catch-all 404.
///
/// Split from [`run`] so integration tests can drive the router without a
/// live listener.
pub fn create_app() -> Result<Router, ViewError> {
    let state = AppState {
        views: Arc::new(Views::load()?),
    };

    let static_files = ServeDir::new(PUBLIC_DIR).not_found_service(handle_404.into_service());

    Ok(Router::new()
        .merge(routes::router())
        .route(assets::HELLO_WORLD_JS_PATH, get(assets::serve_hello_world_js))
        .route(
            assets::COMPONENT_TREE_JS_PATH,
            get(assets::serve_component_tree_js),
        )
        .fallback_service(static_files)
        .with_state(state))
}

/// Anything not matched by the routing table or the static tree.
async fn handle_404() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 not found")
}

/// Binds the resolved port and serves until shutdown. Startup failures
/// (template load, port bind) are fatal.
pub async fn run(config: Config) {
    let app = create_app().expect("view templates failed to load");

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listening port");
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, app).await.expect("server error");
}
