// ./src/assets.rs

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// The plain-script bundle, emitted by the build script.
pub const HELLO_WORLD_JS: &str = include_str!(concat!(env!("OUT_DIR"), "/hello_world.js"));

/// The component-tree bundle, emitted by the build script.
pub const COMPONENT_TREE_JS: &str =
    include_str!(concat!(env!("OUT_DIR"), "/component_tree.js"));

/// Canonical URL paths for the emitted bundles, one per logical name.
pub const HELLO_WORLD_JS_PATH: &str = "/js/hello_world.js";
pub const COMPONENT_TREE_JS_PATH: &str = "/js/component_tree.js";

const HELLO_WORLD_HASH: &str = env!("SALUTON_HELLO_WORLD_HASH");
const COMPONENT_TREE_HASH: &str = env!("SALUTON_COMPONENT_TREE_HASH");

/// URL of the plain-script bundle with its content hash appended, for
/// cache-busting references from templates.
pub fn hello_world_url() -> String {
    format!("{HELLO_WORLD_JS_PATH}?v={HELLO_WORLD_HASH}")
}

/// URL of the component-tree bundle with its content hash appended.
pub fn component_tree_url() -> String {
    format!("{COMPONENT_TREE_JS_PATH}?v={COMPONENT_TREE_HASH}")
}

/// Axum handler that serves the plain-script bundle with aggressive caching.
pub async fn serve_hello_world_js() -> Response {
    bundle_response(HELLO_WORLD_JS)
}

/// Axum handler that serves the component-tree bundle with aggressive caching.
pub async fn serve_component_tree_js() -> Response {
    bundle_response(COMPONENT_TREE_JS)
}

// Hashed URLs make the bundles safe to cache for a year.
fn bundle_response(source: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "application/javascript; charset=utf-8",
            ),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        source,
    )
        .into_response()
}
