// ./src/routes.rs
//
// The business routing table. Body decoding rides on axum's built-in
// extractors: `Form` for non-nested urlencoded bodies and `Json` for JSON
// bodies; malformed bodies get the extractors' default rejections.

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::{Deserialize, Serialize};
use tera::Context;

use crate::assets;
use crate::greet::say_hello;
use crate::server::AppState;
use crate::views::ViewError;

// ── Payloads ────────────────────────────────────────────────

/// Request payload shared by both greeting routes.
#[derive(Deserialize)]
pub struct GreetRequest {
    pub name: String,
}

/// Response payload of the JSON greeting route.
#[derive(Serialize)]
pub struct Greeting {
    pub greeting: String,
}

// ── Routing table ───────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/greet", post(greet_form))
        .route("/api/greet", post(greet_api))
}

// ── Handlers ────────────────────────────────────────────────

/// Home page with both demo components mounted.
async fn home(State(state): State<AppState>) -> Result<Html<String>, ViewError> {
    state.views.render("home.html", &home_context("React World"))
}

/// Re-renders the home page with a personalized greeting.
async fn greet_form(
    State(state): State<AppState>,
    Form(req): Form<GreetRequest>,
) -> Result<Html<String>, ViewError> {
    state
        .views
        .render("home.html", &home_context(&say_hello(&req.name)))
}

/// JSON greeting endpoint.
async fn greet_api(Json(req): Json<GreetRequest>) -> Json<Greeting> {
    Json(Greeting {
        greeting: say_hello(&req.name),
    })
}

// Context shared by every home render: the message plus the hashed bundle
// URLs the template's script tags point at.
fn home_context(msg: &str) -> Context {
    let mut ctx = Context::new();
    ctx.insert("msg", msg);
    ctx.insert("hello_world_js", &assets::hello_world_url());
    ctx.insert("component_tree_js", &assets::component_tree_url());
    ctx
}
