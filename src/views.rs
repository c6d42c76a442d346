// ./src/views.rs

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::{Context, Tera};

// ════════════════════════════════════════════════════════════
// 1. Views — the template engine
// ════════════════════════════════════════════════════════════

/// Page templates live under `views/`.
const VIEWS_GLOB: &str = "views/**/*.html";

/// Partials live next to the client component sources, so each component
/// directory carries its own mount-node fragment.
const PARTIALS_GLOB: &str = "client/**/*.html";

/// Tera-backed view engine: pages from the views tree, partials from the
/// component tree.
///
/// ```ignore
/// let views = Views::load()?;
/// let mut ctx = tera::Context::new();
/// ctx.insert("msg", "React World");
/// let page = views.render("home.html", &ctx)?;
/// ```
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Loads every page and partial template. Fails when a template does
    /// not parse or a partial an included page needs is missing.
    pub fn load() -> Result<Self, ViewError> {
        let mut tera = Tera::new(VIEWS_GLOB).map_err(ViewError::Load)?;
        let partials = Tera::new(PARTIALS_GLOB).map_err(ViewError::Load)?;
        tera.extend(&partials).map_err(ViewError::Load)?;
        Ok(Self { tera })
    }

    /// Renders a page template with the given key-value context.
    pub fn render(&self, name: &str, ctx: &Context) -> Result<Html<String>, ViewError> {
        self.tera.render(name, ctx).map(Html).map_err(ViewError::Render)
    }
}

// ════════════════════════════════════════════════════════════
// 2. ViewError — typed engine errors
// ════════════════════════════════════════════════════════════

/// Errors raised by the view engine.
#[derive(Debug)]
pub enum ViewError {
    /// A template tree failed to load or a template failed to parse.
    Load(tera::Error),
    /// A template failed to render.
    Render(tera::Error),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "template load failed: {e}"),
            Self::Render(e) => write!(f, "template render failed: {e}"),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) | Self::Render(e) => Some(e),
        }
    }
}

impl IntoResponse for ViewError {
    // A failed render has no page to show; log it and answer with the
    // stack's plain 500.
    fn into_response(self) -> Response {
        tracing::error!("view rendering failed: {self}");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
