//! # API REST
//!
//! Preview API for Folio documents.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - the OpenAPI document
//! - REST-specific concerns (JSON serialization, CORS, option parsing)
//!
//! Rendering itself lives in `folio-core`; this crate only turns requests into a
//! [`RenderContext`] and a parsed document.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use contentful::RichText;
use folio_core::{
    ColorMode, DocumentRenderer, FolioResult, RenderContext, RenderMode, ViewportClass,
};
use folio_types::CssColor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};

/// Application state for the REST API server
///
/// The renderer holds no per-request state, so one instance is shared by every handler.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<DocumentRenderer>,
}

impl AppState {
    pub fn new(renderer: DocumentRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body of `POST /render`.
///
/// Every option is a string so that clients get a readable 400 for a bad value instead of a
/// generic deserialisation error.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RenderReq {
    /// Rich-text document with linked entries and assets resolved.
    #[schema(value_type = Object)]
    pub document: serde_json::Value,
    #[serde(default)]
    pub accent_color: Option<String>,
    /// `page` (default) or `teaser`.
    #[serde(default)]
    pub mode: Option<String>,
    /// `desktop` (default) or `mobile`.
    #[serde(default)]
    pub viewport: Option<String>,
    /// `light` (default) or `dark`.
    #[serde(default)]
    pub color_mode: Option<String>,
    /// Instance keys (`data-activate-video`, e.g. `v1#0`) of video cards the user has
    /// activated.
    #[serde(default)]
    pub activated_videos: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RenderRes {
    pub html: String,
    pub diagnostics: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, render),
    components(schemas(HealthRes, RenderReq, RenderRes))
)]
pub struct ApiDoc;

/// Build the preview API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/render", post(render))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn parse_option<T>(value: Option<&str>) -> FolioResult<T>
where
    T: std::str::FromStr + Default,
    folio_core::FolioError: From<T::Err>,
{
    match value {
        Some(v) => Ok(v.parse::<T>()?),
        None => Ok(T::default()),
    }
}

fn render_context(req: &RenderReq) -> FolioResult<RenderContext> {
    let mut ctx = RenderContext::new()
        .with_mode(parse_option::<RenderMode>(req.mode.as_deref())?)
        .with_viewport(parse_option::<ViewportClass>(req.viewport.as_deref())?)
        .with_color_mode(parse_option::<ColorMode>(req.color_mode.as_deref())?)
        .with_activations(req.activated_videos.iter().cloned().collect());
    if let Some(accent) = req.accent_color.as_deref() {
        ctx = ctx.with_accent_color(accent.parse::<CssColor>()?);
    }
    Ok(ctx)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Folio preview API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/render",
    request_body = RenderReq,
    responses(
        (status = 200, description = "Rendered HTML and diagnostics", body = RenderRes),
        (status = 400, description = "Bad request")
    )
)]
/// Render a document to HTML
///
/// # Arguments
/// * `req` - Document plus render options
///
/// # Returns
/// * `Ok(Json<RenderRes>)` - HTML and one human-readable line per diagnostic
/// * `Err((StatusCode, String))` - Bad request
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the document is not a rich-text `document` node, or
/// - an option has an unrecognised value.
#[axum::debug_handler]
async fn render(
    State(state): State<AppState>,
    Json(req): Json<RenderReq>,
) -> Result<Json<RenderRes>, (StatusCode, String)> {
    let ctx = render_context(&req).map_err(|e| {
        tracing::info!("Rejected render options: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let document = RichText::from_value(req.document).map_err(|e| {
        tracing::info!("Rejected render document: {}", e);
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;

    let rendered = state.renderer.render(&document, &ctx);
    Ok(Json(RenderRes {
        html: rendered.to_html(),
        diagnostics: rendered
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect(),
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
