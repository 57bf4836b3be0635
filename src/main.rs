use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use folio_core::config::{
    accent_color_from_env_value, date_format_from_env_value, teaser_block_limit_from_env_value,
};
use folio_core::{CoreConfig, DocumentRenderer};

/// Main entry point for the Folio preview server
///
/// Resolves the renderer configuration once and serves the preview REST API.
///
/// # Environment Variables
/// - `FOLIO_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `FOLIO_TEASER_BLOCK_LIMIT`: text blocks shown in teaser mode (default: 2)
/// - `FOLIO_ACCENT_COLOR`: accent colour used when a request sets none
/// - `FOLIO_DATE_FORMAT`: `chrono` format for article publish dates
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr: SocketAddr = std::env::var("FOLIO_REST_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".into())
        .parse()?;

    let config = CoreConfig::new(
        teaser_block_limit_from_env_value(std::env::var("FOLIO_TEASER_BLOCK_LIMIT").ok())?,
        accent_color_from_env_value(std::env::var("FOLIO_ACCENT_COLOR").ok())?,
        date_format_from_env_value(std::env::var("FOLIO_DATE_FORMAT").ok()),
    )?;
    tracing::info!(
        teaser_block_limit = config.teaser_block_limit(),
        "++ Starting Folio preview API on {}",
        rest_addr
    );

    let app = router(AppState::new(DocumentRenderer::new(config)));
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
