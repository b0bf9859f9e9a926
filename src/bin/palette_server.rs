//! Palette REST API Server
//!
//! ## Usage
//!
//! ```bash
//! OPENAI_API_KEY=sk-... cargo run --bin palette_server
//!
//! curl -X POST http://localhost:3000/api/palette \
//!   -H "Content-Type: application/json" \
//!   -d '{"style": "Luxury", "industry": "Real Estate", "mode": "dark",
//!        "lockedColors": [{"index": 0, "hex": "#0B0C10", "name": "Ink"}]}'
//!
//! curl http://localhost:3000/api/health
//! ```

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use tona_palette::api::create_palette_router;
use tona_palette::config::{ServerConfig, DEFAULT_LOG_FILTER};
use tona_palette::PaletteGenerator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let generator = Arc::new(PaletteGenerator::from_env()?);

    let app = create_palette_router(generator).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    info!("Starting palette server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
