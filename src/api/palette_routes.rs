use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::generator::{PaletteGenerator, PaletteInput};
use crate::palette::Palette;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PaletteGenerator>,
}

/// Error payload returned on any failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

struct ApiError(PaletteError);

impl From<PaletteError> for ApiError {
    fn from(err: PaletteError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.0.public_message(),
            kind: self.0.kind().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn create_palette_router(generator: Arc<PaletteGenerator>) -> Router {
    Router::new()
        .route("/api/palette", post(generate_palette))
        .route("/api/health", get(health_check))
        .with_state(AppState { generator })
}

async fn generate_palette(
    State(state): State<AppState>,
    body: Result<Json<PaletteInput>, JsonRejection>,
) -> Result<Json<Palette>, ApiError> {
    let Json(input) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected palette request body");
        PaletteError::InvalidInput(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let palette = state.generator.generate(&input).await?;
    Ok(Json(palette))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "provider": state.generator.provider_name(),
        "model": state.generator.model_name(),
    }))
}
