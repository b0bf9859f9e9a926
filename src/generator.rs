//! Palette Generator
//!
//! Runs one generation end to end:
//!
//! ```text
//! PaletteInput → locks::build → request::build → LlmClient::chat_json
//!              → parse_response → sanitize → apply → Palette
//! ```
//!
//! Holds no per-request state, so one generator can serve concurrent requests.

use std::sync::Arc;

use palette_agentic::{create_llm_client, LlmClient};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PaletteError;
use crate::palette::locks::{self, LockedColor};
use crate::palette::{apply, request, sanitize, Mode, Palette};

/// Caller input, as it arrives on the wire.
///
/// `mode` and `lockedColors` stay untyped so that odd values are coerced
/// instead of rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteInput {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub mode: Value,
    #[serde(default)]
    pub locked_colors: Value,
}

impl PaletteInput {
    pub fn new(style: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            industry: Some(industry.into()),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Value::String(mode.as_str().to_string());
        self
    }

    pub fn with_locks(mut self, locks: &[LockedColor]) -> Self {
        self.locked_colors = serde_json::to_value(locks).unwrap_or_default();
        self
    }

    pub fn resolved_mode(&self) -> Mode {
        Mode::resolve(self.mode.as_str())
    }

    /// Validated lock set; a non-array `lockedColors` counts as no locks
    pub fn locks(&self) -> Vec<LockedColor> {
        self.locked_colors
            .as_array()
            .map(|raw| locks::build(raw))
            .unwrap_or_default()
    }
}

/// Palette generator using an LLM backend
pub struct PaletteGenerator {
    client: Arc<dyn LlmClient>,
}

impl PaletteGenerator {
    /// Create from environment variables (`AGENT_BACKEND` and the backend's API key)
    pub fn from_env() -> anyhow::Result<Self> {
        let client = create_llm_client()?;
        Ok(Self { client })
    }

    /// Create with a specific LLM client
    pub fn with_client(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Generate a palette, enforcing any locked colors
    pub async fn generate(&self, input: &PaletteInput) -> Result<Palette, PaletteError> {
        let mode = input.resolved_mode();
        let locks = input.locks();

        let request = request::build(
            input.style.as_deref().unwrap_or_default(),
            input.industry.as_deref().unwrap_or_default(),
            mode,
            &locks,
        )?;

        tracing::info!(
            provider = self.client.provider_name(),
            model = self.client.model_name(),
            mode = %mode,
            locks = locks.len(),
            "Generating palette"
        );

        let content = self
            .client
            .chat_json(&request.to_chat_request())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Palette generation call failed");
                PaletteError::UpstreamUnavailable(e)
            })?;

        tracing::debug!(
            "Raw palette response: {}",
            &content[..floor_char_boundary(&content, 1000)]
        );

        let raw = parse_response(&content)?;
        let palette = apply::apply(sanitize::sanitize(&raw, request.mode), &request.locks);

        tracing::info!(palette = %palette.palette_name, "Palette generated");
        Ok(palette)
    }
}

/// Parse model output into a JSON value.
///
/// Output that is already JSON is taken as is. Otherwise markdown fences are
/// stripped and the body retried. Empty output counts as `{}`. Only text that
/// is not JSON at all is an error; shape problems are left to `sanitize`.
pub fn parse_response(content: &str) -> Result<Value, PaletteError> {
    let content = content.trim();
    if content.is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    if let Ok(value) = serde_json::from_str(content) {
        return Ok(value);
    }

    let json = extract_fenced(content);
    if json.is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_str(json).map_err(|e| {
        tracing::warn!(error = %e, "Model output is not JSON");
        PaletteError::UpstreamUnparseable(e.to_string())
    })
}

/// Body of the first ``` fence, minus any language tag (`json`, `JSON`, `jsonc`).
/// Text without a fence is returned trimmed.
fn extract_fenced(text: &str) -> &str {
    let Some((_, after_open)) = text.split_once("```") else {
        return text.trim();
    };

    let tag_len = after_open
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(after_open.len());
    let after_tag = &after_open[tag_len..];
    let tagged = tag_len > 0
        && after_tag.starts_with(|c: char| c.is_whitespace() || c == '{' || c == '[');
    let body = if tagged {
        after_tag
    } else {
        after_open
    };

    body.split("```").next().unwrap_or(body).trim()
}

fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
