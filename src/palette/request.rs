//! Generation request construction
//!
//! Locked colors are written into the prompt as a hint only. The model is free
//! to ignore them; `apply` enforces them afterwards.

use palette_agentic::ChatRequest;
use serde::{Deserialize, Serialize};

use super::locks::LockedColor;
use super::{Mode, PALETTE_SIZE};
use crate::error::PaletteError;

/// Fixed sampling temperature for palette generation
pub const TEMPERATURE: f32 = 0.7;

const DEFAULT_INDUSTRY: &str = "General web design";

const SYSTEM_PROMPT: &str =
    "You are a senior brand designer. Output only valid JSON. No markdown.";

/// Everything needed for one generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub json_output: bool,
    pub mode: Mode,
    pub locks: Vec<LockedColor>,
}

impl GenerationRequest {
    /// Backend-facing view of this request
    pub fn to_chat_request(&self) -> ChatRequest {
        ChatRequest {
            system_prompt: self.system_prompt.clone(),
            user_prompt: self.user_prompt.clone(),
            temperature: self.temperature,
            json_output: self.json_output,
        }
    }
}

/// Build the generation request.
///
/// Fails with `InvalidInput` when both `style` and `industry` are blank.
pub fn build(
    style: &str,
    industry: &str,
    mode: Mode,
    locks: &[LockedColor],
) -> Result<GenerationRequest, PaletteError> {
    let style = style.trim();
    let industry = industry.trim();

    if style.is_empty() && industry.is_empty() {
        return Err(PaletteError::InvalidInput(
            "Enter a style or pick an industry".to_string(),
        ));
    }

    Ok(GenerationRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        user_prompt: build_user_prompt(style, industry, mode, locks),
        temperature: TEMPERATURE,
        json_output: true,
        mode,
        locks: locks.to_vec(),
    })
}

fn build_user_prompt(style: &str, industry: &str, mode: Mode, locks: &[LockedColor]) -> String {
    let mut prompt = String::new();

    prompt.push_str("Generate a web design color palette.\n\n");
    prompt.push_str("Return ONLY valid JSON in this format:\n");
    prompt.push_str(
        r#"{
  "palette_name": string,
  "description": string,
  "mode": string,
  "colors": [
    { "name": string, "hex": string }
  ]
}
"#,
    );
    prompt.push('\n');

    prompt.push_str("Requirements:\n");
    prompt.push_str(&format!("- Exactly {} colors\n", PALETTE_SIZE));
    prompt.push_str("- Valid uppercase hex codes (#RRGGBB)\n");
    prompt.push_str("- Balanced UI palette\n");
    prompt.push_str(&format!("- Mode: {}\n", mode));
    if !style.is_empty() {
        prompt.push_str(&format!("- Style: {}\n", style));
    }
    let industry = if industry.is_empty() {
        DEFAULT_INDUSTRY
    } else {
        industry
    };
    prompt.push_str(&format!("- Industry context: {}\n", industry));

    if !locks.is_empty() {
        prompt.push_str("\nLocked colors (keep these exact hex values at these positions):\n");
        for lock in locks {
            let name = lock
                .name
                .as_ref()
                .map(|n| format!(" (\"{}\")", n))
                .unwrap_or_default();
            prompt.push_str(&format!(
                "- colors[{}] must be {}{}\n",
                lock.index, lock.hex, name
            ));
        }
        prompt.push_str("Choose the remaining colors to harmonize with the locked ones.\n");
    }

    prompt
}
