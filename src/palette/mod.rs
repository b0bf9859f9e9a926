//! Palette domain
//!
//! Value types shared by the pipeline stages, plus the stages themselves:
//!
//! ```text
//! raw locks → locks::build ─┐
//!                           ├→ request::build → LlmClient → sanitize → apply → Palette
//! style/industry/mode ──────┘
//! ```

pub mod apply;
pub mod export;
pub mod hex;
pub mod locks;
pub mod request;
pub mod sanitize;

use serde::{Deserialize, Serialize};

/// Number of slots in every palette
pub const PALETTE_SIZE: usize = 5;

/// A named color with a canonical `#RRGGBB` hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

impl Color {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Padding entry for slot `index`
    pub(crate) fn fallback(index: usize) -> Self {
        Self::new(fallback_name(index), hex::FALLBACK_HEX)
    }
}

/// Palette mode. Closed set; see [`Mode::resolve`] for coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// `Dark` only for the exact literal `"dark"`, `Light` for anything else
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Mode::Dark,
            _ => Mode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete palette. Always exactly [`PALETTE_SIZE`] colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub palette_name: String,
    pub description: String,
    pub mode: Mode,
    pub colors: [Color; PALETTE_SIZE],
}

/// Positional label for slot `index` ("Color 1" .. "Color 5")
pub fn fallback_name(index: usize) -> String {
    format!("Color {}", index + 1)
}
