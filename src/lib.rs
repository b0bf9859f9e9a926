//! AI color palette generation with locked slots
//!
//! A style and/or industry prompt goes to an LLM; whatever comes back is
//! sanitized into exactly five `#RRGGBB` colors, then any locked slots are
//! overwritten with the caller's pinned colors.
//!
//! ## Architecture
//!
//! ```text
//! PaletteInput → RequestBuilder → LlmClient → ResponseSanitizer → LockApplier → Palette
//! ```
//!
//! LLM backends live in the `palette-agentic` crate.

pub mod config;
pub mod error;
pub mod generator;
pub mod palette;

#[cfg(feature = "server")]
pub mod api;

// Re-exports for convenience
pub use error::PaletteError;
pub use generator::{parse_response, PaletteGenerator, PaletteInput};
pub use palette::locks::{LockSnapshot, LockedColor};
pub use palette::{Color, Mode, Palette, PALETTE_SIZE};
pub use palette_agentic::{ChatRequest, LlmClient};
