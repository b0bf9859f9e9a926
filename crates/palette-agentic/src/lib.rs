//! LLM clients for palette generation
//!
//! This crate only knows how to send one prompt to a text-generation backend
//! and hand back the raw text. It knows nothing about palettes; normalization
//! and lock enforcement live in `tona-palette`.
//!
//! ## Backend Selection
//!
//! Set `AGENT_BACKEND` environment variable:
//! - `openai` (default): OpenAI API
//! - `anthropic`: Anthropic Claude API

pub mod anthropic_client;
pub mod backend;
pub mod client_factory;
pub mod llm_client;
pub mod openai_client;

// Re-exports for convenience
pub use backend::AgentBackend;
pub use client_factory::{create_llm_client, create_llm_client_for};
pub use llm_client::{ChatRequest, LlmClient};
