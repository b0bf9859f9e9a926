//! LLM Client Trait
//!
//! Unified interface for the palette generation backends (OpenAI, Anthropic).

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single chat completion request
///
/// Everything a backend needs to issue one call: the two prompts, the
/// sampling temperature, and whether strictly-structured JSON output is wanted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Role/behaviour instructions for the model
    pub system_prompt: String,
    /// The task itself
    pub user_prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Ask the backend for JSON-only output
    /// - OpenAI: `response_format: json_object`
    /// - Anthropic: JSON instruction appended to the system prompt
    pub json_output: bool,
}

/// Unified LLM client interface for both OpenAI and Anthropic
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Call the LLM and return the raw text content of its first answer
    async fn chat_json(&self, request: &ChatRequest) -> Result<String>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
