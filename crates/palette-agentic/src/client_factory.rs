//! Client Factory
//!
//! Builds the configured `LlmClient` from environment variables.

use anyhow::Result;
use std::sync::Arc;

use crate::anthropic_client::AnthropicClient;
use crate::backend::AgentBackend;
use crate::llm_client::LlmClient;
use crate::openai_client::OpenAiClient;

/// Backend selected by `AGENT_BACKEND`
pub fn current_backend() -> Result<AgentBackend> {
    AgentBackend::from_env()
}

/// Create the client for the backend selected by `AGENT_BACKEND`
pub fn create_llm_client() -> Result<Arc<dyn LlmClient>> {
    create_llm_client_for(current_backend()?)
}

/// Create a client for an explicit backend, reading its API key from the environment
pub fn create_llm_client_for(backend: AgentBackend) -> Result<Arc<dyn LlmClient>> {
    let client: Arc<dyn LlmClient> = match backend {
        AgentBackend::OpenAi => Arc::new(OpenAiClient::from_env()?),
        AgentBackend::Anthropic => Arc::new(AnthropicClient::from_env()?),
    };

    tracing::info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "LLM client created"
    );

    Ok(client)
}
