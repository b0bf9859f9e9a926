//! Anthropic Client
//!
//! LLM client implementation for the Anthropic Messages API.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::llm_client::{ChatRequest, LlmClient};

/// Default Anthropic model
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

const JSON_ONLY_SUFFIX: &str =
    "IMPORTANT: Respond with valid JSON only. No markdown code blocks, no explanations.";

/// Anthropic API client
#[derive(Clone)]
pub struct AnthropicClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client with the given API key
    pub fn new(api_key: String) -> Self {
        let model = std::env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }

    /// Create with a specific model
    pub fn with_model(api_key: String, model: &str) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model: model.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| anyhow!("ANTHROPIC_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    fn request_body(&self, request: &ChatRequest) -> serde_json::Value {
        // No json_object mode here, rely on prompt engineering
        let system = if request.json_output {
            format!("{}\n\n{}", request.system_prompt, JSON_ONLY_SUFFIX)
        } else {
            request.system_prompt.clone()
        };

        serde_json::json!({
            "model": &self.model,
            "max_tokens": 1024,
            "temperature": request.temperature,
            "system": system,
            "messages": [{"role": "user", "content": &request.user_prompt}]
        })
    }

    /// Internal API call implementation
    async fn call_api(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&self.request_body(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Anthropic API error {}: {}", status, body));
        }

        #[derive(Deserialize)]
        struct ContentBlock {
            text: Option<String>,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            content: Vec<ContentBlock>,
        }

        let api_response: ApiResponse = response.json().await?;
        api_response
            .content
            .into_iter()
            .find_map(|c| c.text)
            .ok_or_else(|| anyhow!("Empty response from Anthropic"))
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn chat_json(&self, request: &ChatRequest) -> Result<String> {
        tracing::debug!(model = %self.model, "Calling Anthropic messages");
        self.call_api(request).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "Anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_model() {
        let client = AnthropicClient::with_model("test-key".to_string(), "claude-3-opus");
        assert_eq!(client.model_name(), "claude-3-opus");
        assert_eq!(client.provider_name(), "Anthropic");
    }

    #[test]
    fn test_json_instruction_appended() {
        let client = AnthropicClient::with_model("test-key".to_string(), DEFAULT_MODEL);
        let request = ChatRequest {
            system_prompt: "You are a designer.".to_string(),
            user_prompt: "Make a palette".to_string(),
            temperature: 0.7,
            json_output: true,
        };
        let body = client.request_body(&request);
        let system = body["system"].as_str().unwrap();
        assert!(system.starts_with("You are a designer."));
        assert!(system.ends_with(JSON_ONLY_SUFFIX));
        assert_eq!(body["messages"][0]["content"], "Make a palette");
    }
}
