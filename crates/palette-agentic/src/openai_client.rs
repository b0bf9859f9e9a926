//! OpenAI Client
//!
//! LLM client implementation for the OpenAI chat completions API.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::llm_client::{ChatRequest, LlmClient};

/// Default OpenAI model
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API base, overridable with `OPENAI_BASE_URL`
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI API client
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new OpenAI client with the given API key
    pub fn new(api_key: String) -> Self {
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
            base_url,
        }
    }

    /// Create with a specific model
    pub fn with_model(api_key: String, model: &str) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model: model.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow!("OPENAI_API_KEY environment variable not set"))?;
        Ok(Self::new(api_key))
    }

    fn request_body(&self, request: &ChatRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": &self.model,
            "messages": [
                {"role": "system", "content": &request.system_prompt},
                {"role": "user", "content": &request.user_prompt}
            ],
            "temperature": request.temperature
        });

        if request.json_output {
            body["response_format"] = serde_json::json!({"type": "json_object"});
        }

        body
    }

    /// Internal API call implementation
    async fn call_api(&self, request: &ChatRequest) -> Result<String> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("OpenAI API error {}: {}", status, body));
        }

        // Content may be null when the model refuses
        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
        }

        let api_response: ApiResponse = response.json().await?;
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("OpenAI returned no choices"))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_json(&self, request: &ChatRequest) -> Result<String> {
        tracing::debug!(model = %self.model, "Calling OpenAI chat completions");
        self.call_api(request).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(json_output: bool) -> ChatRequest {
        ChatRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            temperature: 0.7,
            json_output,
        }
    }

    #[test]
    fn test_with_model() {
        let client = OpenAiClient::with_model("test-key".to_string(), "gpt-4o");
        assert_eq!(client.model_name(), "gpt-4o");
        assert_eq!(client.provider_name(), "OpenAI");
    }

    #[test]
    fn test_json_mode_sets_response_format() {
        let client = OpenAiClient::with_model("test-key".to_string(), DEFAULT_MODEL);
        let body = client.request_body(&sample_request(true));
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["model"], DEFAULT_MODEL);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
    }

    #[test]
    fn test_plain_mode_has_no_response_format() {
        let client = OpenAiClient::with_model("test-key".to_string(), DEFAULT_MODEL);
        let body = client.request_body(&sample_request(false));
        assert!(body.get("response_format").is_none());
    }
}
