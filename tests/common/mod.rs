//! Shared test helpers: a scripted LLM client.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tona_palette::{ChatRequest, LlmClient};

/// What the mock answers with
pub enum Script {
    Reply(String),
    Fail(String),
}

/// LLM client that returns a fixed answer and records every request
pub struct MockLlmClient {
    script: Script,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockLlmClient {
    pub fn replying(content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(Script::Reply(content.into())))
    }

    pub fn failing(message: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(Script::Fail(message.into())))
    }

    fn new(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn chat_json(&self, request: &ChatRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.script {
            Script::Reply(content) => Ok(content.clone()),
            Script::Fail(message) => Err(anyhow!("{}", message)),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

/// A well-formed five-color answer
pub fn five_color_reply() -> String {
    serde_json::json!({
        "palette_name": "Coastal Calm",
        "description": "Soft blues and sand for a seaside brand.",
        "mode": "dark",
        "colors": [
            {"name": "Harbor Blue", "hex": "#1f4e79"},
            {"name": "Sea Glass", "hex": "#A8D5BA"},
            {"name": "Driftwood", "hex": "#8B7D6B"},
            {"name": "Foam", "hex": "#F1F8F6"},
            {"name": "Deep Tide", "hex": "#0B2545"}
        ]
    })
    .to_string()
}
