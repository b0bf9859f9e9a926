//! Backend Selection
//!
//! `AGENT_BACKEND` picks the provider: `openai`/`gpt` (default) or
//! `anthropic`/`claude`, case-insensitive.

use anyhow::{bail, Result};
use std::str::FromStr;

/// LLM backend provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentBackend {
    #[default]
    OpenAi,
    Anthropic,
}

impl AgentBackend {
    /// Backend from `AGENT_BACKEND`, OpenAI when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var("AGENT_BACKEND") {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for AgentBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" | "gpt" => Ok(Self::OpenAi),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            other => bail!("Unknown AGENT_BACKEND '{}' (expected openai or anthropic)", other),
        }
    }
}

impl std::fmt::Display for AgentBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
        })
    }
}
