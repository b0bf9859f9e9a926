//! Server configuration
//!
//! Read from environment variables (a `.env` file is loaded by the binaries):
//!   PALETTE_BIND_ADDR — full listen address (default: 0.0.0.0:3000)
//!   PORT              — port only, used when PALETTE_BIND_ADDR is unset
//!   RUST_LOG          — tracing filter (default: info,tona_palette=debug)
//!
//! Backend selection and API keys are read by `palette_agentic`.

const DEFAULT_PORT: u16 = 3000;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,tona_palette=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("PALETTE_BIND_ADDR").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_vars(bind_addr: Option<String>, port: Option<String>) -> Self {
        let bind_addr = bind_addr.unwrap_or_else(|| {
            let port = port
                .and_then(|p| p.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{}", port)
        });
        Self { bind_addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ServerConfig::default().bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_port_only() {
        let config = ServerConfig::from_vars(None, Some("8080".into()));
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = ServerConfig::from_vars(None, Some("eighty".into()));
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_bind_addr_wins() {
        let config = ServerConfig::from_vars(Some("127.0.0.1:4000".into()), Some("8080".into()));
        assert_eq!(config.bind_addr, "127.0.0.1:4000");
    }
}
