//! Configuration module for the demo client

use serde::Deserialize;
use std::env;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// WebSocket endpoint of the server
    pub ws_endpoint: String,

    /// Logical application channel to attach to
    pub app: String,

    /// Interval between outbound sends in milliseconds
    pub send_interval_ms: u64,

    /// Text payload sent on every tick
    pub send_payload: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            ws_endpoint: env::var("WS_ENDPOINT")
                .unwrap_or_else(|_| "ws://127.0.0.1:6447/ws".to_string()),
            app: env::var("APP_NAME").unwrap_or_else(|_| "hello-world".to_string()),
            send_interval_ms: env::var("SEND_INTERVAL_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .unwrap_or(2000),
            send_payload: env::var("SEND_PAYLOAD").unwrap_or_else(|_| "hello!".to_string()),
        })
    }

    /// Full connection URL with the application channel selector
    pub fn url(&self) -> String {
        format!("{}?app={}", self.ws_endpoint, self.app)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ws_endpoint: "ws://127.0.0.1:6447/ws".to_string(),
            app: "hello-world".to_string(),
            send_interval_ms: 2000,
            send_payload: "hello!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_includes_app_channel() {
        let config = Config::default();
        assert_eq!(config.url(), "ws://127.0.0.1:6447/ws?app=hello-world");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.send_interval_ms, 2000);
        assert_eq!(config.send_payload, "hello!");
    }
}
