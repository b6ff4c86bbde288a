use std::env;

use anyhow::Context;

use super::env_flag;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Install the CORS middleware (SERVER_ALLOW_CORS, default: false)
    pub allow_cors: bool,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP (default: "127.0.0.1")
    /// - SERVICE_PORT (default: 8080)
    /// - SERVER_ALLOW_CORS (default: false)
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("SERVICE_IP").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("SERVICE_PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            allow_cors: env_flag("SERVER_ALLOW_CORS", false),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("SERVICE_PORT has an invalid value: {raw}"))
}
