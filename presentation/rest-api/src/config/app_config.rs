use poem::middleware::Cors;

use super::{cors_config, database_config::DatabaseSettings, env_flag, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    /// Serve Swagger UI at `/docs` (SWAGGER_DOCS, default: true)
    pub swagger_docs: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            swagger_docs: env_flag("SWAGGER_DOCS", true),
        })
    }
}
