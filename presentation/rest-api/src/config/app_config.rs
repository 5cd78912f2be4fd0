use super::{
    cors_config, error::ConfigError, firebase_auth_config::FirebaseAuthConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub firebase_auth: FirebaseAuthConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            firebase_auth: FirebaseAuthConfig::from_env()?,
        })
    }
}
