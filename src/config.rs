use std::env;

use chrono::Duration;
use tracing::warn;

// Development fallback; override with JWT_SECRET in any real deployment.
const DEV_JWT_SECRET: &str = "supersecretkeysupersecretkey123456";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub frontend_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        ServerConfig { host, port }
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET not set; using built-in development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(24);

        AuthConfig {
            jwt_secret,
            token_ttl: Duration::hours(ttl_hours),
        }
    }
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let frontend_origin =
            env::var("FRONTEND_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

        CorsConfig { frontend_origin }
    }
}
