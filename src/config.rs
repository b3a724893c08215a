// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    /// Shared HS256 secret. When unset, the access policy is disabled and every route is open.
    pub jwt_secret: Option<String>,

    pub rust_log: String,
    pub bind_addr: String,
    pub max_connections: u32,

    /// Optional admin account created at startup if missing.
    pub admin_username: Option<String>,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://quizdesk.db".to_string());

        let jwt_secret = non_empty_var("JWT_SECRET");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_url,
            jwt_secret,
            rust_log,
            bind_addr,
            max_connections,
            admin_username: non_empty_var("ADMIN_USERNAME"),
            admin_email: non_empty_var("ADMIN_EMAIL"),
            admin_password: non_empty_var("ADMIN_PASSWORD"),
        }
    }

    /// Whether requests must carry a valid bearer token.
    pub fn access_policy_enabled(&self) -> bool {
        self.jwt_secret.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
