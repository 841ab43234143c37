use std::env;

const DEFAULT_WEBHOOK_URL: &str =
    "https://discord.com/api/webhooks/000000000000000000/replace-me-in-dotenv";
const DEFAULT_DATABASE_URL: &str = "sqlite://messages.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Runtime settings, read once at startup. Every field has a compiled-in
/// default so the server comes up without a `.env` file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            webhook_url: env::var("WEBHOOK_URL")
                .unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string()),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
