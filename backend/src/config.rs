//! Runtime configuration pulled from environment variables.
//!
//! Every integration is optional so the server always comes up: without a
//! database it serves an empty post list, without a generation key the
//! drafting endpoint reports itself unavailable, and so on. Missing values
//! are logged at startup instead of failing the boot.

use std::env;

/// Where the article store lives.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string, e.g. `mongodb://localhost:27017`.
    pub uri: String,
    /// Database name holding the `blog_posts` collection.
    pub database: String,
}

/// Access to the hosted article generation model.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Base URL of the generation API, overridable for local stubs.
    pub api_base: String,
    /// API key passed as a query parameter.
    pub api_key: String,
    /// Model identifier appended to the request path.
    pub model: String,
}

/// Full server configuration assembled by [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: String,
    /// Passphrase guarding the admin endpoints.
    pub admin_passphrase: String,
    pub store: Option<StoreConfig>,
    pub generation: Option<GenerationConfig>,
    /// Webhook that receives contact form submissions.
    pub contact_webhook_url: Option<String>,
}

const DEFAULT_ADMIN_PASSPHRASE: &str = "admin123";
const DEFAULT_MONGODB_DB: &str = "folio";
const DEFAULT_GENERATION_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GENERATION_MODEL: &str = "gemini-3-flash-preview";

impl AppConfig {
    /// Reads the whole configuration from the process environment.
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let admin_passphrase = non_empty_var("ADMIN_PASSPHRASE")
            .unwrap_or_else(|| DEFAULT_ADMIN_PASSPHRASE.to_string());

        let store = non_empty_var("MONGODB_URI").map(|uri| StoreConfig {
            uri,
            database: non_empty_var("MONGODB_DB")
                .unwrap_or_else(|| DEFAULT_MONGODB_DB.to_string()),
        });

        let generation = non_empty_var("GEMINI_API_KEY").map(|api_key| GenerationConfig {
            api_base: non_empty_var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GENERATION_API_BASE.to_string()),
            api_key,
            model: non_empty_var("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GENERATION_MODEL.to_string()),
        });

        let contact_webhook_url = non_empty_var("CONTACT_WEBHOOK_URL");

        Self {
            bind_addr,
            port,
            admin_passphrase,
            store,
            generation,
            contact_webhook_url,
        }
    }
}

/// Reads an environment variable, treating whitespace-only values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
