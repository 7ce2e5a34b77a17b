use anyhow::{Context, Result};

/// Default endpoint for the batched translation provider.
pub const DEFAULT_TRANSLATE_API_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Clone)]
pub struct Config {
    // Translation provider
    pub google_api_key: Option<String>,
    pub translate_api_url: String,
    pub request_timeout_secs: u64,

    // Documents are translated from this language by default
    pub source_language: String,

    // HTTP server
    pub port: u16,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Provider credentials are optional at startup: their absence is
            // surfaced per-request as a misconfiguration error, so the
            // service can boot (and serve health checks) without them.
            google_api_key: std::env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            source_language: std::env::var("SOURCE_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse().context("PORT must be a valid port number"))
                .transpose()?
                .unwrap_or(5000),
            api_key: std::env::var("API_KEY").ok().filter(|v| !v.is_empty()),
        })
    }
}
