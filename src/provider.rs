//! Batched translation provider client.
//!
//! The provider contract is narrow: an ordered list of source strings goes
//! out, one translated string per input comes back in the same order, all in
//! a single exchange. The wire format is the Google Translate v2 REST
//! surface the service has always spoken: a GET with one repeated `q`
//! parameter per string, plus `target` and `key`.
//!
//! No retry happens here. A failed exchange is terminal for the request, and
//! the bounded wait comes from the timeout configured on the shared
//! `reqwest::Client`. Provider-specific error shapes never leave this
//! module; everything maps onto [`TranslateError`].

use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::TranslateError;
use crate::language::LanguageTag;

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for the batched translation exchange.
///
/// Credentials and the endpoint URL are injected explicitly so tests can run
/// against a mock server with fake credentials.
#[derive(Debug, Clone)]
pub struct BatchTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl BatchTranslator {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            config.translate_api_url.clone(),
            config.google_api_key.clone(),
        )
    }

    /// Translate `texts` into `target` in one exchange.
    ///
    /// Returns the translations in the same order as `texts`, one per input.
    /// An empty input returns an empty output without touching the network
    /// (the orchestrator filters that case out before calling).
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target: &LanguageTag,
    ) -> Result<Vec<String>, TranslateError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let api_key = self.api_key.as_deref().ok_or_else(|| {
            TranslateError::Configuration("GOOGLE_API_KEY is not set".to_string())
        })?;

        debug!(
            "Submitting batch of {} strings for translation to '{}'",
            texts.len(),
            target
        );

        let mut params: Vec<(&str, &str)> =
            texts.iter().map(|text| ("q", text.as_str())).collect();
        params.push(("target", target.as_str()));
        params.push(("key", api_key));

        let response = self
            .client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslateError::Provider("translation request timed out".to_string())
                } else {
                    TranslateError::Provider(format!("failed to reach provider: {}", e))
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TranslateError::Configuration(format!(
                "provider rejected credentials ({})",
                status
            )));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Provider(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let payload: ProviderResponse = response.json().await.map_err(|e| {
            TranslateError::Provider(format!("failed to parse provider response: {}", e))
        })?;

        let translations: Vec<String> = payload
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect();

        if translations.len() != texts.len() {
            return Err(TranslateError::Provider(format!(
                "provider returned {} translations for {} inputs",
                translations.len(),
                texts.len()
            )));
        }

        Ok(translations)
    }
}
