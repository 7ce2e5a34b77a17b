//! Error taxonomy for the translation pipeline.
//!
//! Every failure a request can hit maps to exactly one of these variants.
//! None of them is retried automatically: each is terminal for the current
//! request, and the HTTP layer turns it into a single structured error
//! response. Provider and configuration detail is logged at the boundary but
//! never embedded in the response body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The caller supplied a missing or invalid document or target language.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The document contains zero non-empty string leaves.
    #[error("document contains no translatable text")]
    NoTranslatableContent,

    /// The provider exchange failed: transport error, non-success status,
    /// malformed payload, or quota/rate-limit rejection.
    #[error("translation provider request failed: {0}")]
    Provider(String),

    /// Provider credentials are absent or rejected.
    #[error("translation service misconfigured: {0}")]
    Configuration(String),

    /// An invariant that holds for well-formed request flows was broken.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TranslateError {
    /// Stable machine-readable code for the HTTP error body.
    pub fn code(&self) -> &'static str {
        match self {
            TranslateError::Validation(_) => "invalid_request",
            TranslateError::NoTranslatableContent => "no_translatable_content",
            TranslateError::Provider(_) => "provider_failure",
            TranslateError::Configuration(_) => "misconfiguration",
            TranslateError::Internal(_) => "internal_error",
        }
    }
}
