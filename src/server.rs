//! HTTP surface for the translation pipeline.
//!
//! A single document route plus a liveness probe. The route accepts the
//! document as the request body and the target language as a `lang` query
//! parameter; a missing `lang` defaults to the configured source language,
//! which short-circuits to an identity response. When an `API_KEY` is
//! configured, `/api` routes additionally require a matching `X-Api-Key`
//! header; the health route stays open for probes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::Config;
use crate::error::TranslateError;
use crate::language::LanguageTag;
use crate::provider::BatchTranslator;
use crate::translate::translate_document;

/// Shared per-process state: configuration plus the provider client built
/// from it. Requests share nothing mutable.
pub struct AppState {
    pub config: Config,
    pub translator: BatchTranslator,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        let translator = BatchTranslator::from_config(client, &config);
        Ok(Self { config, translator })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/translate", post(translate_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .nest("/api", api)
        .route("/healthz", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct TranslateParams {
    lang: Option<String>,
}

/// POST /api/translate?lang=fr
///
/// Body: the JSON document to translate. Response: the translated document,
/// structurally identical to the input.
async fn translate_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, TranslateError> {
    let Json(doc) = body.map_err(|e| {
        TranslateError::Validation(format!("request body must be a JSON document: {}", e))
    })?;

    let lang = params
        .lang
        .unwrap_or_else(|| state.config.source_language.clone());
    let target = LanguageTag::parse(&lang)?;

    let translated = translate_document(
        &doc,
        &target,
        &state.config.source_language,
        &state.translator,
    )
    .await?;

    Ok(Json(translated))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        // Provider and configuration detail is logged here and never sent to
        // the caller.
        let (status, message) = match &self {
            TranslateError::Validation(_) | TranslateError::NoTranslatableContent => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            TranslateError::Provider(detail) => {
                error!("Translation provider failure: {}", detail);
                (StatusCode::BAD_GATEWAY, "Translation failed.".to_string())
            }
            TranslateError::Configuration(detail) => {
                error!("Translation service misconfigured: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Translation service is misconfigured.".to_string(),
                )
            }
            TranslateError::Internal(detail) => {
                error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        };

        let body = json!({ "error": message, "code": self.code() });
        (status, Json(body)).into_response()
    }
}

/// When an API key is configured, require a matching `X-Api-Key` header.
/// Comparison is constant-time to prevent timing attacks.
async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.config.api_key.as_deref() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if constant_time_compare(key, expected) => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid or missing API key", "code": "unauthorized" })),
        )
            .into_response(),
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
