//! Request orchestration: extract, batch, reinsert.

use serde_json::Value;
use tracing::debug;

use crate::document::collect_string_leaves;
use crate::error::TranslateError;
use crate::language::LanguageTag;
use crate::provider::BatchTranslator;
use crate::rebuild::rebuild_document;

/// Translate every non-empty string leaf of `doc` into `target`.
///
/// When `target` is the source language the document is returned as-is and
/// no provider exchange happens. A document with no translatable leaves is
/// rejected with [`TranslateError::NoTranslatableContent`]. Otherwise the
/// translatable leaf values are submitted as one batch, in document order
/// and without deduplication, and written back at their original paths.
///
/// The input is never mutated; the output is a fresh document. No partial
/// result is ever produced: the rebuilt document only materializes after the
/// full batch response is available.
pub async fn translate_document(
    doc: &Value,
    target: &LanguageTag,
    source_language: &str,
    translator: &BatchTranslator,
) -> Result<Value, TranslateError> {
    if target.matches(source_language) {
        debug!("Target language matches source '{}', skipping translation", source_language);
        return Ok(doc.clone());
    }

    let entries = collect_string_leaves(doc)?;

    let batch: Vec<String> = entries
        .iter()
        .filter(|e| e.translatable)
        .map(|e| e.value.clone())
        .collect();

    if batch.is_empty() {
        return Err(TranslateError::NoTranslatableContent);
    }

    let translations = translator.translate_batch(&batch, target).await?;

    rebuild_document(doc, &entries, &translations)
}
