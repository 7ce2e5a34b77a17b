//! Path-addressed indexing of string leaves in a nested document.
//!
//! A document is any JSON value. Walking it depth-first (mapping keys in
//! insertion order, sequence elements in index order) yields every
//! string-typed leaf together with the path that addresses it. The order of
//! the produced entries is deterministic and depends only on the document's
//! structure, which lets translated values be reassigned later by position
//! alone.
//!
//! The walk emits nothing for numbers, booleans and null, and never emits a
//! path twice.

use serde_json::Value;

use crate::error::TranslateError;

/// Documents nested deeper than this are rejected before traversal recurses
/// out of stack. JSON parsing already bounds depth at the HTTP boundary; this
/// guards direct library callers.
pub const MAX_DOCUMENT_DEPTH: usize = 128;

/// One step into a document: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// The location of a leaf. An empty path addresses the document root.
pub type Path = Vec<PathSegment>;

/// A string leaf together with its location.
///
/// `translatable` is false for strings that are empty after trimming
/// whitespace; those are never submitted to the provider and are carried
/// through to the output unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry {
    pub path: Path,
    pub value: String,
    pub translatable: bool,
}

impl LeafEntry {
    fn new(path: Path, value: &str) -> Self {
        Self {
            path,
            value: value.to_string(),
            translatable: !value.trim().is_empty(),
        }
    }
}

/// Collect every string leaf of `doc` in depth-first document order.
///
/// Pure over its input; the only failure mode is a document nested beyond
/// [`MAX_DOCUMENT_DEPTH`], which is rejected as a validation error.
pub fn collect_string_leaves(doc: &Value) -> Result<Vec<LeafEntry>, TranslateError> {
    let mut entries = Vec::new();
    collect_into(doc, &mut Vec::new(), &mut entries, 0)?;
    Ok(entries)
}

fn collect_into(
    value: &Value,
    path: &mut Path,
    entries: &mut Vec<LeafEntry>,
    depth: usize,
) -> Result<(), TranslateError> {
    if depth > MAX_DOCUMENT_DEPTH {
        return Err(TranslateError::Validation(format!(
            "document nesting exceeds {} levels",
            MAX_DOCUMENT_DEPTH
        )));
    }

    match value {
        Value::String(s) => entries.push(LeafEntry::new(path.clone(), s)),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(idx));
                collect_into(item, path, entries, depth + 1)?;
                path.pop();
            }
        }
        Value::Object(map) => {
            // serde_json is built with preserve_order, so iteration follows
            // key insertion order.
            for (key, item) in map {
                path.push(PathSegment::Key(key.clone()));
                collect_into(item, path, entries, depth + 1)?;
                path.pop();
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }

    Ok(())
}
