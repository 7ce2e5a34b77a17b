//! Reassembly of a translated document.
//!
//! Rebuilding starts from a deep copy of the input, so the caller's document
//! is never mutated and the output shares no containers with it. Translated
//! values are written back through the paths recorded by
//! [`crate::document::collect_string_leaves`], consuming the provider's
//! response in order: the Nth translatable entry receives the Nth
//! translation. Entries marked non-translatable keep their original string.

use serde_json::Value;

use crate::document::{LeafEntry, PathSegment};
use crate::error::TranslateError;

/// Produce a copy of `doc` with `translations` substituted at the paths of
/// the translatable `entries`.
///
/// `translations` must hold exactly one value per translatable entry, in
/// entry order. Both preconditions hold whenever `entries` was produced from
/// `doc` itself and `translations` came back from the batch exchange;
/// violations surface as internal errors rather than panics.
pub fn rebuild_document(
    doc: &Value,
    entries: &[LeafEntry],
    translations: &[String],
) -> Result<Value, TranslateError> {
    let translatable = entries.iter().filter(|e| e.translatable).count();
    if translatable != translations.len() {
        return Err(TranslateError::Internal(format!(
            "expected {} translations, got {}",
            translatable,
            translations.len()
        )));
    }

    let mut rebuilt = doc.clone();
    for (entry, translated) in entries
        .iter()
        .filter(|e| e.translatable)
        .zip(translations)
    {
        write_at_path(&mut rebuilt, &entry.path, translated.clone())?;
    }

    Ok(rebuilt)
}

/// Descend the container chain of `path` and replace the string leaf at its
/// end. Every segment except the last must resolve to a container of the
/// matching kind.
fn write_at_path(
    root: &mut Value,
    path: &[PathSegment],
    replacement: String,
) -> Result<(), TranslateError> {
    let mut cursor = &mut *root;
    for segment in path {
        cursor = match segment {
            PathSegment::Key(key) => cursor.as_object_mut().and_then(|map| map.get_mut(key)),
            PathSegment::Index(idx) => cursor.as_array_mut().and_then(|items| items.get_mut(*idx)),
        }
        .ok_or_else(|| {
            TranslateError::Internal(format!("path segment {:?} does not resolve", segment))
        })?;
    }

    if !cursor.is_string() {
        return Err(TranslateError::Internal(
            "path does not address a string leaf".to_string(),
        ));
    }

    *cursor = Value::String(replacement);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::collect_string_leaves;
    use proptest::prelude::*;
    use serde_json::json;

    fn translations_for(entries: &[LeafEntry]) -> Vec<String> {
        entries
            .iter()
            .filter(|e| e.translatable)
            .map(|e| format!("[{}]", e.value))
            .collect()
    }

    /// Compare two documents ignoring string leaf content: container kinds,
    /// lengths and key order must match, and non-string leaves must be equal.
    fn same_shape(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Object(x), Value::Object(y)) => {
                x.len() == y.len()
                    && x.iter()
                        .zip(y.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && same_shape(va, vb))
            }
            (Value::Array(x), Value::Array(y)) => {
                x.len() == y.len() && x.iter().zip(y.iter()).all(|(va, vb)| same_shape(va, vb))
            }
            (Value::String(_), Value::String(_)) => true,
            _ => a == b,
        }
    }

    // ==================== Substitution Tests ====================

    #[test]
    fn test_rebuild_replaces_translatable_leaves() {
        let doc = json!({
            "title": "Hello",
            "details": { "author": "John", "tags": ["sample", "test"] }
        });
        let entries = collect_string_leaves(&doc).unwrap();
        let translations = vec![
            "Bonjour".to_string(),
            "Jean".to_string(),
            "échantillon".to_string(),
            "essai".to_string(),
        ];

        let rebuilt = rebuild_document(&doc, &entries, &translations).expect("Should rebuild");

        assert_eq!(
            rebuilt,
            json!({
                "title": "Bonjour",
                "details": { "author": "Jean", "tags": ["échantillon", "essai"] }
            })
        );
    }

    #[test]
    fn test_rebuild_leaves_non_translatable_strings_untouched() {
        let doc = json!({ "title": "Hello", "spacer": "   ", "empty": "" });
        let entries = collect_string_leaves(&doc).unwrap();
        let translations = vec!["Bonjour".to_string()];

        let rebuilt = rebuild_document(&doc, &entries, &translations).expect("Should rebuild");

        assert_eq!(
            rebuilt,
            json!({ "title": "Bonjour", "spacer": "   ", "empty": "" })
        );
    }

    #[test]
    fn test_rebuild_preserves_non_string_leaves() {
        let doc = json!({ "n": 1, "pi": 3.25, "flag": true, "gone": null, "s": "hi" });
        let entries = collect_string_leaves(&doc).unwrap();

        let rebuilt =
            rebuild_document(&doc, &entries, &["salut".to_string()]).expect("Should rebuild");

        assert_eq!(
            rebuilt,
            json!({ "n": 1, "pi": 3.25, "flag": true, "gone": null, "s": "salut" })
        );
    }

    #[test]
    fn test_rebuild_string_root() {
        let doc = json!("Hello");
        let entries = collect_string_leaves(&doc).unwrap();

        let rebuilt =
            rebuild_document(&doc, &entries, &["Bonjour".to_string()]).expect("Should rebuild");

        assert_eq!(rebuilt, json!("Bonjour"));
    }

    #[test]
    fn test_rebuild_does_not_mutate_input() {
        let doc = json!({ "title": "Hello", "tags": ["x"] });
        let original = doc.clone();
        let entries = collect_string_leaves(&doc).unwrap();

        let _ = rebuild_document(
            &doc,
            &entries,
            &["Bonjour".to_string(), "y".to_string()],
        )
        .expect("Should rebuild");

        assert_eq!(doc, original);
    }

    #[test]
    fn test_rebuild_empty_entries_is_identity_copy() {
        let doc = json!({ "count": 42 });
        let rebuilt = rebuild_document(&doc, &[], &[]).expect("Should rebuild");
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn test_rebuild_duplicate_values_assigned_positionally() {
        let doc = json!(["same", "same"]);
        let entries = collect_string_leaves(&doc).unwrap();
        let translations = vec!["first".to_string(), "second".to_string()];

        let rebuilt = rebuild_document(&doc, &entries, &translations).expect("Should rebuild");

        assert_eq!(rebuilt, json!(["first", "second"]));
    }

    // ==================== Invariant Violation Tests ====================

    #[test]
    fn test_rebuild_rejects_translation_count_mismatch() {
        let doc = json!({ "a": "one", "b": "two" });
        let entries = collect_string_leaves(&doc).unwrap();

        let result = rebuild_document(&doc, &entries, &["only one".to_string()]);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "internal_error");
    }

    #[test]
    fn test_rebuild_rejects_foreign_path() {
        let doc = json!({ "a": "one" });
        let other = json!({ "b": "two" });
        let entries = collect_string_leaves(&other).unwrap();

        let result = rebuild_document(&doc, &entries, &["deux".to_string()]);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "internal_error");
    }

    // ==================== Property Tests ====================

    fn arb_document() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            "[ a-zA-Z0-9]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::vec(("[a-z]{1,4}", inner), 0..4).prop_map(|pairs| {
                    let mut map = serde_json::Map::new();
                    for (key, value) in pairs {
                        map.insert(key, value);
                    }
                    Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_rebuild_preserves_shape(doc in arb_document()) {
            let entries = collect_string_leaves(&doc).unwrap();
            let translations = translations_for(&entries);

            let rebuilt = rebuild_document(&doc, &entries, &translations).unwrap();

            prop_assert!(same_shape(&doc, &rebuilt));
        }

        #[test]
        fn prop_rebuild_substitutes_exactly_the_translatable_leaves(doc in arb_document()) {
            let entries = collect_string_leaves(&doc).unwrap();
            let translations = translations_for(&entries);

            let rebuilt = rebuild_document(&doc, &entries, &translations).unwrap();

            let rebuilt_entries = collect_string_leaves(&rebuilt).unwrap();
            prop_assert_eq!(rebuilt_entries.len(), entries.len());
            for (before, after) in entries.iter().zip(rebuilt_entries.iter()) {
                prop_assert_eq!(&before.path, &after.path);
                if before.translatable {
                    prop_assert_eq!(&after.value, &format!("[{}]", before.value));
                } else {
                    prop_assert_eq!(&after.value, &before.value);
                }
            }
        }

        #[test]
        fn prop_rebuild_never_mutates_input(doc in arb_document()) {
            let original = doc.clone();
            let entries = collect_string_leaves(&doc).unwrap();
            let translations = translations_for(&entries);

            let _ = rebuild_document(&doc, &entries, &translations).unwrap();

            prop_assert_eq!(doc, original);
        }
    }
}
