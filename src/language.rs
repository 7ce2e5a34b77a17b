//! Language tag handling.
//!
//! The service does not keep a registry of supported languages: any
//! well-formed BCP-47-shaped tag is accepted and passed to the provider,
//! which is the authority on what it can translate into. Validation here
//! only rejects tags that are structurally malformed, before a provider
//! exchange is ever attempted.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::TranslateError;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// A structurally validated language tag (e.g. `"en"`, `"fr"`, `"zh-CN"`).
///
/// The tag is stored as given by the caller; comparisons are
/// case-insensitive since BCP-47 tags are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Parse a language tag from a caller-supplied string.
    ///
    /// # Returns
    /// * `Ok(LanguageTag)` if the tag is a primary subtag of 2-3 letters,
    ///   optionally followed by dash-separated subtags of 2-8 characters
    /// * `Err(TranslateError::Validation)` otherwise
    pub fn parse(code: &str) -> Result<LanguageTag, TranslateError> {
        let regex = TAG_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap()
        });

        if regex.is_match(code) {
            Ok(LanguageTag(code.to_string()))
        } else {
            Err(TranslateError::Validation(format!(
                "invalid target language tag: '{}'",
                code
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive tag comparison, used for the identity short-circuit
    /// against the configured source language.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
