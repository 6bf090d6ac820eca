//! URL placeholder extraction and parity checks.

use regex::Regex;
use std::sync::OnceLock;

use crate::translation::error::{TranslationError, TranslationResult};

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Extract `{...}` tokens from a URL pattern, in order of appearance.
pub fn extract_placeholders(url: &str) -> Vec<&str> {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{.*?\}").unwrap());

    regex.find_iter(url).map(|m| m.as_str()).collect()
}

/// Check that `translated` exposes exactly the placeholders of `original`, in order.
pub fn validate_placeholders(original: &str, translated: &str) -> TranslationResult<()> {
    if extract_placeholders(original) == extract_placeholders(translated) {
        Ok(())
    } else {
        Err(TranslationError::PlaceholderMismatch {
            translated: translated.to_string(),
            original: original.to_string(),
        })
    }
}
