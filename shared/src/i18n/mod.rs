//! Localization keys and the text catalog they resolve through.
//!
//! Error values reference [`TextKey`]s; the catalog maps keys to localized
//! text and is injected wherever resolution happens. A default catalog is
//! embedded in the crate for callers that do not ship their own.

mod keys;

pub use keys::TextKey;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use crate::types::Language;

/// Localized text for a single catalog key
#[derive(Debug, Clone, Deserialize)]
pub struct TextEntry {
    pub en: String,
    pub zh: String,
}

/// Catalog of user-facing texts keyed by [`TextKey`] slug
#[derive(Debug, Clone, Deserialize)]
pub struct TextCatalog {
    errors: HashMap<String, TextEntry>,
}

static BUILTIN: Lazy<TextCatalog> = Lazy::new(|| {
    TextCatalog::from_toml_str(include_str!("../../i18n/error_texts.toml"))
        .expect("embedded text catalog is well-formed")
});

impl TextCatalog {
    /// Parse a catalog from a TOML document with an `[errors]` table
    pub fn from_toml_str(document: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(document)?)
    }

    /// The catalog embedded in this crate
    pub fn builtin() -> &'static TextCatalog {
        &BUILTIN
    }

    /// Whether the catalog carries an entry for `key`
    pub fn contains(&self, key: TextKey) -> bool {
        self.errors.contains_key(key.slug())
    }

    /// Resolve `key` in `language`.
    ///
    /// A missing entry degrades to the key's built-in English text; rendering
    /// proceeds either way.
    pub fn text(&self, key: TextKey, language: Language) -> String {
        match self.errors.get(key.slug()) {
            Some(entry) => match language {
                Language::English => entry.en.clone(),
                Language::Chinese => entry.zh.clone(),
            },
            None => {
                tracing::warn!(key = key.slug(), "text catalog miss, using built-in fallback");
                key.fallback().to_string()
            }
        }
    }
}

/// Errors raised while loading a text catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse failed: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_key() {
        let catalog = TextCatalog::builtin();
        for key in TextKey::all() {
            assert!(catalog.contains(*key), "missing catalog entry: {}", key.slug());
        }
    }

    #[test]
    fn test_resolution_per_language() {
        let catalog = TextCatalog::builtin();
        let en = catalog.text(TextKey::TryAgainLater, Language::English);
        let zh = catalog.text(TextKey::TryAgainLater, Language::Chinese);

        assert_eq!(en, "Try again later");
        assert_ne!(en, zh);
        assert!(!zh.is_empty());
    }

    #[test]
    fn test_miss_falls_back_to_builtin_english() {
        let catalog = TextCatalog::from_toml_str("[errors]\n").unwrap();
        assert!(!catalog.contains(TextKey::SomethingWentWrong));
        assert_eq!(
            catalog.text(TextKey::SomethingWentWrong, Language::Chinese),
            TextKey::SomethingWentWrong.fallback()
        );
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(TextCatalog::from_toml_str("errors = 1").is_err());
        assert!(TextCatalog::from_toml_str("[errors]\nkey = { en = \"x\" }").is_err());
    }
}
