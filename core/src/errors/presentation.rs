//! Shared presentation contract for error values.

use nb_shared::i18n::{TextCatalog, TextKey};
use nb_shared::types::Language;

/// Name of the shared error illustration in the package bundle
pub const GENERIC_ERROR_ASSET: &str = "Error";

/// User-facing text carried by an error value.
///
/// Keys defer resolution to render time; `Custom` carries caller-supplied
/// text verbatim (API-reported failures, ad-hoc custom errors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorText {
    Key(TextKey),
    Custom(String),
}

impl ErrorText {
    /// Resolve to display text against `catalog` in `language`
    pub fn resolve(&self, catalog: &TextCatalog, language: Language) -> String {
        match self {
            ErrorText::Key(key) => catalog.text(*key, language),
            ErrorText::Custom(text) => text.clone(),
        }
    }
}

impl From<TextKey> for ErrorText {
    fn from(key: TextKey) -> Self {
        ErrorText::Key(key)
    }
}

/// Bundle an image asset is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetBundle {
    /// Assets shipped with this package
    Package,
    /// Assets shipped with the host application
    App,
}

/// Reference to a named image asset.
///
/// The asset itself is looked up by the rendering layer; a missing asset
/// degrades rendering there, never here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub name: String,
    pub bundle: AssetBundle,
}

impl ImageAsset {
    /// Asset shipped with this package
    pub fn package(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle: AssetBundle::Package,
        }
    }

    /// Asset shipped with the host application
    pub fn app(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundle: AssetBundle::App,
        }
    }

    /// The shared generic error illustration
    pub fn generic_error() -> Self {
        Self::package(GENERIC_ERROR_ASSET)
    }
}

/// Resolved presentation snapshot handed to rendering code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDisplay {
    pub title: String,
    pub subtitle: Option<String>,
    pub illustration: Option<ImageAsset>,
    pub icon: Option<ImageAsset>,
}

/// Presentation contract every error value implements.
///
/// `title` is always present; subtitle, illustration and icon may be
/// legitimately absent, and rendering code omits absent fields rather than
/// substituting placeholders.
pub trait ErrorPresentation {
    /// Short user-facing description of what failed
    fn title(&self) -> ErrorText;

    /// Optional elaboration or remedy
    fn subtitle(&self) -> Option<ErrorText>;

    /// Full-size illustration shown alongside the message.
    ///
    /// Every current case shares the generic error illustration; a domain
    /// overrides this only if a case ever needs its own artwork.
    fn illustration(&self) -> Option<ImageAsset> {
        Some(ImageAsset::generic_error())
    }

    /// Small glyph variant. Currently unused by every domain.
    fn icon(&self) -> Option<ImageAsset> {
        None
    }

    /// Resolve all four presentation fields at render time
    fn localize(&self, catalog: &TextCatalog, language: Language) -> ErrorDisplay {
        ErrorDisplay {
            title: self.title().resolve(catalog, language),
            subtitle: self.subtitle().map(|text| text.resolve(catalog, language)),
            illustration: self.illustration(),
            icon: self.icon(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_text_resolves_through_catalog() {
        let text = ErrorText::from(TextKey::TryAgainLater);
        let resolved = text.resolve(TextCatalog::builtin(), Language::English);
        assert_eq!(resolved, "Try again later");
    }

    #[test]
    fn test_custom_text_is_returned_verbatim() {
        let text = ErrorText::Custom("Card declined".to_string());
        let resolved = text.resolve(TextCatalog::builtin(), Language::Chinese);
        assert_eq!(resolved, "Card declined");
    }

    #[test]
    fn test_generic_error_asset() {
        let asset = ImageAsset::generic_error();
        assert_eq!(asset.name, "Error");
        assert_eq!(asset.bundle, AssetBundle::Package);
    }
}
