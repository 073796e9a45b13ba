//! App configuration document models.
//!
//! Each Nimbus client ships a configuration document with three sections:
//! `Store` drives the feature carousel on the paywall screen, `Apps` the
//! cross-promotion list, and `Links` the app/developer/company contacts.
//! Decoding performs no validation: optional values stay absent and derived
//! links are computed lazily from whatever was stored.

mod links;

pub use links::{AppLinks, CompanyLinks, DeveloperLinks, Links};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level app configuration document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfiguration {
    /// Store metadata
    #[serde(rename = "Store")]
    pub store: Store,

    /// Cross-promoted apps
    #[serde(rename = "Apps")]
    pub apps: Vec<AppEntry>,

    /// App, developer and company links
    #[serde(rename = "Links")]
    pub links: Links,
}

impl AppConfiguration {
    /// Decode a configuration document from TOML
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Decode a configuration document from JSON
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }
}

/// Store section: the ordered feature records shown on the paywall screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    #[serde(rename = "Features")]
    pub features: Vec<StoreFeature>,
}

/// A single store feature record.
///
/// Identity is derived from content rather than carried in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreFeature {
    pub image: Option<String>,

    pub title: Option<String>,

    pub subtitle: Option<String>,

    #[serde(rename = "illustrationURL")]
    pub illustration_url: Option<String>,

    #[serde(rename = "screenURL")]
    pub screen_url: Option<String>,

    #[serde(rename = "topScreenAlignment")]
    pub top_screen_alignment: Option<bool>,

    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,
}

impl StoreFeature {
    /// Content-derived identity: image, title and subtitle concatenated
    pub fn id(&self) -> String {
        format!(
            "{}{}{}",
            self.image.as_deref().unwrap_or_default(),
            self.title.as_deref().unwrap_or_default(),
            self.subtitle.as_deref().unwrap_or_default(),
        )
    }
}

/// An entry in the cross-promoted apps list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppEntry {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: Option<String>,

    #[serde(rename = "Title")]
    pub title: Option<String>,

    #[serde(rename = "Subtitle")]
    pub subtitle: Option<String>,

    #[serde(rename = "Path")]
    pub path: Option<String>,
}

/// Errors raised while decoding a configuration document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML configuration parse failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON configuration parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"
        [Store]
        [[Store.Features]]
        image = "Widgets"
        title = "Home screen widgets"
        subtitle = "Glanceable lists"
        screenURL = "https://cdn.nimbus.app/screens/widgets.png"
        topScreenAlignment = true
        backgroundColor = "1B1B1D"

        [[Store.Features]]
        title = "Cloud sync"

        [[Apps]]
        Id = "planner"
        Name = "Nimbus Planner"
        Title = "Plan your week"

        [Links.App]
        Url = "https://nimbus.app"
        TelegramChat = "nimbus_chat"
        AppStoreID = "1459928735"

        [Links.Developer]
        Name = "Nimbus Team"

        [Links.Company]
        Name = "Nimbus Software"
        Url = "https://nimbus.software"
        AppStoreID = "1459928735"
    "#;

    #[test]
    fn test_decode_toml_document() {
        let config = AppConfiguration::from_toml_str(DOCUMENT).unwrap();

        assert_eq!(config.store.features.len(), 2);
        assert_eq!(config.apps.len(), 1);
        assert_eq!(config.apps[0].id, "planner");
        assert_eq!(config.apps[0].path, None);
        assert_eq!(config.links.app.app_store_id, "1459928735");

        let feature = &config.store.features[0];
        assert_eq!(feature.top_screen_alignment, Some(true));
        assert_eq!(feature.background_color.as_deref(), Some("1B1B1D"));
        assert_eq!(config.store.features[1].image, None);
    }

    #[test]
    fn test_feature_identity_concatenates_content() {
        let config = AppConfiguration::from_toml_str(DOCUMENT).unwrap();

        let full = &config.store.features[0];
        assert_eq!(full.id(), "WidgetsHome screen widgetsGlanceable lists");

        let sparse = &config.store.features[1];
        assert_eq!(sparse.id(), "Cloud sync");
    }

    #[test]
    fn test_decode_json_document() {
        let document = r#"{
            "Store": { "Features": [] },
            "Apps": [],
            "Links": {
                "App": { "AppStoreID": "42" },
                "Developer": {},
                "Company": { "AppStoreID": "42" }
            }
        }"#;

        let config = AppConfiguration::from_json_str(document).unwrap();
        assert!(config.store.features.is_empty());
        assert_eq!(config.links.company.app_store_id, "42");
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(AppConfiguration::from_toml_str("Store = 3").is_err());
        assert!(AppConfiguration::from_json_str("{}").is_err());
    }
}
