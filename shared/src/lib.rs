//! Shared models and utilities for Nimbus client applications
//!
//! This crate provides the model layer used across all Nimbus apps:
//! - App configuration document models (store, apps, links)
//! - Localization keys and the text catalog they resolve through
//! - Common value types (color, coordinate, language)

pub mod config;
pub mod i18n;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfiguration, AppEntry, AppLinks, CompanyLinks, ConfigError, DeveloperLinks, Links, Store,
    StoreFeature,
};
pub use i18n::{CatalogError, TextCatalog, TextEntry, TextKey};
pub use types::{Color, ColorData, Coordinate, CoordinateData, Language};
