//! Application error taxonomy.
//!
//! Each external failure surface gets a closed enumeration of its failure
//! cases; [`AppError`] wraps exactly one of them (or a fully custom record)
//! and implements the shared presentation contract by dispatching to the
//! wrapped value. Every accessor matches all variants without a fallback
//! arm, so adding a domain is a compile error until the dispatch is
//! extended.

mod calendar;
mod cloud_files;
mod cloud_sync;
mod contacts;
mod database;
mod file_storage;
mod health;
mod location;
mod network;
mod notifications;
pub mod presentation;

// Re-export all error types and the presentation contract
pub use calendar::CalendarError;
pub use cloud_files::CloudFilesError;
pub use cloud_sync::CloudSyncError;
pub use contacts::ContactsError;
pub use database::DatabaseError;
pub use file_storage::FileStorageError;
pub use health::HealthError;
pub use location::LocationError;
pub use network::NetworkError;
pub use notifications::NotificationsError;
pub use presentation::{
    AssetBundle, ErrorDisplay, ErrorPresentation, ErrorText, ImageAsset, GENERIC_ERROR_ASSET,
};

use thiserror::Error;

/// Unified application error.
///
/// Exactly one domain error is active per value; `Custom` covers call sites
/// with no matching domain and carries its presentation fields directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    CloudSync(#[from] CloudSyncError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    Contacts(#[from] ContactsError),

    #[error(transparent)]
    Notifications(#[from] NotificationsError),

    #[error(transparent)]
    CloudFiles(#[from] CloudFilesError),

    #[error(transparent)]
    FileStorage(#[from] FileStorageError),

    #[error(transparent)]
    Health(#[from] HealthError),

    #[error("{title}")]
    Custom {
        title: String,
        subtitle: Option<String>,
        illustration: Option<ImageAsset>,
    },
}

impl AppError {
    /// Custom error with a title only
    pub fn custom(title: impl Into<String>) -> Self {
        Self::Custom {
            title: title.into(),
            subtitle: None,
            illustration: None,
        }
    }

    /// Custom error with a title and remedy subtitle
    pub fn custom_with_subtitle(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::Custom {
            title: title.into(),
            subtitle: Some(subtitle.into()),
            illustration: None,
        }
    }
}

impl ErrorPresentation for AppError {
    fn title(&self) -> ErrorText {
        match self {
            Self::Network(error) => error.title(),
            Self::CloudSync(error) => error.title(),
            Self::Location(error) => error.title(),
            Self::Database(error) => error.title(),
            Self::Calendar(error) => error.title(),
            Self::Contacts(error) => error.title(),
            Self::Notifications(error) => error.title(),
            Self::CloudFiles(error) => error.title(),
            Self::FileStorage(error) => error.title(),
            Self::Health(error) => error.title(),
            Self::Custom { title, .. } => ErrorText::Custom(title.clone()),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::Network(error) => error.subtitle(),
            Self::CloudSync(error) => error.subtitle(),
            Self::Location(error) => error.subtitle(),
            Self::Database(error) => error.subtitle(),
            Self::Calendar(error) => error.subtitle(),
            Self::Contacts(error) => error.subtitle(),
            Self::Notifications(error) => error.subtitle(),
            Self::CloudFiles(error) => error.subtitle(),
            Self::FileStorage(error) => error.subtitle(),
            Self::Health(error) => error.subtitle(),
            Self::Custom { subtitle, .. } => subtitle.clone().map(ErrorText::Custom),
        }
    }

    fn illustration(&self) -> Option<ImageAsset> {
        match self {
            Self::Network(error) => error.illustration(),
            Self::CloudSync(error) => error.illustration(),
            Self::Location(error) => error.illustration(),
            Self::Database(error) => error.illustration(),
            Self::Calendar(error) => error.illustration(),
            Self::Contacts(error) => error.illustration(),
            Self::Notifications(error) => error.illustration(),
            Self::CloudFiles(error) => error.illustration(),
            Self::FileStorage(error) => error.illustration(),
            Self::Health(error) => error.illustration(),
            Self::Custom { illustration, .. } => illustration.clone(),
        }
    }

    fn icon(&self) -> Option<ImageAsset> {
        match self {
            Self::Network(error) => error.icon(),
            Self::CloudSync(error) => error.icon(),
            Self::Location(error) => error.icon(),
            Self::Database(error) => error.icon(),
            Self::Calendar(error) => error.icon(),
            Self::Contacts(error) => error.icon(),
            Self::Notifications(error) => error.icon(),
            Self::CloudFiles(error) => error.icon(),
            Self::FileStorage(error) => error.icon(),
            Self::Health(error) => error.icon(),
            Self::Custom { .. } => None,
        }
    }
}

/// Result alias for operations that surface classified failures
pub type AppResult<T> = Result<T, AppError>;
