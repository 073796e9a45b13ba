//! Health data failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the health data store
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthError {
    #[error("Sample deletion failed")]
    DeleteItem,

    #[error("Sample update failed")]
    UpdateItem,

    #[error("Sample saving failed")]
    SaveItem,

    #[error("Samples fetch failed")]
    FetchItems,

    #[error("No access to health data")]
    NotAccess,

    #[error("Unknown health data failure")]
    Unknown,
}

impl ErrorPresentation for HealthError {
    fn title(&self) -> ErrorText {
        match self {
            Self::DeleteItem => TextKey::DeleteError.into(),
            Self::UpdateItem => TextKey::UpdateError.into(),
            Self::SaveItem => TextKey::SavingError.into(),
            Self::FetchItems => TextKey::FetchError.into(),
            Self::NotAccess => TextKey::NoAccessToHealth.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::NotAccess => Some(TextKey::AllowHealthInSettings.into()),
            _ => Some(TextKey::TryAgainLater.into()),
        }
    }
}
