//! Cloud document storage failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the cloud document storage layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudFilesError {
    #[error("Document deletion failed")]
    DeleteItem,

    #[error("Document update failed")]
    UpdateItem,

    #[error("Document saving failed")]
    SaveItem,

    #[error("Documents fetch failed")]
    FetchItems,

    #[error("No access to cloud documents")]
    NotAccess,

    #[error("Unknown cloud documents failure")]
    Unknown,
}

impl ErrorPresentation for CloudFilesError {
    fn title(&self) -> ErrorText {
        match self {
            Self::DeleteItem => TextKey::DeleteError.into(),
            Self::UpdateItem => TextKey::UpdateError.into(),
            Self::SaveItem => TextKey::SavingError.into(),
            Self::FetchItems => TextKey::FetchError.into(),
            Self::NotAccess => TextKey::NoAccessToCloud.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            // Cloud storage access is gated on the account, not a toggle
            Self::NotAccess => Some(TextKey::SignInToCloudInSettings.into()),
            _ => Some(TextKey::TryAgainLater.into()),
        }
    }
}
