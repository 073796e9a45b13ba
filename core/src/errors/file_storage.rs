//! Local file storage failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the on-device file storage layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStorageError {
    #[error("File deletion failed")]
    DeleteItem,

    #[error("File update failed")]
    UpdateItem,

    #[error("File saving failed")]
    SaveItem,

    #[error("Files fetch failed")]
    FetchItems,

    #[error("No access to files")]
    NotAccess,

    #[error("Unknown file storage failure")]
    Unknown,
}

impl ErrorPresentation for FileStorageError {
    fn title(&self) -> ErrorText {
        match self {
            Self::DeleteItem => TextKey::DeleteError.into(),
            Self::UpdateItem => TextKey::UpdateError.into(),
            Self::SaveItem => TextKey::SavingError.into(),
            Self::FetchItems => TextKey::FetchError.into(),
            Self::NotAccess => TextKey::NoAccessToFiles.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::NotAccess => Some(TextKey::AllowFilesInSettings.into()),
            _ => Some(TextKey::TryAgainLater.into()),
        }
    }
}
