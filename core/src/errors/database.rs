//! Local database failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the on-device database layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseError {
    #[error("Item deletion failed")]
    DeleteItem,

    #[error("Item update failed")]
    UpdateItem,

    #[error("Item saving failed")]
    SaveItem,

    #[error("Items fetch failed")]
    FetchItems,

    #[error("Unknown database failure")]
    Unknown,
}

impl ErrorPresentation for DatabaseError {
    fn title(&self) -> ErrorText {
        match self {
            Self::DeleteItem => TextKey::DeleteError.into(),
            Self::UpdateItem => TextKey::UpdateError.into(),
            Self::SaveItem => TextKey::SavingError.into(),
            Self::FetchItems => TextKey::FetchError.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        // Every database failure gets the same retry remedy
        Some(TextKey::TryAgainLater.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_cases_map_to_operation_titles() {
        assert_eq!(
            DatabaseError::DeleteItem.title(),
            ErrorText::Key(TextKey::DeleteError)
        );
        assert_eq!(
            DatabaseError::SaveItem.title(),
            ErrorText::Key(TextKey::SavingError)
        );
        assert_eq!(
            DatabaseError::FetchItems.title(),
            ErrorText::Key(TextKey::FetchError)
        );
    }
}
