//! Contacts access failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the contacts access layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactsError {
    #[error("No access to the contacts")]
    NotAccess,

    #[error("Unknown contacts failure")]
    Unknown,
}

impl ErrorPresentation for ContactsError {
    fn title(&self) -> ErrorText {
        match self {
            Self::NotAccess => TextKey::NoAccessToContacts.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::NotAccess => Some(TextKey::AllowContactsInSettings.into()),
            Self::Unknown => Some(TextKey::TryAgainLater.into()),
        }
    }
}
