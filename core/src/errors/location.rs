//! Location access failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the location permission and positioning layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission not determined")]
    NotDetermined,

    #[error("No access to location")]
    NotAccess,

    #[error("Unknown location failure")]
    Unknown,
}

impl ErrorPresentation for LocationError {
    fn title(&self) -> ErrorText {
        match self {
            Self::NotDetermined => TextKey::SelectLocationSettings.into(),
            Self::NotAccess => TextKey::NoAccessToLocation.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::NotDetermined => Some(TextKey::WithoutLocationAppCannotWork.into()),
            Self::NotAccess => Some(TextKey::AllowLocationInSettings.into()),
            Self::Unknown => Some(TextKey::TryAgainLater.into()),
        }
    }
}
