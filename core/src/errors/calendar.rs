//! Calendar and events failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the calendar and events layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Event deletion failed")]
    DeleteItem,

    #[error("Event update failed")]
    UpdateItem,

    #[error("Event saving failed")]
    SaveItem,

    #[error("Events fetch failed")]
    FetchItems,

    #[error("No access to the calendar")]
    NotAccess,

    #[error("Unknown calendar failure")]
    Unknown,
}

impl ErrorPresentation for CalendarError {
    fn title(&self) -> ErrorText {
        match self {
            Self::DeleteItem => TextKey::DeleteError.into(),
            Self::UpdateItem => TextKey::UpdateError.into(),
            Self::SaveItem => TextKey::SavingError.into(),
            Self::FetchItems => TextKey::FetchError.into(),
            Self::NotAccess => TextKey::NoAccessToCalendar.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::NotAccess => Some(TextKey::AllowCalendarInSettings.into()),
            _ => Some(TextKey::TryAgainLater.into()),
        }
    }
}
