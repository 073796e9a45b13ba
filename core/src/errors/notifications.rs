//! Notification permission failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the local notifications permission layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationsError {
    #[error("Notification permission not determined")]
    NotDetermined,

    #[error("No access to notifications")]
    NotAccess,

    #[error("Unknown notifications failure")]
    Unknown,
}

impl ErrorPresentation for NotificationsError {
    fn title(&self) -> ErrorText {
        match self {
            Self::NotDetermined => TextKey::SelectNotificationsSettings.into(),
            Self::NotAccess => TextKey::NoAccessToNotifications.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            // The settings prompt stands alone, no remedy line
            Self::NotDetermined => None,
            Self::NotAccess => Some(TextKey::AllowNotificationsInSettings.into()),
            Self::Unknown => Some(TextKey::TryAgainLater.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_determined_has_no_subtitle() {
        assert_eq!(NotificationsError::NotDetermined.subtitle(), None);
    }

    #[test]
    fn test_not_access_pairs_title_with_settings_remedy() {
        let error = NotificationsError::NotAccess;
        assert_eq!(error.title(), ErrorText::Key(TextKey::NoAccessToNotifications));
        assert_eq!(
            error.subtitle(),
            Some(ErrorText::Key(TextKey::AllowNotificationsInSettings))
        );
    }
}
