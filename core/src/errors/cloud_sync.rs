//! Cloud synchronization failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the cloud record synchronization layer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudSyncError {
    #[error("Cloud record decoding failed")]
    Decode,

    #[error("No cloud account")]
    NoAccount,

    #[error("No access to the cloud account")]
    NotAccess,

    #[error("Unknown cloud sync failure")]
    Unknown,
}

impl ErrorPresentation for CloudSyncError {
    fn title(&self) -> ErrorText {
        match self {
            Self::Decode => TextKey::CloudDataCouldNotBeRead.into(),
            Self::NoAccount => TextKey::NoCloudAccount.into(),
            Self::NotAccess => TextKey::NoAccessToCloud.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::Decode => Some(TextKey::UpdatingAppShouldHelp.into()),
            Self::NoAccount => Some(TextKey::SignInToCloudInSettings.into()),
            Self::NotAccess => Some(TextKey::SignInToCloudInSettings.into()),
            Self::Unknown => Some(TextKey::TryAgainLater.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_cases_point_to_sign_in() {
        for error in [CloudSyncError::NoAccount, CloudSyncError::NotAccess] {
            assert_eq!(
                error.subtitle(),
                Some(ErrorText::Key(TextKey::SignInToCloudInSettings))
            );
        }
    }
}
