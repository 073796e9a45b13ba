//! Network failure cases.

use nb_shared::i18n::TextKey;
use thiserror::Error;

use super::presentation::{ErrorPresentation, ErrorText};

/// Failures surfaced by the remote API layer.
///
/// `Api` is the only case in the whole taxonomy whose user-facing text is
/// supplied by the failing call instead of resolved from the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Response decoding failed")]
    Decode,

    #[error("Invalid request URL")]
    InvalidUrl,

    #[error("No response from server")]
    NoResponse,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unexpected status code")]
    UnexpectedStatusCode,

    #[error("Unknown network failure")]
    Unknown,

    #[error("{title}")]
    Api {
        title: String,
        subtitle: Option<String>,
    },
}

impl NetworkError {
    /// API-reported failure carrying the server's own wording
    pub fn api(title: impl Into<String>, subtitle: Option<String>) -> Self {
        Self::Api {
            title: title.into(),
            subtitle,
        }
    }
}

impl ErrorPresentation for NetworkError {
    fn title(&self) -> ErrorText {
        match self {
            Self::Decode => TextKey::SomethingWentWrong.into(),
            Self::InvalidUrl => TextKey::InvalidRequest.into(),
            Self::NoResponse => TextKey::NothingCameFromServer.into(),
            Self::Unauthorized => TextKey::AuthorizationError.into(),
            Self::UnexpectedStatusCode => TextKey::SomethingWentWrong.into(),
            Self::Unknown => TextKey::SomethingWentWrong.into(),
            Self::Api { title, .. } => ErrorText::Custom(title.clone()),
        }
    }

    fn subtitle(&self) -> Option<ErrorText> {
        match self {
            Self::Decode => Some(TextKey::SomethingStrangeCameFromServer.into()),
            Self::InvalidUrl => Some(TextKey::LooksLikeTheAppIsBroken.into()),
            Self::NoResponse => Some(TextKey::TryAgainLater.into()),
            Self::Unauthorized => Some(TextKey::LooksLikeYouNeedToLogIn.into()),
            Self::UnexpectedStatusCode => Some(TextKey::SomethingStrangeCameFromServer.into()),
            Self::Unknown => Some(TextKey::TryAgainLater.into()),
            Self::Api { subtitle, .. } => subtitle.clone().map(ErrorText::Custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_shared::i18n::TextCatalog;
    use nb_shared::types::Language;

    #[test]
    fn test_api_error_passes_caller_text_through() {
        let error = NetworkError::api("Payment failed", Some("Card declined".to_string()));
        let display = error.localize(TextCatalog::builtin(), Language::English);

        assert_eq!(display.title, "Payment failed");
        assert_eq!(display.subtitle.as_deref(), Some("Card declined"));
    }

    #[test]
    fn test_api_error_without_subtitle_stays_absent() {
        let error = NetworkError::api("X", None);
        assert_eq!(error.subtitle(), None);

        let display = error.localize(TextCatalog::builtin(), Language::English);
        assert_eq!(display.subtitle, None);
    }

    #[test]
    fn test_unauthorized_suggests_logging_in() {
        let error = NetworkError::Unauthorized;
        assert_eq!(error.title(), ErrorText::Key(TextKey::AuthorizationError));
        assert_eq!(
            error.subtitle(),
            Some(ErrorText::Key(TextKey::LooksLikeYouNeedToLogIn))
        );
    }
}
