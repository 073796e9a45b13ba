//! Symbolic keys for user-facing error text.

/// Symbolic key into the text catalog.
///
/// Error values store keys rather than resolved strings; resolution happens
/// at render time against an injected [`TextCatalog`](super::TextCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Shared fallbacks
    SomethingWentWrong,
    TryAgainLater,

    // Network
    AuthorizationError,
    LooksLikeYouNeedToLogIn,
    InvalidRequest,
    LooksLikeTheAppIsBroken,
    NothingCameFromServer,
    SomethingStrangeCameFromServer,

    // Cloud account and sync
    CloudDataCouldNotBeRead,
    UpdatingAppShouldHelp,
    NoCloudAccount,
    NoAccessToCloud,
    SignInToCloudInSettings,

    // Location
    SelectLocationSettings,
    WithoutLocationAppCannotWork,
    NoAccessToLocation,
    AllowLocationInSettings,

    // Storage operations
    DeleteError,
    UpdateError,
    SavingError,
    FetchError,

    // Calendar
    NoAccessToCalendar,
    AllowCalendarInSettings,

    // Contacts
    NoAccessToContacts,
    AllowContactsInSettings,

    // Notifications
    SelectNotificationsSettings,
    NoAccessToNotifications,
    AllowNotificationsInSettings,

    // Files
    NoAccessToFiles,
    AllowFilesInSettings,

    // Health data
    NoAccessToHealth,
    AllowHealthInSettings,
}

impl TextKey {
    /// Stable identifier of this key in catalog documents
    pub fn slug(&self) -> &'static str {
        match self {
            TextKey::SomethingWentWrong => "something_went_wrong",
            TextKey::TryAgainLater => "try_again_later",
            TextKey::AuthorizationError => "authorization_error",
            TextKey::LooksLikeYouNeedToLogIn => "looks_like_you_need_to_log_in",
            TextKey::InvalidRequest => "invalid_request",
            TextKey::LooksLikeTheAppIsBroken => "looks_like_the_app_is_broken",
            TextKey::NothingCameFromServer => "nothing_came_from_server",
            TextKey::SomethingStrangeCameFromServer => "something_strange_came_from_server",
            TextKey::CloudDataCouldNotBeRead => "cloud_data_could_not_be_read",
            TextKey::UpdatingAppShouldHelp => "updating_app_should_help",
            TextKey::NoCloudAccount => "no_cloud_account",
            TextKey::NoAccessToCloud => "no_access_to_cloud",
            TextKey::SignInToCloudInSettings => "sign_in_to_cloud_in_settings",
            TextKey::SelectLocationSettings => "select_location_settings",
            TextKey::WithoutLocationAppCannotWork => "without_location_app_cannot_work",
            TextKey::NoAccessToLocation => "no_access_to_location",
            TextKey::AllowLocationInSettings => "allow_location_in_settings",
            TextKey::DeleteError => "delete_error",
            TextKey::UpdateError => "update_error",
            TextKey::SavingError => "saving_error",
            TextKey::FetchError => "fetch_error",
            TextKey::NoAccessToCalendar => "no_access_to_calendar",
            TextKey::AllowCalendarInSettings => "allow_calendar_in_settings",
            TextKey::NoAccessToContacts => "no_access_to_contacts",
            TextKey::AllowContactsInSettings => "allow_contacts_in_settings",
            TextKey::SelectNotificationsSettings => "select_notifications_settings",
            TextKey::NoAccessToNotifications => "no_access_to_notifications",
            TextKey::AllowNotificationsInSettings => "allow_notifications_in_settings",
            TextKey::NoAccessToFiles => "no_access_to_files",
            TextKey::AllowFilesInSettings => "allow_files_in_settings",
            TextKey::NoAccessToHealth => "no_access_to_health",
            TextKey::AllowHealthInSettings => "allow_health_in_settings",
        }
    }

    /// Built-in English text used when a catalog has no entry for this key
    pub fn fallback(&self) -> &'static str {
        match self {
            TextKey::SomethingWentWrong => "Something went wrong",
            TextKey::TryAgainLater => "Try again later",
            TextKey::AuthorizationError => "Authorization error",
            TextKey::LooksLikeYouNeedToLogIn => "Looks like you need to log in",
            TextKey::InvalidRequest => "Invalid request",
            TextKey::LooksLikeTheAppIsBroken => "Looks like the app is broken",
            TextKey::NothingCameFromServer => "Nothing came from the server",
            TextKey::SomethingStrangeCameFromServer => "Something strange came from the server",
            TextKey::CloudDataCouldNotBeRead => "Data from the cloud could not be read",
            TextKey::UpdatingAppShouldHelp => "Updating the app should help",
            TextKey::NoCloudAccount => "Looks like you don't have a cloud account",
            TextKey::NoAccessToCloud => "No access to the cloud account",
            TextKey::SignInToCloudInSettings => {
                "Most likely you need to sign in to your cloud account in settings"
            }
            TextKey::SelectLocationSettings => "Select location settings",
            TextKey::WithoutLocationAppCannotWork => {
                "Without access to location the application cannot work"
            }
            TextKey::NoAccessToLocation => "No access to location",
            TextKey::AllowLocationInSettings => "Please allow access to location in settings",
            TextKey::DeleteError => "Delete error",
            TextKey::UpdateError => "Update error",
            TextKey::SavingError => "Saving error",
            TextKey::FetchError => "Fetch error",
            TextKey::NoAccessToCalendar => "No access to the calendar",
            TextKey::AllowCalendarInSettings => "Please allow access to calendar in settings",
            TextKey::NoAccessToContacts => "No access to the contacts",
            TextKey::AllowContactsInSettings => "Please allow access to contacts in settings",
            TextKey::SelectNotificationsSettings => "Select notifications settings",
            TextKey::NoAccessToNotifications => "No access to notifications",
            TextKey::AllowNotificationsInSettings => {
                "Please allow access to notifications in settings"
            }
            TextKey::NoAccessToFiles => "No access to files",
            TextKey::AllowFilesInSettings => "Please allow access to files in settings",
            TextKey::NoAccessToHealth => "No access to health data",
            TextKey::AllowHealthInSettings => "Please allow access to health data in settings",
        }
    }

    /// Every key, for catalog coverage checks
    pub fn all() -> &'static [TextKey] {
        use TextKey::*;
        &[
            SomethingWentWrong,
            TryAgainLater,
            AuthorizationError,
            LooksLikeYouNeedToLogIn,
            InvalidRequest,
            LooksLikeTheAppIsBroken,
            NothingCameFromServer,
            SomethingStrangeCameFromServer,
            CloudDataCouldNotBeRead,
            UpdatingAppShouldHelp,
            NoCloudAccount,
            NoAccessToCloud,
            SignInToCloudInSettings,
            SelectLocationSettings,
            WithoutLocationAppCannotWork,
            NoAccessToLocation,
            AllowLocationInSettings,
            DeleteError,
            UpdateError,
            SavingError,
            FetchError,
            NoAccessToCalendar,
            AllowCalendarInSettings,
            NoAccessToContacts,
            AllowContactsInSettings,
            SelectNotificationsSettings,
            NoAccessToNotifications,
            AllowNotificationsInSettings,
            NoAccessToFiles,
            AllowFilesInSettings,
            NoAccessToHealth,
            AllowHealthInSettings,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = TextKey::all().iter().map(|key| key.slug()).collect();
        assert_eq!(slugs.len(), TextKey::all().len());
    }

    #[test]
    fn test_fallbacks_are_nonempty() {
        for key in TextKey::all() {
            assert!(!key.fallback().is_empty(), "empty fallback for {:?}", key);
        }
    }
}
