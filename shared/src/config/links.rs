//! Link records for the app, its developer, and the company.
//!
//! Derived links are interpolated from the stored base fields at call time
//! and come back absent when the result does not parse as an absolute URL.

use serde::{Deserialize, Serialize};
use url::Url;

/// Links section of the configuration document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "App")]
    pub app: AppLinks,

    #[serde(rename = "Developer")]
    pub developer: DeveloperLinks,

    #[serde(rename = "Company")]
    pub company: CompanyLinks,
}

/// App-level links and store identifiers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppLinks {
    #[serde(rename = "Url")]
    pub url_string: Option<String>,

    #[serde(rename = "TelegramChat")]
    pub telegram_chat: Option<String>,

    #[serde(rename = "AppStoreID")]
    pub app_store_id: String,
}

impl AppLinks {
    /// Website URL, absent when the stored string is empty or malformed
    pub fn url(&self) -> Option<Url> {
        Url::parse(self.url_string.as_deref().unwrap_or_default()).ok()
    }

    /// Support chat URL
    pub fn telegram_chat_url(&self) -> Option<Url> {
        let chat = self.telegram_chat.as_deref().unwrap_or_default();
        Url::parse(&format!("https://t.me/{chat}")).ok()
    }

    /// Privacy policy page under the website URL
    pub fn privacy_policy_url(&self) -> Option<Url> {
        let base = self.url_string.as_deref().unwrap_or_default();
        Url::parse(&format!("{base}/privacy-policy")).ok()
    }

    /// Terms of use page under the website URL
    pub fn terms_of_use_url(&self) -> Option<Url> {
        let base = self.url_string.as_deref().unwrap_or_default();
        Url::parse(&format!("{base}/terms-and-conditions")).ok()
    }

    /// Storefront page opened to write a review
    pub fn app_store_review_url(&self) -> Option<Url> {
        Url::parse(&format!(
            "https://itunes.apple.com/us/app/apple-store/id{}?mt=8&action=write-review",
            self.app_store_id
        ))
        .ok()
    }

    /// Storefront page for sharing an install link
    pub fn app_install_share_url(&self) -> Option<Url> {
        Url::parse(&format!(
            "https://itunes.apple.com/us/app/apple-store/id{}",
            self.app_store_id
        ))
        .ok()
    }
}

/// Developer contact links
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeveloperLinks {
    #[serde(rename = "Name")]
    pub name: Option<String>,

    #[serde(rename = "Url")]
    pub url: Option<String>,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "Facebook")]
    pub facebook: Option<String>,

    #[serde(rename = "Telegram")]
    pub telegram: Option<String>,
}

/// Company contact and social links
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyLinks {
    #[serde(rename = "Name")]
    pub name: Option<String>,

    #[serde(rename = "Url")]
    pub url_string: Option<String>,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "AppStoreID")]
    pub app_store_id: String,

    #[serde(rename = "Facebook")]
    pub facebook: Option<String>,

    #[serde(rename = "Telegram")]
    pub telegram: Option<String>,

    #[serde(rename = "Dribbble")]
    pub dribbble: Option<String>,

    #[serde(rename = "Instagram")]
    pub instagram: Option<String>,

    #[serde(rename = "Twitter")]
    pub twitter: Option<String>,

    #[serde(rename = "CDNUrl")]
    pub cdn_string: Option<String>,
}

impl CompanyLinks {
    /// Website URL, absent when the stored string is empty or malformed
    pub fn url(&self) -> Option<Url> {
        Url::parse(self.url_string.as_deref().unwrap_or_default()).ok()
    }

    /// CDN base URL
    pub fn cdn_url(&self) -> Option<Url> {
        Url::parse(self.cdn_string.as_deref().unwrap_or_default()).ok()
    }

    /// mailto link for the contact address
    pub fn email_url(&self) -> Option<Url> {
        let email = self.email.as_deref().unwrap_or_default();
        Url::parse(&format!("mailto:{email}")).ok()
    }

    /// Facebook profile URL, absent without a stored handle
    pub fn facebook_url(&self) -> Option<Url> {
        let handle = self.facebook.as_deref()?;
        Url::parse(&format!("https://www.facebook.com/{handle}")).ok()
    }
}
