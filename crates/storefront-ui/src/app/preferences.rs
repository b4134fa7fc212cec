//! Persistence and environment helpers for the app shell.

use crate::core::captcha::BotCheckConfig;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};

const LOCALE_KEY: &str = "storefront.locale";
const API_BASE_META: &str = "storefront-api-base";
const SITE_KEY_META: &str = "storefront-recaptcha-site-key";
const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Stored locale, else the browser language, else English.
pub(crate) fn load_locale() -> LocaleCode {
    LocalStorage::get::<String>(LOCALE_KEY)
        .ok()
        .and_then(|stored| LocaleCode::from_lang_tag(&stored))
        .or_else(|| {
            window()
                .navigator()
                .language()
                .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        })
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, locale.code()) {
        console::error!("storage operation failed", "set", LOCALE_KEY, err.to_string());
    }
}

/// Backend base URL: `<meta name="storefront-api-base">`, else the page origin.
pub(crate) fn api_base_url() -> String {
    if let Some(base) = meta_content(API_BASE_META) {
        return base;
    }
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

pub(crate) fn bot_check_config() -> BotCheckConfig {
    BotCheckConfig::from_site_key(meta_content(SITE_KEY_META))
}

fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{name}\"]");
    let element = document().query_selector(&selector).ok().flatten()?;
    element
        .get_attribute("content")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
