//! Translations for the storefront UI.
//!
//! # Design
//! - Every rendered string is a [`TextKey`]; views never look up free-form paths.
//! - Locale files are flattened into `section.key` entries once per bundle.
//! - A key missing from a locale falls back to English, then to its own path.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Supported locale codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

impl LocaleCode {
    /// All supported locales in switcher order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::En, Self::Es, Self::Fr]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Fr => "Français",
        }
    }

    /// Locale for a stored code or browser language tag such as `es-MX`.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.trim();
        Self::all()
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }
}

/// Locale used before any preference is known.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Every piece of copy the UI renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Email input label.
    FieldEmail,
    /// Password input label.
    FieldPassword,
    /// Name input label.
    FieldUserName,
    /// Shop name input label.
    FieldShopName,
    /// Helper text for a missing email.
    RequiredEmail,
    /// Helper text for a missing password.
    RequiredPassword,
    /// Helper text for a missing name.
    RequiredUserName,
    /// Helper text for a missing shop name.
    RequiredShopName,
    /// Subtitle on login forms.
    SubtitleLogin,
    /// Subtitle on customer registration.
    SubtitleRegisterCustomer,
    /// Subtitle on seller registration.
    SubtitleRegisterSeller,
    /// Prompt before the link to registration.
    SwitchNoAccount,
    /// Prompt before the link to login.
    SwitchHaveAccount,
    /// Link text leading to registration.
    SwitchSignUp,
    /// Link text leading to login.
    SwitchLogIn,
    /// Strong password message.
    StrengthStrong,
    /// Weak password warning.
    StrengthWeak,
    /// Submit label on login forms.
    SubmitLogin,
    /// Submit label on registration forms.
    SubmitRegister,
    /// Visibility toggle while the password is masked.
    ShowPassword,
    /// Visibility toggle while the password is plaintext.
    HidePassword,
    /// Placeholder until the bot check renders.
    CaptchaLoading,
    /// Popup close button label.
    PopupDismiss,
    /// Home page heading.
    HomeTitle,
    /// Prefix before the signed-in account name.
    HomeSignedInAs,
    /// Home page text without an account.
    HomeSignedOut,
    /// Sign-out button.
    HomeSignOut,
    /// Link to customer login.
    HomeCustomerLogin,
    /// Link to seller login.
    HomeSellerLogin,
    /// Link to customer registration.
    HomeCustomerRegister,
    /// Link to seller registration.
    HomeSellerRegister,
    /// Unknown route message.
    NotFound,
}

impl TextKey {
    /// Every key, for completeness checks.
    pub const ALL: [Self; 32] = [
        Self::FieldEmail,
        Self::FieldPassword,
        Self::FieldUserName,
        Self::FieldShopName,
        Self::RequiredEmail,
        Self::RequiredPassword,
        Self::RequiredUserName,
        Self::RequiredShopName,
        Self::SubtitleLogin,
        Self::SubtitleRegisterCustomer,
        Self::SubtitleRegisterSeller,
        Self::SwitchNoAccount,
        Self::SwitchHaveAccount,
        Self::SwitchSignUp,
        Self::SwitchLogIn,
        Self::StrengthStrong,
        Self::StrengthWeak,
        Self::SubmitLogin,
        Self::SubmitRegister,
        Self::ShowPassword,
        Self::HidePassword,
        Self::CaptchaLoading,
        Self::PopupDismiss,
        Self::HomeTitle,
        Self::HomeSignedInAs,
        Self::HomeSignedOut,
        Self::HomeSignOut,
        Self::HomeCustomerLogin,
        Self::HomeSellerLogin,
        Self::HomeCustomerRegister,
        Self::HomeSellerRegister,
        Self::NotFound,
    ];

    /// Dotted path of the entry in the locale files.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::FieldEmail => "auth.field.email",
            Self::FieldPassword => "auth.field.password",
            Self::FieldUserName => "auth.field.user_name",
            Self::FieldShopName => "auth.field.shop_name",
            Self::RequiredEmail => "auth.required.email",
            Self::RequiredPassword => "auth.required.password",
            Self::RequiredUserName => "auth.required.user_name",
            Self::RequiredShopName => "auth.required.shop_name",
            Self::SubtitleLogin => "auth.subtitle.login",
            Self::SubtitleRegisterCustomer => "auth.subtitle.register_customer",
            Self::SubtitleRegisterSeller => "auth.subtitle.register_seller",
            Self::SwitchNoAccount => "auth.switch.no_account",
            Self::SwitchHaveAccount => "auth.switch.have_account",
            Self::SwitchSignUp => "auth.switch.sign_up",
            Self::SwitchLogIn => "auth.switch.log_in",
            Self::StrengthStrong => "auth.strength.strong",
            Self::StrengthWeak => "auth.strength.weak",
            Self::SubmitLogin => "auth.submit.login",
            Self::SubmitRegister => "auth.submit.register",
            Self::ShowPassword => "auth.show_password",
            Self::HidePassword => "auth.hide_password",
            Self::CaptchaLoading => "auth.captcha_loading",
            Self::PopupDismiss => "popup.dismiss",
            Self::HomeTitle => "home.title",
            Self::HomeSignedInAs => "home.signed_in_as",
            Self::HomeSignedOut => "home.signed_out",
            Self::HomeSignOut => "home.sign_out",
            Self::HomeCustomerLogin => "home.customer_login",
            Self::HomeSellerLogin => "home.seller_login",
            Self::HomeCustomerRegister => "home.customer_register",
            Self::HomeSellerRegister => "home.seller_register",
            Self::NotFound => "not_found",
        }
    }
}

/// Flattened copy for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    entries: Arc<HashMap<String, String>>,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

static ENGLISH: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

impl TranslationBundle {
    /// Load the bundled copy for a locale.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self::from_json(locale, locale_file(locale))
    }

    fn from_json(locale: LocaleCode, raw: &str) -> Self {
        let mut entries = HashMap::new();
        if let Ok(tree) = serde_json::from_str::<Value>(raw) {
            flatten("", &tree, &mut entries);
        }
        Self {
            locale,
            entries: Arc::new(entries),
        }
    }

    /// Text for a key in this locale.
    #[must_use]
    pub fn text(&self, key: TextKey) -> String {
        self.lookup(key)
            .or_else(|| ENGLISH.lookup(key))
            .unwrap_or_else(|| key.path())
            .to_string()
    }

    fn lookup(&self, key: TextKey) -> Option<&str> {
        self.entries.get(key.path()).map(String::as_str)
    }
}

fn flatten(prefix: &str, node: &Value, entries: &mut HashMap<String, String>) {
    match node {
        Value::String(text) => {
            entries.insert(prefix.to_string(), text.clone());
        }
        Value::Object(children) => {
            for (name, child) in children {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&path, child, entries);
            }
        }
        _ => {}
    }
}

const fn locale_file(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Es => include_str!("../../i18n/es.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_locale_translates_every_key() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            for key in TextKey::ALL {
                assert!(
                    bundle.lookup(key).is_some_and(|text| !text.is_empty()),
                    "{} lacks {}",
                    locale.code(),
                    key.path()
                );
            }
        }
    }

    #[test]
    fn key_paths_are_unique() {
        let paths: HashSet<_> = TextKey::ALL.iter().map(|key| key.path()).collect();
        assert_eq!(paths.len(), TextKey::ALL.len());
    }

    #[test]
    fn partial_locale_falls_back_to_english() {
        let bundle = TranslationBundle::from_json(
            LocaleCode::Es,
            r#"{"auth":{"submit":{"login":"Entrar"}}}"#,
        );
        assert_eq!(bundle.text(TextKey::SubmitLogin), "Entrar");
        assert_eq!(bundle.text(TextKey::SubmitRegister), "Register");

        let broken = TranslationBundle::from_json(LocaleCode::Fr, "{");
        assert_eq!(broken.text(TextKey::RequiredEmail), "Email is required");
    }

    #[test]
    fn lang_tags_map_to_supported_locales() {
        assert_eq!(LocaleCode::from_lang_tag("es-MX"), Some(LocaleCode::Es));
        assert_eq!(LocaleCode::from_lang_tag("fr_CA"), Some(LocaleCode::Fr));
        assert_eq!(LocaleCode::from_lang_tag("EN"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("de-DE"), None);
        assert_eq!(LocaleCode::from_lang_tag(""), None);
    }

    #[test]
    fn english_copy_matches_form_text() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        assert_eq!(bundle.text(TextKey::RequiredShopName), "Shop name is required");
        assert_eq!(bundle.text(TextKey::StrengthStrong), "Password is strong!");
    }
}
