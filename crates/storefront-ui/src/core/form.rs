//! Field model for the authentication form.
//!
//! # Design
//! - Derive the visible field set from mode and role instead of branching in views.
//! - Keep raw input as strings; a field is missing only when it is zero-length.
//! - Copy is chosen here as [`TextKey`]s so views never compare strings.

use crate::i18n::TextKey;
use storefront_api_models::{FormMode, UserRole};

/// Inputs rendered by the authentication form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Account email.
    Email,
    /// Account password.
    Password,
    /// Display name (register only).
    UserName,
    /// Shop name (seller registration only).
    ShopName,
}

impl FieldName {
    /// Value of the input's `name` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::UserName => "userName",
            Self::ShopName => "shopName",
        }
    }

    /// Parse an input `name` attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "userName" => Some(Self::UserName),
            "shopName" => Some(Self::ShopName),
            _ => None,
        }
    }

    /// Input label.
    #[must_use]
    pub const fn label(self) -> TextKey {
        match self {
            Self::Email => TextKey::FieldEmail,
            Self::Password => TextKey::FieldPassword,
            Self::UserName => TextKey::FieldUserName,
            Self::ShopName => TextKey::FieldShopName,
        }
    }

    /// Helper text shown while the field is flagged.
    #[must_use]
    pub const fn required_message(self) -> TextKey {
        match self {
            Self::Email => TextKey::RequiredEmail,
            Self::Password => TextKey::RequiredPassword,
            Self::UserName => TextKey::RequiredUserName,
            Self::ShopName => TextKey::RequiredShopName,
        }
    }

    /// `type` attribute of the input; the password input follows the visibility toggle.
    #[must_use]
    pub const fn input_type(self, password_visible: bool) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password if password_visible => "text",
            Self::Password => "password",
            Self::UserName | Self::ShopName => "text",
        }
    }

    /// Browser autocomplete hint.
    #[must_use]
    pub const fn autocomplete(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "current-password",
            Self::UserName => "name",
            Self::ShopName => "off",
        }
    }
}

/// Which optional inputs a form instance renders. Email and password are always shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldVisibility {
    /// Display name input.
    pub user_name: bool,
    /// Shop name input.
    pub shop_name: bool,
}

impl FieldVisibility {
    /// Visible inputs for a mode and role.
    #[must_use]
    pub const fn for_form(mode: FormMode, role: UserRole) -> Self {
        match (mode, role) {
            (FormMode::Login, _) => Self {
                user_name: false,
                shop_name: false,
            },
            (FormMode::Register, UserRole::Customer) => Self {
                user_name: true,
                shop_name: false,
            },
            (FormMode::Register, UserRole::Seller) => Self {
                user_name: true,
                shop_name: true,
            },
        }
    }

    /// Visible inputs in render order.
    #[must_use]
    pub fn fields(self) -> Vec<FieldName> {
        let mut fields = Vec::with_capacity(4);
        if self.user_name {
            fields.push(FieldName::UserName);
        }
        if self.shop_name {
            fields.push(FieldName::ShopName);
        }
        fields.push(FieldName::Email);
        fields.push(FieldName::Password);
        fields
    }
}

/// Raw values read from the form when it is submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Display name input; empty when not rendered.
    pub user_name: String,
    /// Shop name input; empty when not rendered.
    pub shop_name: String,
}

impl FormValues {
    /// Value for a field.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::UserName => &self.user_name,
            FieldName::ShopName => &self.shop_name,
        }
    }

    /// Whether a field holds no input at all.
    #[must_use]
    pub fn is_missing(&self, field: FieldName) -> bool {
        self.get(field).is_empty()
    }
}

/// Per-field "required" error flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    email: bool,
    password: bool,
    user_name: bool,
    shop_name: bool,
}

impl FieldErrors {
    /// Whether a field is flagged.
    #[must_use]
    pub const fn get(&self, field: FieldName) -> bool {
        match field {
            FieldName::Email => self.email,
            FieldName::Password => self.password,
            FieldName::UserName => self.user_name,
            FieldName::ShopName => self.shop_name,
        }
    }

    /// Set or clear a flag.
    pub const fn set(&mut self, field: FieldName, flagged: bool) {
        match field {
            FieldName::Email => self.email = flagged,
            FieldName::Password => self.password = flagged,
            FieldName::UserName => self.user_name = flagged,
            FieldName::ShopName => self.shop_name = flagged,
        }
    }

    /// Clear a flag.
    pub const fn clear(&mut self, field: FieldName) {
        self.set(field, false);
    }

    /// Whether any flag is set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.email || self.password || self.user_name || self.shop_name
    }
}

/// Static copy around the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormCopy {
    /// Mode the copy describes.
    pub mode: FormMode,
    /// Role the copy describes.
    pub role: UserRole,
}

impl FormCopy {
    /// Copy for a form instance.
    #[must_use]
    pub const fn new(mode: FormMode, role: UserRole) -> Self {
        Self { mode, role }
    }

    /// Heading, e.g. `Seller Register`.
    #[must_use]
    pub fn title(self) -> String {
        format!("{} {}", self.role, self.mode)
    }

    /// Line under the heading.
    #[must_use]
    pub const fn subtitle(self) -> TextKey {
        match (self.mode, self.role) {
            (FormMode::Login, _) => TextKey::SubtitleLogin,
            (FormMode::Register, UserRole::Customer) => TextKey::SubtitleRegisterCustomer,
            (FormMode::Register, UserRole::Seller) => TextKey::SubtitleRegisterSeller,
        }
    }

    /// Submit button label.
    #[must_use]
    pub const fn submit_label(self) -> TextKey {
        match self.mode {
            FormMode::Login => TextKey::SubmitLogin,
            FormMode::Register => TextKey::SubmitRegister,
        }
    }

    /// Prompt before the switch link.
    #[must_use]
    pub const fn switch_prompt(self) -> TextKey {
        match self.mode {
            FormMode::Login => TextKey::SwitchNoAccount,
            FormMode::Register => TextKey::SwitchHaveAccount,
        }
    }

    /// Switch link text.
    #[must_use]
    pub const fn switch_link(self) -> TextKey {
        match self.mode {
            FormMode::Login => TextKey::SwitchSignUp,
            FormMode::Register => TextKey::SwitchLogIn,
        }
    }

    /// Mode the switch link leads to, for the same role.
    #[must_use]
    pub const fn alternate_mode(self) -> FormMode {
        self.mode.alternate()
    }
}
