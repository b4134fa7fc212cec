#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Storefront authentication endpoints.
//!
//! The web UI builds requests from these types and decodes responses into them,
//! so the wire shape of a login or registration lives in one place. Optional
//! fields are omitted from the JSON body rather than sent as `null`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the authentication form signs an existing account in or creates one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FormMode {
    /// Sign in with email and password.
    Login,
    /// Create a new account.
    Register,
}

impl FormMode {
    /// Display name, also used to build endpoint paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// The other mode, used for the "switch" link under the form.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

impl fmt::Display for FormMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account role the form authenticates as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Shopper account.
    Customer,
    /// Shop owner account.
    Seller,
}

impl UserRole {
    /// Display name, also used to build endpoint paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Seller => "Seller",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path of the authentication endpoint for a role and mode (`/SellerRegister`).
#[must_use]
pub fn auth_endpoint(role: UserRole, mode: FormMode) -> String {
    format!("/{role}{mode}")
}

/// Request body sent to the authentication endpoint.
///
/// Login sends only `email` and `password`; registration adds `name` and
/// `role`, and seller registration also carries `shopName`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthFields {
    /// Display name of the new account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email.
    pub email: String,
    /// Plaintext password; the backend hashes it.
    pub password: String,
    /// Role of the new account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Shop name for seller registrations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
}

impl AuthFields {
    /// Credentials for signing in.
    #[must_use]
    pub const fn login(email: String, password: String) -> Self {
        Self {
            name: None,
            email,
            password,
            role: None,
            shop_name: None,
        }
    }

    /// Registration body for a customer account.
    #[must_use]
    pub const fn customer(name: String, email: String, password: String) -> Self {
        Self {
            name: Some(name),
            email,
            password,
            role: Some(UserRole::Customer),
            shop_name: None,
        }
    }

    /// Registration body for a seller account and its shop.
    #[must_use]
    pub const fn seller(name: String, email: String, password: String, shop_name: String) -> Self {
        Self {
            name: Some(name),
            email,
            password,
            role: Some(UserRole::Seller),
            shop_name: Some(shop_name),
        }
    }
}

impl fmt::Debug for AuthFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthFields")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("shop_name", &self.shop_name)
            .finish()
    }
}

/// Account returned by a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// Backend identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email.
    pub email: String,
    /// Role the account was authenticated as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    /// Shop name for sellers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
}

/// Message body returned when the backend rejects credentials or a registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    /// Human-readable reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Failure talking to the authentication endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The backend answered but refused the request.
    #[error("authentication rejected")]
    Rejected {
        /// Server-provided reason.
        message: String,
    },
    /// The request never produced a usable response.
    #[error("authentication transport failed")]
    Transport {
        /// Transport error detail.
        detail: String,
    },
    /// The response body could not be decoded.
    #[error("authentication response decode failed")]
    Decode {
        /// Decoder error detail.
        detail: String,
    },
}

impl AuthError {
    /// Whether the failure belongs to the network class rather than a server verdict.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Decode { .. })
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            detail: err.to_string(),
        }
    }
}

/// Fallback reason when a rejection carries no message.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Authentication failed.";

/// Decode an authentication response.
///
/// A body carrying an `email` is the authenticated account. Any other body is a
/// rejection carrying the server's `message`. Non-success statuses without a
/// readable message are treated as transport failures.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] when the server refused the request,
/// [`AuthError::Decode`] when a success body is malformed, and
/// [`AuthError::Transport`] for non-success statuses without a message.
pub fn decode_auth_response(status: u16, body: &str) -> Result<AuthenticatedUser, AuthError> {
    let success = (200..300).contains(&status);
    let value = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value,
        Err(err) if success => return Err(err.into()),
        Err(_) => {
            return Err(AuthError::Transport {
                detail: format!("unexpected status {status}"),
            });
        }
    };
    if success && value.get("email").is_some_and(serde_json::Value::is_string) {
        return Ok(serde_json::from_value(value)?);
    }
    let message = serde_json::from_value::<ApiMessage>(value)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.is_empty());
    match message {
        Some(message) => Err(AuthError::Rejected { message }),
        None if success => Err(AuthError::Rejected {
            message: DEFAULT_REJECTION_MESSAGE.to_string(),
        }),
        None => Err(AuthError::Transport {
            detail: format!("unexpected status {status}"),
        }),
    }
}
