//! Routing definitions for the Storefront UI.
use storefront_api_models::{FormMode, UserRole};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/Customerlogin")]
    CustomerLogin,
    #[at("/Customerregister")]
    CustomerRegister,
    #[at("/Sellerlogin")]
    SellerLogin,
    #[at("/Sellerregister")]
    SellerRegister,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Authentication page for a role and mode.
    pub(crate) const fn auth(role: UserRole, mode: FormMode) -> Self {
        match (role, mode) {
            (UserRole::Customer, FormMode::Login) => Self::CustomerLogin,
            (UserRole::Customer, FormMode::Register) => Self::CustomerRegister,
            (UserRole::Seller, FormMode::Login) => Self::SellerLogin,
            (UserRole::Seller, FormMode::Register) => Self::SellerRegister,
        }
    }

    /// Role and mode rendered by an authentication route.
    pub(crate) const fn auth_form(&self) -> Option<(UserRole, FormMode)> {
        match self {
            Self::CustomerLogin => Some((UserRole::Customer, FormMode::Login)),
            Self::CustomerRegister => Some((UserRole::Customer, FormMode::Register)),
            Self::SellerLogin => Some((UserRole::Seller, FormMode::Login)),
            Self::SellerRegister => Some((UserRole::Seller, FormMode::Register)),
            Self::Home | Self::NotFound => None,
        }
    }
}
