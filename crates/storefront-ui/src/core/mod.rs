//! Core, DOM-free primitives and helpers for the authentication UI.
pub mod captcha;
pub mod form;
pub mod reducer;
pub mod session;
pub mod store;
pub mod strength;
