//! Reusable view components.

pub(crate) mod captcha;
pub(crate) mod popup;
