//! Authentication feature wiring.
//!
//! # Design
//! - The page owns one `AuthFormState` driven through the reducer in `core::reducer`.
//! - Network calls live in the actions layer and report back through the store.

pub(crate) mod actions;
pub(crate) mod view;
