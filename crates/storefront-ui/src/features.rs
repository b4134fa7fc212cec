//! Feature slices (state wiring, actions, views).

pub(crate) mod auth;
