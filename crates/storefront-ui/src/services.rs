//! Browser services (HTTP).

pub(crate) mod api;
