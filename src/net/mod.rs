//! Network layer: wire types and REST helpers for the session endpoints.

pub mod api;
pub mod types;
