//! Browser utility modules shared across the crate.

pub mod server_url;
pub mod theme;
