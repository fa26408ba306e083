//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notify`) so individual components
//! can depend on small focused handles. Each handle is a `Copy` struct of
//! signals provided once via Leptos context by the root provider.

pub mod notify;
pub mod session;
