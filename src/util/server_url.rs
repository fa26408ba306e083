//! API root resolution.

/// The server URL the session endpoints live under.
///
/// Overridable at build time via `CORAL_API_URL`; defaults to the relative
/// `/api` root so the bundle works behind any origin.
pub fn server_url() -> &'static str {
    option_env!("CORAL_API_URL").unwrap_or("/api")
}
