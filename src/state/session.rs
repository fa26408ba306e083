#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use url::form_urlencoded;

use crate::net::types::User;
use crate::util::theme::{self, Theme};

/// Cookie set by the identity provider for this application. Carried as
/// configuration for consumers; this crate never erases or rewrites it.
pub const COOKIE_NAME: &str = "coral_app_cookie_";

/// Production identity-provider host.
pub const ID_PROVIDER_PROD: &str = "id.seewo.com";
/// Test/staging identity-provider host, used for local and test deployments.
pub const ID_PROVIDER_TEST: &str = "id.test.seewo.com";

/// Session context handle: current user and theme preference plus mutators.
///
/// Provided once via context by the root provider; descendants obtain it with
/// `expect_context::<Session>()`. The handle is `Copy` (signals are arena
/// references), so it moves freely into event closures.
#[derive(Clone, Copy, Debug)]
pub struct Session {
    pub user: RwSignal<Option<User>>,
    pub theme: RwSignal<Theme>,
}

impl Session {
    /// Create a session with no signed-in user and the given initial theme.
    pub fn new(initial_theme: Theme) -> Self {
        Self {
            user: RwSignal::new(None),
            theme: RwSignal::new(initial_theme),
        }
    }

    /// Replace the current user wholesale. No validation, no I/O.
    pub fn set_user(self, user: Option<User>) {
        self.user.set(user);
    }

    /// Update the theme preference, persist it, and restyle the document.
    pub fn set_theme(self, next: Theme) {
        self.theme.set(next);
        theme::persist(next);
        theme::apply(next);
    }

    /// Log out: clear the user, then navigate to the identity provider.
    ///
    /// The navigation is a terminal full-page redirect; control does not
    /// return to the caller in the browser.
    pub fn logout(self) {
        self.user.set(None);

        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let location = window.location();
            if let Ok(href) = location.href() {
                let target = logout_redirect_url(&href);
                if location.set_href(&target).is_err() {
                    log::warn!("logout navigation failed");
                }
            }
        }
    }
}

/// Pick the identity-provider host for the current page URL.
///
/// Matches substrings of the full href (path and query included), not just
/// the domain, mirroring how deployments are distinguished upstream.
fn id_provider_host(current_href: &str) -> &'static str {
    if current_href.contains("test")
        || current_href.contains("localhost")
        || current_href.contains("127.0.0.1")
    {
        ID_PROVIDER_TEST
    } else {
        ID_PROVIDER_PROD
    }
}

/// Build the identity-provider logout URL for the given page href.
///
/// The current href is passed percent-encoded as the `redirect_url` query
/// parameter so the provider can send the browser back afterwards. The
/// scheme is taken from the href itself, falling back to `https` when the
/// href has no recognizable scheme.
pub fn logout_redirect_url(current_href: &str) -> String {
    let scheme = match current_href.split_once("://") {
        Some((s, _)) if is_valid_scheme(s) => s,
        _ => "https",
    };
    let host = id_provider_host(current_href);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect_url", current_href)
        .finish();
    format!("{scheme}://{host}/logoutToRedirect?{query}")
}

fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
