//! Root application component providing the session context.

use leptos::prelude::*;

use crate::state::notify::Notices;
use crate::state::session::Session;
use crate::util::theme;

/// Root component mounted by the WASM entry point.
///
/// Real applications embed [`SessionProvider`] around their own root element;
/// this exists so a standalone bundle of the crate still mounts cleanly.
#[component]
pub fn App() -> impl IntoView {
    view! { <SessionProvider/> }
}

/// Session context provider.
///
/// Wraps the application root and publishes a [`Session`] handle (current
/// user + theme preference + mutators) and a [`Notices`] handle to every
/// descendant. Created once per page lifetime:
///
/// - reads the persisted theme preference and applies it to the document,
/// - fires the one-shot current-user fetch,
/// - renders its children unchanged.
#[component]
pub fn SessionProvider(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let notices = Notices::new();
    provide_context(notices);

    let session = Session::new(theme::read_preference());
    theme::apply(session.theme.get_untracked());
    provide_context(session);

    // One best-effort fetch per mount. No retry, no unmount guard: a late
    // completion writes to the (arena-allocated) user signal regardless.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Ok(user) => session.user.set(Some(user)),
            Err(err) => {
                log::warn!("current-user fetch failed: {err}");
                notices.error(err.to_string());
            }
        }
    });

    children.map(|render| render())
}
