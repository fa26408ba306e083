#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a notice stays visible before it is dropped.
pub const NOTICE_TTL_MS: u32 = 5_000;

/// Severity of a transient notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A one-shot user-facing message, e.g. a failed current-user fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Plain notice bookkeeping, kept separate from the signal so it can be
/// exercised without a reactive runtime.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Append a notice and return its id.
    pub fn push(&mut self, level: NoticeLevel, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, level, text });
        id
    }

    /// Remove a notice by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Context handle for transient notices.
#[derive(Clone, Copy, Debug)]
pub struct Notices(pub RwSignal<NoticeState>);

impl Notices {
    pub fn new() -> Self {
        Self(RwSignal::new(NoticeState::default()))
    }

    /// Emit an error notice that expires after [`NOTICE_TTL_MS`].
    pub fn error(self, text: impl Into<String>) {
        self.emit(NoticeLevel::Error, text.into());
    }

    /// Emit an informational notice that expires after [`NOTICE_TTL_MS`].
    pub fn info(self, text: impl Into<String>) {
        self.emit(NoticeLevel::Info, text.into());
    }

    fn emit(self, level: NoticeLevel, text: String) {
        let id = self.0.try_update(|state| state.push(level, text));

        // Expiry runs in the browser only; SSR output never lives long
        // enough for a TTL to matter.
        #[cfg(feature = "hydrate")]
        if let Some(id) = id {
            let handle = self.0;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TTL_MS).await;
                handle.try_update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}
