//! Theme preference: persistence and document styling.
//!
//! Reads the stored preference from `localStorage` under a fixed key and
//! applies the `dark-mode` class to the `<html>` element. Persisting writes
//! back to the same key so the choice survives a reload. Requires a browser
//! environment; inert under SSR.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// localStorage key holding the literal theme string.
pub const STORAGE_KEY: &str = "darkmode";

/// Light/dark display mode preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Decode a stored value. Only the exact string `"dark"` yields
    /// [`Theme::Dark`]; absence or anything else yields [`Theme::Light`].
    pub fn from_stored(stored: Option<&str>) -> Self {
        if stored == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The literal string written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Read the persisted theme preference, defaulting to light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Persist the theme preference to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply or remove the `dark-mode` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if theme.is_dark() {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
