//! Environment sinks for the display mode preference.
//!
//! Reads the user's preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. The theme store never talks to the browser
//! directly; it goes through a [`ThemeEnv`] so headless and test contexts can
//! swap in a different implementation.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior. Storage
//! failures (private mode, quota, disabled storage) are swallowed so the
//! visible class still tracks the in-memory flag.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod tests;

use crate::state::theme::DisplayMode;

/// `localStorage` key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "themeSvelte";

/// Class token placed on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Media query for the system-level color scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Capability surface the theme store synchronizes against.
pub trait ThemeEnv {
    /// Whether this environment has a document and persistent storage.
    /// Non-interactive environments are never read from or written to.
    fn is_interactive(&self) -> bool {
        true
    }

    /// Raw persisted preference, if any.
    fn stored_theme(&self) -> Option<String>;

    /// Ambient "system prefers dark" signal.
    fn prefers_dark(&self) -> bool;

    /// Add or remove the dark marker class on the document root.
    fn set_dark_class(&mut self, enabled: bool);

    /// Persist the mode under [`STORAGE_KEY`].
    fn store_theme(&mut self, mode: DisplayMode);
}

// =============================================================================
// HEADLESS
// =============================================================================

/// Server-side / offline evaluation: nothing to read, nothing to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Headless;

impl ThemeEnv for Headless {
    fn is_interactive(&self) -> bool {
        false
    }

    fn stored_theme(&self) -> Option<String> {
        None
    }

    fn prefers_dark(&self) -> bool {
        false
    }

    fn set_dark_class(&mut self, _enabled: bool) {}

    fn store_theme(&mut self, _mode: DisplayMode) {}
}

// =============================================================================
// MEMORY
// =============================================================================

/// In-process stand-in for a browser: a single storage slot, a class flag,
/// and a fixed ambient preference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    pub stored: Option<String>,
    pub system_dark: bool,
    pub dark_class: bool,
    /// Number of storage writes, so callers can observe sync activity.
    pub writes: usize,
}

impl MemoryEnv {
    #[must_use]
    pub fn new(stored: Option<&str>, system_dark: bool) -> Self {
        Self { stored: stored.map(str::to_owned), system_dark, dark_class: false, writes: 0 }
    }
}

impl ThemeEnv for MemoryEnv {
    fn stored_theme(&self) -> Option<String> {
        self.stored.clone()
    }

    fn prefers_dark(&self) -> bool {
        self.system_dark
    }

    fn set_dark_class(&mut self, enabled: bool) {
        self.dark_class = enabled;
    }

    fn store_theme(&mut self, mode: DisplayMode) {
        self.stored = Some(mode.as_str().to_owned());
        self.writes += 1;
    }
}

// =============================================================================
// BROWSER
// =============================================================================

/// Live browser environment backed by `web_sys`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserEnv {
    window: web_sys::Window,
}

#[cfg(feature = "hydrate")]
impl BrowserEnv {
    /// Returns `None` outside a window context (workers, SSR).
    pub fn detect() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        self.window.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl ThemeEnv for BrowserEnv {
    fn stored_theme(&self) -> Option<String> {
        self.storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(PREFERS_DARK_QUERY)
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn set_dark_class(&mut self, enabled: bool) {
        let Some(el) = self.window.document().and_then(|doc| doc.document_element()) else {
            return;
        };
        let class_list = el.class_list();
        if enabled {
            let _ = class_list.add_1(DARK_CLASS);
        } else {
            let _ = class_list.remove_1(DARK_CLASS);
        }
    }

    fn store_theme(&mut self, mode: DisplayMode) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(STORAGE_KEY, mode.as_str());
        }
    }
}
