//! Display mode preference store.
//!
//! DESIGN
//! ======
//! One authoritative `dark_mode` flag, mirrored onto the document root class
//! and persistent storage after every mutation. The store owns its
//! [`ThemeEnv`]; hosts create exactly one store per page and hand `&mut`
//! access to their UI callbacks.
//!
//! Precedence on initialization: persisted choice, then system preference,
//! then light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

use crate::util::dark_mode::ThemeEnv;

/// Visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// Persisted string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Permissive parse of a persisted value: only `"dark"` is dark.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the initial flag from the persisted value and ambient preference.
#[must_use]
pub fn resolve_dark(stored: Option<&str>, prefers_dark: bool) -> bool {
    match stored {
        Some(raw) => DisplayMode::from_stored(raw).is_dark(),
        None => prefers_dark,
    }
}

/// Theme preference controller.
#[derive(Debug)]
pub struct ThemeStore<E: ThemeEnv> {
    dark_mode: bool,
    env: E,
}

impl<E: ThemeEnv> ThemeStore<E> {
    /// Build the store and run [`ThemeStore::initialize`].
    pub fn new(env: E) -> Self {
        let mut store = Self { dark_mode: false, env };
        store.initialize();
        store
    }

    /// Re-read the persisted and ambient preference and apply the result.
    /// No-op outside an interactive environment.
    pub fn initialize(&mut self) {
        if !self.env.is_interactive() {
            return;
        }
        let stored = self.env.stored_theme();
        let prefers_dark = self.env.prefers_dark();
        self.dark_mode = resolve_dark(stored.as_deref(), prefers_dark);
        log::debug!("theme initialized: stored={stored:?} prefers_dark={prefers_dark} -> {}", self.mode());
        self.sync();
    }

    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.sync();
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
        self.sync();
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    pub fn is_light(&self) -> bool {
        !self.dark_mode
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_dark(self.dark_mode)
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Mirror the flag onto the document class and storage.
    fn sync(&mut self) {
        if !self.env.is_interactive() {
            return;
        }
        let mode = self.mode();
        self.env.set_dark_class(mode.is_dark());
        self.env.store_theme(mode);
        log::debug!("theme synced: {mode}");
    }
}
