//! JS-facing handle for the theme store.
//!
//! The page script constructs one `ThemeController` at startup and passes it
//! to every toggle/select callback. There is no module-level singleton.

use wasm_bindgen::prelude::*;

use crate::state::theme::ThemeStore;
use crate::util::dark_mode::{BrowserEnv, Headless, ThemeEnv};

/// Either a live browser or a headless fallback when no window exists.
enum PageEnv {
    Browser(BrowserEnv),
    Headless(Headless),
}

impl ThemeEnv for PageEnv {
    fn is_interactive(&self) -> bool {
        match self {
            Self::Browser(env) => env.is_interactive(),
            Self::Headless(env) => env.is_interactive(),
        }
    }

    fn stored_theme(&self) -> Option<String> {
        match self {
            Self::Browser(env) => env.stored_theme(),
            Self::Headless(env) => env.stored_theme(),
        }
    }

    fn prefers_dark(&self) -> bool {
        match self {
            Self::Browser(env) => env.prefers_dark(),
            Self::Headless(env) => env.prefers_dark(),
        }
    }

    fn set_dark_class(&mut self, enabled: bool) {
        match self {
            Self::Browser(env) => env.set_dark_class(enabled),
            Self::Headless(env) => env.set_dark_class(enabled),
        }
    }

    fn store_theme(&mut self, mode: crate::state::theme::DisplayMode) {
        match self {
            Self::Browser(env) => env.store_theme(mode),
            Self::Headless(env) => env.store_theme(mode),
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[wasm_bindgen]
pub struct ThemeController {
    store: ThemeStore<PageEnv>,
}

#[wasm_bindgen]
impl ThemeController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let env = BrowserEnv::detect().map_or(PageEnv::Headless(Headless), PageEnv::Browser);
        Self { store: ThemeStore::new(env) }
    }

    pub fn toggle(&mut self) {
        self.store.toggle();
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, is_dark: bool) {
        self.store.set_theme(is_dark);
    }

    #[wasm_bindgen(getter, js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.store.is_dark()
    }

    #[wasm_bindgen(getter, js_name = isLight)]
    pub fn is_light(&self) -> bool {
        self.store.is_light()
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}
