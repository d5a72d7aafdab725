//! # client
//!
//! Browser side of the ThermaSim landing page: the dark/light display mode
//! store and its environment sinks. Built as a WASM module with the `hydrate`
//! feature; without it the crate is a plain library usable in tests and
//! headless contexts.

#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod state;
pub mod util;

pub use state::theme::{DisplayMode, ThemeStore};
pub use util::dark_mode::{Headless, MemoryEnv, ThemeEnv};
