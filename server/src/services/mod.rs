//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own document and calculation logic so route handlers can
//! stay focused on protocol translation (origin, headers, status codes).

pub mod heatpump;
pub mod metadata;
