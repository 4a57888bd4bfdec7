//! Preset loading and overlay.
//!
//! Presets are TOML files holding a shareable partial config. They sit
//! beneath the user's `weft.toml`: anything the user sets wins, and the
//! preset fills the rest.

mod apply;
mod loader;
mod types;

pub use apply::apply_preset;
pub use loader::load_preset;
pub use types::PresetOverlay;
