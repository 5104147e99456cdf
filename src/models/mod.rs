//! Data models for colors, palettes and harmony modes.
//!
//! Models are independent of the generator, codec and session layers.

pub mod harmony;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use harmony::HarmonyMode;
pub use palette::Palette;
pub use rgb::{Hsl, RgbColor};
