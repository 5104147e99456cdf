//! Export functionality for palettes.
//!
//! JSON export and import live in [`crate::services::codec`]. This module
//! covers the style-sheet renderings.

pub mod stylesheet;

pub use stylesheet::{render_stylesheet, StyleFormat};
