//! Paleta Library
//!
//! This library provides the core of the Paleta color palette tool: harmony
//! based generation with locked colors, brightness adjustment, WCAG contrast
//! evaluation, share links, JSON export/import, saved palettes and style-sheet
//! output. The `paleta` binary is a thin CLI over it.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod models;
pub mod preview;
pub mod services;
pub mod session;

pub use error::{PaletteError, PaletteResult};
pub use session::Session;
