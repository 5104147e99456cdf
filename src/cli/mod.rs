//! CLI command handlers for Paleta.
//!
//! Every subcommand is a clap `Args` struct with an `execute` method that
//! returns [`CliResult`]. `main.rs` maps failures to exit codes.

pub mod brightness;
pub mod common;
pub mod config;
pub mod contrast;
pub mod css;
pub mod export;
pub mod generate;
pub mod preview;
pub mod saved;
pub mod session;
pub mod share;

// Re-export types used by main.rs and tests
pub use brightness::BrightnessArgs;
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::{ContrastArgs, ReportArgs};
pub use css::CssArgs;
pub use export::{ExportArgs, ImportArgs};
pub use generate::GenerateArgs;
pub use preview::PreviewArgs;
pub use saved::SavedArgs;
pub use session::SessionArgs;
pub use share::{OpenArgs, ShareArgs};
