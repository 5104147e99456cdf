//! Paleta - color palette generator
//!
//! Generates harmony-based palettes, checks WCAG contrast, and encodes
//! palettes as share links, JSON files and style sheets.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paleta::cli::{
    BrightnessArgs, CliResult, ConfigArgs, ContrastArgs, CssArgs, ExitCode, ExportArgs,
    GenerateArgs, ImportArgs, OpenArgs, PreviewArgs, ReportArgs, SavedArgs, SessionArgs,
    ShareArgs,
};

/// Paleta - color palette generator with harmony rules and contrast checks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a palette from a color harmony
    Generate(GenerateArgs),
    /// Shift every color lighter or darker
    Brightness(BrightnessArgs),
    /// Check the contrast between two colors
    Contrast(ContrastArgs),
    /// Accessibility report for a palette
    Report(ReportArgs),
    /// Print a palette as CSS or SCSS
    Css(CssArgs),
    /// Build a share link for a palette
    Share(ShareArgs),
    /// Decode a share link or token
    Open(OpenArgs),
    /// Write a palette to a JSON file
    Export(ExportArgs),
    /// Read and validate a palette file
    Import(ImportArgs),
    /// Manage saved palettes
    Saved(SavedArgs),
    /// Show a palette in the terminal
    Preview(PreviewArgs),
    /// Start an interactive editing session
    Session(SessionArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Brightness(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Report(args) => args.execute(),
            Self::Css(args) => args.execute(),
            Self::Share(args) => args.execute(),
            Self::Open(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Import(args) => args.execute(),
            Self::Saved(args) => args.execute(),
            Self::Preview(args) => args.execute(),
            Self::Session(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}
