//! Style-sheet command.

use crate::cli::common::{load_config, CliResult, PaletteInput};
use crate::clipboard;
use crate::export::{render_stylesheet, StyleFormat};
use clap::Args;

/// Print a palette as CSS custom properties or SCSS variables
#[derive(Debug, Clone, Args)]
pub struct CssArgs {
    #[command(flatten)]
    pub input: PaletteInput,

    /// Output flavour (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<StyleFormat>,

    /// Also copy the style sheet to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl CssArgs {
    /// Execute the css command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let format = match self.format {
            Some(format) => format,
            None => load_config()?.export.stylesheet_format,
        };

        let sheet = render_stylesheet(&colors, format);
        print!("{sheet}");

        if self.copy {
            match clipboard::copy_text(&sheet) {
                Ok(()) => eprintln!("Copied {format} to clipboard."),
                Err(e) => eprintln!("Warning: {e}"),
            }
        }
        Ok(())
    }
}
