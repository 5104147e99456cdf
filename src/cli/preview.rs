//! Preview command.

use crate::cli::common::{CliResult, PaletteInput};
use crate::preview::render_preview;
use clap::Args;

/// Show a palette as terminal swatches and a sample card
#[derive(Debug, Clone, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: PaletteInput,
}

impl PreviewArgs {
    /// Execute the preview command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        print!("{}", render_preview(&colors));
        Ok(())
    }
}
