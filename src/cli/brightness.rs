//! Brightness command.

use crate::cli::common::{print_colors, print_json, CliResult, PaletteInput};
use crate::services::adjust_brightness;
use clap::Args;

/// Shift every color of a palette lighter or darker
#[derive(Debug, Clone, Args)]
pub struct BrightnessArgs {
    /// Channel offset, from -100 to 100
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i16).range(-100..=100)
    )]
    pub delta: i16,

    #[command(flatten)]
    pub input: PaletteInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl BrightnessArgs {
    /// Execute the brightness command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let adjusted = adjust_brightness(&colors, self.delta);

        if self.json {
            print_json(&adjusted)?;
        } else {
            print_colors(&adjusted, &[]);
        }
        Ok(())
    }
}
