//! Generate command for harmony palettes.

use crate::cli::common::{
    load_config, open_store, position_to_index, print_colors, print_json, CliError, CliResult,
    PaletteInput,
};
use crate::constants::MAX_PALETTE_SIZE;
use crate::models::{HarmonyMode, RgbColor};
use crate::services::AnyRandom;
use crate::session::Session;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeSet;

/// Generate a palette from a color harmony
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Harmony mode (defaults to the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<HarmonyMode>,

    /// Number of colors (defaults to the configured size)
    #[arg(short, long, value_name = "N", conflicts_with_all = ["colors", "from"])]
    pub size: Option<usize>,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Start from an existing palette instead of random colors
    #[command(flatten)]
    pub input: PaletteInput,

    /// 1-based positions to keep unchanged, e.g. "1,3"
    #[arg(short, long, value_name = "POS", value_delimiter = ',')]
    pub lock: Vec<usize>,

    /// Append the result to the saved palettes
    #[arg(long)]
    pub save: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct GenerateOutput<'a> {
    mode: HarmonyMode,
    colors: &'a [RgbColor],
    locked: &'a [bool],
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mode = self.mode.unwrap_or(config.generator.default_mode);
        let size = self.size.unwrap_or(config.generator.palette_size);
        if !(1..=MAX_PALETTE_SIZE).contains(&size) {
            return Err(CliError::validation(format!(
                "Size must be between 1 and {MAX_PALETTE_SIZE}, got {size}"
            )));
        }

        let store = open_store(&config)?;
        let rng = AnyRandom::from_seed(self.seed);
        let mut session = match self.input.read()? {
            Some(colors) => Session::with_colors(store, rng, colors),
            None => Session::with_size(store, rng, size),
        };

        let positions: BTreeSet<usize> = self.lock.iter().copied().collect();
        for position in positions {
            session.toggle_lock(position_to_index(position)?)?;
        }

        session.set_mode(mode);
        session.regenerate();

        if self.save {
            session
                .save()
                .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        }

        let palette = session.palette();
        if self.json {
            print_json(&GenerateOutput {
                mode,
                colors: palette.colors(),
                locked: palette.locks(),
            })?;
        } else {
            println!("{mode} palette:");
            print_colors(palette.colors(), palette.locks());
            if self.save {
                println!("Saved as palette {}.", session.saved().len());
            }
        }

        Ok(())
    }
}
