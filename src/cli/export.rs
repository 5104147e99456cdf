//! Export and import commands for palette files.

use crate::cli::common::{
    load_config, open_store, print_colors, print_json, CliError, CliResult, PaletteInput,
};
use crate::services::codec;
use crate::services::SavedPaletteStore;
use clap::Args;
use std::path::PathBuf;

/// Write a palette to a JSON file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: PaletteInput,

    /// Output path (defaults to the configured file name)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Read and validate a palette file
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// JSON palette file (array of "#RRGGBB" strings)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Append the imported palette to the saved palettes
    #[arg(long)]
    pub save: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let output_path = match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(load_config()?.export.file_name),
        };

        codec::export_to_file(&output_path, &colors)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Exported {} colors to: {}",
            colors.len(),
            output_path.display()
        );
        Ok(())
    }
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self) -> CliResult<()> {
        let colors = codec::import_from_file(&self.file)?;

        if self.save {
            let config = load_config()?;
            let store = open_store(&config)?;
            let mut saved = store.load();
            saved.push(colors.clone());
            store
                .persist(&saved)
                .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        }

        if self.json {
            print_json(&colors)?;
        } else {
            println!("✓ Imported {} colors from {}", colors.len(), self.file.display());
            print_colors(&colors, &[]);
        }
        Ok(())
    }
}
