//! Saved-palette management commands.

use crate::cli::common::{
    load_config, open_store, position_to_index, print_colors, print_json, CliError, CliResult,
    PaletteInput,
};
use crate::error::PaletteError;
use crate::models::RgbColor;
use crate::services::{FileStore, ThreadRandom};
use crate::session::Session;
use clap::{Args, Subcommand};

/// Manage saved palettes
#[derive(Args, Debug)]
pub struct SavedArgs {
    #[command(subcommand)]
    command: SavedCommand,
}

#[derive(Subcommand, Debug)]
enum SavedCommand {
    /// List saved palettes
    List(SavedListArgs),
    /// Save a palette
    Save(SavedSaveArgs),
    /// Show one saved palette
    Show(SavedShowArgs),
    /// Delete one saved palette
    Delete(SavedDeleteArgs),
}

/// List saved palettes
#[derive(Args, Debug)]
pub struct SavedListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Save a palette
#[derive(Args, Debug)]
pub struct SavedSaveArgs {
    #[command(flatten)]
    input: PaletteInput,
}

/// Show one saved palette
#[derive(Args, Debug)]
pub struct SavedShowArgs {
    /// 1-based position in the saved list
    position: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Delete one saved palette
#[derive(Args, Debug)]
pub struct SavedDeleteArgs {
    /// 1-based position in the saved list
    position: usize,
}

fn open_session(colors: Vec<RgbColor>) -> CliResult<Session<FileStore, ThreadRandom>> {
    let config = load_config()?;
    let store = open_store(&config)?;
    Ok(Session::with_colors(store, ThreadRandom::new(), colors))
}

impl SavedArgs {
    /// Execute saved subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            SavedCommand::List(args) => args.execute(),
            SavedCommand::Save(args) => args.execute(),
            SavedCommand::Show(args) => args.execute(),
            SavedCommand::Delete(args) => args.execute(),
        }
    }
}

impl SavedListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let session = open_session(Vec::new())?;
        let saved = session.saved();

        if self.json {
            return print_json(&saved);
        }

        if saved.is_empty() {
            println!("No saved palettes.");
            return Ok(());
        }
        for (index, colors) in saved.iter().enumerate() {
            let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
            println!("{:>2}. {}", index + 1, hex.join(" "));
        }
        Ok(())
    }
}

impl SavedSaveArgs {
    /// Execute save command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let mut session = open_session(colors)?;
        let index = session
            .save()
            .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))?;
        println!("✓ Saved as palette {}", index + 1);
        Ok(())
    }
}

impl SavedShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let index = position_to_index(self.position)?;
        let mut session = open_session(Vec::new())?;
        session.load_saved(index)?;

        if self.json {
            print_json(&session.colors())
        } else {
            print_colors(session.colors(), &[]);
            Ok(())
        }
    }
}

impl SavedDeleteArgs {
    /// Execute delete command
    pub fn execute(&self) -> CliResult<()> {
        let index = position_to_index(self.position)?;
        let mut session = open_session(Vec::new())?;
        session.delete_saved(index).map_err(|e| match e.downcast::<PaletteError>() {
            Ok(error) => CliError::from(error),
            Err(e) => CliError::io(format!("Failed to delete palette: {e:#}")),
        })?;
        println!("✓ Deleted palette {}", self.position);
        Ok(())
    }
}
