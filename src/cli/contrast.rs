//! Contrast and accessibility report commands.

use crate::cli::common::{print_json, CliResult, PaletteInput};
use crate::models::RgbColor;
use crate::services::{AccessibilityReport, ContrastResult};
use clap::Args;
use serde::Serialize;

/// Check the WCAG contrast between two colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Background color (#RRGGBB)
    #[arg(value_parser = parse_color)]
    pub background: RgbColor,

    /// Foreground color (#RRGGBB)
    #[arg(value_parser = parse_color)]
    pub foreground: RgbColor,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Contrast of every palette color against white, black and each other
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub input: PaletteInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ContrastOutput {
    background: RgbColor,
    foreground: RgbColor,
    #[serde(flatten)]
    result: ContrastResult,
}

fn parse_color(value: &str) -> Result<RgbColor, String> {
    RgbColor::from_hex(value).map_err(|e| e.to_string())
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let result = ContrastResult::evaluate(self.background, self.foreground);

        if self.json {
            print_json(&ContrastOutput {
                background: self.background,
                foreground: self.foreground,
                result,
            })?;
        } else {
            println!("{} on {}: {}", self.foreground, self.background, result);
        }
        Ok(())
    }
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let report = AccessibilityReport::build(&colors);

        if self.json {
            return print_json(&report);
        }

        print!("{}", report.render());
        let pairs = report.readable_pairs();
        println!();
        if pairs.is_empty() {
            println!("No palette pair reaches AA for normal text.");
        } else {
            let listed: Vec<String> = pairs.iter().map(|(a, b)| format!("{a}+{b}")).collect();
            println!("Pairs readable as body text (AA): {}", listed.join(", "));
        }
        Ok(())
    }
}
