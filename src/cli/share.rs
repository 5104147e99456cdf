//! Share-link commands.

use crate::cli::common::{load_config, print_colors, print_json, CliResult, PaletteInput};
use crate::clipboard;
use crate::services::codec;
use clap::Args;

/// Build a link that carries a palette
#[derive(Debug, Clone, Args)]
pub struct ShareArgs {
    #[command(flatten)]
    pub input: PaletteInput,

    /// Page URL to attach the palette to (defaults to the configured URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Also copy the link to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Decode a share link or bare token
#[derive(Debug, Clone, Args)]
pub struct OpenArgs {
    /// Share link or token
    #[arg(value_name = "URL_OR_TOKEN")]
    pub link: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShareArgs {
    /// Execute the share command
    pub fn execute(&self) -> CliResult<()> {
        let colors = self.input.require()?;
        let base_url = match &self.base_url {
            Some(url) => url.clone(),
            None => load_config()?.share.base_url,
        };

        let url = codec::share_url(&base_url, &colors)?;
        println!("{url}");

        if self.copy {
            match clipboard::copy_text(&url) {
                Ok(()) => eprintln!("Link copied to clipboard."),
                Err(e) => eprintln!("Warning: {e}"),
            }
        }
        Ok(())
    }
}

impl OpenArgs {
    /// Execute the open command
    pub fn execute(&self) -> CliResult<()> {
        let colors = codec::decode_shared(&self.link)?;

        if self.json {
            print_json(&colors)?;
        } else {
            print_colors(&colors, &[]);
        }
        Ok(())
    }
}
