//! Interactive palette session.
//!
//! A line-oriented shell over [`Session`]. Each line is one command; failures
//! are printed and the shell keeps running.

use crate::cli::common::{load_config, open_store, CliError, CliResult, PaletteInput};
use crate::config::Config;
use crate::error::PaletteError;
use crate::export::StyleFormat;
use crate::models::{HarmonyMode, RgbColor};
use crate::preview::render_preview;
use crate::services::{AnyRandom, ContrastResult, RandomSource, SavedPaletteStore};
use crate::session::Session;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Start an interactive editing session
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Seed for reproducible generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Initial harmony mode (defaults to the configured mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<HarmonyMode>,

    /// Start from an existing palette instead of random colors
    #[command(flatten)]
    pub input: PaletteInput,
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let store = open_store(&config)?;
        let rng = AnyRandom::from_seed(self.seed);
        let mut session = match self.input.read()? {
            Some(colors) => Session::with_colors(store, rng, colors),
            None => Session::with_size(store, rng, config.generator.palette_size),
        };
        session.set_mode(self.mode.unwrap_or(config.generator.default_mode));

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_shell(&mut session, &config, stdin.lock(), stdout.lock())
            .map_err(|e| CliError::io(format!("Session I/O failed: {e}")))
    }
}

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// List commands
    Help,
    /// Print the palette
    Show,
    /// Regenerate unlocked colors
    Generate,
    /// Select a harmony mode
    Mode(HarmonyMode),
    /// Append a random color
    Add,
    /// Delete a color (0-based)
    Delete(usize),
    /// Toggle a lock (0-based)
    Lock(usize),
    /// Replace a color (0-based)
    Set(usize, String),
    /// Move the brightness slider
    Brightness(i16),
    /// Save the palette
    Save,
    /// List saved palettes
    Saved,
    /// Load a saved palette (0-based)
    Load(usize),
    /// Delete a saved palette (0-based)
    Unsave(usize),
    /// Print a share link
    Share(Option<String>),
    /// Load a share link or token
    Open(String),
    /// Write the export file
    Export(Option<PathBuf>),
    /// Replace the palette from a file
    Import(PathBuf),
    /// Print the accessibility report
    Report,
    /// Contrast between two palette positions (0-based)
    Contrast(usize, usize),
    /// Print a style sheet
    Css(Option<StyleFormat>),
    /// Show swatches
    Preview,
    /// Leave the shell
    Quit,
}

const HELP: &str = "\
Commands (positions start at 1; quote arguments that contain spaces):
  show                 print the palette
  gen                  regenerate unlocked colors
  mode <name>          analogous, monochromatic, triadic or complementary
  add                  append a random color
  del <pos>            delete a color
  lock <pos>           lock or unlock a color
  set <pos> <hex>      replace a color
  bright <-100..100>   move the brightness slider
  save | saved         save the palette | list saved palettes
  load <n> | unsave <n>  load or delete a saved palette
  share [base-url]     print a share link
  open <link|token>    load a shared palette
  export [file]        write the palette as JSON
  import <file>        replace the palette from a JSON file
  report               contrast report
  contrast <a> <b>     contrast between two colors
  css [css|scss]       print a style sheet
  preview              show swatches
  quit                 leave
";

fn position(arg: Option<&str>) -> Result<usize, String> {
    let arg = arg.ok_or("missing position")?;
    let position: usize = arg
        .parse()
        .map_err(|_| format!("'{arg}' is not a position"))?;
    position
        .checked_sub(1)
        .ok_or_else(|| "positions start at 1".to_string())
}

/// Splits a line on whitespace. Single or double quotes group a word that
/// contains spaces.
fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("missing closing {q}"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parses one shell line. Blank lines parse to `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let words = split_words(line)?;
    let mut words = words.iter().map(String::as_str);
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match name.to_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "show" | "ls" => ShellCommand::Show,
        "gen" | "generate" => ShellCommand::Generate,
        "mode" => ShellCommand::Mode(arg.ok_or("missing mode")?.parse()?),
        "add" => ShellCommand::Add,
        "del" | "delete" => ShellCommand::Delete(position(arg)?),
        "lock" => ShellCommand::Lock(position(arg)?),
        "set" => {
            let index = position(arg)?;
            let hex = words.next().ok_or("missing color")?;
            ShellCommand::Set(index, hex.to_string())
        }
        "bright" | "brightness" => {
            let arg = arg.ok_or("missing value")?;
            let value: i16 = arg
                .parse()
                .map_err(|_| format!("'{arg}' is not a number between -100 and 100"))?;
            ShellCommand::Brightness(value)
        }
        "save" => ShellCommand::Save,
        "saved" => ShellCommand::Saved,
        "load" => ShellCommand::Load(position(arg)?),
        "unsave" => ShellCommand::Unsave(position(arg)?),
        "share" => ShellCommand::Share(arg.map(str::to_string)),
        "open" => ShellCommand::Open(arg.ok_or("missing link or token")?.to_string()),
        "export" => ShellCommand::Export(arg.map(PathBuf::from)),
        "import" => ShellCommand::Import(PathBuf::from(arg.ok_or("missing file")?)),
        "report" => ShellCommand::Report,
        "contrast" => {
            let a = position(arg)?;
            let b = position(words.next())?;
            ShellCommand::Contrast(a, b)
        }
        "css" => ShellCommand::Css(arg.map(str::parse::<StyleFormat>).transpose()?),
        "preview" => ShellCommand::Preview,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

fn write_palette<S, R, W>(session: &Session<S, R>, out: &mut W) -> io::Result<()>
where
    S: SavedPaletteStore,
    R: RandomSource,
    W: Write,
{
    let palette = session.palette();
    writeln!(
        out,
        "[{}] brightness {:+}",
        session.mode(),
        session.brightness()
    )?;
    for (index, (color, locked)) in palette.iter().enumerate() {
        let marker = if locked { "  [locked]" } else { "" };
        writeln!(out, "{:>2}. {}{}", index + 1, color, marker)?;
    }
    Ok(())
}

fn write_colors<W: Write>(out: &mut W, colors: &[RgbColor]) -> io::Result<()> {
    let hex: Vec<String> = colors.iter().map(RgbColor::to_hex).collect();
    writeln!(out, "{}", hex.join(" "))
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_shell<S, R, I, W>(
    session: &mut Session<S, R>,
    config: &Config,
    input: I,
    mut out: W,
) -> io::Result<()>
where
    S: SavedPaletteStore,
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    writeln!(out, "Type 'help' for commands.")?;
    write_palette(session, &mut out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "paleta> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                continue;
            }
        };

        if command == ShellCommand::Quit {
            break;
        }

        if let Err(e) = apply(session, config, command, &mut out)? {
            writeln!(out, "Error: {e}")?;
        }
    }

    Ok(())
}

/// Applies one command. The outer result is output failure, the inner one a
/// command failure to report.
fn apply<S, R, W>(
    session: &mut Session<S, R>,
    config: &Config,
    command: ShellCommand,
    out: &mut W,
) -> io::Result<Result<(), String>>
where
    S: SavedPaletteStore,
    R: RandomSource,
    W: Write,
{
    let outcome: Result<bool, String> = match command {
        ShellCommand::Help => {
            write!(out, "{HELP}")?;
            Ok(false)
        }
        ShellCommand::Show => Ok(true),
        ShellCommand::Generate => {
            session.regenerate();
            Ok(true)
        }
        ShellCommand::Mode(mode) => {
            session.set_mode(mode);
            writeln!(out, "Mode set to {mode}. Run 'gen' to apply it.")?;
            Ok(false)
        }
        ShellCommand::Add => {
            session.add_color();
            Ok(true)
        }
        ShellCommand::Delete(index) => session
            .delete_color(index)
            .map(|_| true)
            .map_err(|e| e.to_string()),
        ShellCommand::Lock(index) => session
            .toggle_lock(index)
            .map(|_| true)
            .map_err(|e| e.to_string()),
        ShellCommand::Set(index, hex) => session
            .set_color_hex(index, &hex)
            .map(|()| true)
            .map_err(|e| e.to_string()),
        ShellCommand::Brightness(value) => {
            session.set_brightness(value);
            Ok(true)
        }
        ShellCommand::Save => match session.save() {
            Ok(index) => {
                writeln!(out, "Saved as palette {}.", index + 1)?;
                Ok(false)
            }
            Err(e) => Err(format!("could not save: {e:#}")),
        },
        ShellCommand::Saved => {
            if session.saved().is_empty() {
                writeln!(out, "No saved palettes.")?;
            }
            for (index, colors) in session.saved().iter().enumerate() {
                write!(out, "{:>2}. ", index + 1)?;
                write_colors(out, colors)?;
            }
            Ok(false)
        }
        ShellCommand::Load(index) => session
            .load_saved(index)
            .map(|()| true)
            .map_err(|e| e.to_string()),
        ShellCommand::Unsave(index) => match session.delete_saved(index) {
            Ok(_) => {
                writeln!(out, "Deleted saved palette {}.", index + 1)?;
                Ok(false)
            }
            Err(e) => Err(format!("{e:#}")),
        },
        ShellCommand::Share(base) => {
            let base = base.unwrap_or_else(|| config.share.base_url.clone());
            match session.share_url(&base) {
                Ok(url) => {
                    writeln!(out, "{url}")?;
                    Ok(false)
                }
                Err(e) => Err(e.to_string()),
            }
        }
        ShellCommand::Open(link) => {
            let result = if link.contains("://") {
                session.apply_shared_url(&link).and_then(|stripped| {
                    stripped
                        .map(|_| ())
                        .ok_or_else(|| PaletteError::decode("link carries no palette"))
                })
            } else {
                session.apply_share_token(&link)
            };
            result.map(|()| true).map_err(|e| e.to_string())
        }
        ShellCommand::Export(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
            match session.export_to_file(&path) {
                Ok(()) => {
                    writeln!(out, "Exported to {}.", path.display())?;
                    Ok(false)
                }
                Err(e) => Err(format!("{e:#}")),
            }
        }
        ShellCommand::Import(path) => session
            .import_from_file(&path)
            .map(|_| true)
            .map_err(|e| e.to_string()),
        ShellCommand::Report => {
            write!(out, "{}", session.accessibility_report().render())?;
            Ok(false)
        }
        ShellCommand::Contrast(a, b) => {
            let palette = session.palette();
            match (palette.get(a), palette.get(b)) {
                (Some(background), Some(foreground)) => {
                    let result = ContrastResult::evaluate(background, foreground);
                    writeln!(out, "{foreground} on {background}: {result}")?;
                    Ok(false)
                }
                _ => Err(format!("palette has {} colors", palette.len())),
            }
        }
        ShellCommand::Css(format) => {
            let format = format.unwrap_or(config.export.stylesheet_format);
            write!(out, "{}", session.stylesheet(format))?;
            Ok(false)
        }
        ShellCommand::Preview => {
            write!(out, "{}", render_preview(session.colors()))?;
            Ok(false)
        }
        ShellCommand::Quit => Ok(false),
    };

    match outcome {
        Ok(true) => {
            write_palette(session, out)?;
            Ok(Ok(()))
        }
        Ok(false) => Ok(Ok(())),
        Err(e) => Ok(Err(e)),
    }
}
