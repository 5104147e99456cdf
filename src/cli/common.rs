//! Shared CLI plumbing: error type, exit codes, and palette input options.

use clap::Args;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::PaletteError;
use crate::models::RgbColor;
use crate::services::{codec, FileStore};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad arguments or values
    ValidationError = 1,
    /// File system or clipboard failure
    IoError = 2,
    /// Shared link or import document could not be read
    InvalidData = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Invalid input from the user
    Validation,
    /// File system failure
    Io,
    /// Undecodable share token or link
    Decode,
    /// Malformed import document
    Format,
}

/// Error reported by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// What went wrong
    pub kind: CliErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// Invalid arguments or values.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Undecodable shared palette.
    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Decode,
            message: message.into(),
        }
    }

    /// Malformed import document.
    pub fn format(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Format,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
            CliErrorKind::Decode | CliErrorKind::Format => ExitCode::InvalidData,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PaletteError> for CliError {
    fn from(error: PaletteError) -> Self {
        let message = error.to_string();
        match error {
            PaletteError::Decode(_) => Self::decode(message),
            PaletteError::Format(_) => Self::format(message),
            PaletteError::InvalidColor(_)
            | PaletteError::InvalidUrl(_)
            | PaletteError::IndexOutOfRange { .. } => Self::validation(message),
        }
    }
}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Where a command reads its palette from.
#[derive(Debug, Clone, Default, Args)]
pub struct PaletteInput {
    /// Comma-separated colors, e.g. "#FF0000,#00FF00"
    #[arg(short, long, value_name = "LIST", conflicts_with = "from")]
    pub colors: Option<String>,

    /// JSON palette file (array of "#RRGGBB" strings)
    #[arg(short, long, value_name = "FILE")]
    pub from: Option<PathBuf>,
}

impl PaletteInput {
    /// Returns true if neither option was given.
    pub const fn is_empty(&self) -> bool {
        self.colors.is_none() && self.from.is_none()
    }

    /// Reads the palette, if one was given.
    pub fn read(&self) -> CliResult<Option<Vec<RgbColor>>> {
        if let Some(list) = &self.colors {
            return parse_color_list(list).map(Some);
        }
        if let Some(path) = &self.from {
            return Ok(Some(codec::import_from_file(path)?));
        }
        Ok(None)
    }

    /// Reads the palette, failing if none was given.
    pub fn require(&self) -> CliResult<Vec<RgbColor>> {
        self.read()?
            .ok_or_else(|| CliError::validation("Provide a palette with --colors or --from"))
    }
}

/// Parses a comma-separated list of hex colors. Whitespace is ignored.
pub fn parse_color_list(list: &str) -> CliResult<Vec<RgbColor>> {
    let colors = list
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(RgbColor::from_hex)
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err(CliError::validation("Color list is empty"));
    }
    Ok(colors)
}

/// Converts a 1-based position from the command line to an index.
pub fn position_to_index(position: usize) -> CliResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| CliError::validation("Positions start at 1"))
}

/// Loads the configuration, mapping failures to a validation error.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Opens the saved-palettes file named by `config`.
pub fn open_store(config: &Config) -> CliResult<FileStore> {
    config
        .saved_palettes_path()
        .map(FileStore::new)
        .map_err(|e| CliError::io(format!("Failed to locate saved palettes: {e:#}")))
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints one color per line, marking locked positions.
pub fn print_colors(colors: &[RgbColor], locks: &[bool]) {
    for (index, color) in colors.iter().enumerate() {
        let marker = if locks.get(index).copied().unwrap_or(false) {
            "  [locked]"
        } else {
            ""
        };
        println!("{:>2}. {}{}", index + 1, color, marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_list() {
        let colors = parse_color_list("#FF0000, 00ff00 ,#0000FF,").unwrap();
        assert_eq!(
            colors,
            vec![
                RgbColor::new(255, 0, 0),
                RgbColor::new(0, 255, 0),
                RgbColor::new(0, 0, 255)
            ]
        );
    }

    #[test]
    fn test_parse_color_list_errors() {
        assert_eq!(
            parse_color_list(" , ").unwrap_err().kind,
            CliErrorKind::Validation
        );
        assert_eq!(
            parse_color_list("#FF0000,#GG0000").unwrap_err().kind,
            CliErrorKind::Validation
        );
    }

    #[test]
    fn test_position_to_index() {
        assert_eq!(position_to_index(1), Ok(0));
        assert!(position_to_index(0).is_err());
    }

    #[test]
    fn test_palette_error_mapping() {
        let error = CliError::from(PaletteError::decode("bad token"));
        assert_eq!(error.exit_code(), ExitCode::InvalidData);
        assert_eq!(error.message, "invalid shared palette: bad token");

        let error = CliError::from(PaletteError::IndexOutOfRange { index: 9, len: 2 });
        assert_eq!(error.exit_code(), ExitCode::ValidationError);

        let error = CliError::from(PaletteError::InvalidUrl("ftp://x".to_string()));
        assert_eq!(error.exit_code(), ExitCode::ValidationError);

        assert_eq!(CliError::io("disk").exit_code(), ExitCode::IoError);
        assert_eq!(CliError::format("doc").exit_code(), ExitCode::InvalidData);
    }

    #[test]
    fn test_input_reads_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("palette.json");
        std::fs::write(&path, r##"["#123456"]"##).unwrap();

        let input = PaletteInput {
            colors: None,
            from: Some(path),
        };
        assert_eq!(input.require().unwrap(), vec![RgbColor::new(0x12, 0x34, 0x56)]);
        assert!(PaletteInput::default().require().is_err());
        assert!(PaletteInput::default().read().unwrap().is_none());
    }
}
