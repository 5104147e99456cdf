//! Application-wide constants.
//!
//! Names, file names and URL parameters shared by the library and the CLI.

/// The display name of the application.
pub const APP_NAME: &str = "Paleta";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "paleta";

/// The directory name for application data under the platform config directory.
///
/// - Linux: `~/.config/Paleta/`
/// - macOS: `~/Library/Application Support/Paleta/`
/// - Windows: `%APPDATA%\Paleta\`
pub const APP_DATA_DIR: &str = "Paleta";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "PALETA_CONFIG_DIR";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Saved-palettes file name inside the config directory.
pub const SAVED_PALETTES_FILE: &str = "saved_palettes.json";

/// Default file name for exported palettes.
pub const DEFAULT_EXPORT_FILE: &str = "paleta_palette.json";

/// Query parameter that carries a shared palette.
pub const SHARE_PARAM: &str = "p";

/// Default base URL for share links.
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/";

/// Largest palette the generator settings accept.
pub const MAX_PALETTE_SIZE: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_NAME.to_lowercase());
        assert!(!APP_DATA_DIR.contains(' '));
        assert!(DEFAULT_EXPORT_FILE.ends_with(".json"));
        assert!(DEFAULT_SHARE_BASE_URL.starts_with("http"));
    }
}
