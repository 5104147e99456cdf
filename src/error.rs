//! Error types for palette operations.
//!
//! Domain failures (bad share links, bad import files, bad color strings) are
//! typed so callers can recover at the boundary where they occur. Infrastructure
//! failures such as config or store I/O use `anyhow` with context instead.

use thiserror::Error;

/// Errors produced by palette parsing, encoding and editing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A shared palette token or URL could not be decoded.
    #[error("invalid shared palette: {0}")]
    Decode(String),

    /// An import file was unreadable or did not contain a list of `#RRGGBB` colors.
    #[error("invalid palette file: {0}")]
    Format(String),

    /// A link is not an absolute http(s) URL.
    #[error("invalid link: {0}")]
    InvalidUrl(String),

    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected 6 hex digits (#RRGGBB)")]
    InvalidColor(String),

    /// A palette or saved-list position does not exist.
    ///
    /// Displayed 1-based, as positions are shown to users.
    #[error("position {} does not exist (there are {len})", .index + 1)]
    IndexOutOfRange {
        /// Requested 0-based index.
        index: usize,
        /// Current length of the list.
        len: usize,
    },
}

impl PaletteError {
    /// Builds a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode(cause.to_string())
    }

    /// Builds a format error from any displayable cause.
    pub fn format(cause: impl std::fmt::Display) -> Self {
        Self::Format(cause.to_string())
    }
}

/// Result alias for palette operations.
pub type PaletteResult<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PaletteError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "position 8 does not exist (there are 5)");

        let err = PaletteError::InvalidColor("#XYZ".to_string());
        assert!(err.to_string().contains("#XYZ"));

        let err = PaletteError::format("expected an array");
        assert_eq!(err.to_string(), "invalid palette file: expected an array");

        let err = PaletteError::InvalidUrl("localhost (relative URL without a base)".to_string());
        assert_eq!(err.to_string(), "invalid link: localhost (relative URL without a base)");
    }
}
