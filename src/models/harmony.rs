//! Harmony modes used to derive related colors from one seed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rule for deriving a palette from a single seed hue or color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyMode {
    /// Hues spaced 30 degrees apart.
    #[default]
    Analogous,
    /// One random color at five brightness steps.
    Monochromatic,
    /// Three hues spaced 120 degrees apart plus brightness variants.
    Triadic,
    /// A hue and its opposite plus brightness variants.
    Complementary,
}

impl HarmonyMode {
    /// All modes in display order.
    pub const ALL: [Self; 4] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Triadic,
        Self::Complementary,
    ];

    /// Lowercase identifier used in config files and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown harmony mode '{s}'. Expected one of: analogous, monochromatic, triadic, complementary"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!("analogous".parse::<HarmonyMode>(), Ok(HarmonyMode::Analogous));
        assert_eq!("Triadic".parse::<HarmonyMode>(), Ok(HarmonyMode::Triadic));
        assert_eq!(" complementary ".parse::<HarmonyMode>(), Ok(HarmonyMode::Complementary));
        assert!("tetradic".parse::<HarmonyMode>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in HarmonyMode::ALL {
            assert_eq!(mode.to_string().parse::<HarmonyMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&HarmonyMode::Monochromatic).unwrap();
        assert_eq!(json, "\"monochromatic\"");
        let parsed: HarmonyMode = serde_json::from_str("\"triadic\"").unwrap();
        assert_eq!(parsed, HarmonyMode::Triadic);
    }
}
