//! Style-sheet generator for palettes.
//!
//! Maps palette positions to named roles and emits them as CSS custom
//! properties (with a small rule set) or as SCSS variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::models::RgbColor;

/// Role names for the first five palette positions.
pub const ROLE_NAMES: [&str; 5] = ["primary", "secondary", "accent", "background", "text"];

/// Output flavour of the generated style sheet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleFormat {
    /// `:root` custom properties plus example rules.
    #[default]
    Css,
    /// `$color-*` variables.
    Scss,
}

impl StyleFormat {
    /// Lowercase name, as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
        }
    }
}

impl fmt::Display for StyleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            other => Err(format!("unknown style format '{other}' (expected css or scss)")),
        }
    }
}

/// Variable name for a 0-based palette position, without the `--` or `$` sigil.
///
/// The first five positions use their role (`color-primary`), later ones their
/// 1-based number (`color-6`).
#[must_use]
pub fn variable_name(index: usize) -> String {
    ROLE_NAMES.get(index).map_or_else(
        || format!("color-{}", index + 1),
        |role| format!("color-{role}"),
    )
}

/// Example rules: selector and `(property, role)` declarations.
const RULES: [(&str, &[(&str, &str)]); 4] = [
    (
        "body",
        &[("background-color", "background"), ("color", "text")],
    ),
    (
        ".button-primary",
        &[("background-color", "primary"), ("color", "text")],
    ),
    (
        ".button-secondary",
        &[("background-color", "secondary"), ("color", "text")],
    ),
    (".accent", &[("color", "accent")]),
];

/// Renders `colors` as a style sheet in the requested format.
///
/// # Examples
///
/// ```
/// use paleta::export::{render_stylesheet, StyleFormat};
/// use paleta::models::RgbColor;
///
/// let scss = render_stylesheet(&[RgbColor::new(255, 0, 0)], StyleFormat::Scss);
/// assert_eq!(scss, "$color-primary: #FF0000;\n");
/// ```
#[must_use]
pub fn render_stylesheet(colors: &[RgbColor], format: StyleFormat) -> String {
    match format {
        StyleFormat::Css => render_css(colors),
        StyleFormat::Scss => render_scss(colors),
    }
}

fn render_css(colors: &[RgbColor]) -> String {
    let mut output = String::from(":root {\n");
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(output, "  --{}: {};", variable_name(index), color.to_hex());
    }
    output.push_str("}\n");

    // A rule is only useful when every role it references is defined.
    let defined = |role: &str| {
        ROLE_NAMES
            .iter()
            .position(|name| *name == role)
            .is_some_and(|index| index < colors.len())
    };

    for (selector, declarations) in RULES {
        if !declarations.iter().all(|(_, role)| defined(*role)) {
            continue;
        }
        let _ = writeln!(output, "\n{selector} {{");
        for (property, role) in declarations {
            let _ = writeln!(output, "  {property}: var(--color-{role});");
        }
        output.push_str("}\n");
    }

    output
}

fn render_scss(colors: &[RgbColor]) -> String {
    let mut output = String::new();
    for (index, color) in colors.iter().enumerate() {
        let _ = writeln!(output, "${}: {};", variable_name(index), color.to_hex());
    }
    output
}
