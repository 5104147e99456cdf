//! WCAG relative luminance, contrast ratios and accessibility reports.

use serde::Serialize;
use std::fmt;

use crate::models::RgbColor;

/// Minimum ratio for AAA (normal text).
pub const AAA_RATIO: f64 = 7.0;
/// Minimum ratio for AA (normal text).
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for AA (large text).
pub const AA_LARGE_RATIO: f64 = 3.0;

/// Gamma-expands one 8-bit sRGB channel.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance in `[0, 1]`.
///
/// Each channel is linearized before weighting.
pub fn relative_luminance(color: RgbColor) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two colors, in `[1, 21]`. Order does not matter.
///
/// # Examples
///
/// ```
/// use paleta::models::RgbColor;
/// use paleta::services::contrast::contrast_ratio;
///
/// let ratio = contrast_ratio(RgbColor::WHITE, RgbColor::BLACK);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Accessibility tier of a contrast ratio.
///
/// Serialized with the same strings as [`ContrastLevel::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContrastLevel {
    /// At least 7:1.
    #[serde(rename = "AAA")]
    Aaa,
    /// At least 4.5:1.
    #[serde(rename = "AA")]
    Aa,
    /// At least 3:1, acceptable for large text only.
    #[serde(rename = "AA-large-text")]
    AaLargeText,
    /// Below 3:1.
    #[serde(rename = "insufficient")]
    Insufficient,
}

impl ContrastLevel {
    /// Classifies a ratio, after rounding it to the two decimals shown to users.
    pub fn from_ratio(ratio: f64) -> Self {
        let shown = round2(ratio);
        if shown >= AAA_RATIO {
            Self::Aaa
        } else if shown >= AA_RATIO {
            Self::Aa
        } else if shown >= AA_LARGE_RATIO {
            Self::AaLargeText
        } else {
            Self::Insufficient
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLargeText => "AA-large-text",
            Self::Insufficient => "insufficient",
        }
    }

    /// Whether the pair is usable for normal body text.
    #[must_use]
    pub const fn passes_normal_text(&self) -> bool {
        matches!(self, Self::Aaa | Self::Aa)
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A contrast ratio and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Ratio, at least 1.0.
    pub ratio: f64,
    /// Tier derived from the ratio.
    pub level: ContrastLevel,
}

impl ContrastResult {
    /// Evaluates the contrast between `background` and `foreground`.
    pub fn evaluate(background: RgbColor, foreground: RgbColor) -> Self {
        let ratio = contrast_ratio(background, foreground);
        Self {
            ratio,
            level: ContrastLevel::from_ratio(ratio),
        }
    }
}

impl fmt::Display for ContrastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1 ({})", self.ratio, self.level)
    }
}

/// One foreground compared against a palette color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    /// What the foreground is: "White", "Black" or "Color N".
    pub name: String,
    /// 1-based palette position of the foreground, when it is a palette color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Foreground color.
    pub foreground: RgbColor,
    /// Ratio and tier.
    #[serde(flatten)]
    pub result: ContrastResult,
}

/// Contrast checks for one palette color used as background.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// 1-based position in the palette.
    pub position: usize,
    /// Background color.
    pub color: RgbColor,
    /// White, black, then every other palette color.
    pub checks: Vec<ContrastCheck>,
}

/// Contrast of every palette color against white, black and each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityReport {
    /// One entry per palette color, in palette order.
    pub colors: Vec<ColorReport>,
}

impl AccessibilityReport {
    /// Builds the report for `colors`.
    pub fn build(colors: &[RgbColor]) -> Self {
        let reports = colors
            .iter()
            .enumerate()
            .map(|(index, &background)| {
                let mut checks = vec![
                    ContrastCheck {
                        name: "White".to_string(),
                        position: None,
                        foreground: RgbColor::WHITE,
                        result: ContrastResult::evaluate(background, RgbColor::WHITE),
                    },
                    ContrastCheck {
                        name: "Black".to_string(),
                        position: None,
                        foreground: RgbColor::BLACK,
                        result: ContrastResult::evaluate(background, RgbColor::BLACK),
                    },
                ];
                checks.extend(
                    colors
                        .iter()
                        .enumerate()
                        .filter(|&(other, _)| other != index)
                        .map(|(other, &foreground)| ContrastCheck {
                            name: format!("Color {}", other + 1),
                            position: Some(other + 1),
                            foreground,
                            result: ContrastResult::evaluate(background, foreground),
                        }),
                );

                ColorReport {
                    position: index + 1,
                    color: background,
                    checks,
                }
            })
            .collect();

        Self { colors: reports }
    }

    /// Pairs of distinct palette positions that pass AA for normal text.
    pub fn readable_pairs(&self) -> Vec<(usize, usize)> {
        self.colors
            .iter()
            .flat_map(|report| {
                report
                    .checks
                    .iter()
                    .filter_map(|check| {
                        let other = check.position?;
                        (report.position < other && check.result.level.passes_normal_text())
                            .then_some((report.position, other))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Renders the report as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for report in &self.colors {
            out.push_str(&format!("Color {}: {}\n", report.position, report.color));
            for check in &report.checks {
                out.push_str(&format!(
                    "  {:<10} {}  {}\n",
                    check.name, check.foreground, check.result
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn color(hex: &str) -> RgbColor {
        RgbColor::from_hex(hex).unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(relative_luminance(RgbColor::BLACK).abs() < 1e-12);
        assert!((relative_luminance(RgbColor::WHITE) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_weights_linearized_channels() {
        // Pure green: only the green weight survives.
        assert!((relative_luminance(color("#00FF00")) - 0.7152).abs() < 1e-9);
        // Mid gray: 128/255 linearizes to about 0.2158.
        let gray = relative_luminance(color("#808080"));
        assert!((gray - 0.2158605).abs() < 1e-6, "got {}", gray);
    }

    #[test]
    fn test_white_on_black_is_maximal() {
        let ratio = contrast_ratio(color("#FFFFFF"), color("#000000"));
        assert!((ratio - 21.0).abs() < 1e-9);
        assert_eq!(ContrastLevel::from_ratio(ratio), ContrastLevel::Aaa);
    }

    #[test]
    fn test_known_pairs() {
        // #777777 on white is the classic just-below-AA gray.
        let result = ContrastResult::evaluate(color("#777777"), RgbColor::WHITE);
        assert_eq!(format!("{:.2}", result.ratio), "4.48");
        assert_eq!(result.level, ContrastLevel::AaLargeText);

        let result = ContrastResult::evaluate(color("#767676"), RgbColor::WHITE);
        assert_eq!(format!("{:.2}", result.ratio), "4.54");
        assert_eq!(result.level, ContrastLevel::Aa);
        assert_eq!(result.to_string(), "4.54:1 (AA)");
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Aaa);
        assert_eq!(ContrastLevel::from_ratio(6.99), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.496), ContrastLevel::Aa);
        assert_eq!(ContrastLevel::from_ratio(4.49), ContrastLevel::AaLargeText);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::AaLargeText);
        assert_eq!(ContrastLevel::from_ratio(2.99), ContrastLevel::Insufficient);
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Insufficient);
    }

    #[test]
    fn test_report_structure() {
        let colors = vec![color("#000000"), color("#FFFFFF"), color("#FF0000")];
        let report = AccessibilityReport::build(&colors);
        assert_eq!(report.colors.len(), 3);

        let second = &report.colors[1];
        assert_eq!(second.position, 2);
        let names: Vec<&str> = second.checks.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["White", "Black", "Color 1", "Color 3"]);
        assert_eq!(second.checks[0].result.ratio, 1.0);
    }

    #[test]
    fn test_report_readable_pairs() {
        let colors = vec![color("#000000"), color("#FFFFFF"), color("#222222")];
        let report = AccessibilityReport::build(&colors);
        assert_eq!(report.readable_pairs(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_report_render() {
        let report = AccessibilityReport::build(&[color("#FFFFFF")]);
        let text = report.render();
        assert!(text.starts_with("Color 1: #FFFFFF\n"));
        assert!(text.contains("Black"));
        assert!(text.contains("21.00:1 (AAA)"));
        assert!(text.contains("1.00:1 (insufficient)"));
    }

    #[test]
    fn test_report_serializes_flat_checks() {
        let report = AccessibilityReport::build(&[color("#000000")]);
        let json = serde_json::to_value(&report).unwrap();
        let check = &json["colors"][0]["checks"][0];
        assert_eq!(check["name"], "White");
        assert_eq!(check["foreground"], "#FFFFFF");
        assert_eq!(check["level"], "AAA");
    }

    #[test]
    fn test_level_labels_match_serialized_names() {
        for (level, label) in [
            (ContrastLevel::Aaa, "AAA"),
            (ContrastLevel::Aa, "AA"),
            (ContrastLevel::AaLargeText, "AA-large-text"),
            (ContrastLevel::Insufficient, "insufficient"),
        ] {
            assert_eq!(level.label(), label);
            assert_eq!(level.to_string(), label);
            assert_eq!(serde_json::to_value(level).unwrap(), label);
        }
    }

    fn color_strategy() -> impl Strategy<Value = RgbColor> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| RgbColor::new(r, g, b))
    }

    proptest! {
        #[test]
        fn ratio_is_reflexive(a in color_strategy()) {
            prop_assert!((contrast_ratio(a, a) - 1.0).abs() < 1e-12);
        }

        #[test]
        fn ratio_is_symmetric(a in color_strategy(), b in color_strategy()) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        #[test]
        fn ratio_is_bounded(a in color_strategy(), b in color_strategy()) {
            let ratio = contrast_ratio(a, b);
            prop_assert!(ratio >= 1.0);
            prop_assert!(ratio <= 21.0 + 1e-9);
        }
    }
}
