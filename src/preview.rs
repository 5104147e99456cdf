//! Terminal preview of a palette.
//!
//! Renders truecolor swatches with hex labels, followed by a small sample card
//! that shows the colors in context. Rendering only reads the colors.

use crossterm::style::{Color, StyledContent, Stylize};
use std::fmt::Write as _;

use crate::models::RgbColor;
use crate::services::contrast::contrast_ratio;

/// Width of one swatch in terminal cells.
const SWATCH_WIDTH: usize = 9;

/// Width of the sample card.
const CARD_WIDTH: usize = 44;

fn terminal(color: Option<RgbColor>) -> Color {
    color.map_or(Color::Reset, |c| c.to_terminal_color())
}

/// White or black, whichever reads better on `background`.
fn label_color(background: RgbColor) -> RgbColor {
    if contrast_ratio(background, RgbColor::WHITE) >= contrast_ratio(background, RgbColor::BLACK) {
        RgbColor::WHITE
    } else {
        RgbColor::BLACK
    }
}

fn padded(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn cell(text: &str, width: usize, fg: Option<RgbColor>, bg: Option<RgbColor>) -> StyledContent<String> {
    padded(text, width).with(terminal(fg)).on(terminal(bg))
}

/// Renders swatches and the sample card for `colors`.
///
/// The card uses color 1 as background, 2 for the heading, 3 for body text
/// and 4/5 for the button. Roles without a color use the terminal default.
pub fn render_preview(colors: &[RgbColor]) -> String {
    let mut output = String::new();

    if colors.is_empty() {
        output.push_str("(empty palette)\n");
        return output;
    }

    // Swatch row, then the labels underneath.
    for &color in colors {
        let _ = write!(output, "{} ", cell("", SWATCH_WIDTH, None, Some(color)));
    }
    output.push('\n');
    for &color in colors {
        let label = format!(" {}", color.to_hex());
        let _ = write!(
            output,
            "{} ",
            cell(&label, SWATCH_WIDTH, Some(label_color(color)), Some(color))
        );
    }
    output.push_str("\n\n");

    let role = |index: usize| colors.get(index).copied();
    let background = role(0);

    let lines = [
        ("", role(1)),
        ("  Sample Design", role(1)),
        ("", role(2)),
        ("  This is how the palette reads in a", role(2)),
        ("  real layout.", role(2)),
        ("", role(2)),
    ];
    for (text, fg) in lines {
        let _ = writeln!(output, "{}", cell(text, CARD_WIDTH, fg, background));
    }

    let _ = writeln!(
        output,
        "{}{}{}",
        cell("  ", 2, None, background),
        cell(" Main Button ", 13, role(4), role(3)),
        cell("", CARD_WIDTH - 15, None, background)
    );
    let _ = writeln!(output, "{}", cell("", CARD_WIDTH, None, background));

    output
}
