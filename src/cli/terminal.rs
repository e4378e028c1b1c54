//! Status lines printed after a generator runs.

use std::path::Path;

use owo_colors::{colors::css, OwoColorize};
use supports_color::Stream;

/// Whether `stream` is a terminal that renders colour.
#[must_use]
pub fn color_enabled(stream: Stream) -> bool {
    supports_color::on(stream).is_some()
}

/// Confirmation that a rendered document was written, e.g.
/// `Wrote requirements.md (42 lines)`.
#[must_use]
pub fn written(path: &Path, lines: usize, color: bool) -> String {
    let action = format!("Wrote {}", path.display());
    let count = format!("({lines} lines)");
    if color {
        format!("{} {}", action.fg::<css::Green>(), count.dimmed())
    } else {
        format!("{action} {count}")
    }
}

/// Warning that some test case rows did not have the expected number of
/// fields and were passed through unchanged.
#[must_use]
pub fn irregular_rows(irregular: usize, expected: usize, color: bool) -> String {
    let message =
        format!("⚠️  {irregular} row(s) do not have {expected} fields and were rendered as-is");
    if color {
        message.fg::<css::Orange>().to_string()
    } else {
        message
    }
}
