//! Line break normalization, the last two passes.

use regex::Regex;
use std::sync::LazyLock;

static BREAK_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br>\s*<br>").unwrap());

/// Replace every remaining `\n` with `<br>`.
pub fn line_breaks(input: &str) -> String {
    input.replace('\n', "<br>")
}

/// Drop whitespace between two `<br>`, keeping both breaks.
///
/// Blank lines survive as `<br><br>`; pairs are matched left to right
/// without overlap.
pub fn collapse_breaks(input: &str) -> String {
    BREAK_PAIR_RE.replace_all(input, "<br><br>").into_owned()
}
