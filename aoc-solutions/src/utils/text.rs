//! Line, number and chunk splitting

use regex::Regex;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

static INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("integer pattern is valid"));

/// Non-empty lines; a trailing newline (or `\r\n` endings) is fine.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.is_empty())
}

/// Parse one integer per non-empty line.
///
/// Lines are taken as-is, so surrounding spaces are a parse error just like any
/// other malformed number.
pub fn ints<T: FromStr>(text: &str) -> Result<Vec<T>, T::Err> {
    lines(text).map(str::parse).collect()
}

/// Every integer appearing anywhere in `text`, including negatives.
///
/// A `-` directly before digits is a sign, so `"3-4"` gives `[3, -4]`.
pub fn extract_ints(text: &str) -> Result<Vec<i64>, ParseIntError> {
    INT_RE.find_iter(text).map(|m| m.as_str().parse()).collect()
}

/// Blocks of text separated by blank lines, with leading/trailing newlines ignored.
pub fn chunks(text: &str) -> Vec<&str> {
    text.trim_matches('\n')
        .split("\n\n")
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Every window of `width` consecutive items, in order.
///
/// Empty when `width` is zero or larger than the input.
pub fn sliding_windows<T: Clone>(items: impl IntoIterator<Item = T>, width: usize) -> Vec<Vec<T>> {
    if width == 0 {
        return Vec::new();
    }
    let items: Vec<T> = items.into_iter().collect();
    items.windows(width).map(<[T]>::to_vec).collect()
}
