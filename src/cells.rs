//! Character cell measurement for cell content.
//!
//! Content is treated as monospace text where every `char` occupies exactly
//! one column. Lines are separated by `'\n'` only.

use smallvec::SmallVec;

/// Lines of one cell's content. Most cells hold a handful of lines.
pub type Lines<'a> = SmallVec<[&'a str; 4]>;

/// Width and height of a block of text, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    /// Length of the longest line.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

/// Get the cell width of a single line.
#[must_use]
pub fn cell_len(line: &str) -> usize {
    line.chars().count()
}

/// Split content into lines.
///
/// Empty content is one empty line, and a trailing newline produces a
/// trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Lines<'_> {
    text.split('\n').collect()
}

/// Measure a block of text.
#[must_use]
pub fn measure(text: &str) -> TextSize {
    let lines = split_lines(text);
    TextSize {
        width: lines.iter().map(|line| cell_len(line)).max().unwrap_or(0),
        height: lines.len(),
    }
}
