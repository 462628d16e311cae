//! Border glyph sets and junction lookup.
//!
//! A [`BorderStyle`] is the fixed character set used to draw every line and
//! intersection of a table. Junction glyphs are chosen from the presence
//! pattern of the four edges meeting at a grid intersection, see
//! [`BorderStyle::junction`].

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Edges meeting at a grid intersection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// A vertical edge runs upward from the intersection.
        const UP    = 1 << 0;
        /// A vertical edge runs downward from the intersection.
        const DOWN  = 1 << 1;
        /// A horizontal edge runs to the left of the intersection.
        const LEFT  = 1 << 2;
        /// A horizontal edge runs to the right of the intersection.
        const RIGHT = 1 << 3;
    }
}

/// Border glyph set.
///
/// Each row is 4 characters: [left, horizontal, tee, right]
/// - top: ┌─┬┐
/// - mid: ├─┼┤
/// - bottom: └─┴┘
///
/// The horizontal line glyph is `top[1]`; the vertical line glyph is stored
/// separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    /// Top row: ┌─┬┐
    pub top: [char; 4],
    /// Middle row: ├─┼┤
    pub mid: [char; 4],
    /// Bottom row: └─┴┘
    pub bottom: [char; 4],
    /// Vertical line: │
    pub vertical: char,
}

impl BorderStyle {
    /// Create a new glyph set from character rows.
    #[must_use]
    pub const fn new(
        top: [char; 4],
        mid: [char; 4],
        bottom: [char; 4],
        vertical: char,
    ) -> Self {
        Self {
            top,
            mid,
            bottom,
            vertical,
        }
    }

    /// Glyph for a horizontal line segment.
    #[must_use]
    pub const fn horizontal(&self) -> char {
        self.top[1]
    }

    /// Glyph for a vertical line segment.
    #[must_use]
    pub const fn vertical(&self) -> char {
        self.vertical
    }

    /// Junction glyph for a presence pattern.
    ///
    /// Returns `None` when no edge meets the intersection. A lone edge or two
    /// collinear edges draw a plain line.
    #[must_use]
    pub fn junction(&self, edges: Edges) -> Option<char> {
        let up = edges.contains(Edges::UP);
        let down = edges.contains(Edges::DOWN);
        let left = edges.contains(Edges::LEFT);
        let right = edges.contains(Edges::RIGHT);

        let glyph = match (up, down, left, right) {
            (false, false, false, false) => return None,
            (_, _, false, false) => self.vertical,
            (false, false, _, _) => self.horizontal(),
            (false, true, false, true) => self.top[0],
            (false, true, true, false) => self.top[3],
            (true, false, false, true) => self.bottom[0],
            (true, false, true, false) => self.bottom[3],
            (true, true, false, true) => self.mid[0],
            (true, true, true, false) => self.mid[3],
            (false, true, true, true) => self.top[2],
            (true, false, true, true) => self.bottom[2],
            (true, true, true, true) => self.mid[2],
        };
        Some(glyph)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        SOLID
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display a sample 2x2 grid
        let line = |row: &[char; 4]| -> String {
            let h = self.horizontal().to_string().repeat(3);
            format!("{}{h}{}{h}{}", row[0], row[2], row[3])
        };
        let v = self.vertical;
        writeln!(f, "{}", line(&self.top))?;
        writeln!(f, "{v}   {v}   {v}")?;
        writeln!(f, "{}", line(&self.mid))?;
        writeln!(f, "{v}   {v}   {v}")?;
        write!(f, "{}", line(&self.bottom))
    }
}

// ============================================================================
// Built-in Border Styles
// ============================================================================

/// Light box drawing lines. Used when a table sets no border style.
pub const SOLID: BorderStyle = BorderStyle::new(
    ['\u{250C}', '\u{2500}', '\u{252C}', '\u{2510}'], // ┌─┬┐
    ['\u{251C}', '\u{2500}', '\u{253C}', '\u{2524}'], // ├─┼┤
    ['\u{2514}', '\u{2500}', '\u{2534}', '\u{2518}'], // └─┴┘
    '\u{2502}',                                       // │
);

/// Light lines with rounded outer corners.
pub const ROUNDED: BorderStyle = BorderStyle::new(
    ['\u{256D}', '\u{2500}', '\u{252C}', '\u{256E}'], // ╭─┬╮
    ['\u{251C}', '\u{2500}', '\u{253C}', '\u{2524}'], // ├─┼┤
    ['\u{2570}', '\u{2500}', '\u{2534}', '\u{256F}'], // ╰─┴╯
    '\u{2502}',                                       // │
);

/// Double lines.
pub const DOUBLE: BorderStyle = BorderStyle::new(
    ['\u{2554}', '\u{2550}', '\u{2566}', '\u{2557}'], // ╔═╦╗
    ['\u{2560}', '\u{2550}', '\u{256C}', '\u{2563}'], // ╠═╬╣
    ['\u{255A}', '\u{2550}', '\u{2569}', '\u{255D}'], // ╚═╩╝
    '\u{2551}',                                       // ║
);

/// Heavy (thick) lines.
pub const HEAVY: BorderStyle = BorderStyle::new(
    ['\u{250F}', '\u{2501}', '\u{2533}', '\u{2513}'], // ┏━┳┓
    ['\u{2523}', '\u{2501}', '\u{254B}', '\u{252B}'], // ┣━╋┫
    ['\u{2517}', '\u{2501}', '\u{253B}', '\u{251B}'], // ┗━┻┛
    '\u{2503}',                                       // ┃
);

/// ASCII lines (safe for all terminals).
pub const ASCII: BorderStyle = BorderStyle::new(
    ['+', '-', '+', '+'],
    ['+', '-', '+', '+'],
    ['+', '-', '+', '+'],
    '|',
);

/// Invisible borders. Borders keep their space but draw blanks.
pub const HIDDEN: BorderStyle = BorderStyle::new(
    [' ', ' ', ' ', ' '],
    [' ', ' ', ' ', ' '],
    [' ', ' ', ' ', ' '],
    ' ',
);

/// Get a border style by name.
#[must_use]
pub fn get_border_style(name: &str) -> Option<BorderStyle> {
    match name.to_lowercase().as_str() {
        "solid" => Some(SOLID),
        "rounded" => Some(ROUNDED),
        "double" => Some(DOUBLE),
        "heavy" => Some(HEAVY),
        "ascii" => Some(ASCII),
        "hidden" => Some(HIDDEN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(bits: u8) -> Edges {
        Edges::from_bits_truncate(bits)
    }

    #[test]
    fn test_empty_pattern_has_no_glyph() {
        assert_eq!(SOLID.junction(Edges::empty()), None);
        assert_eq!(HIDDEN.junction(Edges::empty()), None);
    }

    #[test]
    fn test_every_non_empty_pattern_has_a_glyph() {
        for bits in 1..16u8 {
            assert!(SOLID.junction(pattern(bits)).is_some(), "pattern {bits:04b}");
        }
    }

    #[test]
    fn test_solid_junction_table() {
        let cases = [
            (Edges::UP, '│'),
            (Edges::DOWN, '│'),
            (Edges::UP | Edges::DOWN, '│'),
            (Edges::LEFT, '─'),
            (Edges::RIGHT, '─'),
            (Edges::LEFT | Edges::RIGHT, '─'),
            (Edges::DOWN | Edges::RIGHT, '┌'),
            (Edges::DOWN | Edges::LEFT, '┐'),
            (Edges::UP | Edges::RIGHT, '└'),
            (Edges::UP | Edges::LEFT, '┘'),
            (Edges::UP | Edges::DOWN | Edges::RIGHT, '├'),
            (Edges::UP | Edges::DOWN | Edges::LEFT, '┤'),
            (Edges::DOWN | Edges::LEFT | Edges::RIGHT, '┬'),
            (Edges::UP | Edges::LEFT | Edges::RIGHT, '┴'),
            (Edges::all(), '┼'),
        ];
        for (edges, expected) in cases {
            assert_eq!(SOLID.junction(edges), Some(expected), "{edges:?}");
        }
    }

    #[test]
    fn test_ascii_junctions() {
        assert_eq!(ASCII.junction(Edges::all()), Some('+'));
        assert_eq!(ASCII.junction(Edges::DOWN | Edges::RIGHT), Some('+'));
        assert_eq!(ASCII.junction(Edges::LEFT | Edges::RIGHT), Some('-'));
        assert_eq!(ASCII.junction(Edges::UP | Edges::DOWN), Some('|'));
    }

    #[test]
    fn test_rounded_corners() {
        assert_eq!(ROUNDED.junction(Edges::DOWN | Edges::RIGHT), Some('╭'));
        assert_eq!(ROUNDED.junction(Edges::UP | Edges::LEFT), Some('╯'));
        // Inner junctions stay square
        assert_eq!(ROUNDED.junction(Edges::all()), Some('┼'));
    }

    #[test]
    fn test_hidden_draws_blanks() {
        for bits in 1..16u8 {
            assert_eq!(HIDDEN.junction(pattern(bits)), Some(' '));
        }
        assert_eq!(HIDDEN.horizontal(), ' ');
        assert_eq!(HIDDEN.vertical(), ' ');
    }

    #[test]
    fn test_line_glyphs() {
        assert_eq!(SOLID.horizontal(), '─');
        assert_eq!(SOLID.vertical(), '│');
        assert_eq!(DOUBLE.horizontal(), '═');
        assert_eq!(HEAVY.vertical(), '┃');
    }

    #[test]
    fn test_default_is_solid() {
        assert_eq!(BorderStyle::default(), SOLID);
    }

    #[test]
    fn test_get_border_style() {
        assert_eq!(get_border_style("ascii"), Some(ASCII));
        assert_eq!(get_border_style("Rounded"), Some(ROUNDED));
        assert_eq!(get_border_style("HIDDEN"), Some(HIDDEN));
        assert!(get_border_style("nonexistent").is_none());
    }

    #[test]
    fn test_ascii_set_is_plain_ascii() {
        let ascii = ASCII;
        let glyphs = ascii
            .top
            .iter()
            .chain(&ascii.mid)
            .chain(&ascii.bottom)
            .chain([&ascii.vertical]);
        for glyph in glyphs {
            assert!(glyph.is_ascii(), "{glyph:?}");
        }
    }

    #[test]
    fn test_display_sample() {
        let display = format!("{ASCII}");
        assert_eq!(
            display,
            "+---+---+\n|   |   |\n+---+---+\n|   |   |\n+---+---+"
        );
    }
}
