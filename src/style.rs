//! Cell styles and the style cascade.
//!
//! Every attribute of a [`CellStyle`] is independently optional. An unset
//! attribute inherits from the next-outer scope: cell, then row, then
//! section, then table. Only when no scope sets an attribute does the
//! built-in default apply (no padding, all borders, top-left alignment).
//!
//! [`StyleCascade`] performs that lookup and yields an [`EffectiveStyle`]
//! with every attribute concrete.

use crate::border::BorderStyle;

/// Horizontal alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    /// Align content to the left (default).
    #[default]
    Left,
    /// Center content; an odd leftover column goes to the right.
    Center,
    /// Align content to the right.
    Right,
}

/// Vertical alignment within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    /// Align content to the top (default).
    #[default]
    Top,
    /// Center content; an odd leftover line goes to the bottom.
    Middle,
    /// Align content to the bottom.
    Bottom,
}

/// Placement of content inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAlignment {
    /// Combine a vertical and a horizontal alignment.
    #[must_use]
    pub const fn new(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        match (vertical, horizontal) {
            (VerticalAlign::Top, HorizontalAlign::Left) => Self::TopLeft,
            (VerticalAlign::Top, HorizontalAlign::Center) => Self::TopCenter,
            (VerticalAlign::Top, HorizontalAlign::Right) => Self::TopRight,
            (VerticalAlign::Middle, HorizontalAlign::Left) => Self::MiddleLeft,
            (VerticalAlign::Middle, HorizontalAlign::Center) => Self::MiddleCenter,
            (VerticalAlign::Middle, HorizontalAlign::Right) => Self::MiddleRight,
            (VerticalAlign::Bottom, HorizontalAlign::Left) => Self::BottomLeft,
            (VerticalAlign::Bottom, HorizontalAlign::Center) => Self::BottomCenter,
            (VerticalAlign::Bottom, HorizontalAlign::Right) => Self::BottomRight,
        }
    }

    /// The horizontal component.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    /// The vertical component.
    #[must_use]
    pub const fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

/// Style overrides for a cell, row, section or table scope.
///
/// `None` means "inherit from the enclosing scope".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub padding_left: Option<usize>,
    pub padding_right: Option<usize>,
    pub padding_top: Option<usize>,
    pub padding_bottom: Option<usize>,
    pub border_left: Option<bool>,
    pub border_right: Option<bool>,
    pub border_top: Option<bool>,
    pub border_bottom: Option<bool>,
    pub alignment: Option<TextAlignment>,
}

impl CellStyle {
    /// Create a style that overrides nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            border_left: None,
            border_right: None,
            border_top: None,
            border_bottom: None,
            alignment: None,
        }
    }

    /// Check whether no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Set left padding.
    #[must_use]
    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding_left = Some(padding);
        self
    }

    /// Set right padding.
    #[must_use]
    pub fn padding_right(mut self, padding: usize) -> Self {
        self.padding_right = Some(padding);
        self
    }

    /// Set top padding.
    #[must_use]
    pub fn padding_top(mut self, padding: usize) -> Self {
        self.padding_top = Some(padding);
        self
    }

    /// Set bottom padding.
    #[must_use]
    pub fn padding_bottom(mut self, padding: usize) -> Self {
        self.padding_bottom = Some(padding);
        self
    }

    /// Set padding on all four sides.
    #[must_use]
    pub fn padding(self, padding: usize) -> Self {
        self.padding_left(padding)
            .padding_right(padding)
            .padding_top(padding)
            .padding_bottom(padding)
    }

    /// Set whether the left border is drawn.
    #[must_use]
    pub fn border_left(mut self, border: bool) -> Self {
        self.border_left = Some(border);
        self
    }

    /// Set whether the right border is drawn.
    #[must_use]
    pub fn border_right(mut self, border: bool) -> Self {
        self.border_right = Some(border);
        self
    }

    /// Set whether the top border is drawn.
    #[must_use]
    pub fn border_top(mut self, border: bool) -> Self {
        self.border_top = Some(border);
        self
    }

    /// Set whether the bottom border is drawn.
    #[must_use]
    pub fn border_bottom(mut self, border: bool) -> Self {
        self.border_bottom = Some(border);
        self
    }

    /// Set all four borders.
    #[must_use]
    pub fn border(self, border: bool) -> Self {
        self.border_left(border)
            .border_right(border)
            .border_top(border)
            .border_bottom(border)
    }

    /// Set text alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Table-wide drawing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStyle {
    /// Glyph set for all border lines. `None` uses [`crate::border::SOLID`].
    pub border_style: Option<BorderStyle>,
}

impl TableStyle {
    /// Create a table style with no overrides.
    #[must_use]
    pub const fn new() -> Self {
        Self { border_style: None }
    }

    /// Set the border glyph set.
    #[must_use]
    pub fn border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// The glyph set to draw with.
    #[must_use]
    pub fn effective_border_style(&self) -> BorderStyle {
        self.border_style.unwrap_or_default()
    }
}

/// A fully resolved cell style. Nothing is left to inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveStyle {
    pub padding_left: usize,
    pub padding_right: usize,
    pub padding_top: usize,
    pub padding_bottom: usize,
    pub border_left: bool,
    pub border_right: bool,
    pub border_top: bool,
    pub border_bottom: bool,
    pub alignment: TextAlignment,
}

impl EffectiveStyle {
    /// Total horizontal padding (left + right).
    #[must_use]
    pub const fn horizontal_padding(&self) -> usize {
        self.padding_left + self.padding_right
    }

    /// Total vertical padding (top + bottom).
    #[must_use]
    pub const fn vertical_padding(&self) -> usize {
        self.padding_top + self.padding_bottom
    }
}

impl Default for EffectiveStyle {
    fn default() -> Self {
        Self {
            padding_left: 0,
            padding_right: 0,
            padding_top: 0,
            padding_bottom: 0,
            border_left: true,
            border_right: true,
            border_top: true,
            border_bottom: true,
            alignment: TextAlignment::TopLeft,
        }
    }
}

/// The scopes enclosing one cell, innermost first.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCascade<'a> {
    scopes: [Option<&'a CellStyle>; 4],
}

impl<'a> StyleCascade<'a> {
    /// Build a cascade from the cell, row, section and table scopes.
    #[must_use]
    pub const fn new(
        cell: Option<&'a CellStyle>,
        row: Option<&'a CellStyle>,
        section: Option<&'a CellStyle>,
        table: Option<&'a CellStyle>,
    ) -> Self {
        Self {
            scopes: [cell, row, section, table],
        }
    }

    /// First value set by any scope, innermost first.
    fn lookup<T>(&self, attribute: impl Fn(&CellStyle) -> Option<T>) -> Option<T> {
        self.scopes.iter().flatten().find_map(|&style| attribute(style))
    }

    /// Resolve every attribute independently.
    #[must_use]
    pub fn resolve(&self) -> EffectiveStyle {
        let defaults = EffectiveStyle::default();
        EffectiveStyle {
            padding_left: self
                .lookup(|s| s.padding_left)
                .unwrap_or(defaults.padding_left),
            padding_right: self
                .lookup(|s| s.padding_right)
                .unwrap_or(defaults.padding_right),
            padding_top: self
                .lookup(|s| s.padding_top)
                .unwrap_or(defaults.padding_top),
            padding_bottom: self
                .lookup(|s| s.padding_bottom)
                .unwrap_or(defaults.padding_bottom),
            border_left: self
                .lookup(|s| s.border_left)
                .unwrap_or(defaults.border_left),
            border_right: self
                .lookup(|s| s.border_right)
                .unwrap_or(defaults.border_right),
            border_top: self
                .lookup(|s| s.border_top)
                .unwrap_or(defaults.border_top),
            border_bottom: self
                .lookup(|s| s.border_bottom)
                .unwrap_or(defaults.border_bottom),
            alignment: self.lookup(|s| s.alignment).unwrap_or(defaults.alignment),
        }
    }
}
