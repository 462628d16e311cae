//! Layout errors.
//!
//! Every error is detected while expanding sections into their occupancy
//! grids. Once a table has been expanded, the remaining stages are total and
//! cannot fail.

use std::fmt;

/// The section a row or cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Header rows, drawn first.
    Header,
    /// Body rows.
    Body,
    /// Footer rows, drawn last.
    Footer,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Body => write!(f, "body"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// Error type for table layout.
///
/// Row and cell indices are zero-based and relative to the section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Rows of one section cover different numbers of columns.
    RowWidthMismatch {
        section: SectionKind,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell's rectangle collides with a position claimed by another cell.
    OverlappingSpan {
        section: SectionKind,
        row: usize,
        column: usize,
    },
    /// A span of zero, or a row span reaching past the end of its section.
    InvalidSpan {
        section: SectionKind,
        row: usize,
        cell: usize,
        column_span: usize,
        row_span: usize,
    },
}

impl LayoutError {
    /// The section in which the error was detected.
    #[must_use]
    pub fn section(&self) -> SectionKind {
        match self {
            Self::RowWidthMismatch { section, .. }
            | Self::OverlappingSpan { section, .. }
            | Self::InvalidSpan { section, .. } => *section,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowWidthMismatch {
                section,
                row,
                expected,
                found,
            } => write!(
                f,
                "{section} row {row} covers {found} columns, expected {expected}"
            ),
            Self::OverlappingSpan {
                section,
                row,
                column,
            } => write!(
                f,
                "{section} cell span overlaps an occupied position at row {row}, column {column}"
            ),
            Self::InvalidSpan {
                section,
                row,
                cell,
                column_span,
                row_span,
            } => write!(
                f,
                "{section} row {row} cell {cell} has invalid span {column_span}x{row_span}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
