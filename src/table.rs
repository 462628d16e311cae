//! Table - the logical description of a table.
//!
//! A [`Table`] holds an optional header [`Section`], a body section and an
//! optional footer section. Sections hold [`Row`]s, rows hold [`Cell`]s.
//! Every scope can carry a default [`CellStyle`] that applies to the cells it
//! encloses unless a narrower scope overrides it.
//!
//! # Examples
//!
//! ```
//! use boxtable::prelude::*;
//!
//! let table = Table::new()
//!     .with_header(Section::new().with_row(Row::new(["Name", "Count"])))
//!     .with_row(Row::new(["configs", "12"]))
//!     .with_row(Row::new(["entries", "3"]));
//!
//! let text = table.render().unwrap();
//! assert_eq!(text.lines().count(), 7);
//! ```
//!
//! ## Spanning cells
//!
//! ```
//! use boxtable::prelude::*;
//!
//! let table = Table::new()
//!     .with_header(Section::new().with_row(Row::new([
//!         Cell::new("ARSC"),
//!         Cell::new("diff").column_span(2),
//!     ])))
//!     .with_row(Row::new(["configs", "+2", "(+2 -0)"]));
//!
//! assert!(table.render().is_ok());
//! ```

use std::fmt;

use crate::border::BorderStyle;
use crate::error::{LayoutError, SectionKind};
use crate::render;
use crate::style::{CellStyle, TableStyle};

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell content. Lines are separated by `'\n'`.
    pub content: String,
    /// Number of grid columns covered, at least 1.
    pub column_span: usize,
    /// Number of grid rows covered, at least 1.
    pub row_span: usize,
    /// Cell-level style overrides.
    pub style: Option<CellStyle>,
}

impl Cell {
    /// Create a cell from any displayable value.
    #[must_use]
    pub fn new(content: impl fmt::Display) -> Self {
        Self {
            content: content.to_string(),
            column_span: 1,
            row_span: 1,
            style: None,
        }
    }

    /// Set the number of columns this cell covers.
    #[must_use]
    pub fn column_span(mut self, span: usize) -> Self {
        self.column_span = span;
        self
    }

    /// Set the number of rows this cell covers.
    #[must_use]
    pub fn row_span(mut self, span: usize) -> Self {
        self.row_span = span;
        self
    }

    /// Set cell style overrides.
    #[must_use]
    pub fn style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self {
            content: value,
            column_span: 1,
            row_span: 1,
            style: None,
        }
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Cells in declaration order.
    pub cells: Vec<Cell>,
    /// Default style for the cells of this row.
    pub cell_style: Option<CellStyle>,
}

impl Row {
    /// Create a new row with cells.
    #[must_use]
    pub fn new<T: Into<Cell>>(cells: impl IntoIterator<Item = T>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            cell_style: None,
        }
    }

    /// Append a cell (builder pattern).
    #[must_use]
    pub fn with_cell(mut self, cell: impl Into<Cell>) -> Self {
        self.cells.push(cell.into());
        self
    }

    /// Set the default style for cells in this row.
    #[must_use]
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = Some(style);
        self
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            cell_style: None,
        }
    }
}

/// A group of rows: header, body or footer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Rows in declaration order.
    pub rows: Vec<Row>,
    /// Default style for every cell in this section.
    pub cell_style: Option<CellStyle>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row (builder pattern).
    #[must_use]
    pub fn with_row(mut self, row: impl Into<Row>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Append multiple rows (builder pattern).
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Set the default style for cells in this section.
    #[must_use]
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = Some(style);
        self
    }

    /// Check whether the section has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A complete table description.
///
/// Rows added directly to the table go to the body section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    header: Option<Section>,
    body: Section,
    footer: Option<Section>,
    /// Table-wide default cell style (outermost cascade scope).
    cell_style: Option<CellStyle>,
    style: Option<TableStyle>,
}

impl Table {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header section.
    #[must_use]
    pub fn with_header(mut self, header: Section) -> Self {
        self.header = Some(header);
        self
    }

    /// Replace the body section.
    #[must_use]
    pub fn with_body(mut self, body: Section) -> Self {
        self.body = body;
        self
    }

    /// Set the footer section.
    #[must_use]
    pub fn with_footer(mut self, footer: Section) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Append a row to the body (builder pattern).
    #[must_use]
    pub fn with_row(mut self, row: impl Into<Row>) -> Self {
        self.body.rows.push(row.into());
        self
    }

    /// Append a body row from cell values (builder pattern).
    #[must_use]
    pub fn with_row_cells<T: Into<Cell>>(self, cells: impl IntoIterator<Item = T>) -> Self {
        self.with_row(Row::new(cells))
    }

    /// Set the table-wide default cell style.
    #[must_use]
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = Some(style);
        self
    }

    /// Set the table style.
    #[must_use]
    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the border glyph set.
    #[must_use]
    pub fn border_style(mut self, border: BorderStyle) -> Self {
        self.style = Some(self.style.unwrap_or_default().border_style(border));
        self
    }

    /// The header section, if any.
    #[must_use]
    pub fn header(&self) -> Option<&Section> {
        self.header.as_ref()
    }

    /// The body section.
    #[must_use]
    pub fn body(&self) -> &Section {
        &self.body
    }

    /// The footer section, if any.
    #[must_use]
    pub fn footer(&self) -> Option<&Section> {
        self.footer.as_ref()
    }

    /// The table-wide default cell style, if any.
    #[must_use]
    pub fn default_cell_style(&self) -> Option<&CellStyle> {
        self.cell_style.as_ref()
    }

    /// The table style, if any.
    #[must_use]
    pub fn table_style(&self) -> Option<&TableStyle> {
        self.style.as_ref()
    }

    /// Sections in drawing order, skipping absent ones.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        [
            (SectionKind::Header, self.header.as_ref()),
            (SectionKind::Body, Some(&self.body)),
            (SectionKind::Footer, self.footer.as_ref()),
        ]
        .into_iter()
        .filter_map(|(kind, section)| section.map(|s| (kind, s)))
    }

    /// Render the table to text.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if spans are invalid or overlap, or if the
    /// rows of a section cover different numbers of columns.
    pub fn render(&self) -> Result<String, LayoutError> {
        render::render_text(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::ASCII;
    use crate::style::TextAlignment;

    #[test]
    fn test_cell_new_defaults() {
        let cell = Cell::new("x");
        assert_eq!(cell.content, "x");
        assert_eq!(cell.column_span, 1);
        assert_eq!(cell.row_span, 1);
        assert!(cell.style.is_none());
    }

    #[test]
    fn test_cell_from_display_values() {
        assert_eq!(Cell::new(42).content, "42");
        assert_eq!(Cell::new(-3i64).content, "-3");
        assert_eq!(Cell::from(String::from("owned")).content, "owned");
    }

    #[test]
    fn test_cell_spans() {
        let cell = Cell::new("x").column_span(2).row_span(3);
        assert_eq!(cell.column_span, 2);
        assert_eq!(cell.row_span, 3);
    }

    #[test]
    fn test_row_from_strings() {
        let row = Row::new(["a", "b", "c"]);
        assert_eq!(row.cells.len(), 3);
        assert_eq!(row.cells[1].content, "b");
    }

    #[test]
    fn test_row_with_cell_and_style() {
        let style = CellStyle::new().alignment(TextAlignment::MiddleRight);
        let row = Row::default()
            .with_cell("a")
            .with_cell(Cell::new("b"))
            .cell_style(style);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cell_style, Some(style));
    }

    #[test]
    fn test_table_rows_go_to_body() {
        let table = Table::new()
            .with_row(Row::new(["a"]))
            .with_row_cells(["b"]);
        assert_eq!(table.body().rows.len(), 2);
        assert!(table.header().is_none());
        assert!(table.footer().is_none());
    }

    #[test]
    fn test_sections_order_skips_absent() {
        let table = Table::new()
            .with_footer(Section::new().with_row(Row::new(["f"])))
            .with_row(Row::new(["b"]));
        let kinds: Vec<SectionKind> = table.sections().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![SectionKind::Body, SectionKind::Footer]);
    }

    #[test]
    fn test_sections_all_present() {
        let table = Table::new()
            .with_header(Section::new())
            .with_footer(Section::new());
        let kinds: Vec<SectionKind> = table.sections().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Header, SectionKind::Body, SectionKind::Footer]
        );
    }

    #[test]
    fn test_border_style_shortcut() {
        let table = Table::new().border_style(ASCII);
        assert_eq!(
            table.table_style().and_then(|s| s.border_style),
            Some(ASCII)
        );
    }

    #[test]
    fn test_section_builders() {
        let section = Section::new()
            .with_row(Row::new(["a"]))
            .with_rows([Row::new(["b"]), Row::new(["c"])])
            .cell_style(CellStyle::new().padding(1));
        assert_eq!(section.rows.len(), 3);
        assert!(!section.is_empty());
        assert!(Section::new().is_empty());
    }

    #[test]
    fn test_table_cell_style() {
        let style = CellStyle::new().border(false);
        let table = Table::new().cell_style(style);
        assert_eq!(table.default_cell_style(), Some(&style));
    }
}
