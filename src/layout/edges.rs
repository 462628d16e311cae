//! Border edge resolution.
//!
//! Boundaries are numbered like fence posts: vertical boundary `b` lies to
//! the left of column `b` (so `0..=columns`), horizontal boundary `h` lies
//! above row `h` (so `0..=rows`).
//!
//! An edge between two positions is drawn when either neighbour asks for a
//! border on the shared side, unless both positions belong to the same
//! cell. Outer edges have a single neighbour. Unclaimed positions ask for
//! nothing.

use crate::border::Edges;
use crate::layout::grid::Grid;

/// Draw flags for every edge of a grid, plus boundary thickness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    rows: usize,
    columns: usize,
    /// `rows x (columns + 1)`, indexed `row * (columns + 1) + boundary`.
    vertical: Vec<bool>,
    /// `(rows + 1) x columns`, indexed `boundary * columns + column`.
    horizontal: Vec<bool>,
    column_lines: Vec<bool>,
    row_lines: Vec<bool>,
}

impl EdgeMap {
    /// Resolve every edge of a grid.
    #[must_use]
    pub fn resolve(grid: &Grid<'_>) -> Self {
        let rows = grid.rows();
        let columns = grid.columns();
        let cells = grid.cells();

        let mut vertical = Vec::with_capacity(rows * (columns + 1));
        for r in 0..rows {
            for b in 0..=columns {
                let left = b.checked_sub(1).and_then(|c| grid.at(r, c));
                let right = grid.at(r, b);
                let drawn = if left.is_some() && left == right {
                    false
                } else {
                    left.is_some_and(|i| cells[i].style.border_right)
                        || right.is_some_and(|i| cells[i].style.border_left)
                };
                vertical.push(drawn);
            }
        }

        let mut horizontal = Vec::with_capacity((rows + 1) * columns);
        for h in 0..=rows {
            for c in 0..columns {
                let above = h.checked_sub(1).and_then(|r| grid.at(r, c));
                let below = grid.at(h, c);
                let drawn = if above.is_some() && above == below {
                    false
                } else {
                    above.is_some_and(|i| cells[i].style.border_bottom)
                        || below.is_some_and(|i| cells[i].style.border_top)
                };
                horizontal.push(drawn);
            }
        }

        let column_lines = (0..=columns)
            .map(|b| (0..rows).any(|r| vertical[r * (columns + 1) + b]))
            .collect();
        let row_lines = (0..=rows)
            .map(|h| (0..columns).any(|c| horizontal[h * columns + c]))
            .collect();

        let map = Self {
            rows,
            columns,
            vertical,
            horizontal,
            column_lines,
            row_lines,
        };
        log::trace!(
            "border lines: columns {:?}, rows {:?}",
            map.column_lines,
            map.row_lines
        );
        map
    }

    /// Whether the vertical edge at `boundary` is drawn in `row`.
    #[must_use]
    pub fn vertical(&self, row: usize, boundary: usize) -> bool {
        row < self.rows
            && boundary <= self.columns
            && self.vertical[row * (self.columns + 1) + boundary]
    }

    /// Whether the horizontal edge at `boundary` is drawn over `column`.
    #[must_use]
    pub fn horizontal(&self, boundary: usize, column: usize) -> bool {
        boundary <= self.rows
            && column < self.columns
            && self.horizontal[boundary * self.columns + column]
    }

    /// Whether vertical boundary `boundary` takes up a character column.
    #[must_use]
    pub fn has_column_line(&self, boundary: usize) -> bool {
        self.column_lines.get(boundary).copied().unwrap_or(false)
    }

    /// Whether horizontal boundary `boundary` takes up a line.
    #[must_use]
    pub fn has_row_line(&self, boundary: usize) -> bool {
        self.row_lines.get(boundary).copied().unwrap_or(false)
    }

    /// Edges meeting where horizontal boundary `row_boundary` crosses
    /// vertical boundary `column_boundary`.
    #[must_use]
    pub fn junction(&self, row_boundary: usize, column_boundary: usize) -> Edges {
        let mut edges = Edges::empty();
        edges.set(
            Edges::UP,
            row_boundary > 0 && self.vertical(row_boundary - 1, column_boundary),
        );
        edges.set(Edges::DOWN, self.vertical(row_boundary, column_boundary));
        edges.set(
            Edges::LEFT,
            column_boundary > 0 && self.horizontal(row_boundary, column_boundary - 1),
        );
        edges.set(Edges::RIGHT, self.horizontal(row_boundary, column_boundary));
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CellStyle;
    use crate::table::{Cell, Row, Section, Table};

    fn resolve(table: &Table) -> EdgeMap {
        let grid = Grid::expand(table).unwrap();
        EdgeMap::resolve(&grid)
    }

    fn two_cells(left: CellStyle, right: CellStyle) -> Table {
        Table::new().with_row(Row::new([
            Cell::new("a").style(left),
            Cell::new("b").style(right),
        ]))
    }

    #[test]
    fn test_all_edges_drawn_by_default() {
        let edges = resolve(&Table::new().with_row(Row::new(["a", "b"])));
        for b in 0..=2 {
            assert!(edges.vertical(0, b));
            assert!(edges.has_column_line(b));
        }
        for c in 0..2 {
            assert!(edges.horizontal(0, c));
            assert!(edges.horizontal(1, c));
        }
    }

    #[test]
    fn test_or_merge_left_requests() {
        let edges = resolve(&two_cells(
            CellStyle::new().border_right(true),
            CellStyle::new().border_left(false),
        ));
        assert!(edges.vertical(0, 1));
    }

    #[test]
    fn test_or_merge_right_requests() {
        let edges = resolve(&two_cells(
            CellStyle::new().border_right(false),
            CellStyle::new().border_left(true),
        ));
        assert!(edges.vertical(0, 1));
    }

    #[test]
    fn test_edge_dropped_when_both_decline() {
        let edges = resolve(&two_cells(
            CellStyle::new().border_right(false),
            CellStyle::new().border_left(false),
        ));
        assert!(!edges.vertical(0, 1));
        assert!(!edges.has_column_line(1));
        assert!(edges.has_column_line(0));
    }

    #[test]
    fn test_outer_edge_follows_edge_cell() {
        let edges = resolve(&two_cells(
            CellStyle::new().border_left(false).border_top(false),
            CellStyle::new(),
        ));
        assert!(!edges.vertical(0, 0));
        assert!(!edges.horizontal(0, 0));
        assert!(edges.horizontal(0, 1));
        assert!(edges.has_row_line(0));
    }

    #[test]
    fn test_no_edge_inside_span() {
        let table = Table::new()
            .with_row(Row::new([Cell::new("wide").column_span(2)]))
            .with_row(Row::new([Cell::new("tall").row_span(2), Cell::new("b")]))
            .with_row(Row::new(["c"]));
        let edges = resolve(&table);
        assert!(!edges.vertical(0, 1));
        assert!(edges.vertical(1, 1));
        assert!(!edges.horizontal(2, 0));
        assert!(edges.horizontal(2, 1));
    }

    #[test]
    fn test_unclaimed_positions_request_nothing() {
        let table = Table::new()
            .with_header(Section::new().with_row(Row::new(["a", "b"])))
            .with_row(Row::new([Cell::new("x").style(CellStyle::new().border(false))]));
        let edges = resolve(&table);
        // Body row: x declines everything, column 1 is unclaimed.
        assert!(!edges.vertical(1, 0));
        assert!(!edges.vertical(1, 1));
        assert!(!edges.vertical(1, 2));
        // Header bottoms still draw the line between the sections.
        assert!(edges.horizontal(1, 0));
        assert!(edges.horizontal(1, 1));
        assert!(!edges.horizontal(2, 0));
        assert!(!edges.horizontal(2, 1));
    }

    #[test]
    fn test_junction_patterns() {
        let edges = resolve(
            &Table::new()
                .with_row(Row::new(["a", "b"]))
                .with_row(Row::new(["c", "d"])),
        );
        assert_eq!(edges.junction(0, 0), Edges::DOWN | Edges::RIGHT);
        assert_eq!(edges.junction(0, 1), Edges::DOWN | Edges::LEFT | Edges::RIGHT);
        assert_eq!(edges.junction(1, 1), Edges::all());
        assert_eq!(edges.junction(2, 2), Edges::UP | Edges::LEFT);
    }

    #[test]
    fn test_junction_inside_span_is_empty() {
        let table = Table::new()
            .with_row(Row::new([
                Cell::new("big").column_span(2).row_span(2),
                Cell::new("a"),
            ]))
            .with_row(Row::new(["b"]));
        let edges = resolve(&table);
        assert_eq!(edges.junction(1, 1), Edges::empty());
        assert_eq!(edges.junction(1, 2), Edges::UP | Edges::DOWN | Edges::RIGHT);
    }

    #[test]
    fn test_out_of_range_queries() {
        let edges = resolve(&Table::new().with_row(Row::new(["a"])));
        assert!(!edges.vertical(5, 0));
        assert!(!edges.horizontal(0, 5));
        assert!(!edges.has_column_line(9));
        assert!(!edges.has_row_line(9));
    }
}
