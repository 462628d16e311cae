//! Text rendering.
//!
//! Output is a character canvas. Each canvas line is either a horizontal
//! boundary line or one content line of a grid row. Every cell is painted
//! into its box once, then edges and junction glyphs are written over the
//! border positions line by line.
//!
//! Lines are joined with `'\n'`. There is no trailing newline, and a table
//! without rows renders as the empty string.

use std::ops::Range;

use crate::border::BorderStyle;
use crate::cells;
use crate::error::LayoutError;
use crate::layout::{EdgeMap, Grid, GridCell, solve};
use crate::style::{HorizontalAlign, VerticalAlign};
use crate::table::Table;

/// Character positions along one axis.
#[derive(Debug)]
struct Axis {
    /// Position of each boundary line that has thickness.
    lines: Vec<Option<usize>>,
    /// First position of each track (column or row).
    starts: Vec<usize>,
    /// Size of each track.
    sizes: Vec<usize>,
    /// Total extent.
    total: usize,
}

impl Axis {
    fn new(sizes: &[usize], has_line: impl Fn(usize) -> bool) -> Self {
        let mut lines = Vec::with_capacity(sizes.len() + 1);
        let mut starts = Vec::with_capacity(sizes.len());
        let mut pos = 0;
        for boundary in 0..=sizes.len() {
            if has_line(boundary) {
                lines.push(Some(pos));
                pos += 1;
            } else {
                lines.push(None);
            }
            if let Some(&size) = sizes.get(boundary) {
                starts.push(pos);
                pos += size;
            }
        }
        Self {
            lines,
            starts,
            sizes: sizes.to_vec(),
            total: pos,
        }
    }

    /// Positions covered by a run of tracks, including the boundary lines
    /// between them.
    fn span(&self, tracks: Range<usize>) -> Range<usize> {
        let last = tracks.end - 1;
        self.starts[tracks.start]..self.starts[last] + self.sizes[last]
    }
}

/// Place a cell's content inside a `width` x `height` box.
fn layout_cell(cell: &GridCell<'_>, width: usize, height: usize) -> Vec<Vec<char>> {
    let style = &cell.style;
    let mut lines = vec![vec![' '; width]; height];
    let content = cells::split_lines(&cell.cell.content);

    let inner_width = width.saturating_sub(style.horizontal_padding());
    let inner_height = height.saturating_sub(style.vertical_padding());
    let spare_lines = inner_height.saturating_sub(content.len());
    let top = style.padding_top
        + match style.alignment.vertical() {
            VerticalAlign::Top => 0,
            VerticalAlign::Middle => spare_lines / 2,
            VerticalAlign::Bottom => spare_lines,
        };

    for (text, line) in content.iter().zip(lines.iter_mut().skip(top)) {
        let spare = inner_width.saturating_sub(cells::cell_len(text));
        let left = style.padding_left
            + match style.alignment.horizontal() {
                HorizontalAlign::Left => 0,
                HorizontalAlign::Center => spare / 2,
                HorizontalAlign::Right => spare,
            };
        for (slot, ch) in line.iter_mut().skip(left).zip(text.chars()) {
            *slot = ch;
        }
    }
    lines
}

struct Painter<'g, 'a> {
    grid: &'g Grid<'a>,
    edges: EdgeMap,
    border: BorderStyle,
    columns: Axis,
    rows: Axis,
}

impl<'g, 'a> Painter<'g, 'a> {
    fn new(grid: &'g Grid<'a>, border: BorderStyle) -> Self {
        let dims = solve(grid);
        let edges = EdgeMap::resolve(grid);
        let columns = Axis::new(&dims.widths, |b| edges.has_column_line(b));
        let rows = Axis::new(&dims.heights, |h| edges.has_row_line(h));
        Self {
            grid,
            edges,
            border,
            columns,
            rows,
        }
    }

    /// Every cell laid out in its box, one `Vec<char>` per output line.
    fn canvas(&self) -> Vec<Vec<char>> {
        let mut canvas = vec![vec![' '; self.columns.total]; self.rows.total];
        for cell in self.grid.cells() {
            let x = self.columns.span(cell.columns());
            let y = self.rows.span(cell.rows());
            let lines = layout_cell(cell, x.len(), y.len());
            for (line, text) in canvas[y].iter_mut().zip(&lines) {
                line[x.clone()].copy_from_slice(text);
            }
        }
        canvas
    }

    /// Draw horizontal boundary `h` over `line`.
    fn draw_boundary(&self, h: usize, line: &mut [char]) {
        for c in 0..self.grid.columns() {
            if self.edges.horizontal(h, c) {
                let start = self.columns.starts[c];
                line[start..start + self.columns.sizes[c]].fill(self.border.horizontal());
            }
        }
        for (b, x) in self.columns.lines.iter().enumerate() {
            if let Some(x) = *x
                && let Some(glyph) = self.border.junction(self.edges.junction(h, b))
            {
                line[x] = glyph;
            }
        }
    }

    /// Draw the vertical edges of grid row `r` over `line`.
    fn draw_verticals(&self, r: usize, line: &mut [char]) {
        for (b, x) in self.columns.lines.iter().enumerate() {
            if let Some(x) = *x
                && self.edges.vertical(r, b)
            {
                line[x] = self.border.vertical();
            }
        }
    }

    fn paint(&self) -> String {
        let mut canvas = self.canvas();
        for h in 0..=self.grid.rows() {
            if let Some(y) = self.rows.lines[h] {
                self.draw_boundary(h, &mut canvas[y]);
            }
            if h < self.grid.rows() {
                let start = self.rows.starts[h];
                for line in &mut canvas[start..start + self.rows.sizes[h]] {
                    self.draw_verticals(h, line);
                }
            }
        }
        canvas
            .into_iter()
            .map(|line| line.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render an expanded grid with a border glyph set.
///
/// The grid is already validated, so rendering cannot fail.
#[must_use]
pub fn render_grid(grid: &Grid<'_>, border: BorderStyle) -> String {
    Painter::new(grid, border).paint()
}

/// Render a table to text.
///
/// # Errors
///
/// Returns the [`LayoutError`] found while expanding the table's sections.
/// No partial output is produced.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn render_text(table: &Table) -> Result<String, LayoutError> {
    let grid = Grid::expand(table)?;
    log::debug!(
        "rendering table: {} rows x {} columns, {} cells",
        grid.rows(),
        grid.columns(),
        grid.cells().len()
    );
    let border = table
        .table_style()
        .map(|style| style.effective_border_style())
        .unwrap_or_default();
    Ok(render_grid(&grid, border))
}
