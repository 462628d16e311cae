//! Column widths and row heights.
//!
//! Widths and heights are content sizes only: padding is included, border
//! lines are not.

use crate::cells::{self, TextSize};
use crate::layout::grid::{Grid, GridCell};

/// Solved sizes of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dimensions {
    /// Width of each column.
    pub widths: Vec<usize>,
    /// Height of each row.
    pub heights: Vec<usize>,
}

/// Space a cell needs: its measured content plus padding.
#[must_use]
pub fn demand(cell: &GridCell<'_>) -> TextSize {
    let content = cells::measure(&cell.cell.content);
    TextSize {
        width: content.width + cell.style.horizontal_padding(),
        height: content.height + cell.style.vertical_padding(),
    }
}

/// Grow `sizes` so that they sum to at least `demand`.
///
/// The shortfall is split evenly; the remainder goes to the leading entries
/// one unit each.
pub fn distribute(sizes: &mut [usize], demand: usize) {
    let total: usize = sizes.iter().sum();
    if sizes.is_empty() || total >= demand {
        return;
    }

    let shortfall = demand - total;
    let share = shortfall / sizes.len();
    let remainder = shortfall % sizes.len();
    for (i, size) in sizes.iter_mut().enumerate() {
        *size += share + usize::from(i < remainder);
    }
}

/// Solve the width of every column and the height of every row.
///
/// Non-spanning cells set the natural size of their column (row). Spanning
/// cells are then visited once each, in declaration order, and widen the
/// columns (rows) they cover when those fall short of their demand.
#[must_use]
pub fn solve(grid: &Grid<'_>) -> Dimensions {
    let mut widths = vec![0; grid.columns()];
    let mut heights = vec![0; grid.rows()];
    let demands: Vec<TextSize> = grid.cells().iter().map(demand).collect();

    for (cell, size) in grid.cells().iter().zip(&demands) {
        if cell.column_span == 1 {
            widths[cell.column] = widths[cell.column].max(size.width);
        }
        if cell.row_span == 1 {
            heights[cell.row] = heights[cell.row].max(size.height);
        }
    }

    for (cell, size) in grid.cells().iter().zip(&demands) {
        if cell.column_span > 1 {
            distribute(&mut widths[cell.columns()], size.width);
        }
        if cell.row_span > 1 {
            distribute(&mut heights[cell.rows()], size.height);
        }
    }

    log::trace!("column widths {widths:?}, row heights {heights:?}");

    Dimensions { widths, heights }
}
