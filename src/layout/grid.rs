//! Span expansion into occupancy grids.
//!
//! Each section is expanded on its own into a [`SectionGrid`]: a flat arena
//! indexed by `(row, column)` whose slots name the logical cell claiming
//! them. Sections are then stacked into one table-wide [`Grid`] whose width
//! is the widest section.

use std::ops::Range;

use crate::error::{LayoutError, SectionKind};
use crate::style::{CellStyle, EffectiveStyle, StyleCascade};
use crate::table::{Cell, Section, Table};

/// A logical cell placed on the grid.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'a> {
    /// The logical cell.
    pub cell: &'a Cell,
    /// Section the cell was declared in.
    pub section: SectionKind,
    /// Anchor row.
    pub row: usize,
    /// Anchor column.
    pub column: usize,
    /// Rows covered, at least 1.
    pub row_span: usize,
    /// Columns covered, at least 1.
    pub column_span: usize,
    /// Resolved style.
    pub style: EffectiveStyle,
}

impl GridCell<'_> {
    /// Grid rows covered by this cell.
    #[must_use]
    pub fn rows(&self) -> Range<usize> {
        self.row..self.row + self.row_span
    }

    /// Grid columns covered by this cell.
    #[must_use]
    pub fn columns(&self) -> Range<usize> {
        self.column..self.column + self.column_span
    }
}

/// Occupancy of a single section.
///
/// Cell rows are relative to the section.
#[derive(Debug, Clone)]
pub struct SectionGrid<'a> {
    kind: SectionKind,
    rows: usize,
    columns: usize,
    stride: usize,
    slots: Vec<Option<usize>>,
    cells: Vec<GridCell<'a>>,
}

impl<'a> SectionGrid<'a> {
    /// Which section this grid was expanded from.
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns every row covers.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Placed cells in declaration order.
    #[must_use]
    pub fn cells(&self) -> &[GridCell<'a>] {
        &self.cells
    }

    /// Index into [`Self::cells`] of the cell claiming a position.
    #[must_use]
    pub fn at(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.slots[row * self.stride + column]
    }
}

fn invalid_span(kind: SectionKind, row: usize, index: usize, cell: &Cell) -> LayoutError {
    LayoutError::InvalidSpan {
        section: kind,
        row,
        cell: index,
        column_span: cell.column_span,
        row_span: cell.row_span,
    }
}

fn validate_spans(kind: SectionKind, section: &Section) -> Result<(), LayoutError> {
    let rows = section.rows.len();
    for (r, row) in section.rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            // r < rows, so the subtraction cannot wrap.
            if cell.column_span == 0 || cell.row_span == 0 || cell.row_span > rows - r {
                return Err(invalid_span(kind, r, c, cell));
            }
        }
    }
    Ok(())
}

/// The error reported when a section's arena cannot be allocated: the cell
/// with the largest column span is blamed.
fn widest_cell(kind: SectionKind, section: &Section) -> LayoutError {
    section
        .rows
        .iter()
        .enumerate()
        .flat_map(|(r, row)| row.cells.iter().enumerate().map(move |(c, cell)| (r, c, cell)))
        .max_by_key(|(_, _, cell)| cell.column_span)
        .map_or(
            LayoutError::InvalidSpan {
                section: kind,
                row: 0,
                cell: 0,
                column_span: 0,
                row_span: 0,
            },
            |(r, c, cell)| invalid_span(kind, r, c, cell),
        )
}

/// Upper bound on the columns any row of a section can claim.
///
/// Row `r` can claim at most the column spans of its own cells plus those of
/// cells from earlier rows whose row span reaches it. Spans must already be
/// validated. Fails when the spans of the section do not fit in a `usize`.
fn column_bound(kind: SectionKind, section: &Section) -> Result<usize, LayoutError> {
    let rows = section.rows.len();
    let mut opened = vec![0usize; rows + 1];
    let mut closed = vec![0usize; rows + 1];
    let mut total = 0usize;
    for (r, row) in section.rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            total = total
                .checked_add(cell.column_span)
                .ok_or_else(|| invalid_span(kind, r, c, cell))?;
            // Every bucket is bounded by `total`.
            opened[r] += cell.column_span;
            closed[r + cell.row_span] += cell.column_span;
        }
    }

    let mut bound = 0;
    let mut running = 0usize;
    for r in 0..rows {
        running = running - closed[r] + opened[r];
        bound = bound.max(running);
    }
    Ok(bound)
}

/// Expand one section into its occupancy grid.
///
/// `table_style` is the table-wide default cell style, the outermost scope
/// of every cell's cascade.
///
/// # Errors
///
/// - [`LayoutError::InvalidSpan`] for a zero span, a row span running past
///   the last row of the section, or column spans too large to lay out.
/// - [`LayoutError::OverlappingSpan`] when a cell's rectangle hits a claimed
///   position.
/// - [`LayoutError::RowWidthMismatch`] when rows cover different numbers of
///   columns.
pub fn expand_section<'a>(
    kind: SectionKind,
    section: &'a Section,
    table_style: Option<&'a CellStyle>,
) -> Result<SectionGrid<'a>, LayoutError> {
    validate_spans(kind, section)?;

    let rows = section.rows.len();
    let stride = column_bound(kind, section)?;
    let mut slots: Vec<Option<usize>> = Vec::new();
    rows.checked_mul(stride)
        .and_then(|area| {
            slots.try_reserve_exact(area).ok()?;
            slots.resize(area, None);
            Some(())
        })
        .ok_or_else(|| widest_cell(kind, section))?;
    let mut cells = Vec::new();

    for (r, row) in section.rows.iter().enumerate() {
        let mut cursor = 0;
        for (c, cell) in row.cells.iter().enumerate() {
            while cursor < stride && slots[r * stride + cursor].is_some() {
                cursor += 1;
            }

            let end = cursor
                .checked_add(cell.column_span)
                .ok_or_else(|| invalid_span(kind, r, c, cell))?;
            let index = cells.len();
            for rr in r..r + cell.row_span {
                for cc in cursor..end {
                    let slot = slots
                        .get_mut(rr * stride + cc)
                        .filter(|_| cc < stride)
                        .ok_or(LayoutError::OverlappingSpan {
                            section: kind,
                            row: rr,
                            column: cc,
                        })?;
                    if slot.is_some() {
                        return Err(LayoutError::OverlappingSpan {
                            section: kind,
                            row: rr,
                            column: cc,
                        });
                    }
                    *slot = Some(index);
                }
            }

            let style = StyleCascade::new(
                cell.style.as_ref(),
                row.cell_style.as_ref(),
                section.cell_style.as_ref(),
                table_style,
            )
            .resolve();
            cells.push(GridCell {
                cell,
                section: kind,
                row: r,
                column: cursor,
                row_span: cell.row_span,
                column_span: cell.column_span,
                style,
            });
            cursor = end;
        }
    }

    // Rows fill leftmost free positions first, so equal claim counts also
    // rule out holes.
    let claimed = |r: usize| {
        slots[r * stride..(r + 1) * stride]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    };
    let columns = if rows == 0 { 0 } else { claimed(0) };
    for r in 1..rows {
        let found = claimed(r);
        if found != columns {
            return Err(LayoutError::RowWidthMismatch {
                section: kind,
                row: r,
                expected: columns,
                found,
            });
        }
    }

    log::trace!(
        "expanded {kind} section: {rows} rows x {columns} columns, {} cells",
        cells.len()
    );

    Ok(SectionGrid {
        kind,
        rows,
        columns,
        stride,
        slots,
        cells,
    })
}

/// Occupancy of the whole table: header, body and footer stacked.
#[derive(Debug, Clone)]
pub struct Grid<'a> {
    rows: usize,
    columns: usize,
    slots: Vec<Option<usize>>,
    cells: Vec<GridCell<'a>>,
}

impl<'a> Grid<'a> {
    /// Expand and stack every section of a table.
    ///
    /// Sections narrower than the widest one leave their trailing positions
    /// unclaimed.
    ///
    /// # Errors
    ///
    /// Propagates the first [`LayoutError`] of [`expand_section`].
    pub fn expand(table: &'a Table) -> Result<Self, LayoutError> {
        let table_style = table.default_cell_style();
        let sections = table
            .sections()
            .map(|(kind, section)| expand_section(kind, section, table_style))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::stack(&sections))
    }

    /// Stack section grids top to bottom.
    #[must_use]
    pub fn stack(sections: &[SectionGrid<'a>]) -> Self {
        let rows = sections.iter().map(SectionGrid::rows).sum();
        let columns = sections.iter().map(SectionGrid::columns).max().unwrap_or(0);
        let mut slots = vec![None; rows * columns];
        let mut cells = Vec::with_capacity(sections.iter().map(|s| s.cells.len()).sum());

        let mut row_offset = 0;
        for section in sections {
            let cell_offset = cells.len();
            for r in 0..section.rows {
                for c in 0..section.columns {
                    slots[(row_offset + r) * columns + c] =
                        section.at(r, c).map(|index| index + cell_offset);
                }
            }
            cells.extend(section.cells.iter().map(|cell| GridCell {
                row: cell.row + row_offset,
                ..*cell
            }));
            row_offset += section.rows;
        }

        Self {
            rows,
            columns,
            slots,
            cells,
        }
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Placed cells in declaration order.
    #[must_use]
    pub fn cells(&self) -> &[GridCell<'a>] {
        &self.cells
    }

    /// Index into [`Self::cells`] of the cell claiming a position.
    #[must_use]
    pub fn at(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.slots[row * self.columns + column]
    }

    /// The cell claiming a position.
    #[must_use]
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&GridCell<'a>> {
        self.at(row, column).map(|index| &self.cells[index])
    }
}
