//! Layout stages between the table model and the text renderer.
//!
//! - [`grid`]: span expansion and validation
//! - [`size`]: column widths and row heights
//! - [`edges`]: border edges, boundary thickness and junctions

pub mod edges;
pub mod grid;
pub mod size;

pub use edges::EdgeMap;
pub use grid::{Grid, GridCell, SectionGrid, expand_section};
pub use size::{Dimensions, solve};
