//! # boxtable
//!
//! Fixed-width text tables with spanning cells, cascading cell styles and
//! merged borders.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::prelude::*;
//!
//! let table = Table::new().with_row(Row::new(["x"]));
//! assert_eq!(table.render().unwrap(), "┌─┐\n│x│\n└─┘");
//! ```
//!
//! ## Core Concepts
//!
//! - **Table**: header, body and footer [`Section`]s of [`Row`]s of [`Cell`]s
//! - **CellStyle**: optional padding, border and alignment overrides; unset
//!   attributes inherit cell → row → section → table → built-in default
//! - **Grid**: the occupancy arena a section expands into once spans are
//!   placed
//! - **BorderStyle**: the glyph set used for lines and junctions
//!
//! Rendering is a pure function of the table: the same table always renders
//! to the same text.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod cells;
pub mod error;
pub mod layout;
pub mod render;
pub mod style;
pub mod table;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::border::{BorderStyle, Edges};
    pub use crate::error::{LayoutError, SectionKind};
    pub use crate::render::render_text;
    pub use crate::style::{
        CellStyle, EffectiveStyle, HorizontalAlign, TableStyle, TextAlignment, VerticalAlign,
    };
    pub use crate::table::{Cell, Row, Section, Table};
}

// Re-export key types at crate root
pub use border::BorderStyle;
pub use error::{LayoutError, SectionKind};
pub use render::render_text;
pub use style::{CellStyle, TableStyle, TextAlignment};
pub use table::{Cell, Row, Section, Table};
