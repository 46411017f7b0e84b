//! Boxtable Core - monospaced box-drawing tables.
//!
//! Lays out headers, row-major content and optional headlines into a table
//! framed with double-line borders:
//! - column widths follow the widest cell in each column
//! - cells are right-justified and padded on both sides
//! - headlines span the whole table and are word-wrapped to its width
//!
//! See [`TableRenderer`] for the building API and [`TableLayout`] for the
//! computed snapshot.

mod config;
mod error;
pub mod table;

// Re-export all public types
pub use config::{ConfigFile, LINE_ENDING_ENV, LineEnding, PADDING_ENV, TableConfig};
pub use error::{Result, TableError};
pub use table::{TableLayout, TableRenderer};
