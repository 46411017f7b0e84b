//! Box-drawing Table Renderer
//!
//! Provides monospaced table rendering with:
//! - Double-line outer borders and single-line inner dividers
//! - Right-justified cells with configurable padding
//! - Column widths inferred from the widest cell
//! - Headlines spanning the full table width, word-wrapped
//!
//! ## Example Output
//!
//! ```text
//! ╔═════════════╗
//! ║ Inventory   ║
//! ╟────┬────────╢
//! ║ Id │   Item ║
//! ╠════╪════════╣
//! ║  1 │  apple ║
//! ╟────┼────────╢
//! ║  2 │ cherry ║
//! ╚════╧════════╝
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use boxtable_core::TableRenderer;
//!
//! let mut table = TableRenderer::new();
//! table.add_headline("Inventory");
//! table.add_header_columns(["Id", "Item"]);
//! table.add_content_cells(["1", "apple", "2", "cherry"]);
//!
//! let text = table.render()?;
//! ```

// Sub-modules
pub mod border;
mod builder;
mod render;
mod types;
pub mod utils;

pub use builder::TableRenderer;
pub use render::{render_border, render_cells, render_headline, render_lines, render_row};
pub use types::{MAX_PADDING, TableLayout, calculate_column_widths};
