//! Core types for table layout.
//!
//! Contains the `TableLayout` snapshot that rendering works on.

use std::fmt;

use tracing::debug;

use super::render;
use super::utils::text_len;
use crate::config::LineEnding;
use crate::error::{Result, TableError};

/// Largest accepted cell padding.
pub const MAX_PADDING: usize = u16::MAX as usize;

// ============================================================
// TABLE LAYOUT
// ============================================================

/// An immutable, validated snapshot of a table ready for rendering.
///
/// Content is already split into rows of exactly `num_columns()` cells and
/// column widths are computed once, so every line of one render sees the
/// same data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    headlines: Vec<String>,
    padding: usize,
    line_ending: LineEnding,
    column_widths: Vec<usize>,
    table_width: usize,
}

impl TableLayout {
    /// Builds a layout from raw renderer state.
    ///
    /// Fails with [`TableError::InvalidState`] when there are no header
    /// columns, when padding exceeds [`MAX_PADDING`], or when the table width
    /// does not fit in `usize`. Trailing content is padded with empty cells
    /// to complete the last row.
    pub(crate) fn new(
        headers: &[String],
        content: &[String],
        headlines: &[String],
        padding: usize,
        line_ending: LineEnding,
    ) -> Result<Self> {
        let num_cols = headers.len();
        if num_cols == 0 {
            return Err(TableError::InvalidState(
                "at least one header column is required to render a table".to_string(),
            ));
        }
        if padding > MAX_PADDING {
            return Err(TableError::InvalidState(format!(
                "padding {padding} exceeds the maximum of {MAX_PADDING}"
            )));
        }

        let mut cells = content.to_vec();
        let remainder = cells.len() % num_cols;
        if remainder != 0 {
            cells.resize(cells.len() + num_cols - remainder, String::new());
        }

        let rows: Vec<Vec<String>> = cells.chunks(num_cols).map(<[String]>::to_vec).collect();
        let column_widths = calculate_column_widths(headers, &rows);
        let table_width = checked_table_width(&column_widths, padding).ok_or_else(|| {
            TableError::InvalidState("table width overflows the addressable size".to_string())
        })?;

        let layout = Self {
            headers: headers.to_vec(),
            rows,
            headlines: headlines.to_vec(),
            padding,
            line_ending,
            column_widths,
            table_width,
        };

        debug!(
            columns = num_cols,
            rows = layout.rows.len(),
            headlines = layout.headlines.len(),
            width = layout.table_width(),
            "table layout computed"
        );

        Ok(layout)
    }

    /// Returns the number of columns in the table.
    #[inline]
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Header cells.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Content rows, each exactly `num_columns()` long.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn headlines(&self) -> &[String] {
        &self.headlines
    }

    pub fn padding(&self) -> usize {
        self.padding
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Content width of each column, excluding padding and borders.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Total width of every border and cell line, in characters.
    ///
    /// Each column contributes its width plus padding on both sides; the
    /// vertical borders add `num_columns() + 1`.
    pub fn table_width(&self) -> usize {
        self.table_width
    }

    /// Width headlines are wrapped to.
    pub fn headline_width(&self) -> usize {
        self.table_width().saturating_sub(2 * self.padding)
    }

    /// Renders every line of the table, without terminators.
    pub fn lines(&self) -> Vec<String> {
        render::render_lines(self)
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line_ending = self.line_ending.as_str();
        for line in self.lines() {
            f.write_str(&line)?;
            f.write_str(line_ending)?;
        }
        Ok(())
    }
}

/// Sum of every column plus padding, and the `widths.len() + 1` vertical
/// borders. `None` on overflow.
pub(super) fn checked_table_width(widths: &[usize], padding: usize) -> Option<usize> {
    let both_sides = padding.checked_mul(2)?;
    widths.iter().try_fold(widths.len().checked_add(1)?, |total, width| {
        total.checked_add(width.checked_add(both_sides)?)
    })
}

/// Calculates the width of each column from the header and every row.
///
/// The width of column `c` is the longest text, in characters, among the
/// header cell and the cells of column `c`.
pub fn calculate_column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| text_len(h)).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(text_len(cell));
        }
    }

    widths
}
