//! Table renderer for incremental table construction.
//!
//! Cells arrive piece by piece and are laid out only when the table is
//! rendered.

use std::fmt::Display;
use std::io::Write;

use super::types::TableLayout;
use crate::config::{LineEnding, TableConfig};
use crate::error::Result;

/// Accumulates headers, content and headlines, and renders them as a
/// box-drawing table.
///
/// Content is a flat, row-major sequence: its rows are formed at render time
/// using the header count as the row length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRenderer {
    headers: Vec<String>,
    content: Vec<String>,
    headlines: Vec<String>,
    padding: usize,
    line_ending: LineEnding,
}

impl TableRenderer {
    /// Creates an empty renderer with a padding of 1.
    pub fn new() -> Self {
        Self::from_config(&TableConfig::default())
    }

    /// Creates an empty renderer with the given cell padding.
    pub fn with_padding(padding: usize) -> Self {
        Self::from_config(&TableConfig {
            padding,
            ..TableConfig::default()
        })
    }

    /// Creates an empty renderer from configuration.
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            headers: Vec::new(),
            content: Vec::new(),
            headlines: Vec::new(),
            padding: config.padding,
            line_ending: config.line_ending,
        }
    }

    /// Appends header columns. The column count becomes the header length.
    pub fn add_header_columns<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.headers
            .extend(cells.into_iter().map(|cell| cell.to_string()));
    }

    /// Appends a single header column.
    pub fn add_header_column(&mut self, cell: impl Display) {
        self.headers.push(cell.to_string());
    }

    /// Appends content cells in row-major order.
    pub fn add_content_cells<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.content
            .extend(cells.into_iter().map(|cell| cell.to_string()));
    }

    /// Appends a single content cell.
    pub fn add_content_cell(&mut self, cell: impl Display) {
        self.content.push(cell.to_string());
    }

    /// Appends a headline rendered above the header row.
    pub fn add_headline(&mut self, headline: impl Display) {
        self.headlines.push(headline.to_string());
    }

    /// Removes all header and content cells. Headlines and padding are kept.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.content.clear();
    }

    #[inline]
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Content cells as added, without row padding.
    pub fn content(&self) -> &[String] {
        &self.content
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

    /// Takes a validated snapshot of the current state.
    ///
    /// Fails with [`TableError::InvalidState`](crate::TableError::InvalidState)
    /// when no header column has been added.
    pub fn layout(&self) -> Result<TableLayout> {
        TableLayout::new(
            &self.headers,
            &self.content,
            &self.headlines,
            self.padding,
            self.line_ending,
        )
    }

    /// Renders every line of the table, without terminators.
    pub fn render_lines(&self) -> Result<Vec<String>> {
        Ok(self.layout()?.lines())
    }

    /// Renders the table as one string, each line followed by the configured
    /// line ending.
    pub fn render(&self) -> Result<String> {
        Ok(self.layout()?.to_string())
    }

    /// Renders the table and writes it to `out`.
    ///
    /// Nothing is written if rendering fails.
    pub fn print_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        let output = self.render()?;
        out.write_all(output.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}
