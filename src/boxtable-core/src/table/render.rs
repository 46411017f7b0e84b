//! Table rendering functions.
//!
//! Turns a [`TableLayout`] into plain text lines.

use super::border::{self, BorderStyle};
use super::types::TableLayout;
use super::utils::{right_justify, right_pad, wrap_headline};

/// Renders a table layout to lines with full box-drawing borders.
///
/// Order: top border, headline block, header row, header divider, then each
/// content row followed by a row divider or, after the last row, the bottom
/// border. A table without content rows ends at the header divider.
pub fn render_lines(table: &TableLayout) -> Vec<String> {
    let widths = table.column_widths();
    let padding = table.padding();
    let mut lines = Vec::with_capacity(4 + 2 * table.rows().len());

    if table.headlines().is_empty() {
        // Top border: ╔═══╤═══╗
        lines.push(render_border(widths, padding, border::TOP));
    } else {
        // Top border: ╔═══════╗
        lines.push(render_border(widths, padding, border::TOP_HEADLINE));

        let last = table.headlines().len() - 1;
        for (i, headline) in table.headlines().iter().enumerate() {
            lines.extend(render_headline(table, headline));
            let separator = if i == last {
                border::HEADLINE_TO_HEADER
            } else {
                border::HEADLINE_SEPARATOR
            };
            lines.push(render_border(widths, padding, separator));
        }
    }

    lines.push(render_row(table.headers(), widths, padding));
    lines.push(render_border(widths, padding, border::HEADER_DIVIDER));

    let num_rows = table.rows().len();
    for (i, row) in table.rows().iter().enumerate() {
        lines.push(render_row(row, widths, padding));
        let divider = if i + 1 == num_rows {
            border::BOTTOM
        } else {
            border::ROW_DIVIDER
        };
        lines.push(render_border(widths, padding, divider));
    }

    lines
}

/// Renders a horizontal border line.
///
/// # Arguments
/// * `widths` - Column widths (content only, excluding padding)
/// * `padding` - Padding on each side of a cell
/// * `style` - Left, fill, junction and right characters
pub fn render_border(widths: &[usize], padding: usize, style: BorderStyle) -> String {
    let mut line = String::new();
    line.push(style.left);

    for (i, &width) in widths.iter().enumerate() {
        line.extend(std::iter::repeat_n(
            style.fill,
            width.saturating_add(padding.saturating_mul(2)),
        ));
        line.push(if i + 1 == widths.len() {
            style.right
        } else {
            style.junction
        });
    }

    line
}

/// Renders a header or content row: `║ a │ b ║`.
pub fn render_row(cells: &[String], widths: &[usize], padding: usize) -> String {
    render_cells(
        cells,
        widths,
        padding,
        border::DOUBLE_VERTICAL,
        border::VERTICAL,
        border::DOUBLE_VERTICAL,
    )
}

/// Renders a single line of cells.
///
/// Each cell is right-justified into `padding + width` and followed by
/// `padding` spaces. Cells longer than that are kept whole and push the
/// right border out. Missing cells render as empty.
pub fn render_cells(
    cells: &[String],
    widths: &[usize],
    padding: usize,
    left: char,
    separator: char,
    right: char,
) -> String {
    let mut line = String::new();
    line.push(left);

    for (i, &width) in widths.iter().enumerate() {
        let content = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&right_justify(content, padding.saturating_add(width)));
        line.push_str(&" ".repeat(padding));
        line.push(if i + 1 == widths.len() { right } else { separator });
    }

    line
}

/// Renders one headline, wrapped to the table width, as one line per
/// physical row.
pub fn render_headline(table: &TableLayout, headline: &str) -> Vec<String> {
    let padding = table.padding();
    let field = table.table_width().saturating_sub(padding + 2);

    wrap_headline(headline, table.headline_width())
        .into_iter()
        .map(|text| {
            format!(
                "{}{}{}{}",
                border::DOUBLE_VERTICAL,
                " ".repeat(padding),
                right_pad(&text, field),
                border::DOUBLE_VERTICAL
            )
        })
        .collect()
}
