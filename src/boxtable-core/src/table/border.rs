//! Double-line box-drawing characters for table rendering.

/// Top-left corner: ╔
pub const TOP_LEFT: char = '\u{2554}';
/// Top-right corner: ╗
pub const TOP_RIGHT: char = '\u{2557}';
/// Bottom-left corner: ╚
pub const BOTTOM_LEFT: char = '\u{255A}';
/// Bottom-right corner: ╝
pub const BOTTOM_RIGHT: char = '\u{255D}';
/// Double horizontal line: ═
pub const DOUBLE_HORIZONTAL: char = '\u{2550}';
/// Double vertical line: ║
pub const DOUBLE_VERTICAL: char = '\u{2551}';
/// Single horizontal line: ─
pub const HORIZONTAL: char = '\u{2500}';
/// Single vertical line, used between cells: │
pub const VERTICAL: char = '\u{2502}';
/// Top tee on a double border: ╤
pub const DOUBLE_T_DOWN: char = '\u{2564}';
/// Bottom tee on a double border: ╧
pub const DOUBLE_T_UP: char = '\u{2567}';
/// Single tee below a headline: ┬
pub const T_DOWN: char = '\u{252C}';
/// Cross between content rows: ┼
pub const CROSS: char = '\u{253C}';
/// Cross on the header divider: ╪
pub const DOUBLE_CROSS: char = '\u{256A}';
/// Left tee of a single divider: ╟
pub const T_RIGHT: char = '\u{255F}';
/// Right tee of a single divider: ╢
pub const T_LEFT: char = '\u{2562}';
/// Left tee of the header divider: ╠
pub const DOUBLE_T_RIGHT: char = '\u{2560}';
/// Right tee of the header divider: ╣
pub const DOUBLE_T_LEFT: char = '\u{2563}';

/// The four characters that make up one horizontal border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderStyle {
    pub left: char,
    pub fill: char,
    pub junction: char,
    pub right: char,
}

impl BorderStyle {
    const fn new(left: char, fill: char, junction: char, right: char) -> Self {
        Self {
            left,
            fill,
            junction,
            right,
        }
    }
}

/// Top border when no headline is present: ╔═╤╗
pub const TOP: BorderStyle = BorderStyle::new(TOP_LEFT, DOUBLE_HORIZONTAL, DOUBLE_T_DOWN, TOP_RIGHT);

/// Top border above a headline, without column junctions: ╔══╗
pub const TOP_HEADLINE: BorderStyle =
    BorderStyle::new(TOP_LEFT, DOUBLE_HORIZONTAL, DOUBLE_HORIZONTAL, TOP_RIGHT);

/// Between two headlines: ╟──╢
pub const HEADLINE_SEPARATOR: BorderStyle = BorderStyle::new(T_RIGHT, HORIZONTAL, HORIZONTAL, T_LEFT);

/// Between the last headline and the header row: ╟─┬╢
pub const HEADLINE_TO_HEADER: BorderStyle = BorderStyle::new(T_RIGHT, HORIZONTAL, T_DOWN, T_LEFT);

/// Between the header row and the first content row: ╠═╪╣
pub const HEADER_DIVIDER: BorderStyle =
    BorderStyle::new(DOUBLE_T_RIGHT, DOUBLE_HORIZONTAL, DOUBLE_CROSS, DOUBLE_T_LEFT);

/// Between two content rows: ╟─┼╢
pub const ROW_DIVIDER: BorderStyle = BorderStyle::new(T_RIGHT, HORIZONTAL, CROSS, T_LEFT);

/// Bottom border: ╚═╧╝
pub const BOTTOM: BorderStyle =
    BorderStyle::new(BOTTOM_LEFT, DOUBLE_HORIZONTAL, DOUBLE_T_UP, BOTTOM_RIGHT);
