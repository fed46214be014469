//! Table row and cell formatting state.
//!
//! The session holds one row record and one cell record; every row and every
//! cell in the document is serialized from those shared records, so the host
//! must reset any field it does not want carried into the next row or cell.

use crate::border::{BorderFormat, ShadingFormat};

/// Table row alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAlignment {
    /// Left-aligned row
    #[default]
    Left,
    /// Centered row
    Center,
    /// Right-aligned row
    Right,
}

/// Vertical alignment of text within a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellVerticalAlignment {
    /// Top-aligned
    Top,
    /// Centered
    #[default]
    Center,
    /// Bottom-aligned
    Bottom,
}

/// Text flow direction within a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    /// Left to right, top to bottom
    #[default]
    LeftToRightTopToBottom,
    /// Right to left, top to bottom (rotated)
    RightToLeftTopToBottom,
    /// Left to right, bottom to top
    LeftToRightBottomToTop,
    /// Left to right, top to bottom, vertical
    LeftToRightTopToBottomVertical,
    /// Right to left, top to bottom, vertical
    RightToLeftTopToBottomVertical,
}

/// One side of a table cell border: a presence flag plus the border
/// definition to use when the flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBorder {
    /// Serialize this border side
    pub enabled: bool,
    /// Border definition
    pub format: BorderFormat,
}

impl Default for CellBorder {
    fn default() -> Self {
        Self {
            enabled: false,
            format: BorderFormat {
                width: 5,
                ..BorderFormat::default()
            },
        }
    }
}

/// Table row formatting properties. Measurements are in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableRowFormat {
    /// Row alignment
    pub alignment: RowAlignment,
    /// Row height (0 lets the content decide)
    pub row_height: i32,
    /// Default cell left margin
    pub margin_left: i32,
    /// Default cell right margin
    pub margin_right: i32,
    /// Default cell top margin
    pub margin_top: i32,
    /// Default cell bottom margin
    pub margin_bottom: i32,
    /// Row left offset
    pub row_left_margin: i32,
}

/// Table cell formatting properties.
///
/// The cell's right boundary (`\cellx`) is not part of this record; it is an
/// absolute column position in the row, supplied per call to
/// [`RtfWriter::start_table_cell`](crate::RtfWriter::start_table_cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCellFormat {
    /// Vertical alignment of the cell text
    pub vertical_alignment: CellVerticalAlignment,
    /// Cell left margin (host-settable, not serialized)
    pub margin_left: i32,
    /// Cell right margin (host-settable, not serialized)
    pub margin_right: i32,
    /// Cell top margin (host-settable, not serialized)
    pub margin_top: i32,
    /// Cell bottom margin (host-settable, not serialized)
    pub margin_bottom: i32,
    /// Text flow direction
    pub text_direction: TextDirection,
    /// Serialize the shading sub-record
    pub cell_shading: bool,
    /// Shading definition
    pub shading: ShadingFormat,
    /// Left border side
    pub border_left: CellBorder,
    /// Right border side
    pub border_right: CellBorder,
    /// Top border side
    pub border_top: CellBorder,
    /// Bottom border side
    pub border_bottom: CellBorder,
}

impl Default for TableCellFormat {
    fn default() -> Self {
        Self {
            vertical_alignment: CellVerticalAlignment::Center,
            margin_left: 0,
            margin_right: 0,
            margin_top: 0,
            margin_bottom: 0,
            text_direction: TextDirection::LeftToRightTopToBottom,
            cell_shading: false,
            shading: ShadingFormat::default(),
            border_left: CellBorder::default(),
            border_right: CellBorder::default(),
            border_top: CellBorder::default(),
            border_bottom: CellBorder::default(),
        }
    }
}
