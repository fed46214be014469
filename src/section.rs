//! Section-level formatting state.

/// Section break type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBreak {
    /// Continuous section (no page break)
    #[default]
    Continuous,
    /// New column
    Column,
    /// New page
    Page,
    /// New even page
    EvenPage,
    /// New odd page
    OddPage,
}

/// Section formatting properties.
///
/// One instance lives on the session and is never reset by a write: every
/// section start serializes the current snapshot, so a field change affects
/// all sections started afterwards. Measurements are in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionFormat {
    /// Section break type
    pub section_break: SectionBreak,
    /// Emit `\sect` (start a new section)
    pub new_section: bool,
    /// Emit `\sectd` (reset to default section properties first)
    pub default_section: bool,
    /// Page width
    pub page_width: i32,
    /// Page height
    pub page_height: i32,
    /// Left page margin
    pub page_margin_left: i32,
    /// Right page margin
    pub page_margin_right: i32,
    /// Top page margin
    pub page_margin_top: i32,
    /// Bottom page margin
    pub page_margin_bottom: i32,
    /// Gutter width
    pub page_gutter_width: i32,
    /// Header offset from the top of the page
    pub page_header_offset: i32,
    /// Footer offset from the bottom of the page
    pub page_footer_offset: i32,
    /// Show the page number
    pub show_page_number: bool,
    /// Page number right offset
    pub page_number_offset_x: i32,
    /// Page number top offset
    pub page_number_offset_y: i32,
    /// Lay the section out in columns
    pub cols: bool,
    /// Number of columns
    pub cols_number: i32,
    /// Distance between columns
    pub cols_distance: i32,
    /// Draw a line between columns
    pub cols_line_between: bool,
}

impl Default for SectionFormat {
    fn default() -> Self {
        Self {
            section_break: SectionBreak::Continuous,
            new_section: false,
            default_section: true,
            page_width: 12240,
            page_height: 15840,
            page_margin_left: 1800,
            page_margin_right: 1800,
            page_margin_top: 1440,
            page_margin_bottom: 1440,
            page_gutter_width: 0,
            page_header_offset: 720,
            page_footer_offset: 720,
            show_page_number: false,
            page_number_offset_x: 720,
            page_number_offset_y: 720,
            cols: false,
            cols_number: 1,
            cols_distance: 720,
            cols_line_between: false,
        }
    }
}
