//! Document-level formatting state.

/// Document view mode, written as the `\viewkind` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    /// No view information
    None,
    /// Page layout view
    #[default]
    PageLayout,
    /// Outline view
    Outline,
    /// Master document view
    MasterDocument,
    /// Normal view
    Normal,
    /// Online layout view
    OnlineLayout,
}

impl ViewKind {
    /// Numeric `\viewkind` parameter value.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            ViewKind::None => 0,
            ViewKind::PageLayout => 1,
            ViewKind::Outline => 2,
            ViewKind::MasterDocument => 3,
            ViewKind::Normal => 4,
            ViewKind::OnlineLayout => 5,
        }
    }
}

/// Document formatting properties.
///
/// One instance lives on the session. The host may mutate it freely before
/// the session writes it; it is serialized exactly once, right after the
/// header. All measurements are in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentFormat {
    /// Document view mode
    pub view_kind: ViewKind,
    /// Zoom level in percent
    pub view_scale: i32,
    /// Paper width
    pub paper_width: i32,
    /// Paper height
    pub paper_height: i32,
    /// Left margin
    pub margin_left: i32,
    /// Right margin
    pub margin_right: i32,
    /// Top margin
    pub margin_top: i32,
    /// Bottom margin
    pub margin_bottom: i32,
    /// Facing pages (activates odd/even headers and gutters)
    pub facing_pages: bool,
    /// Gutter width
    pub gutter_width: i32,
    /// Annotation-protected document (reader treats it as read-only)
    pub read_only: bool,
}

impl Default for DocumentFormat {
    /// US-Letter geometry with 1.25in side and 1in top/bottom margins.
    fn default() -> Self {
        Self {
            view_kind: ViewKind::PageLayout,
            view_scale: 100,
            paper_width: 12240,
            paper_height: 15840,
            margin_left: 1800,
            margin_right: 1800,
            margin_top: 1440,
            margin_bottom: 1440,
            facing_pages: false,
            gutter_width: 0,
            read_only: false,
        }
    }
}
