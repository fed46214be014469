//! Border, shading, and tab stop formatting state.
//!
//! These sub-records hang off the paragraph and table cell formats. Each is
//! gated by a presence flag on its parent record: when the flag is off, the
//! sub-record is not serialized at all, whatever its field values.

/// Border placement for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderKind {
    /// No border
    #[default]
    None,
    /// Border above the paragraph
    Top,
    /// Border below the paragraph
    Bottom,
    /// Border to the left of the paragraph
    Left,
    /// Border to the right of the paragraph
    Right,
    /// Box border around the paragraph
    Box,
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// Single-thickness border
    #[default]
    Single,
    /// Double-thickness border
    DoubleThick,
    /// Shadowed border
    Shadow,
    /// Double border
    Double,
    /// Dotted border
    Dotted,
    /// Dashed border
    Dashed,
    /// Hairline border
    Hairline,
    /// Inset border (3D)
    Inset,
    /// Dashed border, small dashes
    DashSmall,
    /// Dot-dashed border
    DotDash,
    /// Dot-dot-dashed border
    DotDotDash,
    /// Outset border (3D)
    Outset,
    /// Triple border
    Triple,
    /// Wavy border
    Wavy,
    /// Double wavy border
    WavyDouble,
    /// Striped border
    Striped,
    /// Embossed border
    Embossed,
    /// Engraved border
    Engraved,
}

/// Border definition for a paragraph or one side of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderFormat {
    /// Border placement (paragraph borders only; cells carry one
    /// `BorderFormat` per side instead)
    pub kind: BorderKind,
    /// Border line style
    pub style: BorderStyle,
    /// Border width (in twips)
    pub width: i32,
    /// Border color (color table index)
    pub color: i32,
    /// Distance between border and content (in twips)
    pub space: i32,
}

impl Default for BorderFormat {
    fn default() -> Self {
        Self {
            kind: BorderKind::None,
            style: BorderStyle::Single,
            width: 0,
            color: 0,
            space: 0,
        }
    }
}

/// Shading pattern for paragraphs and table cells.
///
/// The same pattern serializes to different control words at paragraph scope
/// (`\bghoriz`, ...) and at cell scope (`\clbghoriz`, ...); `Fill` renders as
/// an empty string at both scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingPattern {
    /// Plain fill (no pattern control word)
    #[default]
    Fill,
    /// Horizontal stripes
    Horizontal,
    /// Vertical stripes
    Vertical,
    /// Forward diagonal stripes
    ForwardDiagonal,
    /// Backward diagonal stripes
    BackwardDiagonal,
    /// Crosshatch
    Cross,
    /// Diagonal crosshatch
    DiagonalCross,
    /// Dark horizontal stripes
    DarkHorizontal,
    /// Dark vertical stripes
    DarkVertical,
    /// Dark forward diagonal stripes
    DarkForwardDiagonal,
    /// Dark backward diagonal stripes
    DarkBackwardDiagonal,
    /// Dark crosshatch
    DarkCross,
    /// Dark diagonal crosshatch
    DarkDiagonalCross,
}

/// Shading/background fill definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadingFormat {
    /// Shading intensity in hundredths of a percent
    pub intensity: i32,
    /// Shading pattern
    pub pattern: ShadingPattern,
    /// Pattern foreground color (color table index)
    pub fill_color: i32,
    /// Pattern background color (color table index)
    pub background_color: i32,
}

/// Tab stop kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabKind {
    /// Ordinary left tab (no control word)
    #[default]
    None,
    /// Centered tab
    Center,
    /// Flush-right tab
    Right,
    /// Decimal tab (align on decimal point)
    Decimal,
}

/// Tab leader character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabLeader {
    /// No leader
    #[default]
    None,
    /// Leader dots
    Dot,
    /// Leader middle dots
    MiddleDot,
    /// Leader hyphens
    Hyphen,
    /// Leader underline
    Underline,
    /// Leader thick line
    ThickLine,
    /// Leader equal signs
    Equal,
}

/// Tab stop definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabsFormat {
    /// Tab position (in twips from the left margin)
    pub position: i32,
    /// Tab kind
    pub kind: TabKind,
    /// Tab leader
    pub leader: TabLeader,
}
