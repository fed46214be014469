//! Static enum-to-control-word tables.
//!
//! Every lookup maps one style enum to its RTF control word. Variants with
//! no control word (`None`, `Fill`, ...) map to the empty string; callers
//! concatenate the result unconditionally, so a miss renders as nothing
//! rather than failing.

use crate::border::{BorderKind, BorderStyle, ShadingPattern, TabKind, TabLeader};
use crate::document::ViewKind;
use crate::paragraph::{Alignment, ParagraphBreak, UnderlineStyle};
use crate::section::SectionBreak;
use crate::table::{CellVerticalAlignment, RowAlignment, TextDirection};

/// Section break control word.
pub(crate) const fn section_break(value: SectionBreak) -> &'static str {
    match value {
        SectionBreak::Continuous => "\\sbknone",
        SectionBreak::Column => "\\sbkcol",
        SectionBreak::Page => "\\sbkpage",
        SectionBreak::EvenPage => "\\sbkeven",
        SectionBreak::OddPage => "\\sbkodd",
    }
}

/// Paragraph break control word.
pub(crate) const fn paragraph_break(value: ParagraphBreak) -> &'static str {
    match value {
        ParagraphBreak::None => "",
        ParagraphBreak::Page => "\\page",
        ParagraphBreak::Column => "\\column",
        ParagraphBreak::Line => "\\line",
    }
}

/// Paragraph alignment control word.
pub(crate) const fn alignment(value: Alignment) -> &'static str {
    match value {
        Alignment::Left => "\\ql",
        Alignment::Center => "\\qc",
        Alignment::Right => "\\qr",
        Alignment::Justify => "\\qj",
    }
}

/// Tab kind control word.
pub(crate) const fn tab_kind(value: TabKind) -> &'static str {
    match value {
        TabKind::None => "",
        TabKind::Center => "\\tqc",
        TabKind::Right => "\\tqr",
        TabKind::Decimal => "\\tqdec",
    }
}

/// Tab leader control word.
pub(crate) const fn tab_leader(value: TabLeader) -> &'static str {
    match value {
        TabLeader::None => "",
        TabLeader::Dot => "\\tldot",
        TabLeader::MiddleDot => "\\tlmdot",
        TabLeader::Hyphen => "\\tlhyph",
        TabLeader::Underline => "\\tlul",
        TabLeader::ThickLine => "\\tlth",
        TabLeader::Equal => "\\tleq",
    }
}

/// Paragraph border placement control word.
pub(crate) const fn border_kind(value: BorderKind) -> &'static str {
    match value {
        BorderKind::None => "",
        BorderKind::Top => "\\brdrt",
        BorderKind::Bottom => "\\brdrb",
        BorderKind::Left => "\\brdrl",
        BorderKind::Right => "\\brdrr",
        BorderKind::Box => "\\box",
    }
}

/// Border line style control word.
pub(crate) const fn border_style(value: BorderStyle) -> &'static str {
    match value {
        BorderStyle::Single => "\\brdrs",
        BorderStyle::DoubleThick => "\\brdrth",
        BorderStyle::Shadow => "\\brdrsh",
        BorderStyle::Double => "\\brdrdb",
        BorderStyle::Dotted => "\\brdrdot",
        BorderStyle::Dashed => "\\brdrdash",
        BorderStyle::Hairline => "\\brdrhair",
        BorderStyle::Inset => "\\brdrinset",
        BorderStyle::DashSmall => "\\brdrdashsm",
        BorderStyle::DotDash => "\\brdrdashd",
        BorderStyle::DotDotDash => "\\brdrdashdd",
        BorderStyle::Outset => "\\brdroutset",
        BorderStyle::Triple => "\\brdrtriple",
        BorderStyle::Wavy => "\\brdrwavy",
        BorderStyle::WavyDouble => "\\brdrwavydb",
        BorderStyle::Striped => "\\brdrdashdotstr",
        BorderStyle::Embossed => "\\brdremboss",
        BorderStyle::Engraved => "\\brdrengrave",
    }
}

/// Paragraph-scoped shading pattern control word.
pub(crate) const fn paragraph_shading(value: ShadingPattern) -> &'static str {
    match value {
        ShadingPattern::Fill => "",
        ShadingPattern::Horizontal => "\\bghoriz",
        ShadingPattern::Vertical => "\\bgvert",
        ShadingPattern::ForwardDiagonal => "\\bgfdiag",
        ShadingPattern::BackwardDiagonal => "\\bgbdiag",
        ShadingPattern::Cross => "\\bgcross",
        ShadingPattern::DiagonalCross => "\\bgdcross",
        ShadingPattern::DarkHorizontal => "\\bgdkhoriz",
        ShadingPattern::DarkVertical => "\\bgdkvert",
        ShadingPattern::DarkForwardDiagonal => "\\bgdkfdiag",
        ShadingPattern::DarkBackwardDiagonal => "\\bgdkbdiag",
        ShadingPattern::DarkCross => "\\bgdkcross",
        ShadingPattern::DarkDiagonalCross => "\\bgdkdcross",
    }
}

/// Cell-scoped shading pattern control word.
pub(crate) const fn cell_shading(value: ShadingPattern) -> &'static str {
    match value {
        ShadingPattern::Fill => "",
        ShadingPattern::Horizontal => "\\clbghoriz",
        ShadingPattern::Vertical => "\\clbgvert",
        ShadingPattern::ForwardDiagonal => "\\clbgfdiag",
        ShadingPattern::BackwardDiagonal => "\\clbgbdiag",
        ShadingPattern::Cross => "\\clbgcross",
        ShadingPattern::DiagonalCross => "\\clbgdcross",
        ShadingPattern::DarkHorizontal => "\\clbgdkhoriz",
        ShadingPattern::DarkVertical => "\\clbgdkvert",
        ShadingPattern::DarkForwardDiagonal => "\\clbgdkfdiag",
        ShadingPattern::DarkBackwardDiagonal => "\\clbgdkbdiag",
        ShadingPattern::DarkCross => "\\clbgdkcross",
        ShadingPattern::DarkDiagonalCross => "\\clbgdkdcross",
    }
}

/// Underline style control word.
pub(crate) const fn underline_style(value: UnderlineStyle) -> &'static str {
    match value {
        UnderlineStyle::None => "\\ulnone",
        UnderlineStyle::Continuous => "\\ul",
        UnderlineStyle::Dotted => "\\uld",
        UnderlineStyle::Dashed => "\\uldash",
        UnderlineStyle::DashDot => "\\uldashd",
        UnderlineStyle::DashDotDot => "\\uldashdd",
        UnderlineStyle::Double => "\\uldb",
        UnderlineStyle::HeavyWave => "\\ulhwave",
        UnderlineStyle::LongDash => "\\ulldash",
        UnderlineStyle::Thick => "\\ulth",
        UnderlineStyle::ThickDotted => "\\ulthd",
        UnderlineStyle::ThickDashed => "\\ulthdash",
        UnderlineStyle::ThickDashDot => "\\ulthdashd",
        UnderlineStyle::ThickDashDotDot => "\\ulthdashdd",
        UnderlineStyle::ThickLongDash => "\\ulthldash",
        UnderlineStyle::DoubleWave => "\\uldbwave",
        UnderlineStyle::Word => "\\ulw",
        UnderlineStyle::Wave => "\\ulwave",
    }
}

/// Row alignment control word.
pub(crate) const fn row_alignment(value: RowAlignment) -> &'static str {
    match value {
        RowAlignment::Left => "\\trql",
        RowAlignment::Center => "\\trqc",
        RowAlignment::Right => "\\trqr",
    }
}

/// Cell vertical alignment control word.
pub(crate) const fn cell_vertical_alignment(value: CellVerticalAlignment) -> &'static str {
    match value {
        CellVerticalAlignment::Top => "\\clvertalt",
        CellVerticalAlignment::Center => "\\clvertalc",
        CellVerticalAlignment::Bottom => "\\clvertalb",
    }
}

/// Cell text direction control word.
pub(crate) const fn text_direction(value: TextDirection) -> &'static str {
    match value {
        TextDirection::LeftToRightTopToBottom => "\\cltxlrtb",
        TextDirection::RightToLeftTopToBottom => "\\cltxtbrl",
        TextDirection::LeftToRightBottomToTop => "\\cltxbtlr",
        TextDirection::LeftToRightTopToBottomVertical => "\\cltxlrtbv",
        TextDirection::RightToLeftTopToBottomVertical => "\\cltxtbrlv",
    }
}

/// `\viewkind` parameter value.
pub(crate) const fn view_kind(value: ViewKind) -> i32 {
    value.value()
}
