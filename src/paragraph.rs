//! Paragraph-level formatting state.

use crate::border::{BorderFormat, ShadingFormat, TabsFormat};

/// Paragraph break type, emitted before the paragraph content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphBreak {
    /// No break
    #[default]
    None,
    /// Page break
    Page,
    /// Column break
    Column,
    /// Line break
    Line,
}

/// Paragraph text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left-aligned
    #[default]
    Left,
    /// Centered
    Center,
    /// Right-aligned
    Right,
    /// Justified
    Justify,
}

/// Underline style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    /// No underline (`\ulnone`)
    #[default]
    None,
    /// Continuous underline
    Continuous,
    /// Dotted underline
    Dotted,
    /// Dashed underline
    Dashed,
    /// Dash-dotted underline
    DashDot,
    /// Dash-dot-dotted underline
    DashDotDot,
    /// Double underline
    Double,
    /// Heavy wave underline
    HeavyWave,
    /// Long dashed underline
    LongDash,
    /// Thick underline
    Thick,
    /// Thick dotted underline
    ThickDotted,
    /// Thick dashed underline
    ThickDashed,
    /// Thick dash-dotted underline
    ThickDashDot,
    /// Thick dash-dot-dotted underline
    ThickDashDotDot,
    /// Thick long dashed underline
    ThickLongDash,
    /// Double wave underline
    DoubleWave,
    /// Word-only underline
    Word,
    /// Wave underline
    Wave,
}

/// Bullet and numbering definition for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingFormat {
    /// Numbering level (11 is a bulleted paragraph)
    pub level: i32,
    /// Distance between the bullet character and the text (in twips)
    pub space: i32,
    /// Bullet character as a cp1252 code point
    pub bullet_char: u8,
}

impl Default for NumberingFormat {
    fn default() -> Self {
        Self {
            level: 11,
            space: 360,
            // cp1252 bullet
            bullet_char: 0x95,
        }
    }
}

/// Character (font run) formatting properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterFormat {
    /// Text animation kind (0 is none)
    pub animation: i32,
    /// Expansion or compression of the text in quarter-points
    pub expansion: i32,
    /// Kerning threshold in half-points (0 disables kerning)
    pub kerning: i32,
    /// Horizontal scaling percentage
    pub scale: i32,
    /// Font number (font table index)
    pub font_number: i32,
    /// Font size in half-points
    pub font_size: i32,
    /// Foreground color (color table index)
    pub foreground_color: i32,
    /// Background color (color table index)
    pub background_color: i32,
    /// Bold
    pub bold: bool,
    /// All capitals
    pub capitals: bool,
    /// Double strikethrough
    pub double_strike: bool,
    /// Embossed text (on-control only, no explicit off)
    pub emboss: bool,
    /// Engraved text (on-control only, no explicit off)
    pub engrave: bool,
    /// Italic
    pub italic: bool,
    /// Outline
    pub outline: bool,
    /// Shadow
    pub shadow: bool,
    /// Small capitals
    pub small_capitals: bool,
    /// Strikethrough
    pub strike: bool,
    /// Subscript (on-control only, no explicit off)
    pub subscript: bool,
    /// Superscript (on-control only, no explicit off)
    pub superscript: bool,
    /// Underline style
    pub underline: UnderlineStyle,
}

impl Default for CharacterFormat {
    fn default() -> Self {
        Self {
            animation: 0,
            expansion: 0,
            kerning: 0,
            scale: 100,
            font_number: 0,
            // 12pt
            font_size: 24,
            foreground_color: 0,
            background_color: 0,
            bold: false,
            capitals: false,
            double_strike: false,
            emboss: false,
            engrave: false,
            italic: false,
            outline: false,
            shadow: false,
            small_capitals: false,
            strike: false,
            subscript: false,
            superscript: false,
            underline: UnderlineStyle::None,
        }
    }
}

/// Paragraph formatting properties.
///
/// `text` is transient content, overwritten by every
/// [`RtfWriter::start_paragraph`](crate::RtfWriter::start_paragraph) call.
/// The four `paragraph_*` presence flags gate whether the matching
/// sub-record is serialized; the sub-record's own values are irrelevant
/// while its flag is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphFormat {
    /// Paragraph break type
    pub paragraph_break: ParagraphBreak,
    /// Emit `\par` (close the previous paragraph)
    pub new_paragraph: bool,
    /// Emit `\pard` (reset to default paragraph properties first)
    pub default_paragraph: bool,
    /// Text alignment
    pub alignment: Alignment,
    /// First line indent (in twips)
    pub first_line_indent: i32,
    /// Left indent (in twips)
    pub left_indent: i32,
    /// Right indent (in twips)
    pub right_indent: i32,
    /// Space before the paragraph (in twips)
    pub space_before: i32,
    /// Space after the paragraph (in twips)
    pub space_after: i32,
    /// Line spacing (in twips, 0 for automatic)
    pub line_spacing: i32,
    /// Paragraph text
    pub text: String,
    /// Continuation mode: emit only `\tab` plus the text, skipping all
    /// formatting controls
    pub tabbed_text: bool,
    /// Paragraph lives inside a table cell (`\intbl` instead of `\plain`)
    pub table_text: bool,
    /// Serialize the tab stop sub-record
    pub paragraph_tabs: bool,
    /// Tab stop definition
    pub tabs: TabsFormat,
    /// Serialize the numbering sub-record
    pub paragraph_nums: bool,
    /// Bullet and numbering definition
    pub nums: NumberingFormat,
    /// Serialize the border sub-record
    pub paragraph_borders: bool,
    /// Border definition
    pub borders: BorderFormat,
    /// Serialize the shading sub-record
    pub paragraph_shading: bool,
    /// Shading definition
    pub shading: ShadingFormat,
    /// Character formatting (always serialized)
    pub character: CharacterFormat,
}

impl Default for ParagraphFormat {
    fn default() -> Self {
        Self {
            paragraph_break: ParagraphBreak::None,
            new_paragraph: false,
            default_paragraph: true,
            alignment: Alignment::Left,
            first_line_indent: 0,
            left_indent: 0,
            right_indent: 0,
            space_before: 0,
            space_after: 0,
            line_spacing: 0,
            text: String::new(),
            tabbed_text: false,
            table_text: false,
            paragraph_tabs: false,
            tabs: TabsFormat::default(),
            paragraph_nums: false,
            nums: NumberingFormat::default(),
            paragraph_borders: false,
            borders: BorderFormat::default(),
            paragraph_shading: false,
            shading: ShadingFormat::default(),
            character: CharacterFormat::default(),
        }
    }
}
