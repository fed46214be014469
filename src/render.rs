//! Fragment builders: one pure function per structural level.
//!
//! Each builder renders the current snapshot of a format record into an RTF
//! fragment string. The builders never touch the sink and keep no state, so
//! rendering the same record twice yields byte-identical fragments.

use crate::border::BorderFormat;
use crate::document::DocumentFormat;
use crate::lookup;
use crate::paragraph::{CharacterFormat, ParagraphFormat};
use crate::section::SectionFormat;
use crate::table::{TableCellFormat, TableRowFormat};

/// Append a parameterless control word.
#[inline]
fn control(out: &mut String, word: &str) {
    out.push('\\');
    out.push_str(word);
}

/// Append a control word with a numeric parameter.
#[inline]
fn control_value(out: &mut String, word: &str, value: i32) {
    let mut digits = itoa::Buffer::new();
    out.push('\\');
    out.push_str(word);
    out.push_str(digits.format(value));
}

/// Append document text with RTF escaping.
///
/// Backslash and braces are escaped, newline and tab become their control
/// words, and non-ASCII characters fall back to `\uN?`.
fn escape_text(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => control(out, "par"),
            '\t' => control(out, "tab"),
            c if c.is_ascii() => out.push(c),
            c => {
                control_value(out, "u", c as i32);
                out.push('?');
            },
        }
    }
}

/// Append a cp1252 code point, hex-escaped when outside ASCII.
fn push_cp1252(out: &mut String, byte: u8) {
    if byte.is_ascii() {
        out.push(byte as char);
    } else {
        out.push_str("\\'");
        let digits = [byte >> 4, byte & 0x0F];
        for d in digits {
            out.push(char::from_digit(u32::from(d), 16).unwrap_or('0'));
        }
    }
}

/// Render the document formatting line, written once after the header.
pub(crate) fn document_format(df: &DocumentFormat) -> String {
    let mut out = String::with_capacity(96);

    control_value(&mut out, "viewkind", lookup::view_kind(df.view_kind));
    control_value(&mut out, "viewscale", df.view_scale);
    control_value(&mut out, "paperw", df.paper_width);
    control_value(&mut out, "paperh", df.paper_height);
    control_value(&mut out, "margl", df.margin_left);
    control_value(&mut out, "margr", df.margin_right);
    control_value(&mut out, "margt", df.margin_top);
    control_value(&mut out, "margb", df.margin_bottom);
    control_value(&mut out, "gutter", df.gutter_width);

    if df.facing_pages {
        control(&mut out, "facingp");
    }
    if df.read_only {
        control(&mut out, "annotprot");
    }

    out
}

/// Render a section formatting fragment from the current snapshot.
///
/// No field is consumed or cleared, so an unmodified record renders the same
/// fragment on every call.
pub(crate) fn section_format(sf: &SectionFormat) -> String {
    let mut out = String::with_capacity(160);
    out.push('\n');

    if sf.new_section {
        control(&mut out, "sect");
    }
    if sf.default_section {
        control(&mut out, "sectd");
    }
    if sf.show_page_number {
        control_value(&mut out, "pgnx", sf.page_number_offset_x);
        control_value(&mut out, "pgny", sf.page_number_offset_y);
    }

    out.push_str(lookup::section_break(sf.section_break));

    if sf.cols {
        control_value(&mut out, "cols", sf.cols_number);
        control_value(&mut out, "colsx", sf.cols_distance);
        if sf.cols_line_between {
            control(&mut out, "linebetcol");
        }
    }

    control_value(&mut out, "pgwsxn", sf.page_width);
    control_value(&mut out, "pghsxn", sf.page_height);
    control_value(&mut out, "marglsxn", sf.page_margin_left);
    control_value(&mut out, "margrsxn", sf.page_margin_right);
    control_value(&mut out, "margtsxn", sf.page_margin_top);
    control_value(&mut out, "margbsxn", sf.page_margin_bottom);
    control_value(&mut out, "guttersxn", sf.page_gutter_width);
    control_value(&mut out, "headery", sf.page_header_offset);
    control_value(&mut out, "footery", sf.page_footer_offset);

    out
}

/// Render the character formatting block.
///
/// Bold, capitals, double-strike, italic, outline, shadow, small capitals,
/// and strike always emit either their on- or off-control; emboss, engrave,
/// subscript, and superscript emit only the on-control.
fn character_block(out: &mut String, cf: &CharacterFormat) {
    control_value(out, "animtext", cf.animation);
    control_value(out, "expndtw", cf.expansion);
    control_value(out, "kerning", cf.kerning);
    control_value(out, "charscalex", cf.scale);
    control_value(out, "f", cf.font_number);
    control_value(out, "fs", cf.font_size);
    control_value(out, "cf", cf.foreground_color);

    control(out, if cf.bold { "b" } else { "b0" });
    control(out, if cf.capitals { "caps" } else { "caps0" });
    control(out, if cf.double_strike { "striked1" } else { "striked0" });
    if cf.emboss {
        control(out, "embo");
    }
    if cf.engrave {
        control(out, "impr");
    }
    control(out, if cf.italic { "i" } else { "i0" });
    control(out, if cf.outline { "outl" } else { "outl0" });
    control(out, if cf.shadow { "shad" } else { "shad0" });
    control(out, if cf.small_capitals { "scaps" } else { "scaps0" });
    control(out, if cf.strike { "strike" } else { "strike0" });
    if cf.subscript {
        control(out, "sub");
    }
    if cf.superscript {
        control(out, "super");
    }

    out.push_str(lookup::underline_style(cf.underline));
}

/// Render the paragraph border block.
fn border_block(out: &mut String, bf: &BorderFormat) {
    out.push_str(lookup::border_kind(bf.kind));
    out.push_str(lookup::border_style(bf.style));
    control_value(out, "brdrw", bf.width);
    control_value(out, "brsp", bf.space);
    control_value(out, "brdrcf", bf.color);
}

/// Render a paragraph fragment from the current snapshot.
///
/// In tabbed-text mode the whole paragraph collapses to `\tab` plus the
/// text; otherwise the fragment carries the full formatting line in fixed
/// order, ending with a space and the escaped text.
pub(crate) fn paragraph_format(pf: &ParagraphFormat) -> String {
    if pf.tabbed_text {
        let mut out = String::with_capacity(8 + pf.text.len());
        out.push_str("\\tab ");
        escape_text(&mut out, &pf.text);
        return out;
    }

    let mut out = String::with_capacity(192 + pf.text.len());
    out.push('\n');

    if pf.new_paragraph {
        control(&mut out, "par");
    }
    if pf.default_paragraph {
        control(&mut out, "pard");
    }
    control(&mut out, if pf.table_text { "intbl" } else { "plain" });

    out.push_str(lookup::paragraph_break(pf.paragraph_break));
    out.push_str(lookup::alignment(pf.alignment));

    if pf.paragraph_tabs {
        out.push_str(lookup::tab_kind(pf.tabs.kind));
        out.push_str(lookup::tab_leader(pf.tabs.leader));
        control_value(&mut out, "tx", pf.tabs.position);
    }

    if pf.paragraph_nums {
        out.push_str("{\\*\\pn");
        control_value(&mut out, "pnlvl", pf.nums.level);
        control_value(&mut out, "pnsp", pf.nums.space);
        out.push_str("\\pntxtb ");
        push_cp1252(&mut out, pf.nums.bullet_char);
        out.push('}');
    }

    if pf.paragraph_borders {
        border_block(&mut out, &pf.borders);
    }

    if pf.paragraph_shading {
        control_value(&mut out, "shading", pf.shading.intensity);
        out.push_str(lookup::paragraph_shading(pf.shading.pattern));
        control_value(&mut out, "cfpat", pf.shading.fill_color);
        control_value(&mut out, "cbpat", pf.shading.background_color);
    }

    control_value(&mut out, "fi", pf.first_line_indent);
    control_value(&mut out, "li", pf.left_indent);
    control_value(&mut out, "ri", pf.right_indent);
    control_value(&mut out, "sb", pf.space_before);
    control_value(&mut out, "sa", pf.space_after);
    control_value(&mut out, "sl", pf.line_spacing);

    character_block(&mut out, &pf.character);

    out.push(' ');
    escape_text(&mut out, &pf.text);

    out
}

/// Render a table row start fragment.
pub(crate) fn table_row(rf: &TableRowFormat) -> String {
    let mut out = String::with_capacity(128);
    out.push('\n');

    control(&mut out, "trowd");
    control_value(&mut out, "trgaph", 115);
    out.push_str(lookup::row_alignment(rf.alignment));
    control_value(&mut out, "trleft", rf.row_left_margin);
    control_value(&mut out, "trrh", rf.row_height);

    // Default cell paddings, each with its explicit units-in-twips flag.
    control_value(&mut out, "trpaddb", rf.margin_bottom);
    control_value(&mut out, "trpaddfb", 3);
    control_value(&mut out, "trpaddl", rf.margin_left);
    control_value(&mut out, "trpaddfl", 3);
    control_value(&mut out, "trpaddr", rf.margin_right);
    control_value(&mut out, "trpaddfr", 3);
    control_value(&mut out, "trpaddt", rf.margin_top);
    control_value(&mut out, "trpaddft", 3);

    out
}

/// Table row end fragment.
pub(crate) fn table_row_end() -> &'static str {
    "\n\\trgaph115\\row\\pard"
}

/// Render a table cell start fragment.
///
/// `right_margin` is the absolute right boundary of the cell within the row
/// (the `\cellx` value), supplied per call rather than stored on the record.
pub(crate) fn table_cell(cf: &TableCellFormat, right_margin: i32) -> String {
    let mut out = String::with_capacity(160);
    out.push('\n');

    control(&mut out, "tcelld");
    out.push_str(lookup::cell_vertical_alignment(cf.vertical_alignment));
    out.push_str(lookup::text_direction(cf.text_direction));

    for (word, side) in [
        ("clbrdrb", &cf.border_bottom),
        ("clbrdrl", &cf.border_left),
        ("clbrdrr", &cf.border_right),
        ("clbrdrt", &cf.border_top),
    ] {
        if side.enabled {
            control(&mut out, word);
            out.push_str(lookup::border_style(side.format.style));
            control_value(&mut out, "brdrw", side.format.width);
            control_value(&mut out, "brsp", side.format.space);
            control_value(&mut out, "brdrcf", side.format.color);
        }
    }

    if cf.cell_shading {
        out.push_str(lookup::cell_shading(cf.shading.pattern));
        control_value(&mut out, "clshdgn", cf.shading.intensity);
        control_value(&mut out, "clcfpat", cf.shading.fill_color);
        control_value(&mut out, "clcbpat", cf.shading.background_color);
    }

    control_value(&mut out, "cellx", right_margin);

    out
}

/// Table cell end fragment.
pub(crate) fn table_cell_end() -> &'static str {
    "\n\\cell "
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::{BorderKind, BorderStyle, ShadingPattern, TabKind, TabLeader};
    use crate::paragraph::{Alignment, ParagraphBreak, UnderlineStyle};
    use crate::section::SectionBreak;
    use crate::table::{CellVerticalAlignment, RowAlignment};

    #[test]
    fn document_format_defaults() {
        let fragment = document_format(&DocumentFormat::default());
        assert_eq!(
            fragment,
            "\\viewkind1\\viewscale100\\paperw12240\\paperh15840\\margl1800\\margr1800\\margt1440\\margb1440\\gutter0"
        );
    }

    #[test]
    fn document_format_flags() {
        let df = DocumentFormat {
            facing_pages: true,
            read_only: true,
            ..DocumentFormat::default()
        };
        let fragment = document_format(&df);
        assert!(fragment.ends_with("\\facingp\\annotprot"));
    }

    #[test]
    fn section_format_default_fragment() {
        let fragment = section_format(&SectionFormat::default());
        assert!(fragment.starts_with("\n\\sectd\\sbknone"));
        assert!(fragment.contains("\\pgwsxn12240\\pghsxn15840"));
        assert!(fragment.ends_with("\\headery720\\footery720"));
        assert!(!fragment.contains("\\sect\\"));
        assert!(!fragment.contains("\\cols"));
    }

    #[test]
    fn section_format_is_idempotent() {
        let mut sf = SectionFormat::default();
        sf.new_section = true;
        sf.section_break = SectionBreak::Page;
        sf.cols = true;
        sf.cols_number = 2;
        sf.cols_line_between = true;
        assert_eq!(section_format(&sf), section_format(&sf));
    }

    #[test]
    fn section_format_exactly_one_break_word() {
        for (brk, word) in [
            (SectionBreak::Continuous, "\\sbknone"),
            (SectionBreak::Column, "\\sbkcol"),
            (SectionBreak::Page, "\\sbkpage"),
            (SectionBreak::EvenPage, "\\sbkeven"),
            (SectionBreak::OddPage, "\\sbkodd"),
        ] {
            let sf = SectionFormat {
                section_break: brk,
                ..SectionFormat::default()
            };
            let fragment = section_format(&sf);
            assert!(fragment.contains(word));
            assert_eq!(fragment.matches("\\sbk").count(), 1);
        }
    }

    #[test]
    fn section_columns_block() {
        let sf = SectionFormat {
            cols: true,
            cols_number: 3,
            cols_distance: 360,
            cols_line_between: true,
            ..SectionFormat::default()
        };
        assert!(section_format(&sf).contains("\\cols3\\colsx360\\linebetcol"));
    }

    #[test]
    fn paragraph_default_fragment() {
        let mut pf = ParagraphFormat::default();
        pf.new_paragraph = true;
        pf.text = "Hello".into();
        let fragment = paragraph_format(&pf);
        assert!(fragment.starts_with("\n\\par\\pard\\plain\\ql"));
        assert!(fragment.contains("\\fi0\\li0\\ri0\\sb0\\sa0\\sl0"));
        assert!(fragment.contains("\\animtext0\\expndtw0\\kerning0\\charscalex100\\f0\\fs24\\cf0"));
        assert!(fragment.contains("\\b0\\caps0\\striked0\\i0\\outl0\\shad0\\scaps0\\strike0\\ulnone"));
        assert!(fragment.ends_with(" Hello"));
    }

    #[test]
    fn paragraph_alignment_is_exclusive() {
        for (align, word) in [
            (Alignment::Left, "\\ql"),
            (Alignment::Center, "\\qc"),
            (Alignment::Right, "\\qr"),
            (Alignment::Justify, "\\qj"),
        ] {
            let pf = ParagraphFormat {
                alignment: align,
                ..ParagraphFormat::default()
            };
            let fragment = paragraph_format(&pf);
            assert!(fragment.contains(word));
            let count = ["\\ql", "\\qc", "\\qr", "\\qj"]
                .iter()
                .filter(|w| fragment.contains(**w))
                .count();
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn paragraph_break_words() {
        for (brk, word) in [
            (ParagraphBreak::Page, "\\page"),
            (ParagraphBreak::Column, "\\column"),
            (ParagraphBreak::Line, "\\line"),
        ] {
            let pf = ParagraphFormat {
                paragraph_break: brk,
                ..ParagraphFormat::default()
            };
            assert!(paragraph_format(&pf).contains(word));
        }
        let pf = ParagraphFormat::default();
        let fragment = paragraph_format(&pf);
        assert!(!fragment.contains("\\page"));
        assert!(!fragment.contains("\\column"));
        assert!(!fragment.contains("\\line"));
    }

    #[test]
    fn unset_presence_flags_suppress_blocks() {
        let mut pf = ParagraphFormat::default();
        // Give the sub-records non-default values; they must still be absent.
        pf.tabs.kind = TabKind::Decimal;
        pf.tabs.position = 2880;
        pf.nums.level = 4;
        pf.borders.kind = BorderKind::Box;
        pf.borders.width = 30;
        pf.shading.pattern = ShadingPattern::DarkCross;
        pf.shading.intensity = 5000;
        let fragment = paragraph_format(&pf);
        assert!(!fragment.contains("\\tx"));
        assert!(!fragment.contains("\\pn"));
        assert!(!fragment.contains("\\box"));
        assert!(!fragment.contains("\\brdrw"));
        assert!(!fragment.contains("\\shading"));
        assert!(!fragment.contains("\\cfpat"));
    }

    #[test]
    fn paragraph_tabs_block() {
        let mut pf = ParagraphFormat::default();
        pf.paragraph_tabs = true;
        pf.tabs.kind = TabKind::Right;
        pf.tabs.leader = TabLeader::Dot;
        pf.tabs.position = 8640;
        assert!(paragraph_format(&pf).contains("\\tqr\\tldot\\tx8640"));
    }

    #[test]
    fn paragraph_numbering_block() {
        let mut pf = ParagraphFormat::default();
        pf.paragraph_nums = true;
        let fragment = paragraph_format(&pf);
        assert!(fragment.contains("{\\*\\pn\\pnlvl11\\pnsp360\\pntxtb \\'95}"));
    }

    #[test]
    fn paragraph_border_block() {
        let mut pf = ParagraphFormat::default();
        pf.paragraph_borders = true;
        pf.borders.kind = BorderKind::Box;
        pf.borders.style = BorderStyle::Double;
        pf.borders.width = 15;
        pf.borders.space = 60;
        pf.borders.color = 2;
        assert!(paragraph_format(&pf).contains("\\box\\brdrdb\\brdrw15\\brsp60\\brdrcf2"));
    }

    #[test]
    fn paragraph_shading_block() {
        let mut pf = ParagraphFormat::default();
        pf.paragraph_shading = true;
        pf.shading.intensity = 2500;
        pf.shading.pattern = ShadingPattern::Cross;
        pf.shading.fill_color = 1;
        pf.shading.background_color = 4;
        assert!(paragraph_format(&pf).contains("\\shading2500\\bgcross\\cfpat1\\cbpat4"));
    }

    #[test]
    fn tabbed_text_collapses_to_tab_and_text() {
        let mut pf = ParagraphFormat::default();
        pf.tabbed_text = true;
        pf.paragraph_borders = true;
        pf.character.bold = true;
        pf.text = "continued".into();
        assert_eq!(paragraph_format(&pf), "\\tab continued");
    }

    #[test]
    fn empty_paragraph_keeps_trailing_space() {
        let mut pf = ParagraphFormat::default();
        pf.new_paragraph = true;
        let fragment = paragraph_format(&pf);
        assert!(fragment.ends_with("\\ulnone "));
    }

    #[test]
    fn character_on_only_toggles() {
        let mut pf = ParagraphFormat::default();
        pf.character.emboss = true;
        pf.character.engrave = true;
        pf.character.subscript = true;
        pf.character.superscript = true;
        let fragment = paragraph_format(&pf);
        assert!(fragment.contains("\\embo"));
        assert!(fragment.contains("\\impr"));
        assert!(fragment.contains("\\sub\\super"));

        let off = paragraph_format(&ParagraphFormat::default());
        assert!(!off.contains("\\embo"));
        assert!(!off.contains("\\impr"));
        assert!(!off.contains("\\sub"));
        assert!(!off.contains("\\super"));
    }

    #[test]
    fn underline_styles_render() {
        let mut pf = ParagraphFormat::default();
        pf.character.underline = UnderlineStyle::DoubleWave;
        assert!(paragraph_format(&pf).contains("\\uldbwave"));
        pf.character.underline = UnderlineStyle::None;
        assert!(paragraph_format(&pf).contains("\\ulnone"));
    }

    #[test]
    fn text_escaping() {
        let mut pf = ParagraphFormat::default();
        pf.text = "a{b}c\\d\te\nf\u{00e9}".into();
        let fragment = paragraph_format(&pf);
        assert!(fragment.contains(" a\\{b\\}c\\\\d\\tabe\\parf\\u233?"));
    }

    #[test]
    fn table_row_fragment() {
        let mut rf = TableRowFormat::default();
        rf.alignment = RowAlignment::Center;
        rf.row_left_margin = 120;
        rf.row_height = 400;
        rf.margin_top = 10;
        rf.margin_bottom = 20;
        rf.margin_left = 30;
        rf.margin_right = 40;
        let fragment = table_row(&rf);
        assert!(fragment.starts_with("\n\\trowd\\trgaph115\\trqc\\trleft120\\trrh400"));
        assert!(
            fragment
                .ends_with("\\trpaddb20\\trpaddfb3\\trpaddl30\\trpaddfl3\\trpaddr40\\trpaddfr3\\trpaddt10\\trpaddft3")
        );
    }

    #[test]
    fn table_cell_fragment_minimal() {
        let fragment = table_cell(&TableCellFormat::default(), 2880);
        assert_eq!(fragment, "\n\\tcelld\\clvertalc\\cltxlrtb\\cellx2880");
    }

    #[test]
    fn table_cell_borders_in_fixed_order() {
        let mut cf = TableCellFormat::default();
        cf.vertical_alignment = CellVerticalAlignment::Top;
        cf.border_bottom.enabled = true;
        cf.border_top.enabled = true;
        cf.border_top.format.style = BorderStyle::Dotted;
        let fragment = table_cell(&cf, 1440);
        let bottom = fragment.find("\\clbrdrb\\brdrs\\brdrw5\\brsp0\\brdrcf0");
        let top = fragment.find("\\clbrdrt\\brdrdot\\brdrw5\\brsp0\\brdrcf0");
        assert!(bottom.is_some() && top.is_some());
        assert!(bottom < top);
        assert!(!fragment.contains("\\clbrdrl"));
        assert!(!fragment.contains("\\clbrdrr"));
    }

    #[test]
    fn table_cell_shading_block() {
        let mut cf = TableCellFormat::default();
        cf.cell_shading = true;
        cf.shading.pattern = ShadingPattern::DarkVertical;
        cf.shading.intensity = 1000;
        cf.shading.fill_color = 2;
        cf.shading.background_color = 3;
        let fragment = table_cell(&cf, 5760);
        assert!(fragment.contains("\\clbgdkvert\\clshdgn1000\\clcfpat2\\clcbpat3\\cellx5760"));
    }

    #[test]
    fn row_and_cell_end_markers() {
        assert_eq!(table_row_end(), "\n\\trgaph115\\row\\pard");
        assert_eq!(table_cell_end(), "\n\\cell ");
    }
}
