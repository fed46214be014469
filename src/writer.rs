//! RTF document session.
//!
//! The writer owns the output sink plus one live formatting record per
//! structural level. The host mutates a record in place (or replaces it
//! wholesale), then calls a start/end operation, which serializes the
//! current snapshot and appends it to the sink. Nothing is deferred and no
//! record is reset between calls.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::document::DocumentFormat;
use crate::error::{RtfError, RtfResult};
use crate::paragraph::ParagraphFormat;
use crate::picture::{self, Picture, bin_hex_convert};
use crate::render;
use crate::section::SectionFormat;
use crate::table::{TableCellFormat, TableRowFormat};

/// Built-in font table used when the host supplies no font list.
const DEFAULT_FONT_TABLE: &str = concat!(
    "{\\f0\\froman\\fcharset0\\cpg1252 Times New Roman}",
    "{\\f1\\fswiss\\fcharset0\\cpg1252 Arial}",
    "{\\f2\\fmodern\\fcharset0\\cpg1252 Courier New}",
    "{\\f3\\fscript\\fcharset0\\cpg1252 Cursive}",
    "{\\f4\\fdecor\\fcharset0\\cpg1252 Old English}",
    "{\\f5\\ftech\\fcharset0\\cpg1252 Symbol}",
    "{\\f6\\fbidi\\fcharset0\\cpg1252 Miriam}",
);

/// Built-in color table used when the host supplies no color list.
const DEFAULT_COLOR_TABLE: &str = concat!(
    "\\red0\\green0\\blue0;",
    "\\red255\\green0\\blue0;",
    "\\red0\\green255\\blue0;",
    "\\red0\\green0\\blue255;",
    "\\red255\\green255\\blue0;",
    "\\red255\\green0\\blue255;",
    "\\red0\\green255\\blue255;",
    "\\red255\\green255\\blue255;",
    "\\red128\\green0\\blue0;",
    "\\red0\\green128\\blue0;",
    "\\red0\\green0\\blue128;",
    "\\red128\\green128\\blue0;",
    "\\red128\\green0\\blue128;",
    "\\red0\\green128\\blue128;",
    "\\red128\\green128\\blue128;",
);

/// Render a semicolon-delimited font name list into font table entries.
///
/// Empty tokens are skipped, so a trailing separator is tolerated.
fn font_table_entries(fonts: &str) -> String {
    let mut out = String::with_capacity(fonts.len() + 32);
    for (number, name) in fonts.split(';').filter(|t| !t.is_empty()).enumerate() {
        let mut digits = itoa::Buffer::new();
        out.push_str("{\\f");
        out.push_str(digits.format(number));
        out.push_str("\\fnil\\fcharset0\\cpg1252 ");
        out.push_str(name);
        out.push('}');
    }
    out
}

/// Render a flat semicolon-delimited `r;g;b;...` list into color table
/// entries. Component values pass through untouched; a trailing partial
/// triple renders only the components present.
fn color_table_entries(colors: &str) -> String {
    let mut out = String::with_capacity(colors.len() + 32);
    let mut tokens = colors.split(';').filter(|t| !t.is_empty());
    while let Some(red) = tokens.next() {
        out.push_str("\\red");
        out.push_str(red);
        if let Some(green) = tokens.next() {
            out.push_str("\\green");
            out.push_str(green);
        }
        if let Some(blue) = tokens.next() {
            out.push_str("\\blue");
            out.push_str(blue);
            out.push(';');
        }
    }
    out
}

/// RTF document writer.
///
/// Generic over any byte sink; [`RtfWriter::create`] wires it to a buffered
/// file. The session assumes a single control thread: every operation
/// mutates shared state and performs a blocking write before returning.
#[derive(Debug)]
pub struct RtfWriter<W: Write> {
    sink: W,
    font_table: String,
    color_table: String,
    document: DocumentFormat,
    section: SectionFormat,
    paragraph: ParagraphFormat,
    row: TableRowFormat,
    cell: TableCellFormat,
    picture: Option<Picture>,
}

impl RtfWriter<BufWriter<File>> {
    /// Create an RTF file at `path` and write the document prologue.
    ///
    /// `fonts` and `colors` follow the list formats documented on
    /// [`RtfWriter::new`].
    pub fn create<P: AsRef<Path>>(path: P, fonts: &str, colors: &str) -> RtfResult<Self> {
        let file = File::create(path).map_err(RtfError::Open)?;
        Self::new(BufWriter::new(file), fonts, colors)
    }
}

impl<W: Write> RtfWriter<W> {
    /// Start a session over `sink` and write the document prologue: header,
    /// document formatting line, and the default section.
    ///
    /// `fonts` is a semicolon-delimited font name list (`"Times New
    /// Roman;Arial;"`); `colors` is a flat semicolon-delimited list of RGB
    /// components (`"0;0;0;255;0;0"`). Empty lists keep the built-in
    /// seven-font and fifteen-color tables.
    ///
    /// Prologue writes do not short-circuit: all three steps run even after
    /// a failure, and the error reported is the last one encountered. The
    /// partial output stays in the sink either way.
    pub fn new(sink: W, fonts: &str, colors: &str) -> RtfResult<Self> {
        let mut writer = Self {
            sink,
            font_table: if fonts.is_empty() {
                DEFAULT_FONT_TABLE.to_owned()
            } else {
                font_table_entries(fonts)
            },
            color_table: if colors.is_empty() {
                DEFAULT_COLOR_TABLE.to_owned()
            } else {
                color_table_entries(colors)
            },
            document: DocumentFormat::default(),
            section: SectionFormat::default(),
            paragraph: ParagraphFormat::default(),
            row: TableRowFormat::default(),
            cell: TableCellFormat::default(),
            picture: None,
        };

        let mut error = None;
        if let Err(e) = writer.write_header() {
            error = Some(RtfError::Header(e));
        }
        if let Err(e) = writer.write_document_format() {
            error = Some(RtfError::DocumentFormat(e));
        }
        if let Err(e) = writer.write_current_section_format() {
            error = Some(RtfError::SectionFormat(e));
        }

        match error {
            Some(e) => Err(e),
            None => Ok(writer),
        }
    }

    /// Finish the document: drop any loaded picture, append the closing
    /// `\par}`, flush, and hand the sink back.
    pub fn close(mut self) -> RtfResult<W> {
        self.picture = None;
        self.sink.write_all(b"\n\\par}").map_err(RtfError::Close)?;
        self.sink.flush().map_err(RtfError::Close)?;
        Ok(self.sink)
    }

    #[inline]
    fn write_fragment(&mut self, fragment: &str) -> io::Result<()> {
        self.sink.write_all(fragment.as_bytes())
    }

    fn write_header(&mut self) -> io::Result<()> {
        let mut header = String::with_capacity(
            64 + self.font_table.len() + self.color_table.len(),
        );
        header.push_str("{\\rtf1\\ansi\\ansicpg1252\\deff0{\\fonttbl");
        header.push_str(&self.font_table);
        header.push_str("}{\\colortbl");
        header.push_str(&self.color_table);
        header.push_str("}{\\*\\generator ");
        header.push_str(concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION")));
        header.push_str(";}\n{\\info{\\author ");
        header.push_str(env!("CARGO_PKG_NAME"));
        header.push_str("}}");
        self.write_fragment(&header)
    }

    fn write_document_format(&mut self) -> io::Result<()> {
        let fragment = render::document_format(&self.document);
        self.write_fragment(&fragment)
    }

    fn write_current_section_format(&mut self) -> io::Result<()> {
        let fragment = render::section_format(&self.section);
        self.write_fragment(&fragment)
    }

    /// Serialize the current section format snapshot to the sink.
    pub fn write_section_format(&mut self) -> RtfResult<()> {
        self.write_current_section_format()
            .map_err(RtfError::SectionFormat)
    }

    /// Start a new section: set the new-section flag on the current record
    /// and serialize it. The record is not reset afterwards.
    pub fn start_section(&mut self) -> RtfResult<()> {
        self.section.new_section = true;
        self.write_section_format()
    }

    /// Serialize the current paragraph format snapshot to the sink.
    pub fn write_paragraph_format(&mut self) -> RtfResult<()> {
        let fragment = render::paragraph_format(&self.paragraph);
        self.write_fragment(&fragment)
            .map_err(RtfError::ParagraphFormat)
    }

    /// Start a paragraph: store `text` and the new-paragraph flag on the
    /// current record, then serialize it.
    pub fn start_paragraph(&mut self, text: &str, new_paragraph: bool) -> RtfResult<()> {
        self.paragraph.text.clear();
        self.paragraph.text.push_str(text);
        self.paragraph.new_paragraph = new_paragraph;
        self.write_paragraph_format()
    }

    /// Start a table row from the current row format snapshot.
    pub fn start_table_row(&mut self) -> RtfResult<()> {
        let fragment = render::table_row(&self.row);
        self.write_fragment(&fragment).map_err(RtfError::Table)
    }

    /// End the current table row.
    pub fn end_table_row(&mut self) -> RtfResult<()> {
        self.write_fragment(render::table_row_end())
            .map_err(RtfError::Table)
    }

    /// Start a table cell whose right boundary within the row is
    /// `right_margin` twips. The shared cell record supplies everything
    /// else, so fields not meant to carry over must be reset by the host.
    pub fn start_table_cell(&mut self, right_margin: i32) -> RtfResult<()> {
        let fragment = render::table_cell(&self.cell, right_margin);
        self.write_fragment(&fragment).map_err(RtfError::Table)
    }

    /// End the current table cell.
    pub fn end_table_cell(&mut self) -> RtfResult<()> {
        self.write_fragment(render::table_cell_end())
            .map_err(RtfError::Table)
    }

    /// Embed an image file as a `\pict` block scaled to `width` x `height`
    /// percent.
    ///
    /// Files outside the `.bmp`/`.jpg`/`.gif` allow-list are a soft
    /// failure: an error marker paragraph is written into the document and
    /// the call still succeeds. A previously loaded picture is released
    /// before the new one is decoded.
    pub fn load_image(&mut self, path: &str, width: i32, height: i32) -> RtfResult<()> {
        if !picture::has_supported_extension(path) {
            return self
                .write_fragment("\n\\par\\pard *** Error! Wrong image format ***\\par")
                .map_err(|e| RtfError::Image(e.to_string()));
        }

        self.picture = None;

        let bytes = std::fs::read(path).map_err(|e| RtfError::Image(e.to_string()))?;
        let picture = Picture::from_bytes(&bytes).map_err(|e| RtfError::Image(e.to_string()))?;

        // Anchor the picture with an empty paragraph in the current format.
        self.paragraph.text.clear();
        let fragment = render::paragraph_format(&self.paragraph);
        self.write_fragment(&fragment)
            .map_err(|e| RtfError::Image(e.to_string()))?;

        let mut block = String::with_capacity(80 + picture.metafile().len() * 2);
        block.push_str(&format!(
            "\n{{\\pict\\wmetafile8\\picwgoal{}\\pichgoal{}\\picscalex{}\\picscaley{}\n",
            picture.himetric_width(),
            picture.himetric_height(),
            width,
            height,
        ));
        block.push_str(&bin_hex_convert(picture.metafile()));
        block.push('}');
        self.write_fragment(&block)
            .map_err(|e| RtfError::Image(e.to_string()))?;

        self.picture = Some(picture);
        Ok(())
    }

    /// Currently loaded picture, if any.
    #[inline]
    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    /// Current document format.
    #[inline]
    pub fn document_format(&self) -> &DocumentFormat {
        &self.document
    }

    /// Live document format record, edited in place by the host.
    #[inline]
    pub fn document_format_mut(&mut self) -> &mut DocumentFormat {
        &mut self.document
    }

    /// Replace the document format wholesale.
    #[inline]
    pub fn set_document_format(&mut self, format: DocumentFormat) {
        self.document = format;
    }

    /// Current section format.
    #[inline]
    pub fn section_format(&self) -> &SectionFormat {
        &self.section
    }

    /// Live section format record, edited in place by the host.
    #[inline]
    pub fn section_format_mut(&mut self) -> &mut SectionFormat {
        &mut self.section
    }

    /// Replace the section format wholesale.
    #[inline]
    pub fn set_section_format(&mut self, format: SectionFormat) {
        self.section = format;
    }

    /// Current paragraph format.
    #[inline]
    pub fn paragraph_format(&self) -> &ParagraphFormat {
        &self.paragraph
    }

    /// Live paragraph format record, edited in place by the host.
    #[inline]
    pub fn paragraph_format_mut(&mut self) -> &mut ParagraphFormat {
        &mut self.paragraph
    }

    /// Replace the paragraph format wholesale.
    #[inline]
    pub fn set_paragraph_format(&mut self, format: ParagraphFormat) {
        self.paragraph = format;
    }

    /// Current table row format.
    #[inline]
    pub fn table_row_format(&self) -> &TableRowFormat {
        &self.row
    }

    /// Live table row format record, edited in place by the host.
    #[inline]
    pub fn table_row_format_mut(&mut self) -> &mut TableRowFormat {
        &mut self.row
    }

    /// Replace the table row format wholesale.
    #[inline]
    pub fn set_table_row_format(&mut self, format: TableRowFormat) {
        self.row = format;
    }

    /// Current table cell format.
    #[inline]
    pub fn table_cell_format(&self) -> &TableCellFormat {
        &self.cell
    }

    /// Live table cell format record, edited in place by the host.
    #[inline]
    pub fn table_cell_format_mut(&mut self) -> &mut TableCellFormat {
        &mut self.cell
    }

    /// Replace the table cell format wholesale.
    #[inline]
    pub fn set_table_cell_format(&mut self, format: TableCellFormat) {
        self.cell = format;
    }
}
