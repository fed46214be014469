//! Rtfgen - A Rust library for generating Rich Text Format documents
//!
//! This library writes RTF 1.x documents imperatively to any byte sink. The
//! writer keeps one live formatting record per structural level (document,
//! section, paragraph, table row, table cell); the host edits a record in
//! place, then asks the writer to serialize a snapshot of it. State persists
//! across calls, so formatting set once applies until changed.
//!
//! # Features
//!
//! - **Streaming output**: Fragments are appended to the sink as operations
//!   run; nothing is buffered document-wide
//! - **Full formatting model**: Sections, paragraphs, character styling,
//!   tabs, bullets, borders, shading, and tables
//! - **Image embedding**: BMP, JPEG, and GIF files are re-wrapped as
//!   metafiles and hex-encoded into `\pict` blocks
//!
//! # Example - Writing a document
//!
//! ```no_run
//! use rtfgen::{Alignment, RtfWriter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an RTF file with the built-in font and color tables
//! let mut rtf = RtfWriter::create("hello.rtf", "", "")?;
//!
//! // Formatting persists until changed
//! rtf.paragraph_format_mut().alignment = Alignment::Center;
//! rtf.paragraph_format_mut().character.bold = true;
//! rtf.start_paragraph("Hello, RTF!", true)?;
//!
//! rtf.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing a table
//!
//! ```no_run
//! use rtfgen::RtfWriter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rtf = RtfWriter::create("table.rtf", "", "")?;
//!
//! rtf.start_table_row()?;
//! rtf.start_table_cell(2880)?;
//! rtf.paragraph_format_mut().table_text = true;
//! rtf.start_paragraph("first cell", false)?;
//! rtf.end_table_cell()?;
//! rtf.start_table_cell(5760)?;
//! rtf.start_paragraph("second cell", false)?;
//! rtf.end_table_cell()?;
//! rtf.end_table_row()?;
//!
//! rtf.close()?;
//! # Ok(())
//! # }
//! ```

pub mod border;
pub mod document;
pub mod error;
mod lookup;
pub mod paragraph;
pub mod picture;
mod render;
pub mod section;
pub mod table;
pub mod writer;

pub use border::{
    BorderFormat, BorderKind, BorderStyle, ShadingFormat, ShadingPattern, TabKind, TabLeader,
    TabsFormat,
};
pub use document::{DocumentFormat, ViewKind};
pub use error::{RtfError, RtfResult};
pub use paragraph::{
    Alignment, CharacterFormat, NumberingFormat, ParagraphBreak, ParagraphFormat, UnderlineStyle,
};
pub use picture::Picture;
pub use section::{SectionBreak, SectionFormat};
pub use table::{
    CellBorder, CellVerticalAlignment, RowAlignment, TableCellFormat, TableRowFormat,
    TextDirection,
};
pub use writer::RtfWriter;
