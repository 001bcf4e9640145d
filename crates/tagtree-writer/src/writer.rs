//! The writer capability shared by both dialect adapters.

use crate::error::WriteError;

/// Primitive emit operations a markup tree renders through.
///
/// Element trees drive these in a fixed sequence: `begin_tag`, one
/// `attribute` call per entry, `close_start_tag`, recursive child and text
/// content, `end_tag`. The two adapters turn that identical call sequence
/// into incompatible surface syntaxes (see [`HtmlWriter`] and
/// [`XmlWriter`]).
///
/// [`HtmlWriter`]: crate::HtmlWriter
/// [`XmlWriter`]: crate::XmlWriter
pub trait MarkupWriter {
    /// Open a start tag. The attribute-list terminator is not written.
    fn begin_tag(&mut self, name: &str) -> Result<(), WriteError>;

    /// Write one attribute of the currently open start tag.
    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError>;

    /// Terminate the open start tag's attribute list.
    fn close_start_tag(&mut self) -> Result<(), WriteError>;

    /// Write raw text content. No escaping is applied.
    fn text(&mut self, s: &str) -> Result<(), WriteError>;

    /// Write a single character of raw text content.
    fn text_char(&mut self, c: char) -> Result<(), WriteError> {
        self.text(c.encode_utf8(&mut [0u8; 4]))
    }

    /// Close the element opened by the matching `begin_tag`.
    fn end_tag(&mut self, name: &str) -> Result<(), WriteError>;
}
