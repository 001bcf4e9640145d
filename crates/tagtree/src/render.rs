//! Rendering facade: dialect selection and string/byte conversions.

use std::fmt;
use std::io;

use tagtree_writer::{HtmlWriter, MarkupWriter, WriteError, XmlWriter};

use crate::element::Element;
use crate::list::ElementList;
use crate::node::Node;

/// Output dialect selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    /// Tag-soup HTML: explicit end tags, nothing escaped.
    #[default]
    Html,
    /// XML: contentless elements self-close, attribute values escaped.
    Xml,
}

/// Conversion entry points shared by every renderable tree type.
///
/// [`Element`], [`Node`] and [`ElementList`] all implement this; callers
/// build a tree, pick a dialect, and get a string or bytes back. Each call
/// allocates its own writer and sink, so renders never share state.
///
/// All three types also implement [`Display`](fmt::Display) with the HTML
/// dialect, so they concatenate with plain strings through `format!` and
/// `to_string`.
pub trait Render {
    /// Walk the tree depth-first, emitting through `writer`.
    fn render_to<W: MarkupWriter + ?Sized>(&self, writer: &mut W) -> Result<(), WriteError>;

    /// Render with an explicit dialect into an in-memory sink.
    fn render(&self, dialect: Dialect) -> Result<String, WriteError> {
        match dialect {
            Dialect::Html => {
                let mut writer = HtmlWriter::new(String::new());
                self.render_to(&mut writer)?;
                Ok(writer.into_inner())
            }
            Dialect::Xml => {
                let mut writer = XmlWriter::new(Vec::new());
                self.render_to(&mut writer)?;
                Ok(String::from_utf8(writer.into_inner())?)
            }
        }
    }

    /// Render the HTML dialect to a string. Writing into a `String` cannot
    /// fail.
    fn to_html(&self) -> String {
        self.render(Dialect::Html).unwrap()
    }

    /// Render the HTML dialect into a byte sink: the tree is rendered to
    /// text first, then the text's bytes are copied into the target.
    fn render_into(&self, sink: &mut dyn io::Write) -> Result<(), WriteError> {
        sink.write_all(self.to_html().as_bytes())?;
        Ok(())
    }
}

impl Render for Element {
    fn render_to<W: MarkupWriter + ?Sized>(&self, writer: &mut W) -> Result<(), WriteError> {
        self.render_element(writer)
    }
}

impl Render for Node {
    fn render_to<W: MarkupWriter + ?Sized>(&self, writer: &mut W) -> Result<(), WriteError> {
        self.render_node(writer)
    }
}

impl Render for ElementList {
    fn render_to<W: MarkupWriter + ?Sized>(&self, writer: &mut W) -> Result<(), WriteError> {
        self.render_list(writer)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = HtmlWriter::new(f);
        self.render_to(&mut writer).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = HtmlWriter::new(f);
        self.render_to(&mut writer).map_err(|_| fmt::Error)
    }
}

impl fmt::Display for ElementList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = HtmlWriter::new(f);
        self.render_to(&mut writer).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_dialects() {
        let img = Element::new("img");
        assert_eq!(img.render(Dialect::Html).unwrap(), "<img></img>");
        assert_eq!(img.render(Dialect::Xml).unwrap(), "<img />");
    }

    #[test]
    fn test_to_html_matches_display() {
        let span = Element::new("span").update("Hello World");
        assert_eq!(span.to_html(), "<span>Hello World</span>");
        assert_eq!(span.to_html(), span.to_string());
    }

    #[test]
    fn test_display_concatenates_with_strings() {
        let actual = format!("{}{}{}", Element::new("h1"), Element::new("b"), "hello");
        assert_eq!(actual, "<h1></h1><b></b>hello");
    }

    #[test]
    fn test_render_into_byte_sink() {
        let mut sink = Vec::new();
        Element::new("p")
            .update("Hello World")
            .render_into(&mut sink)
            .unwrap();
        assert_eq!(sink, b"<p>Hello World</p>");
    }

    #[test]
    fn test_render_into_byte_sink_for_list() {
        let list = ElementList::new([
            Element::new("b").update("Chris"),
            Element::new("i").update("Emmitt"),
        ]);
        let mut sink = Vec::new();
        list.render_into(&mut sink).unwrap();
        assert_eq!(sink, b"<b>Chris</b><i>Emmitt</i>");
    }

    #[test]
    fn test_render_to_custom_writer() {
        // An indentation-configured event writer can be supplied directly.
        let inner = quick_xml::Writer::new_with_indent(Vec::new(), b' ', 2);
        let mut writer = XmlWriter::from_writer(inner);
        Element::new("p")
            .append([Element::new("span").update("chris")])
            .render_to(&mut writer)
            .unwrap();
        let rendered = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(rendered, "<p>\n  <span>chris</span>\n</p>");
    }

    #[test]
    fn test_default_dialect_is_html() {
        assert_eq!(Dialect::default(), Dialect::Html);
    }
}
