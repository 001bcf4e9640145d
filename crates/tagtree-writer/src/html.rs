//! HTML-dialect adapter.

use std::fmt;

use crate::error::WriteError;
use crate::writer::MarkupWriter;

/// HTML-dialect adapter over any text sink.
///
/// A start tag is `<name` followed by ` name="value"` pairs and a bare `>`;
/// the end tag is always a separate `</name>`, even for elements with no
/// content (`<img></img>`, never self-closing). Text and attribute values
/// pass through verbatim.
///
/// The sink is any [`fmt::Write`] — a `String`, a formatter, or a mutable
/// reference to either; [`into_inner`](Self::into_inner) releases it when
/// the render scope ends.
#[derive(Debug)]
pub struct HtmlWriter<W: fmt::Write> {
    out: W,
}

impl<W: fmt::Write> HtmlWriter<W> {
    /// Create an adapter writing into `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the adapter and release the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> MarkupWriter for HtmlWriter<W> {
    fn begin_tag(&mut self, name: &str) -> Result<(), WriteError> {
        write!(self.out, "<{name}")?;
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        write!(self.out, r#" {name}="{value}""#)?;
        Ok(())
    }

    fn close_start_tag(&mut self) -> Result<(), WriteError> {
        self.out.write_char('>')?;
        Ok(())
    }

    fn text(&mut self, s: &str) -> Result<(), WriteError> {
        self.out.write_str(s)?;
        Ok(())
    }

    fn text_char(&mut self, c: char) -> Result<(), WriteError> {
        self.out.write_char(c)?;
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<(), WriteError> {
        write!(self.out, "</{name}>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_manual_drive() {
        let mut writer = HtmlWriter::new(String::new());
        writer.begin_tag("span").unwrap();
        writer.attribute("class", "test").unwrap();
        writer.close_start_tag().unwrap();
        writer.text_char('T').unwrap();
        writer.text("his rocks").unwrap();
        writer.end_tag("span").unwrap();
        assert_eq!(
            writer.into_inner(),
            r#"<span class="test">This rocks</span>"#
        );
    }

    #[test]
    fn test_end_tag_always_separate() {
        let mut writer = HtmlWriter::new(String::new());
        writer.begin_tag("img").unwrap();
        writer.attribute("src", "a.gif").unwrap();
        writer.close_start_tag().unwrap();
        writer.end_tag("img").unwrap();
        assert_eq!(writer.into_inner(), r#"<img src="a.gif"></img>"#);
    }

    #[test]
    fn test_nothing_is_escaped() {
        let mut writer = HtmlWriter::new(String::new());
        writer.begin_tag("p").unwrap();
        writer.attribute("title", r#"Tom & "Jerry""#).unwrap();
        writer.close_start_tag().unwrap();
        writer.text("<b>raw</b>").unwrap();
        writer.end_tag("p").unwrap();
        assert_eq!(
            writer.into_inner(),
            r#"<p title="Tom & "Jerry""><b>raw</b></p>"#
        );
    }

    #[test]
    fn test_writes_through_mutable_reference() {
        let mut out = String::new();
        let mut writer = HtmlWriter::new(&mut out);
        writer.begin_tag("b").unwrap();
        writer.close_start_tag().unwrap();
        writer.text("x").unwrap();
        writer.end_tag("b").unwrap();
        assert_eq!(out, "<b>x</b>");
    }
}
