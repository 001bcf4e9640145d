//! XML-dialect adapter over quick-xml's event writer.

use std::fmt::Write as _;
use std::io;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::WriteError;
use crate::writer::MarkupWriter;

/// A start tag held back until the element's first content arrives.
#[derive(Debug)]
struct PendingTag {
    name: String,
    attrs: Vec<(String, String)>,
}

impl PendingTag {
    /// Serialized tag body: the name, the escaped attribute list, and a
    /// trailing suffix (a single space for the self-closed form).
    fn content(&self, suffix: &str) -> String {
        let mut body = self.name.clone();
        for (name, value) in &self.attrs {
            let _ = write!(body, r#" {name}="{}""#, escape(value.as_str()));
        }
        body.push_str(suffix);
        body
    }
}

/// XML-dialect adapter.
///
/// Delegates to [`quick_xml::Writer`], tracking whether any content was
/// written since the last [`begin_tag`](MarkupWriter::begin_tag): the first
/// text or child element flushes the held-back start tag as a `Start`
/// event, and an element closed with no content collapses to the
/// self-closed `<name />` form instead.
/// [`close_start_tag`](MarkupWriter::close_start_tag) is a no-op; the event
/// writer manages its own tag boundary.
///
/// Attribute values get quick-xml's native escaping; text is written raw,
/// mirroring the HTML adapter.
pub struct XmlWriter<W: io::Write> {
    inner: Writer<W>,
    pending: Option<PendingTag>,
}

impl<W: io::Write> XmlWriter<W> {
    /// Create an adapter that builds its own event writer over `sink`.
    pub fn new(sink: W) -> Self {
        Self::from_writer(Writer::new(sink))
    }

    /// Wrap an existing, possibly pre-configured event writer (for example
    /// one created with [`Writer::new_with_indent`]).
    pub fn from_writer(writer: Writer<W>) -> Self {
        Self {
            inner: writer,
            pending: None,
        }
    }

    /// Consume the adapter and release the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }

    /// Flush the held-back start tag as a `Start` event, if any.
    fn flush_pending(&mut self) -> Result<(), WriteError> {
        if let Some(tag) = self.pending.take() {
            let name_len = tag.name.len();
            let start = BytesStart::from_content(tag.content(""), name_len);
            self.inner.write_event(Event::Start(start))?;
        }
        Ok(())
    }
}

impl<W: io::Write> MarkupWriter for XmlWriter<W> {
    fn begin_tag(&mut self, name: &str) -> Result<(), WriteError> {
        self.flush_pending()?;
        self.pending = Some(PendingTag {
            name: name.to_owned(),
            attrs: Vec::new(),
        });
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<(), WriteError> {
        match &mut self.pending {
            Some(tag) => {
                tag.attrs.push((name.to_owned(), value.to_owned()));
                Ok(())
            }
            None => Err(WriteError::MisplacedAttribute),
        }
    }

    fn close_start_tag(&mut self) -> Result<(), WriteError> {
        // The event writer closes the start tag itself when content arrives.
        Ok(())
    }

    fn text(&mut self, s: &str) -> Result<(), WriteError> {
        self.flush_pending()?;
        self.inner
            .write_event(Event::Text(BytesText::from_escaped(s)))?;
        Ok(())
    }

    fn end_tag(&mut self, name: &str) -> Result<(), WriteError> {
        match self.pending.take() {
            // No content since begin_tag: collapse the whole element to the
            // self-closed form, with a space before the slash.
            Some(tag) => {
                let name_len = tag.name.len();
                let empty = BytesStart::from_content(tag.content(" "), name_len);
                self.inner.write_event(Event::Empty(empty))?;
                Ok(())
            }
            None => {
                self.inner.write_event(Event::End(BytesEnd::new(name)))?;
                Ok(())
            }
        }
    }
}
