//! Markup elements and their builder API.

use std::fmt::Write as _;

use indexmap::{IndexMap, IndexSet};
use tagtree_writer::{MarkupWriter, WriteError};

use crate::attrs;
use crate::node::Node;

/// A single markup tag: its attributes, inline styles, CSS classes,
/// children and inner text.
///
/// Elements are built with chainable methods that consume and return the
/// element, and rendered through the [`Render`](crate::Render) facade:
///
/// ```
/// use tagtree::{Element, Render};
///
/// let select = Element::with_attrs("select", "id=select1;name=select1;")
///     .append([Element::with_attrs("option", "value=1").update("Chris")]);
/// assert_eq!(
///     select.to_html(),
///     r#"<select id="select1" name="select1"><option value="1">Chris</option></select>"#
/// );
/// ```
///
/// Attributes, styles and classes all preserve insertion order; updating an
/// existing key changes its value but not its position. `style` and `class`
/// are synthesized into single attributes at render time, after the raw
/// attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    styles: IndexMap<String, String>,
    classes: IndexSet<String>,
    children: Vec<Node>,
    inner: Option<String>,
}

impl Element {
    /// Create an element with the given tag name.
    ///
    /// The tag name is fixed for the element's lifetime. An empty name is
    /// not rejected but produces degenerate output.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            styles: IndexMap::new(),
            classes: IndexSet::new(),
            children: Vec::new(),
            inner: None,
        }
    }

    /// Create an element and seed it from an attribute string, e.g.
    /// `"height=520px;width=100%;border=0;"`. See [`attrs`](Self::attrs)
    /// for the format.
    pub fn with_attrs(tag: impl Into<String>, spec: &str) -> Self {
        Self::new(tag).attrs(spec)
    }

    /// Create an element with attributes and children in one call. Absent
    /// children are dropped silently:
    ///
    /// ```
    /// use tagtree::{Element, Node, Render};
    ///
    /// let select = Element::with_children("select", "", [
    ///     None,
    ///     Option::<Node>::from(Element::new("option").update("chris")),
    /// ]);
    /// assert_eq!(select.to_html(), "<select><option>chris</option></select>");
    /// ```
    pub fn with_children<I, N>(tag: impl Into<String>, spec: &str, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        Self::with_attrs(tag, spec).append(children)
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The raw attributes, in insertion order. Synthesized `style`/`class`
    /// values live in [`styles`](Self::styles) and [`classes`](Self::classes).
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// The CSS property/value pairs rendered as one `style` attribute.
    #[must_use]
    pub fn styles(&self) -> &IndexMap<String, String> {
        &self.styles
    }

    /// The CSS class names rendered as one `class` attribute.
    #[must_use]
    pub fn classes(&self) -> &IndexSet<String> {
        &self.classes
    }

    /// The child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The inner text appended after the children during rendering.
    #[must_use]
    pub fn inner(&self) -> Option<&str> {
        self.inner.as_deref()
    }

    /// Apply an attribute string of the form `name1=value1;name2=value2;...`.
    ///
    /// `style=` values may themselves carry `;`-separated declarations and
    /// `class=` values space-separated names, e.g.
    /// `"height=20px;style=font-weight:bold;padding:3px;class=foo bar;"`.
    /// Both route into their dedicated collections rather than the raw
    /// attribute map. Malformed pieces are dropped silently.
    #[must_use]
    pub fn attrs(mut self, spec: &str) -> Self {
        attrs::apply(&mut self, spec);
        self
    }

    /// Set one attribute by name.
    ///
    /// The name is dispatched case-insensitively: `class` merges class
    /// names, `style` merges style declarations, anything else upserts the
    /// raw attribute map (keeping the key's original position on update).
    /// An empty name is a no-op.
    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_dispatched(name, value);
        self
    }

    /// Merge space-separated class names; duplicates are ignored and the
    /// first occurrence keeps its position.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.merge_classes(classes);
        self
    }

    /// Merge `prop:value;` style declarations; the last value for a
    /// property wins, the first occurrence keeps its position.
    #[must_use]
    pub fn style(mut self, declarations: &str) -> Self {
        self.merge_styles(declarations);
        self
    }

    /// Replace the element's inner text and return it, for chaining:
    ///
    /// ```
    /// use tagtree::{Element, Render};
    ///
    /// assert_eq!(Element::new("span").update("Hello").to_html(), "<span>Hello</span>");
    /// ```
    #[must_use]
    pub fn update(mut self, inner: impl Into<String>) -> Self {
        self.inner = Some(inner.into());
        self
    }

    /// Append children at the end; absent entries are dropped silently.
    #[must_use]
    pub fn append<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        self.children
            .extend(children.into_iter().filter_map(Into::into));
        self
    }

    /// Insert children at `index`; absent entries are dropped silently.
    ///
    /// Each child is inserted at `index` in turn, so a multi-element batch
    /// lands in reverse order.
    #[must_use]
    pub fn insert<I, N>(mut self, index: usize, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        for child in children.into_iter().filter_map(Into::into) {
            self.children.insert(index, child);
        }
        self
    }

    /// Insert children at the front. Repeated calls prepend in reverse
    /// call order (each call inserts at index 0).
    #[must_use]
    pub fn prepend<I, N>(self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        self.insert(0, children)
    }

    /// Remove a raw attribute if present; a no-op otherwise.
    #[must_use]
    pub fn remove_attr(mut self, name: &str) -> Self {
        self.attributes.shift_remove(name);
        self
    }

    /// Whether a raw attribute exists. Styles and classes are not
    /// consulted.
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Look up a raw attribute value; `None` for empty or missing names.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name.is_empty() {
            return None;
        }
        self.attributes.get(name).map(String::as_str)
    }

    /// Write a raw attribute directly, bypassing the `class`/`style`
    /// dispatch of [`attr`](Self::attr). A raw `style` or `class` written
    /// here coexists with the synthesized attribute in the output.
    #[must_use]
    pub fn set_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn set_dispatched(&mut self, name: &str, value: &str) {
        if name.is_empty() {
            tracing::trace!("empty attribute name, dropped");
            return;
        }
        if name.eq_ignore_ascii_case("class") {
            self.merge_classes(value);
        } else if name.eq_ignore_ascii_case("style") {
            self.merge_styles(value);
        } else {
            self.attributes.insert(name.to_owned(), value.to_owned());
        }
    }

    pub(crate) fn merge_classes(&mut self, classes: &str) {
        if classes.is_empty() {
            return;
        }
        for token in classes.split(' ') {
            self.classes.insert(token.trim().to_owned());
        }
    }

    pub(crate) fn merge_styles(&mut self, declarations: &str) {
        if declarations.is_empty() {
            return;
        }
        for declaration in declarations.split(';') {
            if declaration.is_empty() {
                continue;
            }
            let mut parts = declaration.split(':');
            let name = parts.next().unwrap_or_default();
            let Some(value) = parts.next() else {
                tracing::trace!(declaration, "style declaration without a value, dropped");
                continue;
            };
            // Anything after a second `:` is discarded.
            self.styles.insert(name.to_owned(), value.to_owned());
        }
    }

    pub(crate) fn render_element<W: MarkupWriter + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        self.render_start_tag(writer)?;
        for child in &self.children {
            child.render_node(writer)?;
        }
        if let Some(inner) = &self.inner {
            if !inner.is_empty() {
                writer.text(inner)?;
            }
        }
        writer.end_tag(&self.tag)
    }

    fn render_start_tag<W: MarkupWriter + ?Sized>(&self, writer: &mut W) -> Result<(), WriteError> {
        writer.begin_tag(&self.tag)?;
        self.render_attributes(writer)?;
        writer.close_start_tag()
    }

    /// Raw attributes first in insertion order, then the synthesized
    /// `style` and `class` attributes.
    fn render_attributes<W: MarkupWriter + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        for (name, value) in &self.attributes {
            writer.attribute(name, value)?;
        }
        if !self.styles.is_empty() {
            let mut style = String::new();
            for (prop, value) in &self.styles {
                let _ = write!(style, "{prop}:{value};");
            }
            writer.attribute("style", &style)?;
        }
        if !self.classes.is_empty() {
            let classes = self
                .classes
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            writer.attribute("class", classes.trim())?;
        }
        Ok(())
    }
}
