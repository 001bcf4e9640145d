//! Tree node variants and their conversions.

use tagtree_writer::{MarkupWriter, WriteError};

use crate::element::Element;

/// One renderable node of a markup tree.
///
/// The closed set of variants lets literal text participate in a tree
/// polymorphically: a [`Text`](Node::Text) node renders its string verbatim
/// through the writer's text primitive, with no tags of its own.
///
/// ```
/// use tagtree::{Node, Render};
///
/// let raw = Node::text("<b>Hello</b><i>World</i>");
/// assert_eq!(raw.to_html(), "<b>Hello</b><i>World</i>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// A full element with tag, attributes and children.
    Element(Element),
    /// Literal text emitted as-is.
    Text(String),
}

impl Node {
    /// Create a literal text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub(crate) fn render_node<W: MarkupWriter + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        match self {
            Node::Element(element) => element.render_element(writer),
            Node::Text(text) => writer.text(text),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_owned())
    }
}

// Child-accepting operations are generic over `Into<Option<Node>>` so an
// absent child is expressible at every insertion surface; these impls let
// callers pass elements and strings there without wrapping them first.

impl From<Element> for Option<Node> {
    fn from(element: Element) -> Self {
        Some(Node::Element(element))
    }
}

impl From<Option<Element>> for Option<Node> {
    fn from(element: Option<Element>) -> Self {
        element.map(Node::Element)
    }
}

impl From<String> for Option<Node> {
    fn from(text: String) -> Self {
        Some(Node::Text(text))
    }
}

impl From<&str> for Option<Node> {
    fn from(text: &str) -> Self {
        Some(Node::Text(text.to_owned()))
    }
}
