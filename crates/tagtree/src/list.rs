//! Ordered sequences of sibling nodes.

use std::ops::Deref;

use tagtree_writer::{MarkupWriter, WriteError};

use crate::node::Node;

/// An ordered collection of nodes rendered as concatenated siblings, with
/// no wrapping tag.
///
/// ```
/// use tagtree::{Element, ElementList, Render};
///
/// let list = ElementList::new([
///     Element::new("p").update("first"),
///     Element::new("b").update("second"),
/// ]);
/// assert_eq!(list.to_html(), "<p>first</p><b>second</b>");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementList {
    nodes: Vec<Node>,
}

impl ElementList {
    /// Create a list from any iterator of children; absent entries are
    /// dropped silently.
    pub fn new<I, N>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Option<Node>>,
    {
        Self {
            nodes: nodes.into_iter().filter_map(Into::into).collect(),
        }
    }

    /// Append a node; an absent entry is dropped.
    pub fn push(&mut self, node: impl Into<Option<Node>>) {
        if let Some(node) = node.into() {
            self.nodes.push(node);
        }
    }

    /// Insert a node at `index`; an absent entry is dropped.
    pub fn insert(&mut self, index: usize, node: impl Into<Option<Node>>) {
        if let Some(node) = node.into() {
            self.nodes.insert(index, node);
        }
    }

    /// Remove and return the node at `index`.
    pub fn remove(&mut self, index: usize) -> Node {
        self.nodes.remove(index)
    }

    pub(crate) fn render_list<W: MarkupWriter + ?Sized>(
        &self,
        writer: &mut W,
    ) -> Result<(), WriteError> {
        for node in &self.nodes {
            node.render_node(writer)?;
        }
        Ok(())
    }
}

impl Deref for ElementList {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.nodes
    }
}

impl FromIterator<Node> for ElementList {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for ElementList {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl IntoIterator for ElementList {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ElementList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::element::Element;
    use crate::render::{Dialect, Render};

    #[test]
    fn test_renders_siblings_as_html() {
        let list = ElementList::new([
            Element::with_attrs("input", "type=text"),
            Element::with_attrs("img", "src=stoopid.gif"),
        ]);
        assert_eq!(
            list.render(Dialect::Html).unwrap(),
            r#"<input type="text"></input><img src="stoopid.gif"></img>"#
        );
    }

    #[test]
    fn test_renders_siblings_as_xml() {
        let list = ElementList::new([
            Element::with_attrs("input", "type=text"),
            Element::with_attrs("img", "src=stoopid.gif"),
        ]);
        assert_eq!(
            list.render(Dialect::Xml).unwrap(),
            r#"<input type="text" /><img src="stoopid.gif" />"#
        );
    }

    #[test]
    fn test_absent_entries_not_added() {
        let list = ElementList::new([
            Option::<Node>::from(Element::new("b").update("blah")),
            None,
        ]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "<b>blah</b>");
    }

    #[test]
    fn test_absent_entries_skipped_on_push() {
        let mut list = ElementList::default();
        list.push(None::<Node>);
        list.push(Element::new("b").update("Anja"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "<b>Anja</b>");
    }

    #[test]
    fn test_empty_list_then_push() {
        let mut list = ElementList::default();
        list.push(Element::new("b").update("Chris"));
        assert_eq!(list.to_string(), "<b>Chris</b>");
    }

    #[test]
    fn test_ctor_order_preserved() {
        let list = ElementList::new([
            Element::new("b").update("Riley"),
            Element::new("i").update("Emmitt"),
        ]);
        assert_eq!(list.to_string(), "<b>Riley</b><i>Emmitt</i>");
    }

    #[test]
    fn test_insert_and_remove() {
        let mut list = ElementList::new([Element::new("i").update("second")]);
        list.insert(0, Element::new("b").update("first"));
        assert_eq!(list.to_string(), "<b>first</b><i>second</i>");
        let removed = list.remove(0);
        assert_eq!(removed.to_string(), "<b>first</b>");
        assert_eq!(list.to_string(), "<i>second</i>");
    }

    #[test]
    fn test_mixes_elements_and_text() {
        let list = ElementList::new([
            Node::from(Element::new("b").update("Chris")),
            Node::text(" and friends"),
        ]);
        assert_eq!(list.to_string(), "<b>Chris</b> and friends");
    }
}
