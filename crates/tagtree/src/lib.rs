//! Programmatic markup element trees with dual-dialect rendering.
//!
//! Build a tree of [`Element`]s (tag name, attributes, inline styles, CSS
//! classes, children, inner text) with chainable construction methods, then
//! render the same tree to either output dialect without changing its
//! representation.
//!
//! # Architecture
//!
//! - [`Element`] owns the data model and the `name=value;...` attribute
//!   mini-language (`style=` and `class=` values route into dedicated,
//!   insertion-ordered collections).
//! - [`Node`] is the closed set of tree leaves: a full element, or literal
//!   text rendered verbatim.
//! - [`ElementList`] renders a sequence of siblings with no wrapping tag.
//! - [`Render`] is the conversion facade; [`Dialect`] selects the output
//!   syntax. The writer capability and both dialect adapters live in
//!   [`tagtree_writer`] and are re-exported here.
//!
//! # Example
//!
//! ```
//! use tagtree::{Dialect, Element, Render};
//!
//! let input = Element::with_attrs("input", "maxlength=30;style=font-weight:bold;");
//! assert_eq!(
//!     input.to_html(),
//!     r#"<input maxlength="30" style="font-weight:bold;"></input>"#
//! );
//!
//! // The same tree self-closes in the XML dialect.
//! assert_eq!(Element::new("br").render(Dialect::Xml).unwrap(), "<br />");
//! ```

mod attrs;
mod element;
mod list;
mod node;
mod render;

pub use element::Element;
pub use list::ElementList;
pub use node::Node;
pub use render::{Dialect, Render};
pub use tagtree_writer::{HtmlWriter, MarkupWriter, WriteError, XmlWriter};
