//! Writer capability for rendering markup element trees.
//!
//! One element tree renders to two incompatible output dialects through a
//! single abstraction: the [`MarkupWriter`] trait exposes the primitive emit
//! operations (begin tag, attribute, close-start-tag punctuation, text, end
//! tag), and two adapters implement it with different surface syntax:
//!
//! - [`HtmlWriter`]: tag-soup HTML over any text sink. End tags are always
//!   written separately, even for contentless elements (`<img></img>`).
//! - [`XmlWriter`]: drives [`quick_xml`]'s event writer. A contentless
//!   element collapses to the self-closed `<name />` form; attribute values
//!   get the event writer's native escaping.
//!
//! Neither adapter escapes text content — trees carry raw markup by
//! contract.
//!
//! # Example
//!
//! ```
//! use tagtree_writer::{HtmlWriter, MarkupWriter};
//!
//! let mut writer = HtmlWriter::new(String::new());
//! writer.begin_tag("span")?;
//! writer.attribute("class", "test")?;
//! writer.close_start_tag()?;
//! writer.text("This rocks")?;
//! writer.end_tag("span")?;
//! assert_eq!(writer.into_inner(), r#"<span class="test">This rocks</span>"#);
//! # Ok::<(), tagtree_writer::WriteError>(())
//! ```

mod error;
mod html;
mod writer;
mod xml;

pub use error::WriteError;
pub use html::HtmlWriter;
pub use writer::MarkupWriter;
pub use xml::XmlWriter;
