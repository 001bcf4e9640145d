//! Parser for the `name=value;name=value;...` attribute string format.
//!
//! The format is a flat list of pairs, except that `style=` values may
//! themselves contain `;`-separated declarations and `class=` values
//! space-separated names. The parser is a small state machine over the
//! `=`-split chunks of the input, carrying the attribute name seen in one
//! chunk over to the value found in the next.
//!
//! Compatibility notes, kept deliberately:
//! - In the one-sub-value branch the pending name is not cleared, so a
//!   later `=` reuses the stale name. Existing consumers of the format
//!   never follow that branch with a third `=`.
//! - The `class`/`style` comparisons here are case-sensitive; only the
//!   single-attribute setter dispatches case-insensitively.

use crate::element::Element;

/// Apply an attribute string to an element. Unrecognized chunk shapes are
/// dropped silently.
pub(crate) fn apply(element: &mut Element, spec: &str) {
    if spec.is_empty() {
        return;
    }

    let mut pending = "";
    for chunk in spec.split('=') {
        if pending.is_empty() {
            pending = chunk;
            continue;
        }

        let values: Vec<&str> = chunk.split(';').collect();
        match values.as_slice() {
            &[value] => {
                element.set_dispatched(pending, value);
            }
            &[value, next] => {
                if pending == "class" {
                    element.merge_classes(value);
                } else {
                    element.set_dispatched(pending, value);
                }
                pending = next;
            }
            _ if pending == "style" => {
                // A chunk like `font-weight:bold;padding:3px;height` is a
                // run of style declarations whose last segment, when
                // non-empty, is the next attribute's name.
                let last = values[values.len() - 1];
                if last.is_empty() {
                    element.merge_styles(chunk);
                } else if let Some(cut) = chunk.rfind(last) {
                    element.merge_styles(&chunk[..cut]);
                    pending = last;
                }
            }
            _ => {
                tracing::trace!(chunk, "unrecognized attribute chunk, dropped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(spec: &str) -> Element {
        let mut element = Element::new("x");
        apply(&mut element, spec);
        element
    }

    #[test]
    fn test_single_pair() {
        let el = parse("value=200px");
        assert_eq!(el.get_attr("value"), Some("200px"));
    }

    #[test]
    fn test_pair_with_trailing_semicolon() {
        let el = parse("id=emmitt;");
        assert_eq!(el.get_attr("id"), Some("emmitt"));
        assert_eq!(el.attributes().len(), 1);
    }

    #[test]
    fn test_multiple_pairs_keep_order() {
        let el = parse("height=100%;width=66%;");
        let keys: Vec<&str> = el.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["height", "width"]);
    }

    #[test]
    fn test_style_run_carries_next_name() {
        let el = parse("maxlength=30;style=font-weight:bold;font-size:20px;padding:30px;height=20px;");
        let keys: Vec<&str> = el.attributes().keys().map(String::as_str).collect();
        assert_eq!(keys, ["maxlength", "height"]);
        let props: Vec<&str> = el.styles().keys().map(String::as_str).collect();
        assert_eq!(props, ["font-weight", "font-size", "padding"]);
    }

    #[test]
    fn test_style_run_ending_at_spec_end() {
        let el = parse("style=margin:3;border:0;border:1;");
        assert_eq!(el.styles().get("margin").map(String::as_str), Some("3"));
        assert_eq!(el.styles().get("border").map(String::as_str), Some("1"));
        assert!(el.attributes().is_empty());
    }

    #[test]
    fn test_class_value_merges_classes() {
        let el = parse("class=foo bar;");
        assert!(el.attributes().is_empty());
        let names: Vec<&str> = el.classes().iter().map(String::as_str).collect();
        assert_eq!(names, ["foo", "bar"]);
    }

    #[test]
    fn test_empty_spec_is_a_noop() {
        let el = parse("");
        assert!(el.attributes().is_empty());
        assert!(el.styles().is_empty());
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_unrecognized_chunk_dropped() {
        // Three sub-values under a non-`style` pending name have no
        // meaning; the chunk is skipped without error.
        let el = parse("width=a;b;c");
        assert!(el.attributes().is_empty());
    }
}
