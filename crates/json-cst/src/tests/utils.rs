//! Shared helpers: tree-to-text reconstruction and structural invariant
//! checks.
//!
//! Reconstruction walks the tree emitting every retained token's raw text,
//! plus the structural punctuation implied by each container node. If the
//! tree is lossless, the result is byte-identical to the source.

use alloc::string::String;

use crate::{ArrayNode, CstDocument, CstValue, ObjectNode};

pub fn render_document(doc: &CstDocument<'_>) -> String {
    let mut out = String::new();
    if let Some(ws) = &doc.whitespace_before {
        out.push_str(ws.raw());
    }
    render_value(&mut out, &doc.root);
    if let Some(ws) = &doc.whitespace_after {
        out.push_str(ws.raw());
    }
    out
}

pub fn render_value(out: &mut String, value: &CstValue<'_>) {
    match value {
        CstValue::Literal(node) => out.push_str(node.token.raw()),
        CstValue::Number(node) => out.push_str(node.token.raw()),
        CstValue::String(node) => out.push_str(node.token.raw()),
        CstValue::Object(node) => render_object(out, node),
        CstValue::Array(node) => render_array(out, node),
    }
}

fn render_object(out: &mut String, node: &ObjectNode<'_>) {
    out.push('{');
    for property in &node.children {
        if let Some(ws) = &property.whitespace_before {
            out.push_str(ws.raw());
        }
        out.push_str(property.key.raw());
        if let Some(ws) = &property.colon.whitespace_before {
            out.push_str(ws.raw());
        }
        out.push_str(property.colon.token.raw());
        if let Some(ws) = &property.colon.whitespace_after {
            out.push_str(ws.raw());
        }
        render_value(out, &property.value);
        if let Some(ws) = &property.whitespace_before_comma {
            out.push_str(ws.raw());
        }
        if let Some(comma) = &property.comma {
            out.push_str(comma.raw());
        }
    }
    if let Some(ws) = &node.whitespace_after_children {
        out.push_str(ws.raw());
    }
    out.push('}');
}

fn render_array(out: &mut String, node: &ArrayNode<'_>) {
    out.push('[');
    for element in &node.children {
        if let Some(ws) = &element.whitespace_before {
            out.push_str(ws.raw());
        }
        render_value(out, &element.value);
        if let Some(ws) = &element.whitespace_before_comma {
            out.push_str(ws.raw());
        }
        if let Some(comma) = &element.comma {
            out.push_str(comma.raw());
        }
    }
    if let Some(ws) = &node.whitespace_after_children {
        out.push_str(ws.raw());
    }
    out.push(']');
}

/// Asserts every structural law the tree promises, for `doc` and all of its
/// descendants: exact reconstruction, range bounds and containment, sibling
/// ordering, and comma placement.
pub fn check_document(source: &str, doc: &CstDocument<'_>) {
    assert_eq!(render_document(doc), source, "document must round-trip");
    check_value(source, &doc.root);
}

pub fn check_value(source: &str, value: &CstValue<'_>) {
    let range = value.range();
    assert!(range.start <= range.end && range.end <= source.len());

    // A node's covered bytes are exactly the source slice of its range.
    let mut rendered = String::new();
    render_value(&mut rendered, value);
    assert_eq!(&source[range.start..range.end], rendered);

    match value {
        CstValue::Object(node) => {
            let mut previous_end = range.start;
            let count = node.children.len();
            for (index, property) in node.children.iter().enumerate() {
                assert!(range.contains(property.range), "child range escapes parent");
                assert!(
                    property.range.start >= previous_end,
                    "sibling ranges must be ordered and disjoint"
                );
                previous_end = property.range.end;

                assert!(property.range.contains(property.colon.range));
                assert!(property.range.contains(property.value.range()));
                assert_eq!(
                    property.comma.is_some(),
                    index + 1 != count,
                    "comma on every property except the last"
                );

                check_value(source, &property.value);
            }
        }
        CstValue::Array(node) => {
            let mut previous_end = range.start;
            let count = node.children.len();
            for (index, element) in node.children.iter().enumerate() {
                assert!(range.contains(element.range), "child range escapes parent");
                assert!(
                    element.range.start >= previous_end,
                    "sibling ranges must be ordered and disjoint"
                );
                previous_end = element.range.end;

                assert!(element.range.contains(element.value.range()));
                assert_eq!(
                    element.comma.is_some(),
                    index + 1 != count,
                    "comma on every element except the last"
                );

                check_value(source, &element.value);
            }
        }
        CstValue::Literal(_) | CstValue::Number(_) | CstValue::String(_) => {
            assert!(!range.is_empty(), "leaf ranges cover their token");
        }
    }
}
