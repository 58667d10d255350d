//! The concrete syntax tree data model.
//!
//! Every node records the half-open byte [`TokenRange`] it covers and keeps
//! hold of the tokens, whitespace and punctuation included, that fall
//! inside it, so the original text is recoverable from the tree alone.
//! Fields that correspond to optional source text (whitespace, the comma
//! after a non-final child) are `Option`s: absent means the source had
//! nothing there, never an empty placeholder.
//!
//! Trees are built once by [`parse`](crate::parse) and never mutated; the
//! caller owns the finished document outright.

use alloc::vec::Vec;
use core::fmt;

use crate::token::OffsetToken;

/// A half-open interval of absolute byte offsets into the source.
///
/// `end - start` always equals the summed raw lengths of the tokens the
/// owning node covers, and a parent's range contains every child's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenRange {
    /// Offset of the first covered byte.
    pub start: usize,
    /// Offset one past the last covered byte.
    pub end: usize,
}

impl TokenRange {
    /// The range running from the first byte of `first` to one past the last
    /// byte of `last`.
    pub(crate) fn covering(first: &OffsetToken<'_>, last: &OffsetToken<'_>) -> Self {
        Self {
            start: first.offset,
            end: last.end(),
        }
    }

    /// Number of bytes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` lies entirely within this range.
    #[must_use]
    pub fn contains(&self, other: TokenRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Discriminates every node shape in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// [`LiteralNode`]
    Literal,
    /// [`NumberNode`]
    Number,
    /// [`StringNode`]
    String,
    /// [`ObjectNode`]
    Object,
    /// [`ObjectProperty`]
    ObjectProperty,
    /// [`PropertyColon`]
    ObjectPropertyColon,
    /// [`ArrayNode`]
    Array,
    /// [`ArrayElement`]
    ArrayElement,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Literal => "literal",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::ObjectProperty => "object-property",
            Self::ObjectPropertyColon => "object-property-colon",
            Self::Array => "array",
            Self::ArrayElement => "array-element",
        })
    }
}

/// Leaf node wrapping a single `null`/`true`/`false` token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LiteralNode<'src> {
    /// Bytes covered: exactly the token's span.
    pub range: TokenRange,
    /// The literal token.
    pub token: OffsetToken<'src>,
}

/// Leaf node wrapping a single number token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberNode<'src> {
    /// Bytes covered: exactly the token's span.
    pub range: TokenRange,
    /// The number token.
    pub token: OffsetToken<'src>,
}

/// Leaf node wrapping a single string token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StringNode<'src> {
    /// Bytes covered: exactly the token's span.
    pub range: TokenRange,
    /// The string token.
    pub token: OffsetToken<'src>,
}

/// The `:` between an object key and its value, with the whitespace on
/// either side of it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PropertyColon<'src> {
    /// Bytes covered, from the leading whitespace (if any) through the
    /// trailing whitespace (if any).
    pub range: TokenRange,
    /// Whitespace between the key and the colon.
    pub whitespace_before: Option<OffsetToken<'src>>,
    /// The colon token itself.
    pub token: OffsetToken<'src>,
    /// Whitespace between the colon and the value.
    pub whitespace_after: Option<OffsetToken<'src>>,
}

/// One `key: value` entry of an object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectProperty<'src> {
    /// Bytes covered, from the leading whitespace through the comma or the
    /// value, whichever ends later.
    pub range: TokenRange,
    /// Whitespace before the key.
    pub whitespace_before: Option<OffsetToken<'src>>,
    /// The key: always a string token.
    pub key: OffsetToken<'src>,
    /// The colon between key and value.
    pub colon: PropertyColon<'src>,
    /// The property's value.
    pub value: CstValue<'src>,
    /// The exact token span the value was parsed from; `Some` iff
    /// [`include_value_tokens`](crate::ParseOptions::include_value_tokens)
    /// was set.
    pub value_tokens: Option<Vec<OffsetToken<'src>>>,
    /// Whitespace between the value and the comma.
    pub whitespace_before_comma: Option<OffsetToken<'src>>,
    /// The trailing comma; absent iff this is the last property.
    pub comma: Option<OffsetToken<'src>>,
}

impl ObjectProperty<'_> {
    /// The decoded key, without quotes and with escapes resolved.
    #[must_use]
    pub fn key_value(&self) -> &str {
        self.key.token.value.as_str().unwrap_or_default()
    }
}

/// An object: `{ ... }` with its properties in source order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectNode<'src> {
    /// Bytes covered, opening brace through closing brace.
    pub range: TokenRange,
    /// The properties, in source order. Duplicate keys each get their own
    /// entry.
    pub children: Vec<ObjectProperty<'src>>,
    /// Whitespace between the last property (or the opening brace, if the
    /// object is empty) and the closing brace.
    pub whitespace_after_children: Option<OffsetToken<'src>>,
}

/// One element of an array.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrayElement<'src> {
    /// Bytes covered, from the leading whitespace through the comma or the
    /// value, whichever ends later.
    pub range: TokenRange,
    /// Whitespace before the value.
    pub whitespace_before: Option<OffsetToken<'src>>,
    /// The element's value.
    pub value: CstValue<'src>,
    /// The exact token span the value was parsed from; `Some` iff
    /// [`include_value_tokens`](crate::ParseOptions::include_value_tokens)
    /// was set.
    pub value_tokens: Option<Vec<OffsetToken<'src>>>,
    /// Whitespace between the value and the comma.
    pub whitespace_before_comma: Option<OffsetToken<'src>>,
    /// The trailing comma; absent iff this is the last element.
    pub comma: Option<OffsetToken<'src>>,
}

/// An array: `[ ... ]` with its elements in source order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArrayNode<'src> {
    /// Bytes covered, opening bracket through closing bracket.
    pub range: TokenRange,
    /// The elements, in source order.
    pub children: Vec<ArrayElement<'src>>,
    /// Whitespace between the last element (or the opening bracket, if the
    /// array is empty) and the closing bracket.
    pub whitespace_after_children: Option<OffsetToken<'src>>,
}

/// Any JSON value position in the tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CstValue<'src> {
    /// `null`, `true`, or `false`.
    Literal(LiteralNode<'src>),
    /// A number.
    Number(NumberNode<'src>),
    /// A string.
    String(StringNode<'src>),
    /// An object.
    Object(ObjectNode<'src>),
    /// An array.
    Array(ArrayNode<'src>),
}

impl<'src> CstValue<'src> {
    /// The shape of this value node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Literal(_) => NodeKind::Literal,
            Self::Number(_) => NodeKind::Number,
            Self::String(_) => NodeKind::String,
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
        }
    }

    /// The bytes this value covers.
    #[must_use]
    pub fn range(&self) -> TokenRange {
        match self {
            Self::Literal(node) => node.range,
            Self::Number(node) => node.range,
            Self::String(node) => node.range,
            Self::Object(node) => node.range,
            Self::Array(node) => node.range,
        }
    }

    /// Returns `true` if the value is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// The object node, if this value is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectNode<'src>> {
        match self {
            Self::Object(node) => Some(node),
            _ => None,
        }
    }

    /// The array node, if this value is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayNode<'src>> {
        match self {
            Self::Array(node) => Some(node),
            _ => None,
        }
    }

    /// The string node, if this value is one.
    #[must_use]
    pub fn as_string(&self) -> Option<&StringNode<'src>> {
        match self {
            Self::String(node) => Some(node),
            _ => None,
        }
    }
}

/// A parsed document: the root value plus the whitespace around it.
///
/// # Examples
///
/// ```
/// use json_cst::{NodeKind, ParseOptions};
///
/// let doc = json_cst::parse("  [1, 2]\n", ParseOptions::default()).unwrap();
/// assert_eq!(doc.whitespace_before.as_ref().unwrap().raw(), "  ");
/// assert_eq!(doc.root.kind(), NodeKind::Array);
/// assert_eq!(doc.whitespace_after.as_ref().unwrap().raw(), "\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CstDocument<'src> {
    /// Whitespace before the root value.
    pub whitespace_before: Option<OffsetToken<'src>>,
    /// The root value.
    pub root: CstValue<'src>,
    /// The exact token span the root was parsed from; `Some` iff
    /// [`include_value_tokens`](crate::ParseOptions::include_value_tokens)
    /// was set.
    pub value_tokens: Option<Vec<OffsetToken<'src>>>,
    /// Whitespace after the root value.
    pub whitespace_after: Option<OffsetToken<'src>>,
}
