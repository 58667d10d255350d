//! A lossless concrete syntax tree (CST) parser for JSON.
//!
//! Unlike an abstract syntax tree, the CST retains every token of the
//! original text, whitespace and punctuation included, annotated with
//! exact byte ranges, so the input can be reconstructed
//! character-for-character from the tree. This serves tools that need to
//! understand JSON structurally while preserving formatting: editors,
//! formatters, differs, and selective rewriters.
//!
//! # Examples
//!
//! ```
//! use json_cst::{CstValue, ParseOptions, TokenRange};
//!
//! let source = "{ \"greeting\": \"hello\" }";
//! let doc = json_cst::parse(source, ParseOptions::default()).unwrap();
//!
//! let CstValue::Object(object) = &doc.root else {
//!     panic!("root should be an object");
//! };
//! let property = &object.children[0];
//! assert_eq!(property.key.raw(), "\"greeting\"");
//! assert_eq!(property.value.range(), TokenRange { start: 14, end: 21 });
//! assert_eq!(&source[14..21], "\"hello\"");
//! ```
//!
//! With [`ParseOptions::include_value_tokens`], every value-bearing node
//! also retains the exact token span covering its value, enabling in-place
//! text replacement without re-serializing the tree.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod node;
mod options;
mod parser;
mod token;

#[cfg(test)]
mod tests;

pub use error::{Expectation, ParseError};
pub use lexer::tokenize;
pub use node::{
    ArrayElement, ArrayNode, CstDocument, CstValue, LiteralNode, NodeKind, NumberNode, ObjectNode,
    ObjectProperty, PropertyColon, StringNode, TokenRange,
};
pub use options::ParseOptions;
pub use parser::parse;
pub use token::{LiteralValue, OffsetToken, Token, TokenKind, TokenValue, decorate_offsets};
