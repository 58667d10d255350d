//! Parse failure types.
//!
//! Every failure aborts the parse immediately and carries the byte offset of
//! the fault, suitable for pointing an editor cursor at the offending input.
//! No partial tree is ever returned.

use core::fmt;

use thiserror::Error;

use crate::token::TokenKind;

/// What the grammar required at the point a mismatched token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// A value-starting token: a primitive, `{`, or `[`.
    Value,
    /// A string token serving as an object key.
    Key,
    /// The `:` separating a key from its value.
    Colon,
    /// A `,` continuing the container, or its closing punctuator.
    CommaOrClose(u8),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value => f.write_str("a value"),
            Self::Key => f.write_str("a string key"),
            Self::Colon => f.write_str("':'"),
            Self::CommaOrClose(closer) => write!(f, "',' or '{}'", *closer as char),
        }
    }
}

/// Error raised when source text cannot be parsed into a CST.
///
/// Parsing is a deterministic pure function of its input, so retrying an
/// identical input is never meaningful.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source was empty or contained only whitespace.
    #[error("input must not be empty or whitespace-only")]
    EmptyInput,

    /// A required token was of the wrong kind.
    #[error("unexpected {actual} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        /// Byte offset of the offending token.
        offset: usize,
        /// What the grammar required here.
        expected: Expectation,
        /// The kind actually found.
        actual: TokenKind,
    },

    /// The token sequence ended before a required token was found.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd {
        /// Byte offset one past the final token.
        offset: usize,
    },

    /// Input continued after the root value and its trailing whitespace.
    #[error("unexpected trailing characters at offset {offset}")]
    TrailingCharacters {
        /// Byte offset of the first extra token.
        offset: usize,
    },

    /// Containers were nested more deeply than the configured bound.
    #[error("nesting depth limit of {limit} exceeded at offset {offset}")]
    DepthLimitExceeded {
        /// Byte offset of the opening punctuator that crossed the bound.
        offset: usize,
        /// The configured [`max_depth`](crate::ParseOptions::max_depth).
        limit: usize,
    },

    /// A character that cannot start or continue any token.
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A string ran to the end of input without a closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A backslash escape used an unknown escape character.
    #[error("invalid escape character {ch:?} at offset {offset}")]
    InvalidEscape {
        /// The character following the backslash.
        ch: char,
        /// Byte offset of the backslash.
        offset: usize,
    },

    /// A `\u` escape was malformed: bad hex digits, a lone surrogate, or a
    /// high surrogate without a following low surrogate escape.
    #[error("invalid unicode escape sequence at offset {offset}")]
    InvalidUnicodeEscape {
        /// Byte offset of the backslash introducing the escape.
        offset: usize,
    },

    /// A numeric literal violated the JSON number grammar.
    #[error("invalid number literal at offset {offset}")]
    InvalidNumber {
        /// Byte offset of the first byte of the number.
        offset: usize,
    },
}
