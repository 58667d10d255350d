//! The recursive-descent CST builders.
//!
//! [`parse`] drives the whole pipeline: tokenize, stamp offsets, then hand
//! the token sequence to the value dispatcher. The dispatcher routes each
//! value-starting token to the matching builder, and the object and array
//! builders recurse back through it for nested values, forming a small
//! hand-written grammar with one recursion point.
//!
//! Cursor state is a plain position threaded through every call and returned
//! as a consumed-token count in [`Parsed`]; nothing here is shared or
//! ambient, so concurrent parses of independent inputs need no coordination.


use alloc::vec::Vec;

use crate::{
    error::{Expectation, ParseError},
    lexer::tokenize,
    node::{
        ArrayElement, ArrayNode, CstDocument, CstValue, LiteralNode, NumberNode, ObjectNode,
        ObjectProperty, PropertyColon, StringNode, TokenRange,
    },
    options::ParseOptions,
    token::{OffsetToken, TokenKind, TokenValue, decorate_offsets, peek_significant,
        skip_whitespace, take_significant},
};

/// Parses JSON source text into a lossless [`CstDocument`].
///
/// The returned tree retains every token of the input, whitespace and
/// punctuation included, with exact byte ranges, so the source can be
/// reconstructed character-for-character. Anything after the root value and
/// its trailing whitespace is rejected.
///
/// # Examples
///
/// ```
/// use json_cst::{CstValue, ParseOptions};
///
/// let doc = json_cst::parse(r#"{"foo": "bar"}"#, ParseOptions::default()).unwrap();
/// let CstValue::Object(object) = &doc.root else {
///     panic!("root should be an object");
/// };
/// assert_eq!(object.children[0].key.raw(), r#""foo""#);
/// assert_eq!(object.children[0].key_value(), "foo");
/// ```
///
/// # Errors
///
/// Returns the first lexical or grammatical violation found; see
/// [`ParseError`]. The parse is all-or-nothing; no partial tree is
/// returned.
pub fn parse(source: &str, options: ParseOptions) -> Result<CstDocument<'_>, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let ctx = ParseContext { options };
    let tokens = decorate_offsets(tokenize(source)?);

    let mut pos = 0;

    let before = skip_whitespace(&tokens, pos);
    pos += before.advanced;

    let root = parse_value(&tokens, pos, 0, &ctx)?;
    let value_tokens = ctx
        .options
        .include_value_tokens
        .then(|| tokens[pos..pos + root.consumed].to_vec());
    pos += root.consumed;

    let after = skip_whitespace(&tokens, pos);
    pos += after.advanced;

    if let Some(extra) = tokens.get(pos) {
        return Err(ParseError::TrailingCharacters {
            offset: extra.offset,
        });
    }

    Ok(CstDocument {
        whitespace_before: before.token,
        root: root.node,
        value_tokens,
        whitespace_after: after.token,
    })
}

struct ParseContext {
    options: ParseOptions,
}

/// A finished node plus how many tokens it consumed, so the caller can
/// advance its own cursor.
struct Parsed<T> {
    node: T,
    consumed: usize,
}

/// The value dispatcher: routes the token at `pos` to the matching builder.
///
/// This is the grammar's only recursion point; `depth` counts the open
/// containers above this value and is checked against the configured bound
/// before either container builder is entered.
fn parse_value<'src>(
    tokens: &[OffsetToken<'src>],
    pos: usize,
    depth: usize,
    ctx: &ParseContext,
) -> Result<Parsed<CstValue<'src>>, ParseError> {
    let Some(token) = tokens.get(pos) else {
        return Err(unexpected_end(tokens));
    };

    match &token.token.value {
        TokenValue::String(_) | TokenValue::Number(_) | TokenValue::Literal(_) => Ok(Parsed {
            node: primitive_node(token),
            consumed: 1,
        }),
        TokenValue::Punctuator(b'{') => {
            check_depth(token, depth, ctx)?;
            let object = parse_object(tokens, pos + 1, depth + 1, ctx)?;
            Ok(Parsed {
                node: CstValue::Object(object.node),
                consumed: object.consumed,
            })
        }
        TokenValue::Punctuator(b'[') => {
            check_depth(token, depth, ctx)?;
            let array = parse_array(tokens, pos + 1, depth + 1, ctx)?;
            Ok(Parsed {
                node: CstValue::Array(array.node),
                consumed: array.consumed,
            })
        }
        TokenValue::Punctuator(_) | TokenValue::Whitespace => Err(ParseError::UnexpectedToken {
            offset: token.offset,
            expected: Expectation::Value,
            actual: token.kind(),
        }),
    }
}

/// Wraps one primitive token as a leaf node. The dispatcher guarantees the
/// token is a string, number, or literal.
fn primitive_node<'src>(token: &OffsetToken<'src>) -> CstValue<'src> {
    let range = TokenRange::covering(token, token);
    match token.token.value {
        TokenValue::String(_) => CstValue::String(StringNode {
            range,
            token: token.clone(),
        }),
        TokenValue::Number(_) => CstValue::Number(NumberNode {
            range,
            token: token.clone(),
        }),
        _ => CstValue::Literal(LiteralNode {
            range,
            token: token.clone(),
        }),
    }
}

/// Builds an object. The cursor enters one token past the `{`; the brace is
/// accounted to this node by the +1 adjustment of the returned count.
fn parse_object<'src>(
    tokens: &[OffsetToken<'src>],
    pos: usize,
    depth: usize,
    ctx: &ParseContext,
) -> Result<Parsed<ObjectNode<'src>>, ParseError> {
    let mut children: Vec<ObjectProperty<'src>> = Vec::new();
    let mut whitespace_after_children = None;
    let mut i = pos;

    loop {
        let Some(next) = peek_significant(tokens, i) else {
            return Err(unexpected_end(tokens));
        };

        if next.is_punctuator(b'}') {
            // A comma on the final property would promise another entry;
            // `{"a": 1,}` is malformed.
            if children.last().is_some_and(|last| last.comma.is_some()) {
                return Err(ParseError::UnexpectedToken {
                    offset: next.offset,
                    expected: Expectation::Key,
                    actual: next.kind(),
                });
            }
            let skipped = skip_whitespace(tokens, i);
            i += skipped.advanced;
            whitespace_after_children = skipped.token;
            i += 1; // closing brace
            break;
        }

        let start = i;

        let skipped = skip_whitespace(tokens, i);
        i += skipped.advanced;
        let whitespace_before = skipped.token;

        let key = expect_kind(tokens, i, TokenKind::String, Expectation::Key)?.clone();
        i += 1;

        let colon = parse_colon(tokens, i)?;
        i += colon.consumed;

        let value = parse_value(tokens, i, depth, ctx)?;
        let value_tokens = ctx
            .options
            .include_value_tokens
            .then(|| tokens[i..i + value.consumed].to_vec());
        i += value.consumed;

        let separator = read_separator(tokens, i, b'}')?;
        i += separator.consumed;

        children.push(ObjectProperty {
            range: TokenRange::covering(&tokens[start], &tokens[i - 1]),
            whitespace_before,
            key,
            colon: colon.node,
            value: value.node,
            value_tokens,
            whitespace_before_comma: separator.whitespace,
            comma: separator.comma,
        });
    }

    Ok(Parsed {
        node: ObjectNode {
            range: TokenRange::covering(&tokens[pos - 1], &tokens[i - 1]),
            children,
            whitespace_after_children,
        },
        consumed: i - pos + 1,
    })
}

/// Builds an array. Same cursor convention as [`parse_object`], without the
/// key/colon step.
fn parse_array<'src>(
    tokens: &[OffsetToken<'src>],
    pos: usize,
    depth: usize,
    ctx: &ParseContext,
) -> Result<Parsed<ArrayNode<'src>>, ParseError> {
    let mut children: Vec<ArrayElement<'src>> = Vec::new();
    let mut whitespace_after_children = None;
    let mut i = pos;

    loop {
        let Some(next) = peek_significant(tokens, i) else {
            return Err(unexpected_end(tokens));
        };

        if next.is_punctuator(b']') {
            if children.last().is_some_and(|last| last.comma.is_some()) {
                return Err(ParseError::UnexpectedToken {
                    offset: next.offset,
                    expected: Expectation::Value,
                    actual: next.kind(),
                });
            }
            let skipped = skip_whitespace(tokens, i);
            i += skipped.advanced;
            whitespace_after_children = skipped.token;
            i += 1; // closing bracket
            break;
        }

        let start = i;

        let skipped = skip_whitespace(tokens, i);
        i += skipped.advanced;
        let whitespace_before = skipped.token;

        let value = parse_value(tokens, i, depth, ctx)?;
        let value_tokens = ctx
            .options
            .include_value_tokens
            .then(|| tokens[i..i + value.consumed].to_vec());
        i += value.consumed;

        let separator = read_separator(tokens, i, b']')?;
        i += separator.consumed;

        children.push(ArrayElement {
            range: TokenRange::covering(&tokens[start], &tokens[i - 1]),
            whitespace_before,
            value: value.node,
            value_tokens,
            whitespace_before_comma: separator.whitespace,
            comma: separator.comma,
        });
    }

    Ok(Parsed {
        node: ArrayNode {
            range: TokenRange::covering(&tokens[pos - 1], &tokens[i - 1]),
            children,
            whitespace_after_children,
        },
        consumed: i - pos + 1,
    })
}

/// Reads the `whitespace? ':' whitespace?` between a key and its value.
fn parse_colon<'src>(
    tokens: &[OffsetToken<'src>],
    pos: usize,
) -> Result<Parsed<PropertyColon<'src>>, ParseError> {
    let mut i = pos;

    let before = skip_whitespace(tokens, i);
    i += before.advanced;

    let token = expect_punctuator(tokens, i, b':', Expectation::Colon)?.clone();
    i += 1;

    let after = skip_whitespace(tokens, i);
    i += after.advanced;

    Ok(Parsed {
        node: PropertyColon {
            range: TokenRange::covering(&tokens[pos], &tokens[i - 1]),
            whitespace_before: before.token,
            token,
            whitespace_after: after.token,
        },
        consumed: i - pos,
    })
}

/// Outcome of the comma-or-close lookahead after a child's value.
struct Separator<'src> {
    whitespace: Option<OffsetToken<'src>>,
    comma: Option<OffsetToken<'src>>,
    consumed: usize,
}

/// After a property or element value: consume a `,` (with any whitespace
/// before it), or leave a closing punctuator for the loop to handle. Any
/// other token breaks the comma placement rule and fails the parse.
fn read_separator<'src>(
    tokens: &[OffsetToken<'src>],
    pos: usize,
    closer: u8,
) -> Result<Separator<'src>, ParseError> {
    let Some(next) = peek_significant(tokens, pos) else {
        return Err(unexpected_end(tokens));
    };

    if next.is_punctuator(b',') {
        let Some(taken) = take_significant(tokens, pos) else {
            return Err(unexpected_end(tokens));
        };
        return Ok(Separator {
            whitespace: taken.whitespace,
            comma: Some(taken.token),
            consumed: taken.consumed,
        });
    }

    if next.is_punctuator(closer) {
        return Ok(Separator {
            whitespace: None,
            comma: None,
            consumed: 0,
        });
    }

    Err(ParseError::UnexpectedToken {
        offset: next.offset,
        expected: Expectation::CommaOrClose(closer),
        actual: next.kind(),
    })
}

fn expect_kind<'a, 'src>(
    tokens: &'a [OffsetToken<'src>],
    pos: usize,
    kind: TokenKind,
    expected: Expectation,
) -> Result<&'a OffsetToken<'src>, ParseError> {
    let Some(token) = tokens.get(pos) else {
        return Err(unexpected_end(tokens));
    };
    if token.kind() != kind {
        return Err(ParseError::UnexpectedToken {
            offset: token.offset,
            expected,
            actual: token.kind(),
        });
    }
    Ok(token)
}

fn expect_punctuator<'a, 'src>(
    tokens: &'a [OffsetToken<'src>],
    pos: usize,
    which: u8,
    expected: Expectation,
) -> Result<&'a OffsetToken<'src>, ParseError> {
    let Some(token) = tokens.get(pos) else {
        return Err(unexpected_end(tokens));
    };
    if !token.is_punctuator(which) {
        return Err(ParseError::UnexpectedToken {
            offset: token.offset,
            expected,
            actual: token.kind(),
        });
    }
    Ok(token)
}

fn check_depth(token: &OffsetToken<'_>, depth: usize, ctx: &ParseContext) -> Result<(), ParseError> {
    if depth >= ctx.options.max_depth {
        return Err(ParseError::DepthLimitExceeded {
            offset: token.offset,
            limit: ctx.options.max_depth,
        });
    }
    Ok(())
}

fn unexpected_end(tokens: &[OffsetToken<'_>]) -> ParseError {
    ParseError::UnexpectedEnd {
        offset: tokens.last().map_or(0, OffsetToken::end),
    }
}
