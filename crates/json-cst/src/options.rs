/// Configuration options for CST parsing.
///
/// # Examples
///
/// ```rust
/// use json_cst::ParseOptions;
///
/// let options = ParseOptions {
///     include_value_tokens: true,
///     ..ParseOptions::default()
/// };
/// let doc = json_cst::parse("[1, 2]", options).unwrap();
/// assert!(doc.value_tokens.is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Whether every value-bearing node additionally retains the exact token
    /// span covering its value.
    ///
    /// When `true`, the document root, each object property, and each array
    /// element carries the ordered sub-sequence of tokens its value was
    /// parsed from, enabling text replacement without re-serializing the
    /// tree. Costs additional memory proportional to value size.
    ///
    /// # Default
    ///
    /// `false`
    pub include_value_tokens: bool,

    /// Maximum container nesting accepted before the parse is rejected with
    /// [`DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded).
    ///
    /// The builders recurse once per open object or array, so unbounded
    /// nesting would translate adversarial input into call-stack exhaustion.
    /// A value of `0` rejects containers outright.
    ///
    /// # Default
    ///
    /// [`ParseOptions::DEFAULT_MAX_DEPTH`] (128)
    pub max_depth: usize,
}

impl ParseOptions {
    /// Container nesting limit used by [`ParseOptions::default`].
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_value_tokens: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
