#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an input line.
pub enum LexError {
    /// No rule of the rule table matches at this position.
    NoMatch {
        /// Byte offset of the first unrecognized character.
        offset: usize,
    },
    /// A rule matched more text than a token can hold.
    TokenTooLong {
        /// Byte offset where the oversized match starts.
        offset: usize,
        /// Length of the match in bytes.
        len:    usize,
    },
    /// The whole input line is longer than the configured maximum.
    InputTooLong {
        /// Length of the rejected input in bytes.
        len: usize,
        /// The configured maximum.
        max: usize,
    },
}

impl LexError {
    /// Byte offset in the input the error refers to.
    ///
    /// For [`LexError::InputTooLong`] this is the first byte past the allowed
    /// maximum.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::NoMatch { offset } | Self::TokenTooLong { offset, .. } => *offset,
            Self::InputTooLong { max, .. } => *max,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch { offset } => write!(f, "Error at position {offset}: No match."),
            Self::TokenTooLong { offset, len } => write!(f,
                                                         "Error at position {offset}: Token of {len} bytes is too long."),
            Self::InputTooLong { len, max } => write!(f,
                                                      "Error: Expression of {len} bytes exceeds the maximum of {max}."),
        }
    }
}

impl std::error::Error for LexError {}
