use tracing::trace;

use crate::{
    config::EvalConfig,
    error::LexError,
    interpreter::lexer::{
        rules::{RULE_TABLE, RULES},
        token::{TOKEN_CAPACITY, Token, TokenKind, TokenStream},
    },
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Tokenizes `input` with the default [`EvalConfig`].
///
/// # Errors
/// See [`tokenize_with`].
///
/// # Example
/// ```
/// use dbgexpr::interpreter::lexer::{core::tokenize, token::TokenKind};
///
/// let tokens = tokenize("$a0 + 0x10").unwrap();
/// assert_eq!(tokens.kinds(),
///            vec![TokenKind::Register, TokenKind::Plus, TokenKind::HexNumber]);
/// ```
pub fn tokenize(input: &str) -> LexResult<TokenStream> {
    tokenize_with(input, &EvalConfig::default())
}

/// Converts one input line into a [`TokenStream`].
///
/// The line is scanned left to right. At each offset the rule table is
/// consulted in order and the first rule matching exactly at that offset
/// consumes its text. Whitespace is dropped; every other match becomes a
/// token carrying its source offset.
///
/// # Parameters
/// - `input`: The expression line.
/// - `config`: Limits applied to the line.
///
/// # Returns
/// The tokens in source order. A blank line yields an empty stream.
///
/// # Errors
/// - `InputTooLong` if `input` exceeds `config.max_input_len`.
/// - `NoMatch` at the first position no rule recognizes.
/// - `TokenTooLong` if a single match exceeds [`TOKEN_CAPACITY`] bytes.
pub fn tokenize_with(input: &str, config: &EvalConfig) -> LexResult<TokenStream> {
    if input.len() > config.max_input_len {
        return Err(LexError::InputTooLong { len: input.len(),
                                            max: config.max_input_len, });
    }

    let mut tokens = Vec::new();
    let mut position = 0;

    while position < input.len() {
        let rest = &input[position..];
        let Some(m) = RULE_TABLE.match_at(rest) else {
            return Err(LexError::NoMatch { offset: position });
        };

        trace!(rule = m.rule,
               pattern = RULES[m.rule].0,
               position,
               len = m.len,
               text = &rest[..m.len],
               "rule matched");

        if m.kind != TokenKind::Whitespace {
            if m.len > TOKEN_CAPACITY {
                return Err(LexError::TokenTooLong { offset: position,
                                                    len:    m.len, });
            }
            tokens.push(Token { kind:   m.kind,
                                text:   rest[..m.len].to_string(),
                                offset: position, });
        }

        position += m.len;
    }

    Ok(TokenStream::new(tokens, input.len()))
}
