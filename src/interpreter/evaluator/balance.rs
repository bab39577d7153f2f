use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::token::{TokenKind, TokenStream},
    },
};

/// Returns `true` if `[p, q]` is exactly one parenthesized group.
///
/// Token `p` must be `(`, token `q` must be `)`, and the parentheses in
/// between must balance without ever closing the outer `(` early. So `(1+2)`
/// and `(1+(2))` qualify, while `(1)+(2)` does not, even though it starts with
/// `(` and ends with `)`.
///
/// Callers only ask about ranges with `p < q`.
///
/// # Example
/// ```
/// use dbgexpr::interpreter::{evaluator::balance::is_fully_parenthesized, lexer::core::tokenize};
///
/// let tokens = tokenize("(1)+(2)").unwrap();
/// assert!(!is_fully_parenthesized(&tokens, 0, tokens.len() - 1));
///
/// let tokens = tokenize("(1+(2))").unwrap();
/// assert!(is_fully_parenthesized(&tokens, 0, tokens.len() - 1));
/// ```
#[must_use]
pub fn is_fully_parenthesized(tokens: &TokenStream, p: usize, q: usize) -> bool {
    if tokens[p].kind != TokenKind::LParen || tokens[q].kind != TokenKind::RParen {
        return false;
    }

    let mut depth = 0usize;
    for token in (p + 1..q).map(|i| &tokens[i]) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            },
            _ => {},
        }
    }

    depth == 0
}

/// Checks that every parenthesis in the stream has a partner.
///
/// # Errors
/// `UnbalancedParentheses` pointing at the first `)` that closes nothing, or,
/// if every `)` matches, at the innermost `(` left open at the end.
pub fn check_nesting(tokens: &TokenStream) -> EvalResult<()> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => open.push(token.offset),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(EvalError::UnbalancedParentheses { offset: token.offset });
                }
            },
            _ => {},
        }
    }

    match open.last() {
        Some(&offset) => Err(EvalError::UnbalancedParentheses { offset }),
        None => Ok(()),
    }
}
