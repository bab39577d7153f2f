use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::EvalResult,
        lexer::token::{TokenKind, TokenStream},
    },
    operator::{Operator, UNARY_TIER},
};

/// Returns `true` if token `index` of the range starting at `p` sits where an
/// operand is expected: first in the range, or right after an operator or `(`.
#[must_use]
pub fn is_unary_position(tokens: &TokenStream, p: usize, index: usize) -> bool {
    if index == p {
        return true;
    }
    let previous = tokens[index - 1].kind;
    previous.is_operator() || previous == TokenKind::LParen
}

/// Classifies token `index` of the range starting at `p` as an operator.
#[must_use]
pub fn operator_at(tokens: &TokenStream, p: usize, index: usize) -> Option<Operator> {
    Operator::classify(tokens[index].kind, is_unary_position(tokens, p, index))
}

/// Finds the operator that splits `[p, q]` into operands.
///
/// Only operators outside every parenthesized group are considered. The
/// candidate with the loosest binding tier wins. Among binary operators of the
/// same tier the rightmost wins, which makes `a - b - c` split as
/// `(a - b) - c`. Among prefix operators the leftmost wins, so `- - 3` splits
/// as `-(- 3)`.
///
/// # Parameters
/// - `tokens`: The token stream.
/// - `p`, `q`: Inclusive bounds of the range.
///
/// # Returns
/// The index of the dominant operator.
///
/// # Errors
/// - `NoOperator` if the range holds no eligible operator, e.g. `3 4`.
/// - `UnbalancedParentheses` if a `)` closes nothing inside the range or a `(`
///   is never closed.
///
/// # Example
/// ```
/// use dbgexpr::interpreter::{evaluator::dominant::find_dominant_operator, lexer::core::tokenize};
///
/// let tokens = tokenize("1+2*3").unwrap();
/// assert_eq!(find_dominant_operator(&tokens, 0, 4).unwrap(), 1);
///
/// let tokens = tokenize("(1+2)*3").unwrap();
/// assert_eq!(find_dominant_operator(&tokens, 0, 6).unwrap(), 5);
/// ```
pub fn find_dominant_operator(tokens: &TokenStream, p: usize, q: usize) -> EvalResult<usize> {
    let mut open = Vec::new();
    let mut best: Option<(usize, u8)> = None;

    for index in p..=q {
        match tokens[index].kind {
            TokenKind::LParen => open.push(index),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(EvalError::UnbalancedParentheses { offset: tokens[index].offset });
                }
            },
            _ if !open.is_empty() => {},
            _ => {
                let Some(op) = operator_at(tokens, p, index) else {
                    continue;
                };
                let tier = op.tier();
                let replaces = match best {
                    None => true,
                    Some((_, best_tier)) => {
                        tier < best_tier || (tier == best_tier && tier != UNARY_TIER)
                    },
                };
                if replaces {
                    best = Some((index, tier));
                }
            },
        }
    }

    if let Some(&unclosed) = open.last() {
        return Err(EvalError::UnbalancedParentheses { offset: tokens[unclosed].offset });
    }

    let (index, tier) = best.ok_or(EvalError::NoOperator { offset: tokens[p].offset })?;
    debug!(p, q, index, tier, operator = %tokens[index].text, "dominant operator");

    Ok(index)
}
