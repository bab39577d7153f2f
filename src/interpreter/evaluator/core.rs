use tracing::trace;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            balance::{check_nesting, is_fully_parenthesized},
            dominant::{find_dominant_operator, operator_at},
        },
        lexer::token::{TokenKind, TokenStream},
        machine::MachineState,
    },
    operator::Operator,
    util::num::parse_word,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a machine word or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates token ranges of one stream against one machine.
///
/// ## Usage
///
/// An `Evaluator` borrows a [`TokenStream`] and a [`MachineState`] for the
/// duration of one evaluation. It never modifies either; registers and memory
/// are only read.
pub struct Evaluator<'a> {
    /// Tokens of the expression being evaluated.
    pub tokens:  &'a TokenStream,
    /// Source of register and memory values.
    pub machine: &'a dyn MachineState,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator over `tokens`, resolving registers and memory
    /// through `machine`.
    #[must_use]
    pub fn new(tokens: &'a TokenStream, machine: &'a dyn MachineState) -> Self {
        Self { tokens, machine }
    }

    /// Evaluates the whole stream.
    ///
    /// Parenthesis nesting is validated once up front so that mismatches are
    /// reported at the offending parenthesis rather than as a missing
    /// operator somewhere inside.
    ///
    /// # Errors
    /// - `UnbalancedParentheses` for a stray `)` or an unclosed `(`.
    /// - `EmptyRange` for a stream without tokens.
    /// - Any error raised by [`Evaluator::eval`].
    pub fn eval_all(&self) -> EvalResult<i64> {
        check_nesting(self.tokens)?;

        if self.tokens.is_empty() {
            return Err(EvalError::EmptyRange { offset: self.tokens.offset_of(0) });
        }

        self.eval(0, self.tokens.len() - 1)
    }

    /// Evaluates the inclusive token range `[p, q]`.
    ///
    /// - An empty range (`p > q`) is a malformed expression, e.g. the missing
    ///   right operand in `1 +`.
    /// - A single token must be a literal or a register.
    /// - A range wrapped in one pair of parentheses is evaluated without them.
    ///   This is checked before the operator search so `(1+2)` is never split
    ///   at its inner `+`.
    /// - Otherwise the range is split at its dominant operator. A prefix
    ///   operator is only valid as the first token of the range.
    ///
    /// Any failure in a sub-range aborts the whole evaluation.
    ///
    /// # Parameters
    /// - `p`, `q`: Inclusive bounds of the range.
    ///
    /// # Returns
    /// The value of the range as a signed machine word.
    pub fn eval(&self, p: usize, q: usize) -> EvalResult<i64> {
        if p > q {
            return Err(EvalError::EmptyRange { offset: self.tokens.offset_of(p) });
        }
        if p == q {
            return self.eval_operand(p);
        }
        if is_fully_parenthesized(self.tokens, p, q) {
            return self.eval(p + 1, q - 1);
        }

        let index = find_dominant_operator(self.tokens, p, q)?;
        let offset = self.tokens[index].offset;
        trace!(p, q, index, "splitting range");

        match operator_at(self.tokens, p, index) {
            Some(Operator::Unary(op)) => {
                if index != p {
                    return Err(EvalError::NoOperator { offset });
                }
                let operand = self.eval(index + 1, q)?;
                self.eval_unary(op, operand, offset)
            },
            Some(Operator::Binary(op)) => {
                let left = self.eval(p, index - 1)?;
                let right = self.eval(index + 1, q)?;
                Self::eval_binary(op, left, right, offset)
            },
            None => Err(EvalError::NoOperator { offset }),
        }
    }

    /// Evaluates a single-token range.
    ///
    /// Decimal and hex literals are parsed as machine words. Registers are
    /// looked up on the machine at this moment.
    ///
    /// # Errors
    /// - `LiteralTooLarge` for literals wider than 64 bits.
    /// - `UnknownRegister` for names the machine does not have.
    /// - `NotAValue` for operators and parentheses.
    pub fn eval_operand(&self, index: usize) -> EvalResult<i64> {
        let token = &self.tokens[index];

        match token.kind {
            TokenKind::Number => parse_word(&token.text, 10, token.offset),
            TokenKind::HexNumber => parse_word(&token.text[2..], 16, token.offset),
            TokenKind::Register => {
                self.machine
                    .lookup_register(&token.text)
                    .ok_or_else(|| EvalError::UnknownRegister { name:   token.text.clone(),
                                                                offset: token.offset, })
            },
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Leq
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Not
            | TokenKind::Whitespace
            | TokenKind::EndMarker => Err(EvalError::NotAValue { token:  token.text.clone(),
                                                                 offset: token.offset, }),
        }
    }
}

/// Evaluates the inclusive range `[p, q]` of `tokens`.
///
/// # Errors
/// See [`Evaluator::eval`].
///
/// # Example
/// ```
/// use dbgexpr::interpreter::{evaluator::core::evaluate, lexer::core::tokenize,
///                            machine::MachineSnapshot};
///
/// let tokens = tokenize("(1+2)*3").unwrap();
/// let machine = MachineSnapshot::new();
/// assert_eq!(evaluate(&tokens, 0, tokens.len() - 1, &machine).unwrap(), 9);
/// assert_eq!(evaluate(&tokens, 1, 3, &machine).unwrap(), 3);
/// ```
pub fn evaluate(tokens: &TokenStream,
                p: usize,
                q: usize,
                machine: &dyn MachineState)
                -> EvalResult<i64> {
    Evaluator::new(tokens, machine).eval(p, q)
}
