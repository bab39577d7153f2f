/// Lexing errors.
///
/// Defines the failures raised while turning the raw input line into tokens:
/// an unrecognized character sequence, a token that does not fit in a token
/// slot, or an input line that exceeds the configured maximum length.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains every failure the recursive evaluator can raise: empty or malformed
/// ranges, unbalanced parentheses, unknown registers, unmapped memory and
/// division by zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;

/// Any failure produced while evaluating one expression line.
///
/// Wraps the phase-specific errors so the caller gets exactly one error per
/// call, together with the byte offset it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The token stream could not be evaluated.
    Eval(EvalError),
}

impl ExprError {
    /// Returns the byte offset in the input line the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Eval(e) => e.offset(),
        }
    }

    /// Renders the input line with a caret under the failing position.
    ///
    /// The offset is clamped to the end of the line so errors reported at
    /// "end of input" still point just past the last character.
    ///
    /// # Example
    /// ```
    /// use dbgexpr::interpreter::machine::MachineSnapshot;
    ///
    /// let err = dbgexpr::evaluate("1 + #", &MachineSnapshot::new()).unwrap_err();
    /// assert_eq!(err.caret("1 + #"), "1 + #\n    ^");
    /// ```
    #[must_use]
    pub fn caret(&self, input: &str) -> String {
        let at = self.offset().min(input.len());
        format!("{input}\n{}^", " ".repeat(at))
    }
}

impl std::fmt::Display for ExprError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for ExprError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<EvalError> for ExprError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
