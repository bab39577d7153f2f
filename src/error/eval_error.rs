#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token stream.
pub enum EvalError {
    /// A range with no tokens had to be evaluated, e.g. `1 +` or an empty line.
    EmptyRange {
        /// Byte offset where an operand was expected.
        offset: usize,
    },
    /// A single token that is neither a literal nor a register.
    NotAValue {
        /// Text of the offending token.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// A range of several tokens without an operator to split it, e.g. `3 4`.
    NoOperator {
        /// Byte offset of the first token of the range.
        offset: usize,
    },
    /// A register name the machine does not know.
    UnknownRegister {
        /// The register name, including its `$` sigil.
        name:   String,
        /// Byte offset of the register token.
        offset: usize,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// A stray `)` or an unclosed `(`.
    UnbalancedParentheses {
        /// Byte offset of the offending parenthesis.
        offset: usize,
    },
    /// A numeric literal does not fit in a 64-bit machine word.
    LiteralTooLarge {
        /// Byte offset of the literal.
        offset: usize,
    },
    /// A dereference of an address the machine has no memory for.
    BadAddress {
        /// The address that was read.
        addr:   u64,
        /// Byte offset of the `*` operator.
        offset: usize,
    },
}

impl EvalError {
    /// Byte offset in the input the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::EmptyRange { offset }
            | Self::NotAValue { offset, .. }
            | Self::NoOperator { offset }
            | Self::UnknownRegister { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::UnbalancedParentheses { offset }
            | Self::LiteralTooLarge { offset }
            | Self::BadAddress { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRange { offset } => {
                write!(f, "Error at position {offset}: Bad expression, operand missing.")
            },
            Self::NotAValue { token, offset } => {
                write!(f, "Error at position {offset}: '{token}' is not a value.")
            },
            Self::NoOperator { offset } => write!(f,
                                                  "Error at position {offset}: Expected an operator between operands."),
            Self::UnknownRegister { name, offset } => {
                write!(f, "Error at position {offset}: Unknown register '{name}'.")
            },
            Self::DivisionByZero { offset } => {
                write!(f, "Error at position {offset}: Division by zero.")
            },
            Self::UnbalancedParentheses { offset } => {
                write!(f, "Error at position {offset}: Unbalanced parentheses.")
            },
            Self::LiteralTooLarge { offset } => {
                write!(f, "Error at position {offset}: Literal is too large.")
            },
            Self::BadAddress { addr, offset } => write!(f,
                                                        "Error at position {offset}: Cannot read memory at {addr:#x}."),
        }
    }
}

impl std::error::Error for EvalError {}
