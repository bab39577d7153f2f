use crate::interpreter::lexer::token::TokenKind;

/// Binding tier shared by every prefix operator. Higher than any binary tier.
pub const UNARY_TIER: u8 = 7;

/// Represents a binary operator.
///
/// Binary operators include wrapping arithmetic, comparisons and logical
/// connectives. Comparisons and connectives produce `1` or `0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Logical or (`||`)
    Or,
    /// Logical and (`&&`)
    And,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
}

impl BinaryOperator {
    /// Maps a token kind to the binary operator it spells, if any.
    ///
    /// `!` has no binary form.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Or => Some(Self::Or),
            TokenKind::And => Some(Self::And),
            TokenKind::Eq => Some(Self::Equal),
            TokenKind::NotEq => Some(Self::NotEqual),
            TokenKind::Leq => Some(Self::LessEqual),
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            TokenKind::Number
            | TokenKind::HexNumber
            | TokenKind::Register
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Not
            | TokenKind::Whitespace
            | TokenKind::EndMarker => None,
        }
    }

    /// Precedence tier. Lower tiers bind more loosely.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::LessEqual => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div => 6,
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Wrapping negation (`-x`).
    Negate,
    /// Logical NOT (`!x`), producing `1` or `0`.
    Not,
    /// Memory read (`*addr`).
    Deref,
}

impl UnaryOperator {
    /// Maps a token kind to the prefix operator it spells, if any.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Plus),
            TokenKind::Minus => Some(Self::Negate),
            TokenKind::Not => Some(Self::Not),
            TokenKind::Star => Some(Self::Deref),
            _ => None,
        }
    }
}

/// An operator token classified by the position it appears in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Prefix operator.
    Unary(UnaryOperator),
    /// Infix operator.
    Binary(BinaryOperator),
}

impl Operator {
    /// Classifies a token as an operator.
    ///
    /// A token in unary position (first in its range, or right after another
    /// operator or `(`) is read as a prefix operator. `!` is always a prefix
    /// operator. Returns `None` for tokens that are not operators, and for
    /// `/`, `==`, `!=`, `<=`, `&&` and `||` in unary position, which have no
    /// prefix form.
    ///
    /// # Example
    /// ```
    /// use dbgexpr::{
    ///     interpreter::lexer::token::TokenKind,
    ///     operator::{BinaryOperator, Operator, UnaryOperator},
    /// };
    ///
    /// assert_eq!(Operator::classify(TokenKind::Minus, true),
    ///            Some(Operator::Unary(UnaryOperator::Negate)));
    /// assert_eq!(Operator::classify(TokenKind::Minus, false),
    ///            Some(Operator::Binary(BinaryOperator::Sub)));
    /// assert_eq!(Operator::classify(TokenKind::Slash, true), None);
    /// ```
    #[must_use]
    pub const fn classify(kind: TokenKind, unary_position: bool) -> Option<Self> {
        if unary_position || matches!(kind, TokenKind::Not) {
            match UnaryOperator::from_kind(kind) {
                Some(op) => Some(Self::Unary(op)),
                None => None,
            }
        } else {
            match BinaryOperator::from_kind(kind) {
                Some(op) => Some(Self::Binary(op)),
                None => None,
            }
        }
    }

    /// Precedence tier. Lower tiers bind more loosely.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Unary(_) => UNARY_TIER,
            Self::Binary(op) => op.tier(),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Equal, LessEqual, Mul, NotEqual, Or, Sub};
        let operator = match self {
            Or => "||",
            And => "&&",
            Equal => "==",
            NotEqual => "!=",
            LessEqual => "<=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
            Self::Deref => "*",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary(op) => write!(f, "unary {op}"),
            Self::Binary(op) => write!(f, "{op}"),
        }
    }
}
