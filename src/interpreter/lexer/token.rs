use std::ops::Index;

/// Largest number of bytes a single token can hold.
///
/// A `0x` prefix plus sixteen hex digits fits comfortably; anything longer is
/// rejected by the lexer instead of being cut short.
pub const TOKEN_CAPACITY: usize = 32;

/// The closed set of lexical classes.
///
/// `Whitespace` is produced by the rule table but never stored in a
/// [`TokenStream`]. `EndMarker` is never produced by the rule table at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Decimal literal, such as `42`.
    Number,
    /// Hexadecimal literal with a `0x`/`0X` prefix, such as `0x1F`.
    HexNumber,
    /// Register reference with a `$` sigil, such as `$pc`.
    Register,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<=`
    Leq,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,
    /// Spaces and tabs.
    Whitespace,
    /// End of input.
    EndMarker,
}

impl TokenKind {
    /// Returns `true` for unary or binary operator kinds.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Eq
                 | Self::NotEq
                 | Self::Leq
                 | Self::And
                 | Self::Or
                 | Self::Not)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Number => "number",
            Self::HexNumber => "hex number",
            Self::Register => "register",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Leq => "<=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
            Self::Whitespace => "whitespace",
            Self::EndMarker => "end of input",
        };
        write!(f, "{s}")
    }
}

/// A classified piece of the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The lexical class.
    pub kind:   TokenKind,
    /// The matched source text, at most [`TOKEN_CAPACITY`] bytes.
    pub text:   String,
    /// Byte offset of the first character in the input line.
    pub offset: usize,
}

/// The tokens of one input line, in source order.
///
/// Produced once by the lexer and only read afterwards. Each evaluation owns
/// its own stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// Length of the source line, used to point at "end of input".
    end:    usize,
}

impl TokenStream {
    pub(crate) const fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self { tokens, end }
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if lexing produced no tokens, e.g. for a blank line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The token kinds in source order.
    #[must_use]
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Byte offset of token `index`, or the end of the line when `index` is
    /// past the last token.
    ///
    /// Used to place diagnostics for ranges that turned out to be empty.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> usize {
        self.tokens.get(index).map_or(self.end, |t| t.offset)
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type IntoIter = std::slice::Iter<'a, Token>;
    type Item = &'a Token;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
