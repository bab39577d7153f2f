//! The ordered rule table that defines the lexical grammar.
//!
//! Rules are tried in declaration order at every offset and the first one that
//! matches wins, so the order is part of the grammar:
//!
//! 1. whitespace, discarded by the lexer
//! 2. hex literals, before decimal literals so `0x1F` is not split into `0`
//!    and `x1F`
//! 3. decimal literals
//! 4. registers
//! 5. two-character operators, each before any single-character prefix of
//!    itself (`!=` before `!`)
//! 6. single-character operators and parentheses

use once_cell::sync::Lazy;
use regex::Regex;

use crate::interpreter::lexer::token::TokenKind;

/// Rule patterns paired with the token kind they produce, in priority order.
///
/// Every pattern is anchored with `^` so it can only match at the current
/// offset, never somewhere further along the line.
pub const RULES: &[(&str, TokenKind)] = &[(r"^[ \t]+", TokenKind::Whitespace),
                                          (r"^0[xX][0-9a-fA-F]+", TokenKind::HexNumber),
                                          (r"^[0-9]+", TokenKind::Number),
                                          (r"^\$[a-zA-Z0-9_]+", TokenKind::Register),
                                          (r"^==", TokenKind::Eq),
                                          (r"^!=", TokenKind::NotEq),
                                          (r"^<=", TokenKind::Leq),
                                          (r"^&&", TokenKind::And),
                                          (r"^\|\|", TokenKind::Or),
                                          (r"^\+", TokenKind::Plus),
                                          (r"^-", TokenKind::Minus),
                                          (r"^\*", TokenKind::Star),
                                          (r"^/", TokenKind::Slash),
                                          (r"^\(", TokenKind::LParen),
                                          (r"^\)", TokenKind::RParen),
                                          (r"^!", TokenKind::Not)];

/// The process-wide compiled rule table.
///
/// Compiled on first use and shared read-only by every lexer run afterwards.
pub static RULE_TABLE: Lazy<RuleTable> =
    Lazy::new(|| RuleTable::compile(RULES).expect("built-in lexer rules are valid regexes"));

/// A compiled pattern and the kind of token it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The anchored pattern.
    pub pattern: Regex,
    /// Kind assigned to text matched by `pattern`.
    pub kind:    TokenKind,
}

/// A successful rule match at one offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    /// Position of the winning rule in the table.
    pub rule: usize,
    /// Kind of the winning rule.
    pub kind: TokenKind,
    /// Number of bytes matched.
    pub len:  usize,
}

/// Ordered list of compiled rules. Earlier rules take priority.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Compiles `rules` in the given order.
    ///
    /// # Errors
    /// Returns the regex error of the first pattern that fails to compile.
    pub fn compile(rules: &[(&str, TokenKind)]) -> Result<Self, regex::Error> {
        let rules = rules.iter()
                         .map(|&(pattern, kind)| Regex::new(pattern).map(|pattern| Rule { pattern, kind }))
                         .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// The compiled rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds the first rule that matches at the very start of `rest`.
    ///
    /// Each pattern matches as much as it can, but the choice between rules is
    /// strictly by table order, not by match length. Empty matches are
    /// ignored.
    ///
    /// # Example
    /// ```
    /// use dbgexpr::interpreter::lexer::{rules::RULE_TABLE, token::TokenKind};
    ///
    /// let m = RULE_TABLE.match_at("0x1F+2").unwrap();
    /// assert_eq!(m.kind, TokenKind::HexNumber);
    /// assert_eq!(m.len, 4);
    /// ```
    #[must_use]
    pub fn match_at(&self, rest: &str) -> Option<RuleMatch> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(m) = rule.pattern.find(rest)
               && m.start() == 0
               && !m.is_empty()
            {
                return Some(RuleMatch { rule: index,
                                        kind: rule.kind,
                                        len:  m.end(), });
            }
        }

        None
    }
}
