/// Lexer driver.
///
/// Walks the input line and applies the rule table at each offset.
pub mod core;

/// The ordered rule table.
///
/// Declares the lexical grammar as anchored patterns in priority order and
/// compiles them once per process.
pub mod rules;

/// Token model.
///
/// Token kinds, tokens and the per-call token stream.
pub mod token;
