/// The evaluator module reduces token ranges to machine words.
///
/// The evaluator strips redundant parentheses, splits each range at its
/// dominant operator and recurses into the operands. Registers and memory are
/// read through the machine-state interface when an operand needs them.
///
/// # Responsibilities
/// - Evaluates token ranges with wrapping 64-bit arithmetic.
/// - Validates parenthesis nesting and operator placement.
/// - Reports errors such as division by zero or unknown registers together
///   with the offending source offset.
pub mod evaluator;
/// The lexer module tokenizes an expression line.
///
/// The lexer applies an ordered table of anchored patterns at each position of
/// the line and produces a stream of tokens, each tagged with its kind, text
/// and source offset.
///
/// # Responsibilities
/// - Defines the lexical grammar as a compile-once rule table.
/// - Converts the input line into a per-call token stream.
/// - Reports the exact position of unrecognized input.
pub mod lexer;
/// The machine module defines how expressions see the emulated CPU.
///
/// Declares the read-only register and memory lookup interface and a
/// snapshot implementation of it.
pub mod machine;
