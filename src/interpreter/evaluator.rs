/// Core evaluation logic.
///
/// Contains the recursive range evaluator, the evaluation entry points and the
/// handling of single-token operands.
pub mod core;

/// Parenthesis checks.
///
/// Decides whether a range is wrapped in one redundant pair of parentheses and
/// validates nesting across a whole stream.
pub mod balance;

/// Dominant operator search.
///
/// Finds the operator that splits a range into its operands.
pub mod dominant;

/// Binary operator evaluation logic.
///
/// Wrapping arithmetic, truncating division, comparisons and logical
/// connectives on machine words.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Identity, negation, logical NOT and memory dereference.
pub mod unary;
