//! # dbgexpr
//!
//! dbgexpr evaluates the expressions typed at a debugger prompt for an
//! emulated CPU. An expression combines decimal and hex literals, `$`-prefixed
//! registers and memory reads with integer arithmetic, comparisons and logical
//! operators, and evaluates to a single signed 64-bit machine word.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::EvalConfig,
    error::ExprError,
    interpreter::{evaluator::core::Evaluator, lexer::core::tokenize_with, machine::MachineState},
};

/// Evaluation limits.
///
/// Holds the settings that bound the work a single evaluation may do, such as
/// the longest accepted input line.
pub mod config;
/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression. Every error carries the byte offset it refers to
/// so a caller can point at the problem in the input line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches source offsets for caret diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together lexing, evaluation and machine access.
///
/// # Responsibilities
/// - Turns input lines into token streams.
/// - Evaluates token streams against machine state.
/// - Defines the read-only machine-state interface.
pub mod interpreter;
/// Operator classification.
///
/// Maps operator tokens to unary or binary operators depending on their
/// position and assigns each operator its binding tier.
pub mod operator;
/// Machine-word helpers.
///
/// Literal parsing, signed/unsigned reinterpretation and the `1`/`0` truth
/// convention.
pub mod util;

/// Evaluates one expression line with the default limits.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or evaluated.
///
/// # Examples
/// ```
/// use dbgexpr::{evaluate, interpreter::machine::MachineSnapshot};
///
/// let machine = MachineSnapshot::new().with_register("$a0", 5);
/// assert_eq!(evaluate("$a0 + 1", &machine).unwrap(), 6);
/// assert_eq!(evaluate("0x10 * (2 + 1)", &machine).unwrap(), 48);
///
/// // Unknown registers are reported, not guessed.
/// assert!(evaluate("$a7", &machine).is_err());
/// ```
pub fn evaluate(input: &str, machine: &dyn MachineState) -> Result<i64, ExprError> {
    evaluate_with(input, machine, &EvalConfig::default())
}

/// Evaluates one expression line.
///
/// The line is fully tokenized before evaluation starts. Tokens are owned by
/// this call alone and dropped when it returns.
///
/// # Errors
/// Returns exactly one error: the first lexing or evaluation failure.
pub fn evaluate_with(input: &str,
                     machine: &dyn MachineState,
                     config: &EvalConfig)
                     -> Result<i64, ExprError> {
    let tokens = tokenize_with(input, config)?;
    let value = Evaluator::new(&tokens, machine).eval_all()?;

    debug!(input, value, "evaluated expression");
    Ok(value)
}
