/// Default upper bound on the length of an expression line, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 512;

/// Limits applied to each evaluation.
///
/// Recursion depth of the evaluator is bounded by the number of tokens, which
/// is bounded by the line length, so `max_input_len` also caps stack use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Longest accepted input line, in bytes.
    pub max_input_len: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_input_len: DEFAULT_MAX_INPUT_LEN }
    }
}
