use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::UnaryOperator,
    util::num::{address_from_word, from_bool, is_true},
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation on a machine word.
    ///
    /// Supported operators:
    /// - `Plus`: identity.
    /// - `Negate`: wrapping negation, so `-(0x8000000000000000)` stays put.
    /// - `Not`: `1` for zero, `0` for anything else.
    /// - `Deref`: reads the machine word at the operand, taken as an unsigned
    ///   address.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Operand.
    /// - `offset`: Source offset of the operator for error reporting.
    ///
    /// # Errors
    /// `BadAddress` if the machine cannot read the dereferenced address.
    pub fn eval_unary(&self, op: UnaryOperator, value: i64, offset: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => Ok(value.wrapping_neg()),
            UnaryOperator::Not => Ok(from_bool(!is_true(value))),
            UnaryOperator::Deref => {
                let addr = address_from_word(value);
                self.machine
                    .read_memory(addr)
                    .ok_or(EvalError::BadAddress { addr, offset })
            },
        }
    }
}
