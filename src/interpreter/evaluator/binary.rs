use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    operator::BinaryOperator,
    util::num::{from_bool, is_true},
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two machine words.
    ///
    /// Arithmetic wraps on overflow like the emulated CPU's registers do.
    /// Division truncates toward zero. Comparisons and logical connectives
    /// yield `1` or `0`, treating any nonzero operand as true. Both operands
    /// of `&&` and `||` have already been evaluated by the caller.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Source offset of the operator for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use dbgexpr::{interpreter::evaluator::core::Evaluator, operator::BinaryOperator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, -7, 2, 0).unwrap(), -3);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::And, 4, 9, 0).unwrap(), 1);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 1, 0, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       offset: usize)
                       -> EvalResult<i64> {
        use BinaryOperator::{Add, And, Div, Equal, LessEqual, Mul, NotEqual, Or, Sub};

        Ok(match op {
               Add => left.wrapping_add(right),
               Sub => left.wrapping_sub(right),
               Mul => left.wrapping_mul(right),
               Div => {
                   if right == 0 {
                       return Err(EvalError::DivisionByZero { offset });
                   }
                   left.wrapping_div(right)
               },
               Equal => from_bool(left == right),
               NotEqual => from_bool(left != right),
               LessEqual => from_bool(left <= right),
               And => from_bool(is_true(left) && is_true(right)),
               Or => from_bool(is_true(left) || is_true(right)),
           })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: BinaryOperator, left: i64, right: i64) -> i64 {
        Evaluator::eval_binary(op, left, right, 0).unwrap()
    }

    #[test]
    fn arithmetic_wraps() {
        assert_eq!(apply(BinaryOperator::Add, i64::MAX, 1), i64::MIN);
        assert_eq!(apply(BinaryOperator::Sub, i64::MIN, 1), i64::MAX);
        assert_eq!(apply(BinaryOperator::Mul, i64::MAX, 2), -2);
        assert_eq!(apply(BinaryOperator::Div, i64::MIN, -1), i64::MIN);
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(apply(BinaryOperator::Div, 10, 3), 3);
        assert_eq!(apply(BinaryOperator::Div, -10, 3), -3);
        assert_eq!(apply(BinaryOperator::Div, 10, -3), -3);
    }

    #[test]
    fn division_by_zero_reports_operator() {
        assert_eq!(Evaluator::eval_binary(BinaryOperator::Div, 10, 0, 2),
                   Err(EvalError::DivisionByZero { offset: 2 }));
    }

    #[test]
    fn comparisons_yield_one_or_zero() {
        assert_eq!(apply(BinaryOperator::Equal, 3, 3), 1);
        assert_eq!(apply(BinaryOperator::NotEqual, 3, 3), 0);
        assert_eq!(apply(BinaryOperator::LessEqual, -1, 0), 1);
        assert_eq!(apply(BinaryOperator::LessEqual, 1, 0), 0);
    }

    #[test]
    fn logic_treats_nonzero_as_true() {
        assert_eq!(apply(BinaryOperator::And, -5, 2), 1);
        assert_eq!(apply(BinaryOperator::And, 0, 2), 0);
        assert_eq!(apply(BinaryOperator::Or, 0, -1), 1);
        assert_eq!(apply(BinaryOperator::Or, 0, 0), 0);
    }
}
