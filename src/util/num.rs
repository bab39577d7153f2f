use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Parses literal digits in `radix` into a signed machine word.
///
/// The digits are read as an unsigned 64-bit value and reinterpreted as two's
/// complement, the way a register holds them: `ffffffffffffffff` in base 16
/// is `-1`.
///
/// ## Errors
/// Returns `LiteralTooLarge` if the value does not fit in 64 bits or the
/// digits are not valid in `radix`.
///
/// ## Parameters
/// - `digits`: The literal without any radix prefix.
/// - `radix`: 10 or 16.
/// - `offset`: Source offset for error reporting.
///
/// ## Example
/// ```
/// use dbgexpr::{error::EvalError, util::num::parse_word};
///
/// assert_eq!(parse_word("1F", 16, 0).unwrap(), 31);
/// assert_eq!(parse_word("ffffffffffffffff", 16, 0).unwrap(), -1);
/// assert!(matches!(parse_word("18446744073709551616", 10, 3),
///                  Err(EvalError::LiteralTooLarge { offset: 3 })));
/// ```
pub fn parse_word(digits: &str, radix: u32, offset: usize) -> EvalResult<i64> {
    u64::from_str_radix(digits, radix).map(word_from_bits)
                                      .map_err(|_| EvalError::LiteralTooLarge { offset })
}

/// Reinterprets 64 raw bits as a signed machine word.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn word_from_bits(bits: u64) -> i64 {
    bits as i64
}

/// Reinterprets a signed machine word as an unsigned address.
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub const fn address_from_word(word: i64) -> u64 {
    word as u64
}

/// Converts a truth value into the machine's `1`/`0` convention.
#[must_use]
pub fn from_bool(b: bool) -> i64 {
    i64::from(b)
}

/// Any nonzero word is true.
#[must_use]
pub const fn is_true(word: i64) -> bool {
    word != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_and_hex_digits() {
        assert_eq!(parse_word("0", 10, 0), Ok(0));
        assert_eq!(parse_word("42", 10, 0), Ok(42));
        assert_eq!(parse_word("deadBEEF", 16, 0), Ok(0xdead_beef));
    }

    #[test]
    fn full_width_values_wrap_to_negative() {
        assert_eq!(parse_word("18446744073709551615", 10, 0), Ok(-1));
        assert_eq!(parse_word("8000000000000000", 16, 0), Ok(i64::MIN));
    }

    #[test]
    fn overflow_is_reported_at_offset() {
        assert_eq!(parse_word("10000000000000000", 16, 7),
                   Err(EvalError::LiteralTooLarge { offset: 7 }));
    }

    #[test]
    fn address_round_trip() {
        assert_eq!(address_from_word(-1), u64::MAX);
        assert_eq!(word_from_bits(address_from_word(-12345)), -12345);
    }
}
