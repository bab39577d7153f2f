/// Machine-word helpers.
///
/// This module provides the conversions between literal text, unsigned
/// addresses and signed machine words, plus the `1`/`0` truth convention used
/// by comparisons and logical operators.
pub mod num;
