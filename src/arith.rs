//! Integer arithmetic helpers
//!
//! Each operation logs the equation it evaluated. Results that do not fit
//! in an `i64` are reported as `ArithError::Overflow` rather than wrapping.

use crate::errors::ArithError;

pub fn add(a: i64, b: i64) -> Result<i64, ArithError> {
    let result = a.checked_add(b).ok_or(ArithError::Overflow { op: '+', a, b })?;
    crate::log::debug!("{a} + {b} = {result}");
    Ok(result)
}

pub fn subtract(a: i64, b: i64) -> Result<i64, ArithError> {
    let result = a.checked_sub(b).ok_or(ArithError::Overflow { op: '-', a, b })?;
    crate::log::debug!("{a} - {b} = {result}");
    Ok(result)
}

pub fn multiply(a: i64, b: i64) -> Result<i64, ArithError> {
    let result = a.checked_mul(b).ok_or(ArithError::Overflow { op: '*', a, b })?;
    crate::log::debug!("{a} * {b} = {result}");
    Ok(result)
}

/// True division; the quotient is not truncated.
///
/// Operands are converted to `f64` first, so magnitudes above 2^53 lose
/// their low bits: `divide(i64::MAX, 1)` is `9223372036854775808.0`.
pub fn divide(a: i64, b: i64) -> Result<f64, ArithError> {
    if b == 0 {
        crate::log::warn!(dividend = a, "division by zero is not allowed");
        return Err(ArithError::DivisionByZero { dividend: a });
    }
    let result = a as f64 / b as f64;
    crate::log::debug!("{a} / {b} = {result}");
    Ok(result)
}
