//! Strongly-typed numeric primitives for shapebench (zero-cost newtypes).
//!
//! - Linear measures are `Length`, surfaces are `Area`
//! - `Length * Length = Area`, never the other way around
//! - Raw `f64` only at construction boundaries

use std::fmt;
use std::ops::{Add, Mul};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A linear measure: width, height, radius or perimeter
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    /// Create a Length (const-friendly, unchecked).
    /// Use `try_positive` for user-provided dimensions.
    #[inline]
    pub const fn new(val: f64) -> Length {
        Length(val)
    }

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a strictly positive Length, the only kind that makes a sensible dimension
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Length::try_new(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Compare against another length with an absolute tolerance
    #[inline]
    pub fn approx_eq(self, other: Length, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Mul<Length> for f64 {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length { Length(self * rhs.0) }
}

/// Length * Length = Area
impl Mul for Length {
    type Output = Area;
    fn mul(self, rhs: Length) -> Area { Area(self.0 * rhs.0) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A surface measure
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Area(pub f64);

impl Area {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn approx_eq(self, other: Area, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl Mul<Area> for f64 {
    type Output = Area;
    fn mul(self, rhs: Area) -> Area { Area(self * rhs.0) }
}

// NOTE: Area / Length is intentionally NOT implemented.
// Nothing in the shape model needs to recover a dimension from an area.

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

/// Convenient alias
pub type PtIn = Point<Length>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length tests ====================

    #[test]
    fn length_try_new_valid() {
        assert!(Length::try_new(1.0).is_ok());
        assert!(Length::try_new(0.0).is_ok());
        assert!(Length::try_new(-1.0).is_ok());
    }

    #[test]
    fn length_try_new_rejects_nan() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn length_try_new_rejects_infinity() {
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Length::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_try_positive() {
        assert_eq!(Length::try_positive(2.5), Ok(Length(2.5)));
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-1.0), Err(NumericError::Negative));
        assert_eq!(Length::try_positive(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(3.0);
        let b = Length(2.0);

        assert_eq!(a + b, Length(5.0));
        assert_eq!(a * 2.0, Length(6.0));
        assert_eq!(2.0 * a, Length(6.0));
    }

    #[test]
    fn length_times_length_is_area() {
        assert_eq!(Length(3.0) * Length(4.0), Area(12.0));
    }

    #[test]
    fn length_approx_eq() {
        assert!(Length(1.0).approx_eq(Length(1.0 + 1e-12), 1e-9));
        assert!(!Length(1.0).approx_eq(Length(1.1), 1e-9));
    }

    #[test]
    fn area_scales_by_a_factor() {
        assert_eq!(0.5 * Area(12.0), Area(6.0));
    }
}
