//! Shape types for shapebench
//!
//! Each shape is its own type that knows how to:
//! - Calculate its area
//! - Calculate its perimeter
//! - Report which kind of shape it is
//!
//! The set of shapes is closed: `ShapeEnum` wraps every variant and
//! dispatches statically. A square is not a variant of its own, only a
//! rectangle built with equal sides.

use std::f64::consts::PI;
use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{Area, Length, NumericError, PtIn};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// Surface enclosed by the shape
    fn area(&self) -> Area;

    /// Length of the shape's outline
    fn perimeter(&self) -> Length;

    /// The center point of the shape.
    ///
    /// Shapes carry no position, so no variant can answer this; it always
    /// returns `None` and callers must not rely on it.
    fn center(&self) -> Option<PtIn> {
        None
    }

    /// Which kind of shape this is, judged from its current dimensions
    fn kind(&self) -> ShapeKind;

    /// Whether this shape is "round" (has no corners)
    fn is_round(&self) -> bool {
        false
    }
}

/// Names the shape variants for logging and lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Circle,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// A rectangle shape
///
/// Dimensions are not validated by `new`; zero or negative values are
/// accepted and simply give meaningless areas. Use `try_new` for
/// user-provided values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleShape {
    pub width: Length,
    pub height: Length,
}

impl RectangleShape {
    pub fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// A rectangle with both sides equal to `side`
    pub fn square(side: Length) -> Self {
        Self::new(side, side)
    }

    /// Create a rectangle, rejecting NaN, infinite, zero and negative sides
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Self::new(Length::try_positive(width)?, Length::try_positive(height)?))
    }

    pub fn try_square(side: f64) -> Result<Self, NumericError> {
        Ok(Self::square(Length::try_positive(side)?))
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl Shape for RectangleShape {
    fn area(&self) -> Area {
        self.width * self.height
    }

    fn perimeter(&self) -> Length {
        2.0 * (self.width + self.height)
    }

    fn kind(&self) -> ShapeKind {
        if self.is_square() {
            ShapeKind::Square
        } else {
            ShapeKind::Rectangle
        }
    }
}

impl fmt::Display for RectangleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_square() {
            write!(f, "square {}", self.width)
        } else {
            write!(f, "rectangle {}x{}", self.width, self.height)
        }
    }
}

/// A circle shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleShape {
    pub radius: Length,
}

impl CircleShape {
    pub fn new(radius: Length) -> Self {
        Self { radius }
    }

    /// Create a circle, rejecting NaN, infinite, zero and negative radii
    pub fn try_new(radius: f64) -> Result<Self, NumericError> {
        Ok(Self::new(Length::try_positive(radius)?))
    }
}

impl Shape for CircleShape {
    fn area(&self) -> Area {
        PI * (self.radius * self.radius)
    }

    fn perimeter(&self) -> Length {
        2.0 * PI * self.radius
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn is_round(&self) -> bool {
        true
    }
}

impl fmt::Display for CircleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle r={}", self.radius)
    }
}

// ============================================================================
// Shape Enum
// ============================================================================

/// A shape enum wrapping all shape types
///
/// This provides uniform storage while each variant holds shape-specific
/// dimensions. `From<RectangleShape>` and `From<CircleShape>` are derived
/// by `enum_dispatch`.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Rectangle(RectangleShape),
    Circle(CircleShape),
}

impl ShapeEnum {
    pub fn rectangle(width: f64, height: f64) -> Self {
        RectangleShape::new(Length(width), Length(height)).into()
    }

    /// A rectangle with equal sides
    pub fn square(side: f64) -> Self {
        RectangleShape::square(Length(side)).into()
    }

    pub fn circle(radius: f64) -> Self {
        CircleShape::new(Length(radius)).into()
    }

    pub fn as_rectangle(&self) -> Option<&RectangleShape> {
        match self {
            ShapeEnum::Rectangle(r) => Some(r),
            ShapeEnum::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&CircleShape> {
        match self {
            ShapeEnum::Circle(c) => Some(c),
            ShapeEnum::Rectangle(_) => None,
        }
    }
}

impl fmt::Display for ShapeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeEnum::Rectangle(r) => fmt::Display::fmt(r, f),
            ShapeEnum::Circle(c) => fmt::Display::fmt(c, f),
        }
    }
}
