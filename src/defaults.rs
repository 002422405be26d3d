//! Default dimensions and settings shared by fixtures, demos and tests

use crate::types::Length;

/// Rectangle collection, in insertion order: (width, height)
pub const RECTANGLE_DIMENSIONS: [(Length, Length); 3] = [
    (Length::new(1.0), Length::new(1.0)),
    (Length::new(3.0), Length::new(4.0)),
    (Length::new(10.0), Length::new(20.0)),
];

/// Circle collection radii, in insertion order
pub const CIRCLE_RADII: [Length; 3] = [Length::new(1.0), Length::new(5.0), Length::new(20.0)];

/// Absolute tolerance for floating-point comparisons of computed areas and perimeters
pub const TOLERANCE: f64 = 1e-9;

/// Value of the `is_debug` fixture unless overridden
pub const IS_DEBUG: bool = true;

pub const TODOS_URL: &str = "https://jsonplaceholder.typicode.com/todos";
