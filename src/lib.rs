//! shapebench: a closed set of 2D shapes plus the fixtures that test them.
//!
//! ```
//! use shapebench::{Shape, ShapeEnum, Area, Length};
//!
//! let rect = ShapeEnum::rectangle(3.0, 4.0);
//! assert_eq!(rect.area(), Area(12.0));
//! assert_eq!(rect.perimeter(), Length(14.0));
//! assert_eq!(ShapeEnum::square(4.0).area(), ShapeEnum::rectangle(4.0, 4.0).area());
//! ```

pub mod arith;
pub mod defaults;
pub mod errors;
pub mod fixtures;
pub mod lifecycle;
pub mod log;
pub mod shapes;
pub mod todos;
pub mod types;

pub use errors::{ArithError, FixtureError, ServiceError};
pub use fixtures::{FixtureScope, FixtureValue, Fixtures, GroupFixture, ShapeSet};
pub use lifecycle::{EventLog, LifecycleEvent, LifecycleObserver, Tracked};
pub use shapes::{CircleShape, RectangleShape, Shape, ShapeEnum, ShapeKind};
pub use types::{Area, Length, NumericError, Point, PtIn};
