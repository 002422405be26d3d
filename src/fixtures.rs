//! Reusable shape fixtures
//!
//! Two scopes are supported:
//! - per-scenario: a fresh collection is built for every request
//! - per-group: the collection is built once, shared through `Rc` by every
//!   scenario of the group, and torn down explicitly after the last one
//!
//! `Fixtures` resolves fixtures by name the way a test harness would inject
//! them into a scenario.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use crate::defaults;
use crate::errors::FixtureError;
use crate::lifecycle::{LifecycleObserver, Tracked, track_all};
use crate::shapes::{CircleShape, RectangleShape, ShapeEnum};

pub const RECTANGLE_COLLECTION: &str = "rectangle_collection";
pub const CIRCLE_COLLECTION: &str = "circle_collection";
pub const IS_DEBUG: &str = "is_debug";

const NAMES: [&str; 3] = [RECTANGLE_COLLECTION, CIRCLE_COLLECTION, IS_DEBUG];

/// A collection of tracked shapes handed to scenarios
pub type ShapeSet = Vec<Tracked<ShapeEnum>>;

/// How long a fixture value lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureScope {
    /// Rebuilt for every scenario that requests it
    Scenario,
    /// Built once and shared by every scenario of a group
    Group,
}

/// Unit, 3x4 and 10x20 rectangles, in that order
pub fn rectangle_collection() -> Vec<ShapeEnum> {
    defaults::RECTANGLE_DIMENSIONS
        .iter()
        .map(|&(w, h)| RectangleShape::new(w, h).into())
        .collect()
}

/// Circles of radius 1, 5 and 20, in that order
pub fn circle_collection() -> Vec<ShapeEnum> {
    defaults::CIRCLE_RADII
        .iter()
        .map(|&r| CircleShape::new(r).into())
        .collect()
}

// ============================================================================
// Group Fixture
// ============================================================================

/// A value built at most once per group and shared read-only
pub struct GroupFixture<T> {
    name: &'static str,
    value: OnceCell<Rc<T>>,
    build: Box<dyn Fn() -> T>,
    teardown: Option<Box<dyn Fn(T)>>,
}

impl<T> GroupFixture<T> {
    pub fn new(name: &'static str, build: impl Fn() -> T + 'static) -> Self {
        Self {
            name,
            value: OnceCell::new(),
            build: Box::new(build),
            teardown: None,
        }
    }

    /// Run `teardown` with the owned value when the group finishes
    pub fn with_teardown(mut self, teardown: impl Fn(T) + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the shared value, building it on first use
    pub fn get(&self) -> Rc<T> {
        let value = self.value.get_or_init(|| {
            crate::log::debug!(fixture = self.name, "building group fixture");
            Rc::new((self.build)())
        });
        Rc::clone(value)
    }

    pub fn is_built(&self) -> bool {
        self.value.get().is_some()
    }

    /// Number of handles handed out by `get` that are still alive
    pub fn holders(&self) -> usize {
        self.value.get().map_or(0, |v| Rc::strong_count(v) - 1)
    }

    /// End the group: run the teardown hook and forget the value.
    ///
    /// Fails without side effects while a scenario still holds a handle.
    /// A fixture that was never built finishes trivially. After a
    /// successful finish the next `get` builds a fresh value.
    pub fn finish(&mut self) -> Result<(), FixtureError> {
        let Some(shared) = self.value.take() else {
            return Ok(());
        };

        match Rc::try_unwrap(shared) {
            Ok(value) => {
                crate::log::debug!(fixture = self.name, "tearing down group fixture");
                match &self.teardown {
                    Some(teardown) => teardown(value),
                    None => drop(value),
                }
                Ok(())
            }
            Err(shared) => {
                let holders = Rc::strong_count(&shared) - 1;
                // Keep the value so a later finish can still run the teardown
                let _ = self.value.set(shared);
                Err(FixtureError::StillShared {
                    name: self.name.to_string(),
                    holders,
                })
            }
        }
    }
}

impl<T> Drop for GroupFixture<T> {
    fn drop(&mut self) {
        if self.is_built() {
            crate::log::warn!(fixture = self.name, "group fixture dropped without teardown");
            // A failed finish keeps the value, so the count is still readable
            if self.finish().is_err() {
                crate::log::warn!(
                    fixture = self.name,
                    holders = self.holders(),
                    "teardown skipped, handles outlive the group"
                );
            }
        }
    }
}

impl<T> fmt::Debug for GroupFixture<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupFixture")
            .field("name", &self.name)
            .field("built", &self.is_built())
            .field("holders", &self.holders())
            .finish()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// A resolved fixture, ready to be injected into a scenario
#[derive(Debug, Clone)]
pub enum FixtureValue {
    Shapes(Rc<ShapeSet>),
    Flag(bool),
}

/// Fixtures by name, with one shared circle group
pub struct Fixtures {
    observer: Option<Rc<dyn LifecycleObserver>>,
    debug: bool,
    circles: GroupFixture<ShapeSet>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            observer: None,
            debug: defaults::IS_DEBUG,
            circles: circle_group(None),
        }
    }

    /// Report the lifecycle of every fixture shape to `observer`
    pub fn with_observer(mut self, observer: Rc<dyn LifecycleObserver>) -> Self {
        self.circles = circle_group(Some(observer.clone()));
        self.observer = Some(observer);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Names of every registered fixture
    pub fn names() -> &'static [&'static str] {
        &NAMES
    }

    pub fn scope_of(name: &str) -> Option<FixtureScope> {
        match name {
            RECTANGLE_COLLECTION | IS_DEBUG => Some(FixtureScope::Scenario),
            CIRCLE_COLLECTION => Some(FixtureScope::Group),
            _ => None,
        }
    }

    /// Resolve a fixture by name
    pub fn request(&self, name: &str) -> Result<FixtureValue, FixtureError> {
        match name {
            RECTANGLE_COLLECTION => {
                let shapes = track_all(rectangle_collection(), self.observer.as_ref());
                Ok(FixtureValue::Shapes(Rc::new(shapes)))
            }
            CIRCLE_COLLECTION => Ok(FixtureValue::Shapes(self.circles.get())),
            IS_DEBUG => Ok(FixtureValue::Flag(self.debug)),
            _ => Err(FixtureError::Unknown {
                name: name.to_string(),
                suggestion: suggest(name).map(|s| format!("did you mean `{s}`?")),
            }),
        }
    }

    /// Resolve a fixture that must be a shape collection
    pub fn shapes(&self, name: &str) -> Result<Rc<ShapeSet>, FixtureError> {
        match self.request(name)? {
            FixtureValue::Shapes(shapes) => Ok(shapes),
            FixtureValue::Flag(_) => Err(FixtureError::WrongKind {
                name: name.to_string(),
                expected: "shape collection",
            }),
        }
    }

    /// Resolve a fixture that must be a flag
    pub fn flag(&self, name: &str) -> Result<bool, FixtureError> {
        match self.request(name)? {
            FixtureValue::Flag(flag) => Ok(flag),
            FixtureValue::Shapes(_) => Err(FixtureError::WrongKind {
                name: name.to_string(),
                expected: "flag",
            }),
        }
    }

    /// The shared circle group, for harnesses that manage it directly
    pub fn circle_group(&self) -> &GroupFixture<ShapeSet> {
        &self.circles
    }

    /// End the current group, tearing down every group-scoped fixture
    pub fn teardown(&mut self) -> Result<(), FixtureError> {
        self.circles.finish()
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Fixtures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixtures")
            .field("observed", &self.observer.is_some())
            .field("debug", &self.debug)
            .field("circles", &self.circles)
            .finish()
    }
}

fn circle_group(observer: Option<Rc<dyn LifecycleObserver>>) -> GroupFixture<ShapeSet> {
    GroupFixture::new(CIRCLE_COLLECTION, move || {
        track_all(circle_collection(), observer.as_ref())
    })
    .with_teardown(|circles| {
        crate::log::debug!(count = circles.len(), "releasing circle collection");
        drop(circles);
    })
}

/// Shortest input worth matching inside a registered name
const MIN_SUGGEST_LEN: usize = 3;

/// Closest registered name, matched on prefixes and substrings
fn suggest(name: &str) -> Option<&'static str> {
    if name.len() < MIN_SUGGEST_LEN {
        return None;
    }
    NAMES.iter().copied().find(|&candidate| {
        let stem = candidate.split('_').next().unwrap_or(candidate);
        candidate.starts_with(name) || name.starts_with(stem) || candidate.contains(name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::EventLog;
    use crate::shapes::Shape;
    use crate::types::{Area, Length};

    #[test]
    fn rectangle_collection_is_fixed_and_ordered() {
        let rects = rectangle_collection();
        let dims: Vec<(f64, f64)> = rects
            .iter()
            .filter_map(ShapeEnum::as_rectangle)
            .map(|r| (r.width.raw(), r.height.raw()))
            .collect();
        assert_eq!(dims, vec![(1.0, 1.0), (3.0, 4.0), (10.0, 20.0)]);
        assert_eq!(rectangle_collection(), rects);
    }

    #[test]
    fn circle_collection_is_fixed_and_ordered() {
        let radii: Vec<Length> = circle_collection()
            .iter()
            .filter_map(ShapeEnum::as_circle)
            .map(|c| c.radius)
            .collect();
        assert_eq!(radii, vec![Length(1.0), Length(5.0), Length(20.0)]);
    }

    #[test]
    fn scenario_fixture_is_rebuilt_per_request() {
        let fixtures = Fixtures::new();
        let first = fixtures.shapes(RECTANGLE_COLLECTION).unwrap();
        let second = fixtures.shapes(RECTANGLE_COLLECTION).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(first[1].area(), Area(12.0));
    }

    #[test]
    fn group_fixture_is_shared() {
        let fixtures = Fixtures::new();
        let first = fixtures.shapes(CIRCLE_COLLECTION).unwrap();
        let second = fixtures.shapes(CIRCLE_COLLECTION).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(fixtures.circle_group().holders(), 2);
    }

    #[test]
    fn group_fixture_builds_lazily_and_once() {
        let builds = Rc::new(std::cell::Cell::new(0));
        let counter = builds.clone();
        let group = GroupFixture::new("numbers", move || {
            counter.set(counter.get() + 1);
            vec![1, 2, 3]
        });

        assert!(!group.is_built());
        assert_eq!(builds.get(), 0);

        let a = group.get();
        let b = group.get();
        assert_eq!(*a, vec![1, 2, 3]);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn finish_refuses_while_shared_then_succeeds() {
        let torn_down = Rc::new(std::cell::Cell::new(false));
        let flag = torn_down.clone();
        let mut group =
            GroupFixture::new("numbers", || vec![1, 2, 3]).with_teardown(move |_| flag.set(true));

        let handle = group.get();
        assert_eq!(
            group.finish(),
            Err(FixtureError::StillShared {
                name: "numbers".to_string(),
                holders: 1,
            })
        );
        assert!(group.is_built());
        assert!(!torn_down.get());

        drop(handle);
        assert_eq!(group.finish(), Ok(()));
        assert!(torn_down.get());
        assert!(!group.is_built());
    }

    #[test]
    fn finish_on_unbuilt_group_is_a_noop() {
        let mut group = GroupFixture::new("empty", Vec::<u8>::new);
        assert_eq!(group.finish(), Ok(()));
    }

    #[test]
    fn group_is_rebuilt_after_finish() {
        let mut group = GroupFixture::new("numbers", || vec![1]);
        let first = group.get();
        drop(first);
        group.finish().unwrap();
        let second = group.get();
        assert_eq!(*second, vec![1]);
        assert_eq!(group.holders(), 1);
    }

    #[test]
    fn teardown_drops_tracked_circles() {
        let log = Rc::new(EventLog::new());
        let mut fixtures = Fixtures::new().with_observer(log.clone());

        let circles = fixtures.shapes(CIRCLE_COLLECTION).unwrap();
        assert_eq!(log.created(), 3);
        drop(circles);
        assert_eq!(log.dropped(), 0);

        fixtures.teardown().unwrap();
        assert_eq!(log.dropped(), 3);
        assert_eq!(log.live(), 0);
    }

    #[test]
    fn dropping_the_registry_releases_the_group() {
        let log = Rc::new(EventLog::new());
        {
            let fixtures = Fixtures::new().with_observer(log.clone());
            let _ = fixtures.shapes(CIRCLE_COLLECTION).unwrap();
        }
        assert_eq!(log.live(), 0);
    }

    #[test]
    fn dropping_a_shared_group_skips_the_teardown() {
        let torn_down = Rc::new(std::cell::Cell::new(false));
        let flag = torn_down.clone();
        let group =
            GroupFixture::new("numbers", || vec![1, 2, 3]).with_teardown(move |_| flag.set(true));

        let survivor = group.get();
        drop(group);
        assert!(!torn_down.get());
        assert_eq!(*survivor, vec![1, 2, 3]);
        assert_eq!(Rc::strong_count(&survivor), 1);
    }

    #[test]
    fn is_debug_flag() {
        assert!(Fixtures::new().flag(IS_DEBUG).unwrap());
        assert!(!Fixtures::new().with_debug(false).flag(IS_DEBUG).unwrap());
    }

    #[test]
    fn scopes() {
        assert_eq!(Fixtures::scope_of(RECTANGLE_COLLECTION), Some(FixtureScope::Scenario));
        assert_eq!(Fixtures::scope_of(CIRCLE_COLLECTION), Some(FixtureScope::Group));
        assert_eq!(Fixtures::scope_of("square_collection"), None);
        assert_eq!(Fixtures::names().len(), 3);
    }

    #[test]
    fn unknown_fixture_suggests_a_name() {
        let err = Fixtures::new().request("circles").unwrap_err();
        assert_eq!(
            err,
            FixtureError::Unknown {
                name: "circles".to_string(),
                suggestion: Some("did you mean `circle_collection`?".to_string()),
            }
        );

        let err = Fixtures::new().request("triangle_collection").unwrap_err();
        assert!(matches!(err, FixtureError::Unknown { suggestion: None, .. }));
    }

    #[test]
    fn short_names_get_no_suggestion() {
        for name in ["", "i", "co"] {
            assert_eq!(suggest(name), None, "{name:?}");
        }
        assert_eq!(suggest("deb"), Some(IS_DEBUG));
        assert_eq!(suggest("is_"), Some(IS_DEBUG));
        assert_eq!(suggest("rec"), Some(RECTANGLE_COLLECTION));
    }

    #[test]
    fn wrong_kind() {
        let fixtures = Fixtures::new();
        assert!(matches!(
            fixtures.shapes(IS_DEBUG),
            Err(FixtureError::WrongKind { expected: "shape collection", .. })
        ));
        assert!(matches!(
            fixtures.flag(RECTANGLE_COLLECTION),
            Err(FixtureError::WrongKind { expected: "flag", .. })
        ));
    }
}
