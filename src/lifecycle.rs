//! Scoped lifecycle notifications
//!
//! A `Tracked<S>` owns a shape for one scope: creating it emits
//! `LifecycleEvent::Created`, dropping it emits `LifecycleEvent::Dropped`.
//! Events are always logged and optionally forwarded to an observer.

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::shapes::{Shape, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Created(ShapeKind),
    Dropped(ShapeKind),
}

/// Receives lifecycle events from tracked shapes
pub trait LifecycleObserver {
    fn notify(&self, event: LifecycleEvent);
}

/// Observer that records every event, in order
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<LifecycleEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    pub fn created(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, LifecycleEvent::Created(_)))
            .count()
    }

    pub fn dropped(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, LifecycleEvent::Dropped(_)))
            .count()
    }

    /// Number of tracked shapes created but not yet dropped
    pub fn live(&self) -> usize {
        self.created().saturating_sub(self.dropped())
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl LifecycleObserver for EventLog {
    fn notify(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// A shape whose creation and drop are observable
pub struct Tracked<S: Shape> {
    shape: S,
    observer: Option<Rc<dyn LifecycleObserver>>,
}

impl<S: Shape> Tracked<S> {
    /// Track a shape, logging its lifecycle only
    pub fn new(shape: S) -> Self {
        Self::with_observer(shape, None)
    }

    /// Track a shape and forward its lifecycle events to `observer`
    pub fn observed(shape: S, observer: Rc<dyn LifecycleObserver>) -> Self {
        Self::with_observer(shape, Some(observer))
    }

    fn with_observer(shape: S, observer: Option<Rc<dyn LifecycleObserver>>) -> Self {
        let tracked = Self { shape, observer };
        tracked.emit(LifecycleEvent::Created(tracked.shape.kind()));
        tracked
    }

    pub fn get(&self) -> &S {
        &self.shape
    }

    fn emit(&self, event: LifecycleEvent) {
        crate::log::debug!(?event, "shape lifecycle");
        if let Some(observer) = &self.observer {
            observer.notify(event);
        }
    }
}

/// Track every shape of a collection, preserving order
pub fn track_all<S, I>(shapes: I, observer: Option<&Rc<dyn LifecycleObserver>>) -> Vec<Tracked<S>>
where
    S: Shape,
    I: IntoIterator<Item = S>,
{
    shapes
        .into_iter()
        .map(|shape| Tracked::with_observer(shape, observer.cloned()))
        .collect()
}

impl<S: Shape> Deref for Tracked<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.shape
    }
}

impl<S: Shape> Drop for Tracked<S> {
    fn drop(&mut self) {
        self.emit(LifecycleEvent::Dropped(self.shape.kind()));
    }
}

impl<S: Shape + fmt::Debug> fmt::Debug for Tracked<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracked")
            .field("shape", &self.shape)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}
