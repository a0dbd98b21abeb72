//! Gesture-scoped event subscriptions.
//!
//! A drag listens for pointer movement and release at document scope, not
//! just on the list, so samples keep arriving when the pointer leaves the
//! list's bounds. Those listeners must never outlive the drag. Every
//! [`Subscription`] is a guard that unsubscribes exactly once: explicitly
//! via [`Subscription::release`], or on drop.

use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Identity of the list that owns a subscription.
pub type OwnerId = Uuid;

/// Document-scope streams a drag listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureStream {
    /// Pointer movement samples.
    PointerMove,
    /// Pointer release samples, including a lost pointer.
    PointerUp,
}

/// Handle for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A scope that listeners can be attached to (the document, a window).
///
/// Methods take `&self`: a scope is shared by every list on a page and the
/// whole model is single-threaded.
pub trait EventScope {
    /// Register a listener for `stream` on behalf of `owner`.
    fn subscribe(&self, owner: OwnerId, stream: GestureStream) -> SubscriptionId;

    /// Remove a listener. Returns false if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// A registered listener, removed when released or dropped.
pub struct Subscription {
    scope: Rc<dyn EventScope>,
    stream: GestureStream,
    id: Option<SubscriptionId>,
}

impl Subscription {
    /// Register a listener and return its guard.
    pub fn new(scope: &Rc<dyn EventScope>, owner: OwnerId, stream: GestureStream) -> Self {
        let id = scope.subscribe(owner, stream);
        Self {
            scope: Rc::clone(scope),
            stream,
            id: Some(id),
        }
    }

    /// The stream this guard listens to.
    pub fn stream(&self) -> GestureStream {
        self.stream
    }

    /// Listener handle, until released.
    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }

    /// Check if the listener is still registered through this guard.
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Remove the listener now. Further calls are no-ops.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            if !self.scope.unsubscribe(id) {
                log::warn!("Listener {:?} for {:?} was already gone", id, self.stream);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("stream", &self.stream)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// The pair of listeners held for the lifetime of one drag.
#[derive(Debug)]
pub struct GestureSubscriptions {
    movement: Subscription,
    release: Subscription,
}

impl GestureSubscriptions {
    /// Subscribe to movement and release on behalf of `owner`.
    pub fn acquire(scope: &Rc<dyn EventScope>, owner: OwnerId) -> Self {
        Self {
            movement: Subscription::new(scope, owner, GestureStream::PointerMove),
            release: Subscription::new(scope, owner, GestureStream::PointerUp),
        }
    }

    /// Check if either listener is still registered.
    pub fn is_active(&self) -> bool {
        self.movement.is_active() || self.release.is_active()
    }

    /// Remove both listeners. Idempotent.
    pub fn release(&mut self) {
        self.movement.release();
        self.release.release();
    }
}

/// In-memory [`EventScope`] that records which owners listen to what.
///
/// Hosts use it to route document-level samples: every owner returned by
/// [`ListenerTable::listeners`] gets the sample. It also counts calls so
/// leaks show up in tests.
#[derive(Debug, Default)]
pub struct ListenerTable {
    next_id: Cell<u64>,
    active: RefCell<BTreeMap<SubscriptionId, (OwnerId, GestureStream)>>,
    subscribed: Cell<usize>,
    unsubscribed: Cell<usize>,
}

impl ListenerTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Owners listening to `stream`, in subscription order.
    pub fn listeners(&self, stream: GestureStream) -> Vec<OwnerId> {
        self.active
            .borrow()
            .values()
            .filter(|(_, s)| *s == stream)
            .map(|(owner, _)| *owner)
            .collect()
    }

    /// Check if `owner` listens to `stream`.
    pub fn is_listening(&self, owner: OwnerId, stream: GestureStream) -> bool {
        self.active
            .borrow()
            .values()
            .any(|&(o, s)| o == owner && s == stream)
    }

    /// Number of registered listeners.
    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    /// Total successful subscribe calls.
    pub fn subscribe_count(&self) -> usize {
        self.subscribed.get()
    }

    /// Total successful unsubscribe calls.
    pub fn unsubscribe_count(&self) -> usize {
        self.unsubscribed.get()
    }
}

impl EventScope for ListenerTable {
    fn subscribe(&self, owner: OwnerId, stream: GestureStream) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().insert(id, (owner, stream));
        self.subscribed.set(self.subscribed.get() + 1);
        log::trace!("Subscribed {owner} to {stream:?} as {id:?}");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.active.borrow_mut().remove(&id).is_some();
        if removed {
            self.unsubscribed.set(self.unsubscribed.get() + 1);
            log::trace!("Unsubscribed {id:?}");
        }
        removed
    }
}
