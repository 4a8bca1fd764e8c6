//! The arbiter: at most one cascading panel open per page.
//!
//! The original behavior was a page-wide "picker opened" broadcast that every
//! instance listened for. Here it is an explicitly owned registry instead: a
//! single `OpenArbiter` is shared (`Rc`) by every picker on the screen, and
//! holds the id of the instance that currently owns the open slot. Opening
//! replaces the holder synchronously, before the new panel ever reports
//! itself open, so two panels are never visible at once.

use std::cell::Cell;
use std::rc::Rc;

/// Identity of one picker instance, allocated by [`OpenArbiter::register`].
pub type PickerId = usize;

/// Shared single-open coordinator. Single-threaded by design (UI thread
/// only), hence `Cell` rather than any locking.
#[derive(Debug, Default)]
pub struct OpenArbiter {
    current: Cell<Option<PickerId>>,
    next_id: Cell<PickerId>,
}

impl OpenArbiter {
    /// Create a fresh arbiter to share among the pickers of one screen.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Allocate an instance id.
    pub fn register(&self) -> PickerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    /// Claim the open slot for `id`, evicting and returning the previous
    /// holder (if any, and if it is not `id` itself).
    pub fn request_open(&self, id: PickerId) -> Option<PickerId> {
        let previous = self.current.replace(Some(id));
        previous.filter(|&holder| holder != id)
    }

    /// Give the slot back, but only if `id` still holds it: a picker that
    /// was already evicted must not clear someone else's claim.
    pub fn release(&self, id: PickerId) {
        if self.current.get() == Some(id) {
            self.current.set(None);
        }
    }

    /// Current holder of the open slot.
    pub fn holder(&self) -> Option<PickerId> {
        self.current.get()
    }

    /// Whether `id` holds the open slot.
    pub fn is_holder(&self, id: PickerId) -> bool {
        self.current.get() == Some(id)
    }
}
