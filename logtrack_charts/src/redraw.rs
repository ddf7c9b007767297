// Copyright 2025 the LogTrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw scheduling.
//!
//! Resize notifications arrive in bursts while a window is dragged. They are delivered through an
//! explicit [`ResizeEvents`] source that a view subscribes to, and coalesced by a trailing
//! [`Debouncer`] so a burst produces one repaint after it settles.
//!
//! Time is injected as a [`Duration`] since an arbitrary origin; nothing here reads a clock.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use hashbrown::HashMap;

use crate::layout::Size;

/// Default quiet period before a resize burst triggers a redraw.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// A trailing debouncer.
///
/// Every [`trigger`](Self::trigger) pushes the deadline to `at + delay`; [`poll`](Self::poll)
/// fires once when the deadline has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records an event at `at`, restarting the quiet period.
    pub fn trigger(&mut self, at: Duration) {
        self.deadline = Some(at.saturating_add(self.delay));
    }

    /// Returns `true` exactly once when the quiet period after the last event has elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns the pending deadline, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns `true` while an event is waiting for its quiet period.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drops any pending event.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// One resize notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    /// The new surface size.
    pub size: Size,
    /// When the resize happened.
    pub at: Duration,
}

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    queues: HashMap<u64, VecDeque<ResizeEvent>>,
}

/// A source of resize notifications for one rendering surface.
///
/// Cloning shares the source. Each [`ResizeSubscription`] receives every event emitted after it
/// subscribed and is removed from the source when dropped.
#[derive(Clone, Debug, Default)]
pub struct ResizeEvents {
    inner: Rc<RefCell<Subscribers>>,
}

impl ResizeEvents {
    /// Creates a source with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new subscriber.
    pub fn subscribe(&self) -> ResizeSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.queues.insert(id, VecDeque::new());
        ResizeSubscription {
            id,
            source: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers an event to every live subscriber.
    pub fn emit(&self, size: Size, at: Duration) {
        let event = ResizeEvent { size, at };
        for queue in self.inner.borrow_mut().queues.values_mut() {
            queue.push_back(event);
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().queues.len()
    }
}

/// A lifetime-scoped subscription to a [`ResizeEvents`] source.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    source: Weak<RefCell<Subscribers>>,
}

impl ResizeSubscription {
    /// Takes every event received since the last drain, oldest first.
    ///
    /// Returns nothing once the source itself is gone.
    pub fn drain(&self) -> Vec<ResizeEvent> {
        let Some(source) = self.source.upgrade() else {
            return Vec::new();
        };
        let mut inner = source.borrow_mut();
        inner
            .queues
            .get_mut(&self.id)
            .map(|q| q.drain(..).collect())
            .unwrap_or_default()
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(source) = self.source.upgrade() {
            source.borrow_mut().queues.remove(&self.id);
        }
    }
}
