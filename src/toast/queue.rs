// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast queue.
//!
//! [`ToastQueue`] holds at most one shown toast and a FIFO backlog. It has no
//! notion of time: a dismissal that leaves the backlog non-empty only marks a
//! promotion as pending, and whoever drives the queue calls
//! [`ToastQueue::promote`] once the settle delay has elapsed.

use super::record::Toast;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identity of one presentation of a toast.
///
/// Every accepted toast gets a fresh id, so the same toast value enqueued
/// twice yields two distinct presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresentationId(u64);

impl PresentationId {
    /// Creates a new unique presentation ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PresentationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PresentationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A toast together with the identity of its presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Presented {
    id: PresentationId,
    toast: Arc<Toast>,
}

impl Presented {
    pub fn new(toast: Toast) -> Self {
        Self {
            id: PresentationId::new(),
            toast: Arc::new(toast),
        }
    }

    #[must_use]
    pub fn id(&self) -> PresentationId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }
}

/// Outcome of [`ToastQueue::enqueue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Enqueued {
    /// The queue was idle; the toast is now current.
    Shown(Presented),
    /// The toast joined the backlog at the given zero-based position.
    Queued { id: PresentationId, position: usize },
}

/// Outcome of a successful dismissal.
#[derive(Debug, Clone, PartialEq)]
pub struct Dismissal {
    /// The presentation that was just taken down.
    pub dismissed: Presented,
    /// Whether a promotion from the backlog is now pending.
    pub promotion_pending: bool,
}

/// The queue state machine.
#[derive(Debug, Default)]
pub struct ToastQueue {
    current: Option<Presented>,
    backlog: VecDeque<Presented>,
    promotion_pending: bool,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a toast.
    ///
    /// Shows it immediately when nothing is shown and nothing is waiting;
    /// otherwise appends it to the backlog. During a pending promotion the
    /// toast waits its turn so that FIFO order holds.
    pub fn enqueue(&mut self, presented: Presented) -> Enqueued {
        if self.is_idle() {
            self.current = Some(presented.clone());
            Enqueued::Shown(presented)
        } else {
            let id = presented.id();
            self.backlog.push_back(presented);
            Enqueued::Queued {
                id,
                position: self.backlog.len() - 1,
            }
        }
    }

    /// Takes down the current toast, if any.
    ///
    /// Returns `None` when nothing is shown, leaving the backlog untouched.
    pub fn dismiss_current(&mut self) -> Option<Dismissal> {
        let dismissed = self.current.take()?;
        if !self.backlog.is_empty() {
            self.promotion_pending = true;
        }
        Some(Dismissal {
            dismissed,
            promotion_pending: self.promotion_pending,
        })
    }

    /// Takes down the current toast only if it is the presentation `id`.
    pub fn dismiss(&mut self, id: PresentationId) -> Option<Dismissal> {
        if self.current_id() == Some(id) {
            self.dismiss_current()
        } else {
            None
        }
    }

    /// Moves the head of the backlog into the current slot.
    ///
    /// Returns `None` without touching anything unless a promotion is
    /// pending.
    pub fn promote(&mut self) -> Option<Presented> {
        if !self.promotion_pending {
            return None;
        }
        debug_assert!(self.current.is_none(), "promotion with a toast still shown");
        self.promotion_pending = false;
        let next = self.backlog.pop_front()?;
        self.current = Some(next.clone());
        Some(next)
    }

    /// Drops the current toast, the backlog and any pending promotion.
    pub fn clear(&mut self) {
        self.current = None;
        self.backlog.clear();
        self.promotion_pending = false;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Presented> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_id(&self) -> Option<PresentationId> {
        self.current.as_ref().map(Presented::id)
    }

    /// Returns the waiting toasts, oldest first.
    pub fn backlog(&self) -> impl Iterator<Item = &Presented> {
        self.backlog.iter()
    }

    /// Returns the presentation that the next promotion will show.
    #[must_use]
    pub fn next_in_line(&self) -> Option<PresentationId> {
        self.backlog.front().map(Presented::id)
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    #[must_use]
    pub fn promotion_pending(&self) -> bool {
        self.promotion_pending
    }

    /// Returns whether any toast is shown or waiting.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.current.is_some() || !self.backlog.is_empty()
    }

    fn is_idle(&self) -> bool {
        self.current.is_none() && self.backlog.is_empty() && !self.promotion_pending
    }
}
