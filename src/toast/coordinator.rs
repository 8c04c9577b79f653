// SPDX-License-Identifier: MPL-2.0
//! Toast coordinator: the single owner of the queue and its timers.
//!
//! The queue state is shared between cloneable [`Coordinator`] handles and
//! one [`Worker`] future. Handles apply host operations inside the call, so
//! an enqueue on an idle coordinator is visible through
//! [`Coordinator::current`] before it returns. Every change records the
//! deadlines the state now needs, and the worker mirrors them into two
//! [`DeferredTimer`]s and applies expiry and promotion when they fire. The
//! current toast is published over a `watch` channel.
//!
//! # Usage
//!
//! ```no_run
//! use iced_toast::toast::{Coordinator, Settings, Toast};
//!
//! # async fn demo() {
//! let coordinator = Coordinator::spawn(Settings::default());
//! let mut current = coordinator.subscribe();
//!
//! coordinator.enqueue(Toast::success("Image saved"));
//!
//! while current.changed().await.is_ok() {
//!     match current.borrow_and_update().as_ref() {
//!         Some(shown) => println!("showing {}", shown.toast().title()),
//!         None => println!("nothing shown"),
//!     }
//! }
//! # }
//! ```

use super::gesture::{DismissReason, Gesture};
use super::queue::{Enqueued, PresentationId, Presented, ToastQueue};
use super::record::Toast;
use super::timer::{deadline_after, DeferredTimer};
use crate::config::defaults;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Coordinator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Pause between a dismissal and the promotion of the next queued toast.
    pub settle_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(defaults::DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

/// Wake-ups sent to the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wake {
    /// Deadlines may have changed.
    Reschedule,
    Shutdown,
}

/// A pending deadline and the presentation it belongs to.
type Deadline = Option<(PresentationId, Instant)>;

/// Queue state shared by the handles and the worker.
#[derive(Debug)]
struct State {
    settings: Settings,
    queue: ToastQueue,
    /// Auto-dismiss deadline of the shown toast.
    dismiss_at: Deadline,
    /// Promotion deadline, keyed by the toast it will promote.
    promote_at: Deadline,
    /// `None` once the coordinator has stopped.
    current_tx: Option<watch::Sender<Option<Presented>>>,
}

impl State {
    fn is_stopped(&self) -> bool {
        self.current_tx.is_none()
    }

    fn enqueue(&mut self, presented: Presented) {
        match self.queue.enqueue(presented) {
            Enqueued::Shown(presented) => self.show(presented),
            Enqueued::Queued { id, position } => {
                tracing::trace!(%id, position, "toast queued");
            }
        }
    }

    fn dismiss_current(&mut self, reason: DismissReason) {
        match self.queue.current_id() {
            Some(id) => self.dismiss(id, reason),
            None => tracing::trace!("dismiss with nothing shown"),
        }
    }

    fn dismiss(&mut self, id: PresentationId, reason: DismissReason) {
        let Some(dismissal) = self.queue.dismiss(id) else {
            tracing::trace!(%id, %reason, "dismissal ignored, toast not shown");
            return;
        };
        self.dismiss_at = None;
        tracing::debug!(%id, %reason, queued = self.queue.queued_count(), "toast dismissed");
        self.publish(None);

        if dismissal.promotion_pending {
            self.promote_at = self
                .queue
                .next_in_line()
                .map(|next| (next, deadline_after(self.settings.settle_delay)));
        }
    }

    fn gesture(&mut self, id: PresentationId, gesture: Gesture) {
        let enabled = match self.queue.current() {
            Some(current) if current.id() == id => gesture.is_enabled_for(current.toast()),
            _ => {
                tracing::trace!(%id, ?gesture, "gesture on a toast that is no longer shown");
                return;
            }
        };
        if enabled {
            self.dismiss(id, gesture.into());
        } else {
            tracing::debug!(%id, ?gesture, "gesture not enabled for this toast");
        }
    }

    fn promote(&mut self, expected: PresentationId) {
        if self.promote_at.map(|(next, _)| next) != Some(expected) {
            tracing::trace!(%expected, "promotion no longer scheduled");
            return;
        }
        self.promote_at = None;
        match self.queue.promote() {
            Some(presented) => {
                debug_assert_eq!(presented.id(), expected, "promoted out of order");
                self.show(presented);
            }
            None => tracing::trace!(%expected, "promotion found nothing to show"),
        }
    }

    fn show(&mut self, presented: Presented) {
        let id = presented.id();
        self.dismiss_at = presented
            .toast()
            .auto_dismiss_after()
            .map(|after| (id, deadline_after(after)));
        tracing::debug!(
            %id,
            title = presented.toast().title(),
            queued = self.queue.queued_count(),
            "toast shown"
        );
        self.publish(Some(presented));
    }

    fn clear(&mut self) {
        if self.queue.has_toasts() {
            tracing::debug!(queued = self.queue.queued_count(), "clearing toasts");
        }
        self.queue.clear();
        self.dismiss_at = None;
        self.promote_at = None;
        self.publish(None);
    }

    /// Clears everything and closes the `watch` channel.
    fn stop(&mut self) {
        if self.is_stopped() {
            return;
        }
        self.clear();
        self.current_tx = None;
        tracing::debug!("toast coordinator stopped");
    }

    fn publish(&self, current: Option<Presented>) {
        if let Some(tx) = &self.current_tx {
            tx.send_replace(current);
        }
    }
}

fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to a running toast queue.
///
/// Cheap to clone. The coordinator stops when [`Coordinator::shutdown`] is
/// called or when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct Coordinator {
    state: Arc<Mutex<State>>,
    wake_tx: mpsc::UnboundedSender<Wake>,
    current_rx: watch::Receiver<Option<Presented>>,
}

impl Coordinator {
    /// Creates a handle and the worker that serves its timers.
    ///
    /// Host operations take effect without the worker, but toasts only
    /// auto-dismiss and promote once [`Worker::run`] is awaited. This lets
    /// the host pick the executor context (for example a `LocalSet` on the
    /// UI thread).
    pub fn with_worker(settings: Settings) -> (Self, Worker) {
        let (wake_tx, wake_rx) = mpsc::unbounded_channel();
        let (current_tx, current_rx) = watch::channel(None);
        let state = Arc::new(Mutex::new(State {
            settings,
            queue: ToastQueue::new(),
            dismiss_at: None,
            promote_at: None,
            current_tx: Some(current_tx),
        }));

        let coordinator = Self {
            state: Arc::clone(&state),
            wake_tx,
            current_rx,
        };
        let worker = Worker {
            state,
            dismiss_timer: DeferredTimer::new(),
            settle_timer: DeferredTimer::new(),
            wake_rx,
        };
        (coordinator, worker)
    }

    /// Creates a coordinator and spawns its worker on the current Tokio
    /// runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn(settings: Settings) -> Self {
        let (coordinator, worker) = Self::with_worker(settings);
        tokio::spawn(worker.run());
        coordinator
    }

    /// Submits a toast. Never blocks and never fails.
    ///
    /// The toast is shown before this returns if the queue is idle, and
    /// otherwise waits behind every toast submitted before it.
    pub fn enqueue(&self, toast: Toast) -> PresentationId {
        let presented = Presented::new(toast);
        let id = presented.id();
        self.apply("enqueue", |state| state.enqueue(presented));
        id
    }

    /// Dismisses whatever toast is shown. No-op when nothing is shown.
    pub fn dismiss_current(&self) {
        self.apply("dismiss_current", |state| {
            state.dismiss_current(DismissReason::Host);
        });
    }

    /// Dismisses the presentation `id` if it is still the one shown.
    pub fn dismiss(&self, id: PresentationId) {
        self.apply("dismiss", |state| state.dismiss(id, DismissReason::Host));
    }

    /// Reports a user gesture on the presentation `id`.
    ///
    /// Ignored if the toast does not enable that gesture or is no longer
    /// shown.
    pub fn gesture(&self, id: PresentationId, gesture: Gesture) {
        self.apply("gesture", |state| state.gesture(id, gesture));
    }

    /// Drops the shown toast and everything waiting behind it.
    pub fn clear(&self) {
        self.apply("clear", State::clear);
    }

    /// Stops the coordinator. The shown toast is taken down, the `watch`
    /// channel closes and later operations are dropped.
    pub fn shutdown(&self) {
        lock(&self.state).stop();
        // The worker may already be gone.
        let _ = self.wake_tx.send(Wake::Shutdown);
    }

    /// Returns the toast currently shown.
    #[must_use]
    pub fn current(&self) -> Option<Presented> {
        self.current_rx.borrow().clone()
    }

    /// Returns a receiver that is notified every time the shown toast changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Presented>> {
        self.current_rx.clone()
    }

    /// Returns whether a toast is shown or waiting to be shown.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        lock(&self.state).queue.has_toasts()
    }

    /// Returns whether the coordinator still accepts operations.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.wake_tx.is_closed() && !lock(&self.state).is_stopped()
    }

    fn apply(&self, operation: &'static str, op: impl FnOnce(&mut State)) {
        {
            let mut state = lock(&self.state);
            if state.is_stopped() {
                tracing::warn!(operation, "toast coordinator stopped, operation dropped");
                return;
            }
            op(&mut state);
        }
        if self.wake_tx.send(Wake::Reschedule).is_err() {
            tracing::warn!(operation, "toast worker stopped, timers will not fire");
        }
    }
}

/// The task that owns the dismissal timer and the settle timer.
#[derive(Debug)]
pub struct Worker {
    state: Arc<Mutex<State>>,
    dismiss_timer: DeferredTimer<PresentationId>,
    settle_timer: DeferredTimer<PresentationId>,
    wake_rx: mpsc::UnboundedReceiver<Wake>,
}

impl Worker {
    /// Serves timers until shutdown or until every [`Coordinator`] handle is
    /// dropped.
    pub async fn run(mut self) {
        tracing::debug!(
            settle_delay = ?lock(&self.state).settings.settle_delay,
            "toast coordinator started"
        );

        loop {
            self.reschedule();
            let flow = tokio::select! {
                biased;

                wake = self.wake_rx.recv() => match wake {
                    Some(Wake::Reschedule) => ControlFlow::Continue(()),
                    Some(Wake::Shutdown) | None => ControlFlow::Break(()),
                },
                id = self.dismiss_timer.fired() => {
                    lock(&self.state).dismiss(id, DismissReason::Timeout);
                    ControlFlow::Continue(())
                }
                next = self.settle_timer.fired() => {
                    lock(&self.state).promote(next);
                    ControlFlow::Continue(())
                }
            };
            if flow.is_break() {
                break;
            }
        }

        lock(&self.state).stop();
    }

    /// Brings both timers in line with the deadlines in the shared state.
    fn reschedule(&mut self) {
        let (dismiss_at, promote_at) = {
            let state = lock(&self.state);
            (state.dismiss_at, state.promote_at)
        };
        follow(&mut self.dismiss_timer, dismiss_at);
        follow(&mut self.settle_timer, promote_at);
    }
}

fn follow(timer: &mut DeferredTimer<PresentationId>, deadline: Deadline) {
    match deadline {
        Some((key, at)) if timer.armed_key() != Some(key) => {
            timer.arm(key, at);
        }
        Some(_) => {}
        None => {
            timer.cancel();
        }
    }
}
