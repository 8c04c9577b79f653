// SPDX-License-Identifier: MPL-2.0
//! Cancellable single-shot timers keyed by what they were armed for.
//!
//! A [`DeferredTimer`] holds at most one pending deadline. Arming replaces
//! the previous deadline, cancelling drops it, and [`DeferredTimer::fired`]
//! yields the key the deadline was armed with. A replaced or cancelled
//! deadline can never be observed.

use std::future::pending;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep_until, Instant, Sleep};

/// Horizon used for delays that do not fit in an `Instant`, about 30 years.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Returns the instant `after` from now, saturating to a far-future instant
/// when the sum overflows.
#[must_use]
pub fn deadline_after(after: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(after).unwrap_or_else(|| now + FAR_FUTURE)
}

#[derive(Debug)]
struct Armed<K> {
    key: K,
    sleep: Pin<Box<Sleep>>,
}

/// A single-shot timer that remembers which key it belongs to.
#[derive(Debug)]
pub struct DeferredTimer<K> {
    armed: Option<Armed<K>>,
}

impl<K> Default for DeferredTimer<K> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<K: Copy + PartialEq> DeferredTimer<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer for `key` at `deadline`, replacing any pending deadline.
    ///
    /// Returns the key of the replaced deadline, if there was one.
    pub fn arm(&mut self, key: K, deadline: Instant) -> Option<K> {
        let replaced = self.cancel();
        self.armed = Some(Armed {
            key,
            sleep: Box::pin(sleep_until(deadline)),
        });
        replaced
    }

    /// Drops the pending deadline and returns its key.
    pub fn cancel(&mut self) -> Option<K> {
        self.armed.take().map(|armed| armed.key)
    }

    #[must_use]
    pub fn armed_key(&self) -> Option<K> {
        self.armed.as_ref().map(|armed| armed.key)
    }

    /// Waits for the pending deadline and disarms the timer.
    ///
    /// Never resolves while the timer is unarmed. Cancel safe: dropping the
    /// future before it resolves leaves the deadline in place.
    pub async fn fired(&mut self) -> K {
        let Some(armed) = self.armed.as_mut() else {
            return pending().await;
        };
        armed.sleep.as_mut().await;
        let key = armed.key;
        self.armed = None;
        key
    }
}
