// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Toasts are short-lived messages shown one at a time above the host's
//! content. They dismiss themselves after their duration, or earlier through
//! the close button, a swipe or a tap on the mask.
//!
//! # Components
//!
//! - [`record`] - The immutable `Toast` value and its style enums
//! - [`queue`] - `ToastQueue`, the single-slot FIFO state machine
//! - [`timer`] - `DeferredTimer`, a cancellable timer keyed by presentation
//! - [`coordinator`] - `Coordinator` handles over shared queue state and the `Worker` that runs its timers
//! - [`gesture`] - User gestures and dismissal reasons
//!
//! # Design Considerations
//!
//! - One toast visible at a time, the rest wait in submission order
//! - 200 ms settle delay between a dismissal and the next toast
//! - A duration of zero means the toast stays until dismissed
//! - Timers are tied to the presentation they were armed for, so a stale
//!   timer cannot dismiss a newer toast
//! - The backlog is unbounded; flooding it is the caller's responsibility

pub mod coordinator;
pub mod gesture;
pub mod queue;
pub mod record;
pub mod timer;

pub use coordinator::{Coordinator, Settings, Worker};
pub use gesture::{DismissReason, Gesture};
pub use queue::{Dismissal, Enqueued, PresentationId, Presented, ToastQueue};
pub use record::{Toast, ToastKind, ToastPosition, ToastTheme};
pub use timer::DeferredTimer;
