// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` presents transient toast notifications one at a time.
//!
//! The crate owns the queueing and timing of toasts and leaves drawing to the
//! host's rendering layer, which watches the current toast and reports
//! gestures back to the [`toast::Coordinator`].

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod config;
pub mod error;
pub mod toast;

pub use toast::{Coordinator, Gesture, PresentationId, Presented, Settings, Toast};
