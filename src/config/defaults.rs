// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Queue**: settle delay between a dismissal and the next promotion
//! - **Toast**: display duration and mask appearance

use std::time::Duration;

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Pause between a toast's dismissal and the promotion of the next queued
/// toast, so the exit animation can finish before the next entry starts.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Minimum settle delay (in milliseconds).
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 2_000;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display duration (in seconds).
pub const DEFAULT_TOAST_DURATION_SECS: f64 = 3.0;

/// Default display duration.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// Default mask opacity when a mask is shown.
pub const DEFAULT_MASK_OPACITY: f32 = 0.3;
