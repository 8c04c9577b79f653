// SPDX-License-Identifier: MPL-2.0
//! Dismissal triggers reported by the rendering layer.

use super::record::Toast;
use std::fmt;

/// A user interaction on a shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// The close button was pressed.
    CancelButton,
    /// The toast was swiped away.
    Swipe,
    /// The mask behind the toast was tapped.
    MaskTap,
}

impl Gesture {
    /// Returns whether `toast` enables this gesture.
    #[must_use]
    pub fn is_enabled_for(self, toast: &Toast) -> bool {
        match self {
            Gesture::CancelButton => toast.show_cancel(),
            Gesture::Swipe => toast.swipe_to_dismiss(),
            Gesture::MaskTap => toast.show_mask() && toast.tap_mask_to_dismiss(),
        }
    }
}

/// Why a toast was taken down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Its display duration elapsed.
    Timeout,
    /// A user gesture.
    Gesture(Gesture),
    /// The host called `dismiss_current` or `dismiss`.
    Host,
}

impl From<Gesture> for DismissReason {
    fn from(gesture: Gesture) -> Self {
        DismissReason::Gesture(gesture)
    }
}

impl fmt::Display for DismissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DismissReason::Timeout => write!(f, "timeout"),
            DismissReason::Gesture(Gesture::CancelButton) => write!(f, "cancel button"),
            DismissReason::Gesture(Gesture::Swipe) => write!(f, "swipe"),
            DismissReason::Gesture(Gesture::MaskTap) => write!(f, "mask tap"),
            DismissReason::Host => write!(f, "host"),
        }
    }
}
