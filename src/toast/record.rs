// SPDX-License-Identifier: MPL-2.0
//! The toast record.
//!
//! A [`Toast`] describes one notification request. It is built once with the
//! `with_*` builder methods and never mutated after it has been handed to the
//! coordinator, which shares it behind an `Arc`.

use crate::config::defaults;
use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rendering style of a toast.
///
/// - `Fancy` uses the system background with a themed accent strip.
/// - `Boot` fills the background with the theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Fancy,
    #[default]
    Boot,
}

/// Color theme, resolved to colors and an icon by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastTheme {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Primary,
    Secondary,
    /// Colors come from [`Toast::bg_color`] and [`Toast::foreground_color`].
    Custom,
}

/// Where the toast appears on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPosition {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A single notification request.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    kind: ToastKind,
    theme: ToastTheme,
    title: String,
    message: String,
    show_icon: bool,
    show_cancel: bool,
    swipe_to_dismiss: bool,
    position: ToastPosition,
    /// Zero means the toast stays until dismissed manually.
    duration: Duration,
    show_mask: bool,
    mask_color: Color,
    mask_opacity: f32,
    tap_mask_to_dismiss: bool,
    bg_color: Option<Color>,
    foreground_color: Option<Color>,
    system_icon: Option<String>,
}

impl Toast {
    /// Creates a toast with the given title and default settings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::default(),
            theme: ToastTheme::default(),
            title: title.into(),
            message: String::new(),
            show_icon: false,
            show_cancel: false,
            swipe_to_dismiss: true,
            position: ToastPosition::default(),
            duration: defaults::DEFAULT_TOAST_DURATION,
            show_mask: false,
            mask_color: Color::BLACK,
            mask_opacity: defaults::DEFAULT_MASK_OPACITY,
            tap_mask_to_dismiss: false,
            bg_color: None,
            foreground_color: None,
            system_icon: None,
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Info)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Success)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Warning)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Error)
    }

    pub fn primary(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Primary)
    }

    pub fn secondary(title: impl Into<String>) -> Self {
        Self::new(title).with_theme(ToastTheme::Secondary)
    }

    /// Creates a custom-themed toast with explicit background and text colors.
    pub fn custom(title: impl Into<String>, bg_color: Color, foreground_color: Color) -> Self {
        let mut toast = Self::new(title).with_theme(ToastTheme::Custom);
        toast.bg_color = Some(bg_color);
        toast.foreground_color = Some(foreground_color);
        toast
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ToastTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, show_cancel: bool) -> Self {
        self.show_cancel = show_cancel;
        self
    }

    #[must_use]
    pub fn with_swipe_to_dismiss(mut self, enabled: bool) -> Self {
        self.swipe_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Sets how long the toast stays visible. `Duration::ZERO` disables
    /// auto-dismiss.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the duration in seconds.
    ///
    /// Negative, NaN and infinite values all mean "never auto-dismiss".
    #[must_use]
    pub fn with_duration_secs(self, secs: f64) -> Self {
        let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        self.with_duration(duration)
    }

    /// Shows a mask behind the toast. The opacity is clamped to `[0, 1]`.
    #[must_use]
    pub fn with_mask(mut self, color: Color, opacity: f32) -> Self {
        self.show_mask = true;
        self.mask_color = color;
        self.mask_opacity = if opacity.is_nan() {
            defaults::DEFAULT_MASK_OPACITY
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    #[must_use]
    pub fn with_tap_mask_to_dismiss(mut self, enabled: bool) -> Self {
        self.tap_mask_to_dismiss = enabled;
        self
    }

    #[must_use]
    pub fn with_bg_color(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = Some(color);
        self
    }

    /// Overrides the themed icon with a named system icon.
    #[must_use]
    pub fn with_system_icon(mut self, name: impl Into<String>) -> Self {
        self.system_icon = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    #[must_use]
    pub fn theme(&self) -> ToastTheme {
        self.theme
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn show_icon(&self) -> bool {
        self.show_icon
    }

    #[must_use]
    pub fn show_cancel(&self) -> bool {
        self.show_cancel
    }

    #[must_use]
    pub fn swipe_to_dismiss(&self) -> bool {
        self.swipe_to_dismiss
    }

    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the auto-dismiss delay, or `None` if the toast must be
    /// dismissed manually.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        (!self.duration.is_zero()).then_some(self.duration)
    }

    #[must_use]
    pub fn show_mask(&self) -> bool {
        self.show_mask
    }

    #[must_use]
    pub fn mask_color(&self) -> Color {
        self.mask_color
    }

    #[must_use]
    pub fn mask_opacity(&self) -> f32 {
        self.mask_opacity
    }

    #[must_use]
    pub fn tap_mask_to_dismiss(&self) -> bool {
        self.tap_mask_to_dismiss
    }

    #[must_use]
    pub fn bg_color(&self) -> Option<Color> {
        self.bg_color
    }

    #[must_use]
    pub fn foreground_color(&self) -> Option<Color> {
        self.foreground_color
    }

    #[must_use]
    pub fn system_icon(&self) -> Option<&str> {
        self.system_icon.as_deref()
    }
}
