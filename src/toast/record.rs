// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record and the small value types it is
//! made of (`Kind`, `Position`, `ToastDuration`, `Output`). None of them
//! depend on the UI toolkit, so the store can be driven and tested headless.

use super::id::ToastId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Semantic category of a toast. Drives the icon and default duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Success,
    Failure,
    Warning,
    /// Never auto-dismisses; usually upserted into `Success` or `Failure`.
    Loading,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Failure, Kind::Warning, Kind::Loading];
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Success => "success",
            Kind::Failure => "failure",
            Kind::Warning => "warning",
            Kind::Loading => "loading",
        };
        f.write_str(name)
    }
}

/// Screen anchor zone a toast stacks within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Top,
        Position::TopLeft,
        Position::TopRight,
        Position::Bottom,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Whether the stack grows downwards from the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::Top | Position::TopLeft | Position::TopRight)
    }

    /// Whether the stack is horizontally centered.
    #[must_use]
    pub fn is_centered(self) -> bool {
        matches!(self, Position::Top | Position::Bottom)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Position::TopLeft | Position::BottomLeft)
    }

    fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopLeft => "top_left",
            Position::TopRight => "top_right",
            Position::Bottom => "bottom",
            Position::BottomLeft => "bottom_left",
            Position::BottomRight => "bottom_right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s.replace('-', "_"))
            .ok_or_else(|| format!("unknown position '{s}'"))
    }
}

/// How long a toast stays before auto-dismissing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    Finite(Duration),
    Infinite,
}

impl ToastDuration {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::Finite(Duration::from_millis(ms))
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    #[must_use]
    pub fn as_finite(self) -> Option<Duration> {
        match self {
            Self::Finite(duration) => Some(duration),
            Self::Infinite => None,
        }
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self::Finite(duration)
    }
}

type RenderFn = dyn Fn(&Toast) -> String + Send + Sync;

/// Content of a toast, resolved at render time.
#[derive(Clone)]
pub enum Output {
    Text(String),
    /// Computed from the toast itself each time it is rendered.
    Render(Arc<RenderFn>),
}

impl Output {
    /// Wraps a closure computing the text from the current toast state.
    pub fn render(f: impl Fn(&Toast) -> String + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    /// Returns the literal text, if this output is not computed.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Render(_) => None,
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One notification known to the store.
#[derive(Debug, Clone)]
pub struct Toast {
    pub(crate) id: ToastId,
    pub(crate) output: Output,
    pub(crate) kind: Option<Kind>,
    pub(crate) position: Position,
    pub(crate) duration: ToastDuration,
    pub(crate) created_at: Instant,
    pub(crate) paused_at: Option<Instant>,
    pub(crate) height: f32,
    pub(crate) visible: bool,
    pub(crate) draggable: bool,
    pub(crate) dismiss_on_click: bool,
    pub(crate) class_name: Option<String>,
}

impl Toast {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn output(&self) -> &Output {
        &self.output
    }

    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn paused_at(&self) -> Option<Instant> {
        self.paused_at
    }

    /// Measured height in pixels, `0.0` until the first layout.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    #[must_use]
    pub fn dismiss_on_click(&self) -> bool {
        self.dismiss_on_click
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Whether a lifecycle controller should arm a dismiss timer.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_infinite() && self.kind != Some(Kind::Loading)
    }

    /// Time left when the toast was paused, measured from `created_at`.
    ///
    /// Returns `None` when not paused or when the duration is infinite.
    /// `Some(Duration::ZERO)` means the toast expired while hovered.
    #[must_use]
    pub fn remaining_at_pause(&self) -> Option<Duration> {
        let duration = self.duration.as_finite()?;
        let paused_at = self.paused_at?;
        let elapsed = paused_at.saturating_duration_since(self.created_at);
        Some(duration.saturating_sub(elapsed))
    }

    /// Resolves the output to the text to display.
    #[must_use]
    pub fn resolve_output(&self) -> String {
        match &self.output {
            Output::Text(text) => text.clone(),
            Output::Render(render) => render(self),
        }
    }
}
