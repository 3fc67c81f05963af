// SPDX-License-Identifier: MPL-2.0
//! Options accepted by the toast factories.
//!
//! Every field is optional. On creation unset fields fall back to the store
//! defaults; on upsert only the fields that are set replace the existing ones.

use super::id::ToastId;
use super::record::{Kind, Position, ToastDuration};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    pub id: Option<ToastId>,
    pub dismiss_on_click: Option<bool>,
    pub duration: Option<ToastDuration>,
    pub draggable: Option<bool>,
    pub position: Option<Position>,
    pub visible: Option<bool>,
    pub class_name: Option<String>,
    pub kind: Option<Kind>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a caller-chosen id; a later upsert with the same id updates the toast.
    #[must_use]
    pub fn id(mut self, id: impl Into<ToastId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn dismiss_on_click(mut self, dismiss_on_click: bool) -> Self {
        self.dismiss_on_click = Some(dismiss_on_click);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(ToastDuration::Finite(duration));
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.duration = Some(ToastDuration::Infinite);
        self
    }

    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = Some(draggable);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Name of a style registered with `Toasts::with_class`.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }
}
