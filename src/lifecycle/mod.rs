// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle controller.
//!
//! A [`Controller`] lives while its toast is on screen. It owns the
//! auto-dismiss timer (armed in the store's timer queue), turns hover into
//! pause/resume, tracks presses and drags, and reports the measured height.
//! All store access goes through the `&mut Store` passed to each call.
//!
//! ```text
//! Entering -> Visible <-> Paused -> Dismissing -> (removed)
//! ```

pub mod drag;

pub use drag::{DragState, DragVisual};

use crate::config::defaults::{ENTER_ANIMATION_MS, EXIT_ANIMATION_MS};
use crate::store::{Store, TimerId};
use crate::toast::{Kind, Toast, ToastDuration, ToastId};
use std::time::{Duration, Instant};
use tracing::trace;

/// Presentation phase derived from the toast record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not measured yet; rendered transparent.
    Entering,
    Visible,
    /// Hovered, timer suspended.
    Paused,
    /// Dismissed, exit animation running until removal.
    Dismissing,
    /// Hidden with `toggle`, not scheduled for removal.
    Hidden,
}

/// What a pointer release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// No press was being tracked, or nothing happened.
    Ignored,
    /// A drag ended short of the threshold.
    SnappedBack,
    DismissedByDrag,
    DismissedByClick,
}

#[derive(Debug)]
pub struct Controller {
    id: ToastId,
    /// Pending auto-dismiss timer.
    timer: Option<TimerId>,
    /// Kind and duration the timer was armed for; a change re-arms it.
    armed_for: Option<(Option<Kind>, ToastDuration)>,
    drag: DragState,
    hovered: bool,
    measured_at: Option<Instant>,
    dismissed_at: Option<Instant>,
    last_offset: f32,
}

impl Controller {
    /// Mounts a controller for `id`, arming its auto-dismiss timer.
    ///
    /// Returns `None` if the store does not know the toast.
    pub fn mount(store: &mut Store, id: &ToastId) -> Option<Self> {
        if !store.contains(id) {
            return None;
        }
        let mut controller = Self {
            id: id.clone(),
            timer: None,
            armed_for: None,
            drag: DragState::default(),
            hovered: false,
            measured_at: None,
            dismissed_at: None,
            last_offset: store.settings().gutter,
        };
        controller.sync(store);
        trace!(id = %id, "controller mounted");
        Some(controller)
    }

    /// Reconciles the timer with the current record.
    ///
    /// Call after every store change. Returns `false` once the toast has been
    /// removed; the controller should then be unmounted.
    pub fn sync(&mut self, store: &mut Store) -> bool {
        let Some(toast) = store.get(&self.id) else {
            self.cancel_timer(store);
            return false;
        };
        let visible = toast.is_visible();
        let paused = toast.is_paused();
        let auto_dismisses = toast.auto_dismisses();
        let armed_for = (toast.kind(), toast.duration());
        let duration = toast.duration().as_finite();

        if !visible {
            if self.dismissed_at.is_none() && store.is_removal_pending(&self.id) {
                self.dismissed_at = Some(store.now());
            }
            self.drag.stop();
            self.cancel_timer(store);
            // Shown again by toggle: start a fresh timer
            self.armed_for = None;
            return true;
        }

        self.last_offset = store.offset(&self.id);

        if self.armed_for != Some(armed_for) {
            self.cancel_timer(store);
            self.armed_for = Some(armed_for);
            if let (true, false, Some(duration)) = (auto_dismisses, paused, duration) {
                self.arm(store, duration);
            }
        }
        true
    }

    /// Tears the controller down, cancelling its timer and any drag.
    pub fn unmount(mut self, store: &mut Store) {
        self.cancel_timer(store);
        self.drag.stop();
        trace!(id = %self.id, "controller unmounted");
    }

    // ------------------------------------------------------------------
    // Hover
    // ------------------------------------------------------------------

    /// Pointer entered the toast: pause the countdown.
    pub fn pointer_entered(&mut self, store: &mut Store) {
        self.hovered = true;
        let auto_dismisses = store.get(&self.id).is_some_and(Toast::auto_dismisses);
        if !auto_dismisses {
            return;
        }
        let now = store.now();
        store.pause(&self.id, now);
        self.cancel_timer(store);
    }

    /// Pointer left the toast: resume with whatever time was left at pause.
    ///
    /// The remaining time is always computed from the creation time, so
    /// repeated hovers never extend the toast's life.
    pub fn pointer_left(&mut self, store: &mut Store) {
        self.hovered = false;
        let Some(toast) = store.get(&self.id) else {
            return;
        };
        let auto_dismisses = toast.auto_dismisses();
        let Some(remaining) = toast.remaining_at_pause() else {
            return;
        };

        store.resume(&self.id);
        if !auto_dismisses || !toast_visible(store, &self.id) {
            return;
        }
        self.cancel_timer(store);
        if remaining.is_zero() {
            store.dismiss(&self.id);
        } else {
            self.arm(store, remaining);
        }
    }

    // ------------------------------------------------------------------
    // Press & drag
    // ------------------------------------------------------------------

    /// Pointer went down on the toast at horizontal position `x`.
    ///
    /// `width` is the toast's rendered width, used as the removal threshold.
    pub fn pressed(&mut self, store: &Store, x: f32, width: f32) {
        let Some(toast) = store.get(&self.id) else {
            return;
        };
        if !toast.is_visible() {
            return;
        }
        self.drag.start(x, width, toast.is_draggable());
    }

    /// Pointer moved anywhere while pressed. Returns the drag visual when the
    /// toast is being dragged.
    pub fn pointer_moved(&mut self, x: f32) -> Option<DragVisual> {
        self.drag.update(x)
    }

    /// Pointer released anywhere.
    ///
    /// Dismisses when a drag went further than the toast's width, or when the
    /// toast is dismiss-on-click and the press did not turn into a drag. Any
    /// other drag snaps back.
    pub fn released(&mut self, store: &mut Store) -> Release {
        if !self.drag.is_pressed {
            return Release::Ignored;
        }
        let was_dragging = self.drag.is_dragging;
        let exceeded = self.drag.exceeds_threshold();
        let moved = self.drag.moved;
        self.drag.stop();

        if exceeded {
            store.dismiss(&self.id);
            return Release::DismissedByDrag;
        }

        let dismiss_on_click = store.get(&self.id).is_some_and(Toast::dismiss_on_click);
        if !moved && dismiss_on_click {
            store.dismiss(&self.id);
            return Release::DismissedByClick;
        }

        if was_dragging {
            Release::SnappedBack
        } else {
            Release::Ignored
        }
    }

    // ------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------

    /// Reports the rendered height. Only the first report per mount counts.
    pub fn measured(&mut self, store: &mut Store, height: f32) {
        if self.measured_at.is_some() {
            return;
        }
        self.measured_at = Some(store.now());
        store.set_height(&self.id, height);
        self.last_offset = store.offset(&self.id);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.drag.is_pressed
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Whether the height has been reported.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.measured_at.is_some()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn drag_visual(&self) -> DragVisual {
        self.drag.visual()
    }

    /// Offset at the last sync; dismissed toasts keep their slot while fading.
    #[must_use]
    pub fn last_offset(&self) -> f32 {
        self.last_offset
    }

    #[must_use]
    pub fn phase(&self, toast: &Toast) -> Phase {
        if !toast.is_visible() {
            if self.dismissed_at.is_some() {
                Phase::Dismissing
            } else {
                Phase::Hidden
            }
        } else if toast.height() <= 0.0 {
            Phase::Entering
        } else if toast.is_paused() {
            Phase::Paused
        } else {
            Phase::Visible
        }
    }

    /// Enter animation progress in `0.0..=1.0`; `0.0` until measured.
    #[must_use]
    pub fn enter_progress(&self, now: Instant) -> f32 {
        self.measured_at
            .map_or(0.0, |start| progress(start, now, ENTER_ANIMATION_MS))
    }

    /// Exit animation progress in `0.0..=1.0`; `0.0` until dismissed.
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        self.dismissed_at
            .map_or(0.0, |start| progress(start, now, EXIT_ANIMATION_MS))
    }

    fn arm(&mut self, store: &mut Store, delay: Duration) {
        self.timer = Some(store.schedule_dismiss(&self.id, delay));
        trace!(id = %self.id, ?delay, "dismiss timer armed");
    }

    fn cancel_timer(&mut self, store: &mut Store) {
        if let Some(timer) = self.timer.take() {
            store.cancel_timer(timer);
        }
    }
}

fn progress(start: Instant, now: Instant, total_ms: u64) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    let total = Duration::from_millis(total_ms);
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn toast_visible(store: &Store, id: &ToastId) -> bool {
    store.get(id).is_some_and(Toast::is_visible)
}
