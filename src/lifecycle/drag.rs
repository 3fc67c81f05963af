// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a press on a toast and, for draggable toasts, the horizontal swipe
//! that dismisses it.

use crate::config::defaults::DRAG_SLOP_PX;

/// Live visual of a toast being dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragVisual {
    /// Horizontal displacement in pixels.
    pub translate_x: f32,
    /// 1.0 at rest, fading to 0.0 as the drag approaches the removal threshold.
    pub opacity: f32,
}

impl DragVisual {
    pub const NEUTRAL: DragVisual = DragVisual {
        translate_x: 0.0,
        opacity: 1.0,
    };
}

impl Default for DragVisual {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Manages press-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether the pointer went down on the toast and is not released yet
    pub is_pressed: bool,

    /// Whether the press drives a drag (only for draggable toasts)
    pub is_dragging: bool,

    /// Horizontal position where the press started
    pub start_position: Option<f32>,

    /// Horizontal movement since the press
    pub delta: f32,

    /// Distance past which releasing dismisses; the toast's width
    pub removal_threshold: f32,

    /// Whether a drag travelled past the click slop during this press
    pub moved: bool,
}

impl DragState {
    /// Starts tracking a press
    pub fn start(&mut self, x: f32, width: f32, draggable: bool) {
        self.is_pressed = true;
        self.is_dragging = draggable;
        self.start_position = Some(x);
        self.delta = 0.0;
        self.removal_threshold = width.max(1.0);
        self.moved = false;
    }

    /// Stops tracking and resets the drag
    pub fn stop(&mut self) {
        *self = Self::default();
    }

    /// Records pointer movement, returning the visual for an active drag
    pub fn update(&mut self, x: f32) -> Option<DragVisual> {
        if !self.is_pressed {
            return None;
        }
        let start = self.start_position?;

        self.delta = x - start;
        // Jitter on a click is not a drag; non-draggable presses never drag
        if self.is_dragging && self.delta.abs() > DRAG_SLOP_PX {
            self.moved = true;
        }

        self.is_dragging.then(|| self.visual())
    }

    /// Current visual; neutral when no drag is active
    #[must_use]
    pub fn visual(&self) -> DragVisual {
        if !self.is_dragging {
            return DragVisual::NEUTRAL;
        }
        let progress = (self.delta / self.removal_threshold).abs();
        DragVisual {
            translate_x: self.delta,
            opacity: (1.0 - progress).clamp(0.0, 1.0),
        }
    }

    /// Whether releasing now should dismiss the toast
    #[must_use]
    pub fn exceeds_threshold(&self) -> bool {
        self.is_dragging && self.delta.abs() > self.removal_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_pressed);
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert_eq!(state.visual(), DragVisual::NEUTRAL);
    }

    #[test]
    fn start_drag_sets_state() {
        let mut state = DragState::default();
        state.start(100.0, 320.0, true);

        assert!(state.is_pressed);
        assert!(state.is_dragging);
        assert_eq!(state.start_position, Some(100.0));
        assert_eq!(state.removal_threshold, 320.0);
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(100.0, 320.0, true);
        state.update(150.0);
        state.stop();

        assert!(!state.is_pressed);
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert_eq!(state.delta, 0.0);
    }

    #[test]
    fn update_returns_none_when_not_pressed() {
        let mut state = DragState::default();
        assert!(state.update(100.0).is_none());
    }

    #[test]
    fn update_fades_with_distance() {
        let mut state = DragState::default();
        state.start(200.0, 100.0, true);

        let visual = state.update(150.0).unwrap();
        assert_eq!(visual.translate_x, -50.0);
        assert_eq!(visual.opacity, 0.5);

        let visual = state.update(400.0).unwrap();
        assert_eq!(visual.opacity, 0.0);
        assert!(state.exceeds_threshold());
    }

    #[test]
    fn press_on_non_draggable_never_drags() {
        let mut state = DragState::default();
        state.start(10.0, 100.0, false);

        assert!(state.update(500.0).is_none());
        assert!(!state.moved);
        assert!(!state.exceeds_threshold());
    }

    #[test]
    fn movement_within_slop_is_not_a_drag() {
        let mut state = DragState::default();
        state.start(10.0, 100.0, true);

        state.update(10.0 + DRAG_SLOP_PX);
        assert!(!state.moved);

        state.update(10.0 + DRAG_SLOP_PX + 0.5);
        assert!(state.moved);
    }
}
