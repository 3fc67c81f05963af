// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stacking**: Gutter between stacked toasts and edge margin
//! - **Durations**: Auto-dismiss durations per toast kind
//! - **Removal**: Grace delay between dismissal and removal
//! - **Animation**: Tick rate and fade lengths

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Spacing between two stacked toasts, and the offset of the first toast.
pub const DEFAULT_GUTTER: f32 = 8.0;

/// Maximum gutter accepted from the configuration file.
pub const MAX_GUTTER: f32 = 64.0;

/// Distance between the screen edge and the toast stack.
pub const EDGE_MARGIN: f32 = 16.0;

// ==========================================================================
// Duration Defaults (milliseconds)
// ==========================================================================

/// Auto-dismiss duration for success toasts.
pub const SUCCESS_DURATION_MS: u64 = 2000;

/// Auto-dismiss duration for failure toasts.
pub const FAILURE_DURATION_MS: u64 = 4000;

/// Auto-dismiss duration for warning toasts.
pub const WARNING_DURATION_MS: u64 = 3000;

/// Auto-dismiss duration for toasts created without a kind.
pub const BLANK_DURATION_MS: u64 = 3000;

/// Shortest duration accepted from the configuration file.
pub const MIN_DURATION_MS: u64 = 500;

/// Longest duration accepted from the configuration file.
pub const MAX_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Removal Defaults
// ==========================================================================

/// Delay between `dismiss` and the record being purged from the store.
/// Matches the exit animation plus some slack.
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = 1000;

/// Maximum removal delay accepted from the configuration file.
pub const MAX_REMOVAL_DELAY_MS: u64 = 10_000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Interval of the tick subscription driving timers and fades.
pub const TICK_INTERVAL_MS: u64 = 50;

/// Length of the fade-in once a toast has been measured.
pub const ENTER_ANIMATION_MS: u64 = 250;

/// Length of the exit fade.
pub const EXIT_ANIMATION_MS: u64 = 800;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal travel, in pixels, below which a drag still counts as a click.
pub const DRAG_SLOP_PX: f32 = 4.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_GUTTER > 0.0);
    assert!(MAX_GUTTER >= DEFAULT_GUTTER);

    assert!(MIN_DURATION_MS > 0);
    assert!(MAX_DURATION_MS > MIN_DURATION_MS);
    assert!(SUCCESS_DURATION_MS >= MIN_DURATION_MS && SUCCESS_DURATION_MS <= MAX_DURATION_MS);
    assert!(FAILURE_DURATION_MS >= MIN_DURATION_MS && FAILURE_DURATION_MS <= MAX_DURATION_MS);
    assert!(WARNING_DURATION_MS >= MIN_DURATION_MS && WARNING_DURATION_MS <= MAX_DURATION_MS);
    assert!(BLANK_DURATION_MS >= MIN_DURATION_MS && BLANK_DURATION_MS <= MAX_DURATION_MS);

    // The record must outlive its exit animation
    assert!(DEFAULT_REMOVAL_DELAY_MS >= EXIT_ANIMATION_MS);
    assert!(DRAG_SLOP_PX > 0.0);
    assert!(MAX_REMOVAL_DELAY_MS >= DEFAULT_REMOVAL_DELAY_MS);

    assert!(TICK_INTERVAL_MS < ENTER_ANIMATION_MS);
    assert!(ENTER_ANIMATION_MS < EXIT_ANIMATION_MS);
};
