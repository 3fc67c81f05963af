// SPDX-License-Identifier: MPL-2.0
//! Resolved values the store applies when building toasts.

use crate::config::defaults::{
    BLANK_DURATION_MS, DEFAULT_GUTTER, DEFAULT_REMOVAL_DELAY_MS, FAILURE_DURATION_MS,
    SUCCESS_DURATION_MS, WARNING_DURATION_MS,
};
use crate::toast::{Kind, Position, ToastDuration};
use std::time::Duration;

/// Default auto-dismiss duration for each kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindDurations {
    pub success: Duration,
    pub failure: Duration,
    pub warning: Duration,
    /// Toasts created without a kind.
    pub blank: Duration,
}

impl KindDurations {
    /// Duration a toast of `kind` gets when none was supplied.
    #[must_use]
    pub fn for_kind(&self, kind: Option<Kind>) -> ToastDuration {
        match kind {
            Some(Kind::Success) => ToastDuration::Finite(self.success),
            Some(Kind::Failure) => ToastDuration::Finite(self.failure),
            Some(Kind::Warning) => ToastDuration::Finite(self.warning),
            Some(Kind::Loading) => ToastDuration::Infinite,
            None => ToastDuration::Finite(self.blank),
        }
    }
}

impl Default for KindDurations {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(SUCCESS_DURATION_MS),
            failure: Duration::from_millis(FAILURE_DURATION_MS),
            warning: Duration::from_millis(WARNING_DURATION_MS),
            blank: Duration::from_millis(BLANK_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreSettings {
    pub default_position: Position,
    pub durations: KindDurations,
    /// Wait between `dismiss` and `remove`.
    pub removal_delay: Duration,
    pub gutter: f32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_position: Position::default(),
            durations: KindDurations::default(),
            removal_delay: Duration::from_millis(DEFAULT_REMOVAL_DELAY_MS),
            gutter: DEFAULT_GUTTER,
        }
    }
}
