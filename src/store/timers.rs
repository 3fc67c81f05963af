// SPDX-License-Identifier: MPL-2.0
//! Timer queue owned by the store.
//!
//! Replaces host `setTimeout` callbacks: a timer is a deadline plus the store
//! mutation to run. Nothing fires on its own; `Store::tick` drains whatever is
//! due.

use crate::toast::ToastId;
use std::time::Instant;

/// Handle used to cancel a pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Store mutation run when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Auto-dismiss armed by a lifecycle controller.
    Dismiss(ToastId),
    /// Purge after the removal grace delay.
    Remove(ToastId),
}

impl TimerAction {
    #[must_use]
    pub fn target(&self) -> &ToastId {
        match self {
            TimerAction::Dismiss(id) | TimerAction::Remove(id) => id,
        }
    }
}

#[derive(Debug)]
struct Timer {
    id: TimerId,
    deadline: Instant,
    action: TimerAction,
}

#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<Timer>,
    next_id: u64,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Instant, action: TimerAction) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Timer {
            id,
            deadline,
            action,
        });
        id
    }

    /// Cancels a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.pending.iter().position(|timer| timer.id == id) {
            self.pending.remove(pos);
            return true;
        }
        false
    }

    /// Cancels every timer targeting `toast`.
    pub fn cancel_for(&mut self, toast: &ToastId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.action.target() != toast);
        before - self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|timer| timer.id == id)
    }

    /// Removes and returns the actions due at `now` with their deadlines,
    /// earliest first. Timers with equal deadlines keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<(Instant, TimerAction)> {
        let (mut due, pending): (Vec<Timer>, Vec<Timer>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = pending;

        due.sort_by_key(|timer| (timer.deadline, timer.id));
        due.into_iter()
            .map(|timer| (timer.deadline, timer.action))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
