// SPDX-License-Identifier: MPL-2.0
//! Toast store: the ordered collection of toasts and every mutation on it.
//!
//! The store is a plain value. Construct as many as you like (tests build one
//! per case); the crate-wide default instance lives in [`crate::toaster`].
//! Time-based behaviour goes through the store's [`Timers`] queue and its
//! injectable [`Clock`], and only advances when [`Store::tick`] is called.
//!
//! # Example
//!
//! ```
//! use toastful::store::{ManualClock, Store};
//! use toastful::toast::{Kind, ToastOptions};
//!
//! let clock = ManualClock::new();
//! let mut store = Store::new().with_clock(clock.clone());
//!
//! let id = store.add_toast("Saved", ToastOptions::new().kind(Kind::Success));
//! store.dismiss(&id);
//! assert!(!store.get(&id).unwrap().is_visible());
//!
//! clock.advance_ms(1000);
//! store.tick();
//! assert!(store.get(&id).is_none());
//! ```

pub mod clock;
pub mod offset;
pub mod settings;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use settings::{KindDurations, StoreSettings};
pub use timers::{TimerAction, TimerId, Timers};

use crate::toast::{IdGenerator, Output, Toast, ToastId, ToastOptions};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Identifies a listener registered with [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&[Toast]) + Send>;

pub struct Store {
    /// Insertion order is rendering order.
    toasts: Vec<Toast>,
    ids: IdGenerator,
    timers: Timers,
    /// Removal timers of dismissed toasts.
    pending_removals: HashMap<ToastId, TimerId>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    settings: StoreSettings,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("toasts", &self.toasts)
            .field("timers", &self.timers)
            .field("pending_removals", &self.pending_removals)
            .field("listeners", &self.listeners.len())
            .field("settings", &self.settings)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store with default settings and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(StoreSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: StoreSettings) -> Self {
        Self {
            toasts: Vec::new(),
            ids: IdGenerator::new(),
            timers: Timers::new(),
            pending_removals: HashMap::new(),
            listeners: Vec::new(),
            next_listener: 0,
            settings,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Replaces the settings. Existing toasts keep their resolved values.
    pub fn set_settings(&mut self, settings: StoreSettings) {
        debug!(?settings, "store settings replaced");
        self.settings = settings;
    }

    /// Current time according to the store's clock.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Creates a toast and appends it.
    ///
    /// Unset options fall back to the store settings: kind-based duration,
    /// default position, visible. A fresh id is generated unless `options.id`
    /// is set; if that id is already known the call updates it instead (see
    /// [`Store::upsert_toast`]) so ids stay unique.
    pub fn add_toast(&mut self, output: impl Into<Output>, options: ToastOptions) -> ToastId {
        let known = options.id.as_ref().is_some_and(|id| self.contains(id));
        if known {
            return self.upsert_toast(output, options);
        }
        self.insert(output.into(), options)
    }

    /// Updates the toast with `options.id` in place, or adds it if unknown.
    ///
    /// The id, `created_at` and position are preserved; the output and every
    /// option that is set replace the current values. Switching kind without
    /// an explicit duration picks the new kind's default duration.
    pub fn upsert_toast(&mut self, output: impl Into<Output>, options: ToastOptions) -> ToastId {
        let output = output.into();
        let index = options.id.as_ref().and_then(|id| self.index_of(id));
        let Some(index) = index else {
            return self.insert(output, options);
        };

        let removal_pending = self.pending_removals.contains_key(&self.toasts[index].id);
        let durations = self.settings.durations;
        let toast = &mut self.toasts[index];

        toast.output = output;
        let kind_changed = options.kind.is_some() && options.kind != toast.kind;
        if options.kind.is_some() {
            toast.kind = options.kind;
        }
        match options.duration {
            Some(duration) => toast.duration = duration,
            None if kind_changed => toast.duration = durations.for_kind(toast.kind),
            None => {}
        }
        if let Some(dismiss_on_click) = options.dismiss_on_click {
            toast.dismiss_on_click = dismiss_on_click;
        }
        if let Some(draggable) = options.draggable {
            toast.draggable = draggable;
        }
        if let Some(class_name) = options.class_name {
            toast.class_name = Some(class_name);
        }
        // A dismissed toast stays dismissed
        if let Some(visible) = options.visible {
            if !removal_pending {
                toast.visible = visible;
            }
        }
        if options.position.is_some_and(|position| position != toast.position) {
            debug!(id = %toast.id, "upsert ignores position change");
        }

        let id = toast.id.clone();
        debug!(id = %id, kind = ?toast.kind, "toast updated");
        self.notify();
        id
    }

    /// Hides a toast and schedules its removal after the grace delay.
    ///
    /// No-op for unknown ids. Dismissing twice does not reschedule.
    pub fn dismiss(&mut self, id: &ToastId) {
        let now = self.clock.now();
        self.dismiss_at(id, now);
    }

    fn dismiss_at(&mut self, id: &ToastId, dismissed_at: Instant) {
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        toast.visible = false;

        if !self.pending_removals.contains_key(id) {
            let deadline = dismissed_at + self.settings.removal_delay;
            let timer = self.timers.schedule(deadline, TimerAction::Remove(id.clone()));
            self.pending_removals.insert(id.clone(), timer);
        }

        debug!(id = %id, "toast dismissed");
        self.notify();
    }

    /// Deletes a toast immediately, along with every timer targeting it.
    pub fn remove(&mut self, id: &ToastId) {
        let before = self.toasts.len();
        self.toasts.retain(|toast| &toast.id != id);
        self.timers.cancel_for(id);
        self.pending_removals.remove(id);

        if self.toasts.len() != before {
            debug!(id = %id, "toast removed");
            self.notify();
        }
    }

    /// Flips visibility without scheduling removal.
    ///
    /// Dismissed toasts awaiting removal cannot be shown again.
    pub fn toggle(&mut self, id: &ToastId) {
        if self.pending_removals.contains_key(id) {
            return;
        }
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        toast.visible = !toast.visible;
        debug!(id = %id, visible = toast.visible, "toast toggled");
        self.notify();
    }

    /// Records when the pointer started hovering the toast.
    ///
    /// No-op for toasts with an infinite duration.
    pub fn pause(&mut self, id: &ToastId, paused_at: Instant) {
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        if toast.duration.is_infinite() {
            return;
        }
        toast.paused_at = Some(paused_at.max(toast.created_at));
        trace!(id = %id, "toast paused");
        self.notify();
    }

    /// Clears the pause mark set by [`Store::pause`].
    pub fn resume(&mut self, id: &ToastId) {
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        if toast.paused_at.take().is_some() {
            trace!(id = %id, "toast resumed");
            self.notify();
        }
    }

    /// Stores the measured height. Last write wins.
    pub fn set_height(&mut self, id: &ToastId, height: f32) {
        let Some(toast) = self.find_mut(id) else {
            return;
        };
        if toast.height != height {
            toast.height = height;
            self.notify();
        }
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    /// Runs every timer that is due, returning how many fired.
    pub fn tick(&mut self) -> usize {
        let due = self.timers.take_due(self.clock.now());
        let fired = due.len();

        for (deadline, action) in due {
            trace!(?action, "timer fired");
            match action {
                // The grace delay counts from the deadline, not from this tick
                TimerAction::Dismiss(id) => self.dismiss_at(&id, deadline),
                TimerAction::Remove(id) => self.remove(&id),
            }
        }
        fired
    }

    /// Arms a timer dismissing `id` after `delay`.
    pub fn schedule_dismiss(&mut self, id: &ToastId, delay: Duration) -> TimerId {
        let deadline = self.clock.now() + delay;
        self.timers.schedule(deadline, TimerAction::Dismiss(id.clone()))
    }

    /// Cancels a timer. Returns `false` if it already fired.
    pub fn cancel_timer(&mut self, timer: TimerId) -> bool {
        self.timers.cancel(timer)
    }

    #[must_use]
    pub fn is_timer_pending(&self, timer: TimerId) -> bool {
        self.timers.is_pending(timer)
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn is_removal_pending(&self, id: &ToastId) -> bool {
        self.pending_removals.contains_key(id)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All toasts, including dismissed ones awaiting removal.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|toast| toast.visible)
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| &toast.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Stacking offset of `id`, see [`offset::offset`].
    #[must_use]
    pub fn offset(&self, id: &ToastId) -> f32 {
        offset::offset(&self.toasts, id, self.settings.gutter)
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Registers a listener called with the whole collection after each change.
    ///
    /// Listeners run while the store is borrowed and must not call back into it.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Toast]) + Send + 'static) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.toasts);
        }
    }

    fn insert(&mut self, output: Output, options: ToastOptions) -> ToastId {
        let id = match options.id {
            Some(id) => id,
            None => self
                .ids
                .next_unused(|candidate| self.toasts.iter().any(|toast| &toast.id == candidate)),
        };
        let duration = options
            .duration
            .unwrap_or_else(|| self.settings.durations.for_kind(options.kind));

        let toast = Toast {
            id: id.clone(),
            output,
            kind: options.kind,
            position: options.position.unwrap_or(self.settings.default_position),
            duration,
            created_at: self.clock.now(),
            paused_at: None,
            height: 0.0,
            visible: options.visible.unwrap_or(true),
            draggable: options.draggable.unwrap_or(false),
            dismiss_on_click: options.dismiss_on_click.unwrap_or(false),
            class_name: options.class_name,
        };

        debug!(id = %id, kind = ?toast.kind, position = %toast.position, "toast added");
        self.toasts.push(toast);
        self.notify();
        id
    }

    fn index_of(&self, id: &ToastId) -> Option<usize> {
        self.toasts.iter().position(|toast| &toast.id == id)
    }

    fn find_mut(&mut self, id: &ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| &toast.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Kind, Position, ToastDuration};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> (Store, ManualClock) {
        let clock = ManualClock::new();
        (Store::new().with_clock(clock.clone()), clock)
    }

    #[test]
    fn new_store_is_empty() {
        let (store, _) = store();
        assert!(store.is_empty());
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn add_applies_defaults() {
        let (mut store, clock) = store();
        let id = store.add_toast("Saved", ToastOptions::new().kind(Kind::Success));

        let toast = store.get(&id).unwrap();
        assert_eq!(toast.duration(), ToastDuration::from_millis(2000));
        assert_eq!(toast.position(), Position::Top);
        assert!(toast.is_visible());
        assert_eq!(toast.height(), 0.0);
        assert_eq!(toast.created_at(), clock.now());
        assert!(!toast.is_draggable());
    }

    #[test]
    fn add_generates_distinct_ids() {
        let (mut store, _) = store();
        let ids: Vec<ToastId> = (0..10)
            .map(|i| store.add_toast(format!("toast {i}"), ToastOptions::new()))
            .collect();

        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn generated_ids_skip_caller_ids() {
        let (mut store, _) = store();
        store.add_toast("custom", ToastOptions::new().id("1"));
        let generated = store.add_toast("generated", ToastOptions::new());

        assert_eq!(generated.as_str(), "2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_with_known_id_updates_in_place() {
        let (mut store, _) = store();
        store.add_toast("first", ToastOptions::new().id("job"));
        store.add_toast("second", ToastOptions::new().id("job"));

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&"job".into()).unwrap().output().as_text(),
            Some("second")
        );
    }

    #[test]
    fn dismiss_hides_then_removes_after_grace_delay() {
        let (mut store, clock) = store();
        let id = store.add_toast("bye", ToastOptions::new());

        store.dismiss(&id);
        assert!(!store.get(&id).unwrap().is_visible());
        assert!(store.is_removal_pending(&id));

        clock.advance_ms(999);
        store.tick();
        assert!(store.contains(&id));

        clock.advance_ms(1);
        assert_eq!(store.tick(), 1);
        assert!(!store.contains(&id));
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (mut store, _) = store();
        store.add_toast("stay", ToastOptions::new());

        store.dismiss(&"missing".into());
        assert_eq!(store.len(), 1);
        assert!(!store.has_pending_timers());
    }

    #[test]
    fn dismissing_twice_schedules_one_removal() {
        let (mut store, _) = store();
        let id = store.add_toast("bye", ToastOptions::new());

        store.dismiss(&id);
        store.dismiss(&id);
        assert_eq!(store.timers.len(), 1);
    }

    #[test]
    fn remove_cancels_pending_timers() {
        let (mut store, clock) = store();
        let id = store.add_toast("bye", ToastOptions::new());
        let timer = store.schedule_dismiss(&id, Duration::from_millis(10));

        store.remove(&id);
        assert!(!store.is_timer_pending(timer));

        clock.advance_ms(10);
        assert_eq!(store.tick(), 0);
    }

    #[test]
    fn toggle_flips_without_scheduling_removal() {
        let (mut store, _) = store();
        let id = store.add_toast("hi", ToastOptions::new());

        store.toggle(&id);
        assert!(!store.get(&id).unwrap().is_visible());
        assert!(!store.has_pending_timers());

        store.toggle(&id);
        assert!(store.get(&id).unwrap().is_visible());
    }

    #[test]
    fn toggle_cannot_revive_a_dismissed_toast() {
        let (mut store, _) = store();
        let id = store.add_toast("hi", ToastOptions::new());

        store.dismiss(&id);
        store.toggle(&id);
        assert!(!store.get(&id).unwrap().is_visible());
    }

    #[test]
    fn pause_is_ignored_for_infinite_toasts() {
        let (mut store, clock) = store();
        let id = store.add_toast("wait", ToastOptions::new().kind(Kind::Loading));

        store.pause(&id, clock.now());
        assert!(store.get(&id).unwrap().paused_at().is_none());
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let (mut store, clock) = store();
        let id = store.add_toast("hover me", ToastOptions::new());

        clock.advance_ms(300);
        store.pause(&id, clock.now());
        assert_eq!(store.get(&id).unwrap().paused_at(), Some(clock.now()));

        store.resume(&id);
        assert!(store.get(&id).unwrap().paused_at().is_none());
    }

    #[test]
    fn pause_never_precedes_creation() {
        let (mut store, clock) = store();
        clock.advance_ms(100);
        let id = store.add_toast("x", ToastOptions::new());

        store.pause(&id, clock.origin());
        let toast = store.get(&id).unwrap();
        assert_eq!(toast.paused_at(), Some(toast.created_at()));
    }

    #[test]
    fn upsert_keeps_identity_and_creation_time() {
        let (mut store, clock) = store();
        let id = store.add_toast(
            "Loading...",
            ToastOptions::new().id("save").kind(Kind::Loading),
        );
        let created_at = store.get(&id).unwrap().created_at();

        clock.advance_ms(700);
        store.upsert_toast("Done", ToastOptions::new().id("save").kind(Kind::Success));

        let toast = store.get(&id).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(toast.created_at(), created_at);
        assert_eq!(toast.kind(), Some(Kind::Success));
        assert_eq!(toast.output().as_text(), Some("Done"));
        assert_eq!(toast.duration(), ToastDuration::from_millis(2000));
    }

    #[test]
    fn upsert_only_replaces_supplied_fields() {
        let (mut store, _) = store();
        let id = store.add_toast(
            "a",
            ToastOptions::new()
                .id("x")
                .draggable(true)
                .position(Position::BottomLeft)
                .duration(Duration::from_millis(9000)),
        );

        store.upsert_toast(
            "b",
            ToastOptions::new()
                .id("x")
                .dismiss_on_click(true)
                .position(Position::TopRight),
        );

        let toast = store.get(&id).unwrap();
        assert!(toast.is_draggable());
        assert!(toast.dismiss_on_click());
        assert_eq!(toast.position(), Position::BottomLeft);
        assert_eq!(toast.duration(), ToastDuration::from_millis(9000));
    }

    #[test]
    fn upsert_unknown_id_adds() {
        let (mut store, _) = store();
        let id = store.upsert_toast("new", ToastOptions::new().id("fresh"));

        assert_eq!(id.as_str(), "fresh");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&id).unwrap().duration(),
            ToastDuration::from_millis(3000)
        );
    }

    #[test]
    fn upsert_cannot_show_a_dismissed_toast() {
        let (mut store, _) = store();
        let id = store.add_toast("a", ToastOptions::new().id("x"));
        store.dismiss(&id);

        store.upsert_toast("b", ToastOptions::new().id("x").visible(true));
        assert!(!store.get(&id).unwrap().is_visible());
    }

    #[test]
    fn new_settings_apply_to_later_toasts() {
        let (mut store, _) = store();
        let before = store.add_toast("a", ToastOptions::new());
        store.set_settings(StoreSettings {
            default_position: Position::BottomRight,
            ..StoreSettings::default()
        });
        let after = store.add_toast("b", ToastOptions::new());

        assert_eq!(store.get(&before).unwrap().position(), Position::Top);
        assert_eq!(store.get(&after).unwrap().position(), Position::BottomRight);
    }

    #[test]
    fn set_height_is_last_write_wins() {
        let (mut store, _) = store();
        let id = store.add_toast("a", ToastOptions::new());

        store.set_height(&id, 40.0);
        store.set_height(&id, 44.0);
        assert_eq!(store.get(&id).unwrap().height(), 44.0);
    }

    #[test]
    fn offsets_follow_measured_heights() {
        let (mut store, _) = store();
        let a = store.add_toast("a", ToastOptions::new());
        let b = store.add_toast("b", ToastOptions::new());
        let c = store.add_toast("c", ToastOptions::new());
        store.set_height(&a, 40.0);
        store.set_height(&b, 50.0);
        store.set_height(&c, 60.0);

        assert_eq!(store.offset(&a), 8.0);
        assert_eq!(store.offset(&b), 48.0);
        assert_eq!(store.offset(&c), 106.0);

        store.dismiss(&a);
        assert_eq!(store.offset(&b), 8.0);
        assert_eq!(store.offset(&c), 58.0);
    }

    #[test]
    fn tick_runs_scheduled_dismissals() {
        let (mut store, clock) = store();
        let id = store.add_toast("a", ToastOptions::new());
        store.schedule_dismiss(&id, Duration::from_millis(2000));

        clock.advance_ms(2000);
        store.tick();
        assert!(!store.get(&id).unwrap().is_visible());

        clock.advance_ms(1000);
        store.tick();
        assert!(store.is_empty());
    }

    #[test]
    fn late_tick_keeps_the_grace_delay_exact() {
        let (mut store, clock) = store();
        let id = store.add_toast("a", ToastOptions::new());
        store.schedule_dismiss(&id, Duration::from_millis(2000));

        clock.advance_ms(2040);
        store.tick();
        assert!(!store.get(&id).unwrap().is_visible());

        // Removal is due 1000 ms after the dismiss deadline
        clock.advance_ms(959);
        store.tick();
        assert!(store.contains(&id));

        clock.advance_ms(1);
        store.tick();
        assert!(!store.contains(&id));
    }

    #[test]
    fn listeners_see_every_mutation() {
        let (mut store, _) = store();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let listener = store.subscribe(move |toasts| {
            assert!(toasts.len() <= 1);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let id = store.add_toast("a", ToastOptions::new());
        store.set_height(&id, 10.0);
        store.dismiss(&id);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        assert!(store.unsubscribe(listener));
        store.remove(&id);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
