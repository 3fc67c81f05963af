// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toastful::config::{self, Config, DurationsConfig};
use toastful::lifecycle::Controller;
use toastful::store::{ManualClock, Store};
use toastful::toast::{Kind, Position, ToastDuration, ToastOptions};
use toastful::Toaster;

fn store() -> (Store, ManualClock) {
    let clock = ManualClock::new();
    (Store::new().with_clock(clock.clone()), clock)
}

#[test]
fn saved_toast_lives_two_seconds_then_leaves() {
    let (mut store, clock) = store();
    let id = store.add_toast("Saved", ToastOptions::new().kind(Kind::Success));
    let controller = Controller::mount(&mut store, &id).expect("toast is known");
    store.set_height(&id, 40.0);
    assert_eq!(store.offset(&id), 8.0);

    clock.advance_ms(1999);
    store.tick();
    assert!(store.get(&id).unwrap().is_visible());

    clock.advance_ms(1);
    store.tick();
    assert!(!store.get(&id).unwrap().is_visible());

    clock.advance_ms(1000);
    store.tick();
    assert!(store.get(&id).is_none());
    assert!(store.is_empty());

    controller.unmount(&mut store);
    assert!(!store.has_pending_timers());
}

#[test]
fn ids_stay_unique_and_count_matches() {
    let (mut store, _) = store();
    for i in 0..25 {
        store.add_toast(format!("toast {i}"), ToastOptions::new());
    }
    store.add_toast("custom", ToastOptions::new().id("7"));

    let mut ids: Vec<&str> = store.toasts().iter().map(|t| t.id().as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.len(), 25);
}

#[test]
fn stacks_are_independent_per_position() {
    let (mut store, _) = store();
    let top_a = store.add_toast("a", ToastOptions::new().position(Position::Top));
    let bottom = store.add_toast("b", ToastOptions::new().position(Position::Bottom));
    let top_b = store.add_toast("c", ToastOptions::new().position(Position::Top));
    for id in [&top_a, &bottom, &top_b] {
        store.set_height(id, 30.0);
    }

    assert_eq!(store.offset(&top_a), 8.0);
    assert_eq!(store.offset(&bottom), 8.0);
    assert_eq!(store.offset(&top_b), 38.0);
}

#[test]
fn hovered_toast_resumes_with_time_left() {
    let (mut store, clock) = store();
    let id = store.add_toast(
        "hover",
        ToastOptions::new().duration(Duration::from_millis(4000)),
    );
    let mut controller = Controller::mount(&mut store, &id).expect("toast is known");

    clock.advance_ms(1000);
    controller.pointer_entered(&mut store);
    clock.advance_ms(20_000);
    store.tick();
    assert!(store.get(&id).unwrap().is_visible());

    controller.pointer_left(&mut store);
    clock.advance_ms(3000);
    store.tick();
    assert!(!store.get(&id).unwrap().is_visible());
}

#[test]
fn toaster_shares_state_across_threads() {
    let toaster = Toaster::new();
    let worker = toaster.clone();

    std::thread::spawn(move || {
        worker.warning("from a worker", ToastOptions::new());
    })
    .join()
    .expect("worker thread panicked");

    let snapshot = toaster.snapshot();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].kind(), Some(Kind::Warning));
}

#[test]
fn configured_durations_reach_new_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        position: Some(Position::BottomRight),
        durations: DurationsConfig {
            success_ms: Some(1500),
            ..DurationsConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let toaster = Toaster::with_settings(loaded.store_settings());
    let handle = toaster.success("Saved", ToastOptions::new());

    let toast = toaster.get(handle.id()).expect("toast was added");
    assert_eq!(toast.duration(), ToastDuration::from_millis(1500));
    assert_eq!(toast.position(), Position::BottomRight);
}
