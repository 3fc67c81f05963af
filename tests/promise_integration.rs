// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of promise-linked toasts on a tokio runtime.

use std::time::Duration;
use toastful::lifecycle::Controller;
use toastful::store::{ManualClock, Store};
use toastful::toast::{Kind, ToastDuration, ToastOptions};
use toastful::{Output, PromiseOutputs, Toaster};
use tokio::sync::oneshot;

fn toaster() -> (Toaster, ManualClock) {
    let clock = ManualClock::new();
    (
        Toaster::from_store(Store::new().with_clock(clock.clone())),
        clock,
    )
}

#[tokio::test]
async fn resolved_promise_becomes_success_and_auto_dismisses() {
    let (toaster, clock) = toaster();
    let (tx, rx) = oneshot::channel::<u32>();

    let pending = toaster.promise(
        async move { rx.await.map_err(|_| "sender dropped") },
        PromiseOutputs::new("Saving...", "Done", "Error"),
        ToastOptions::new(),
    );
    let id = pending.id().clone();

    let loading = toaster.get(&id).expect("loading toast exists");
    assert_eq!(loading.kind(), Some(Kind::Loading));
    assert_eq!(loading.duration(), ToastDuration::Infinite);

    let mut controller =
        toaster.with(|store| Controller::mount(store, &id)).expect("toast is known");
    assert!(!controller.has_timer());

    tx.send(7).expect("receiver alive");
    let task = tokio::spawn(pending);
    let result = task.await.expect("promise task panicked");
    assert_eq!(result, Ok(7));

    let done = toaster.get(&id).expect("same toast, updated");
    assert_eq!(done.kind(), Some(Kind::Success));
    assert_eq!(done.output().as_text(), Some("Done"));
    assert_eq!(done.duration(), ToastDuration::from_millis(2000));
    assert_eq!(toaster.len(), 1);

    toaster.with(|store| controller.sync(store));
    assert!(controller.has_timer());

    clock.advance(Duration::from_millis(2000));
    toaster.tick();
    assert!(!toaster.get(&id).expect("pending removal").is_visible());
}

#[tokio::test]
async fn rejected_promise_passes_error_through() {
    let (toaster, _) = toaster();

    let pending = toaster.promise(
        async { Err::<(), _>(String::from("boom")) },
        PromiseOutputs::new(
            "Saving...",
            "Saved",
            Output::render(|toast| format!("Failed: {}", toast.id())),
        ),
        ToastOptions::new().id("upload"),
    );

    let result = pending.await;
    assert_eq!(result, Err(String::from("boom")));

    let failed = toaster.get(&"upload".into()).expect("toast kept its id");
    assert_eq!(failed.kind(), Some(Kind::Failure));
    assert_eq!(failed.resolve_output(), "Failed: upload");
    assert_eq!(failed.duration(), ToastDuration::from_millis(4000));
}

#[tokio::test]
async fn caller_options_survive_settling() {
    let (toaster, _) = toaster();

    let pending = toaster.promise(
        async { Ok::<_, ()>(()) },
        PromiseOutputs::new("Working", "Finished", "Failed"),
        ToastOptions::new().draggable(true).class_name("job"),
    );
    let id = pending.id().clone();
    pending.await.expect("future resolves");

    let toast = toaster.get(&id).expect("toast exists");
    assert!(toast.is_draggable());
    assert_eq!(toast.class_name(), Some("job"));
    assert_eq!(toast.kind(), Some(Kind::Success));
}
