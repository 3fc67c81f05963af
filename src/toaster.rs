// SPDX-License-Identifier: MPL-2.0
//! Shared handle to a toast store and the toast factories.
//!
//! A [`Toaster`] is a cheap, cloneable reference to one [`Store`]. Application
//! code, async tasks and the [`crate::ui::Toasts`] component all hold clones of
//! the same toaster. A process-wide instance backs the free functions
//! ([`toast`], [`success`], [`promise`], ...).
//!
//! # Example
//!
//! ```
//! use toastful::toast::ToastOptions;
//! use toastful::Toaster;
//!
//! let toaster = Toaster::new();
//! let saved = toaster.success("Saved", ToastOptions::new());
//! assert_eq!(toaster.len(), 1);
//!
//! saved.dismiss();
//! assert!(!toaster.get(saved.id()).unwrap().is_visible());
//! ```

use crate::store::{Store, StoreSettings};
use crate::toast::{Kind, Output, Toast, ToastId, ToastOptions};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use parking_lot::{Mutex, MutexGuard};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};
use std::task::{Context, Poll};

static GLOBAL: OnceLock<Toaster> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Toaster {
    store: Arc<Mutex<Store>>,
}

impl Toaster {
    /// Creates a toaster over a fresh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: StoreSettings) -> Self {
        Self::from_store(Store::with_settings(settings))
    }

    /// Wraps an existing store, e.g. one built with a manual clock.
    #[must_use]
    pub fn from_store(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Replaces the store settings, e.g. after loading the configuration.
    pub fn configure(&self, settings: StoreSettings) {
        self.with(|store| store.set_settings(settings));
    }

    /// The process-wide toaster used by the free functions of this module.
    pub fn global() -> &'static Toaster {
        GLOBAL.get_or_init(Toaster::new)
    }

    /// Locks the store. Keep the guard short-lived; do not call other
    /// `Toaster` methods while holding it.
    pub fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock()
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        f(&mut self.store.lock())
    }

    /// Whether two toasters share the same store.
    #[must_use]
    pub fn same_store(&self, other: &Toaster) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Stable identity of the underlying store, for subscription ids.
    pub(crate) fn key(&self) -> usize {
        Arc::as_ptr(&self.store) as usize
    }

    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    pub fn toast(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        let id = self.with(|store| store.add_toast(output, options));
        self.handle(id)
    }

    pub fn success(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        self.toast(output, options.kind(Kind::Success))
    }

    pub fn failure(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        self.toast(output, options.kind(Kind::Failure))
    }

    pub fn warning(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        self.toast(output, options.kind(Kind::Warning))
    }

    /// Adds a toast that stays until dismissed or upserted into another kind.
    pub fn loading(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        self.toast(output, options.kind(Kind::Loading))
    }

    /// Updates the toast with `options.id` in place, or adds it.
    pub fn upsert(&self, output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
        let id = self.with(|store| store.upsert_toast(output, options));
        self.handle(id)
    }

    /// Shows a loading toast now and turns it into a success or failure toast
    /// when `future` settles.
    ///
    /// The loading toast exists as soon as this returns. The returned future
    /// yields the result of `future` unchanged; awaiting it is what drives the
    /// update, so it must be polled to completion.
    pub fn promise<F, T, E>(
        &self,
        future: F,
        outputs: PromiseOutputs,
        options: ToastOptions,
    ) -> PromiseToast<T, E>
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let PromiseOutputs {
            loading,
            success,
            failure,
        } = outputs;

        let loading_options = ToastOptions {
            kind: Some(Kind::Loading),
            duration: None,
            ..options.clone()
        };
        let id = self.toast(loading, loading_options).id;

        let settle_options = ToastOptions {
            id: Some(id.clone()),
            ..options
        };
        let toaster = self.clone();
        let future = async move {
            let result = future.await;
            match &result {
                Ok(_) => toaster.upsert(success, settle_options.kind(Kind::Success)),
                Err(_) => toaster.upsert(failure, settle_options.kind(Kind::Failure)),
            };
            result
        }
        .boxed();

        PromiseToast { id, future }
    }

    // ------------------------------------------------------------------
    // Mutations by id
    // ------------------------------------------------------------------

    pub fn dismiss(&self, id: &ToastId) {
        self.with(|store| store.dismiss(id));
    }

    pub fn remove(&self, id: &ToastId) {
        self.with(|store| store.remove(id));
    }

    pub fn toggle(&self, id: &ToastId) {
        self.with(|store| store.toggle(id));
    }

    /// Dismisses every visible toast.
    pub fn dismiss_all(&self) {
        self.with(|store| {
            let ids: Vec<ToastId> = store.visible().map(|toast| toast.id().clone()).collect();
            for id in &ids {
                store.dismiss(id);
            }
        });
    }

    /// Fires due timers, see [`Store::tick`].
    pub fn tick(&self) -> usize {
        self.with(Store::tick)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Clone of a single toast.
    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<Toast> {
        self.lock().get(id).cloned()
    }

    /// Clone of the whole collection.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().toasts().to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn handle(&self, id: ToastId) -> ToastHandle {
        ToastHandle {
            toaster: self.clone(),
            id,
        }
    }
}

/// Reference to one toast returned by the factories.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    toaster: Toaster,
    id: ToastId,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// Hides the toast and schedules its removal.
    pub fn dismiss(&self) {
        self.toaster.dismiss(&self.id);
    }

    /// Shows or hides the toast without removing it.
    pub fn toggle(&self) {
        self.toaster.toggle(&self.id);
    }
}

/// Texts shown by [`Toaster::promise`] for each state of the future.
#[derive(Debug, Clone)]
pub struct PromiseOutputs {
    pub loading: Output,
    pub success: Output,
    pub failure: Output,
}

impl PromiseOutputs {
    pub fn new(
        loading: impl Into<Output>,
        success: impl Into<Output>,
        failure: impl Into<Output>,
    ) -> Self {
        Self {
            loading: loading.into(),
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// Future returned by [`Toaster::promise`].
pub struct PromiseToast<T, E> {
    id: ToastId,
    future: BoxFuture<'static, Result<T, E>>,
}

impl<T, E> PromiseToast<T, E> {
    /// Id of the loading toast, kept through the success/failure update.
    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }
}

impl<T, E> Future for PromiseToast<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

// ----------------------------------------------------------------------
// Default instance
// ----------------------------------------------------------------------

/// Adds a toast to the global toaster.
pub fn toast(output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
    Toaster::global().toast(output, options)
}

pub fn success(output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
    Toaster::global().success(output, options)
}

pub fn failure(output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
    Toaster::global().failure(output, options)
}

pub fn warning(output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
    Toaster::global().warning(output, options)
}

pub fn loading(output: impl Into<Output>, options: ToastOptions) -> ToastHandle {
    Toaster::global().loading(output, options)
}

/// [`Toaster::promise`] on the global toaster.
pub fn promise<F, T, E>(future: F, outputs: PromiseOutputs, options: ToastOptions) -> PromiseToast<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    Toaster::global().promise(future, outputs, options)
}

/// Dismisses a toast of the global toaster.
pub fn dismiss(id: &ToastId) {
    Toaster::global().dismiss(id);
}
