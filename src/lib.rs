// SPDX-License-Identifier: MPL-2.0
//! `toastful` brings stacked toast notifications to Iced applications.
//!
//! Toasts live in a [`store::Store`] shared through a [`Toaster`]. Each toast
//! auto-dismisses after a kind-dependent duration, pauses while hovered, can
//! be dismissed by click or swipe, and is removed after a short grace delay
//! so its exit fade can play. [`ui::Toasts`] renders them.
//!
//! ```
//! use toastful::toast::ToastOptions;
//!
//! let saved = toastful::success("Saved", ToastOptions::new());
//! toastful::dismiss(saved.id());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod store;
pub mod toast;
pub mod toaster;
pub mod ui;

pub use error::{Error, Result};
pub use toast::{Kind, Output, Position, Toast, ToastId, ToastOptions};
pub use toaster::{
    dismiss, failure, loading, promise, success, toast, warning, PromiseOutputs, PromiseToast,
    ToastHandle, Toaster,
};
