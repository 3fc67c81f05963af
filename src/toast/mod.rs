// SPDX-License-Identifier: MPL-2.0
//! Toast records and the values they are built from.
//!
//! # Components
//!
//! - [`id`] - `ToastId` and the counter generating fresh ids
//! - [`record`] - The `Toast` record with `Kind`, `Position`, `ToastDuration`, `Output`
//! - [`options`] - `ToastOptions` builder accepted by the factories

pub mod id;
pub mod options;
pub mod record;

pub use id::{IdGenerator, ToastId};
pub use options::ToastOptions;
pub use record::{Kind, Output, Position, Toast, ToastDuration};
