// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod toast_area;

pub use animated_spinner::AnimatedSpinner;
pub use toast_area::{toast_area, ToastArea};
