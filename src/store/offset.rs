// SPDX-License-Identifier: MPL-2.0
//! Stacking offset of a toast within its screen position.

use crate::toast::{Toast, ToastId};

/// Computes how far `target` sits from the screen edge of its position.
///
/// Only visible toasts sharing the target's position are stacked, in
/// insertion order. The first toast of a stack, a toast not measured yet, and
/// a toast that is no longer part of the visible stack all get `gutter`.
/// Later toasts get the sum of `height + gutter` of every toast before them.
#[must_use]
pub fn offset(toasts: &[Toast], target: &ToastId, gutter: f32) -> f32 {
    let Some(target_toast) = toasts.iter().find(|toast| toast.id() == target) else {
        return gutter;
    };
    if target_toast.height() <= 0.0 {
        return gutter;
    }

    let mut stacked = 0.0;
    let stack = toasts
        .iter()
        .filter(|toast| toast.is_visible() && toast.position() == target_toast.position());

    for (index, toast) in stack.enumerate() {
        if toast.id() == target {
            return if index == 0 { gutter } else { stacked };
        }
        stacked += toast.height() + gutter;
    }

    gutter
}
