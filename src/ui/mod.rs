// SPDX-License-Identifier: MPL-2.0
//! Iced views for toasts.
//!
//! This module follows the Elm-style "state down, messages up" pattern: the
//! [`Toasts`] component owns one lifecycle controller per toast, renders the
//! stacks, and turns pointer input into store operations.
//!
//! - [`toasts`] - The container component
//! - [`toast_bar`] - Card of a single toast
//! - [`widgets`] - Custom Iced widgets (toast area, spinner)
//! - [`icons`] - Kind icons
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod icons;
pub mod toast_bar;
pub mod toasts;
pub mod widgets;

pub use toast_bar::ClassStyle;
pub use toasts::{Message, Toasts};
