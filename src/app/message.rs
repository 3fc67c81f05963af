// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::toast::Position;
use crate::ui;
use std::fmt;
use std::path::PathBuf;

/// Command-line options.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the configured default position.
    pub position: Option<Position>,
    /// Reads the configuration from this file instead of the user config dir.
    pub config_path: Option<PathBuf>,
}

/// Toast variants the demo can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Blank,
    Success,
    Failure,
    Warning,
    Loading,
    /// Dismissed by clicking it.
    Clickable,
    /// Dismissed by swiping it sideways.
    Draggable,
    /// Text computed from the toast itself.
    Rendered,
    /// Uses the "accent" class style.
    Styled,
}

impl Demo {
    pub const ALL: [Demo; 9] = [
        Demo::Blank,
        Demo::Success,
        Demo::Failure,
        Demo::Warning,
        Demo::Loading,
        Demo::Clickable,
        Demo::Draggable,
        Demo::Rendered,
        Demo::Styled,
    ];
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Demo::Blank => "Blank",
            Demo::Success => "Success",
            Demo::Failure => "Failure",
            Demo::Warning => "Warning",
            Demo::Loading => "Loading",
            Demo::Clickable => "Click to dismiss",
            Demo::Draggable => "Swipe to dismiss",
            Demo::Rendered => "Rendered",
            Demo::Styled => "Styled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Toasts(ui::Message),
    Show(Demo),
    /// Starts a task that succeeds or fails after a delay.
    RunPromise { succeed: bool },
    PromiseSettled(Result<u32, String>),
    PositionSelected(Position),
    ToggleLast,
    DismissAll,
}
