// SPDX-License-Identifier: MPL-2.0
//! Demo application showing every kind of toast.
//!
//! The demo uses the process-wide toaster through the free functions
//! ([`crate::toast`], [`crate::success`], ...) and renders it with a
//! [`Toasts`] component layered over its controls.

mod message;
mod view;

pub use message::{Demo, Flags, Message};

use crate::config::{self, Config};
use crate::toast::{Output, Position, ToastId, ToastOptions};
use crate::toaster::{self, PromiseOutputs, Toaster};
use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::Toasts;
use iced::widget::container;
use iced::{window, Background, Border, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// How long the promise demo takes to settle.
const PROMISE_DELAY: Duration = Duration::from_secs(2);

pub struct App {
    toasts: Toasts,
    position: Position,
    /// Most recent toast, target of "Toggle last".
    last: Option<ToastId>,
    promises_started: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("position", &self.position)
            .field("last", &self.last)
            .field("toasts", &self.toasts.toasts().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the configuration named by the flags, falling back to defaults.
fn load_config(flags: &Flags) -> Config {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read configuration, using defaults");
        Config::default()
    })
}

/// Style of toasts created with the "accent" class.
fn accent_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::INFO_500)),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        let mut settings = config.store_settings();
        if let Some(position) = flags.position {
            settings.default_position = position;
        }

        let toaster = Toaster::global().clone();
        toaster.configure(settings);

        let app = App {
            toasts: Toasts::new(toaster, &config).with_class("accent", accent_style),
            position: settings.default_position,
            last: None,
            promises_started: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Toastful")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toasts(message) => {
                self.toasts.update(message);
                Task::none()
            }
            Message::Show(demo) => {
                let handle = self.show(demo);
                self.last = Some(handle);
                self.toasts.sync();
                Task::none()
            }
            Message::RunPromise { succeed } => {
                self.promises_started += 1;
                let run = self.promises_started;
                let work = async move {
                    tokio::time::sleep(PROMISE_DELAY).await;
                    if succeed {
                        Ok(run)
                    } else {
                        Err(String::from("network unreachable"))
                    }
                };

                let pending = toaster::promise(
                    work,
                    PromiseOutputs::new(
                        "Saving...",
                        format!("Saved #{run}"),
                        Output::render(|toast| format!("Could not save ({})", toast.id())),
                    ),
                    self.options(),
                );
                self.last = Some(pending.id().clone());
                self.toasts.sync();
                Task::perform(pending, Message::PromiseSettled)
            }
            Message::PromiseSettled(result) => {
                tracing::info!(?result, "promise settled");
                Task::none()
            }
            Message::PositionSelected(position) => {
                self.position = position;
                Task::none()
            }
            Message::ToggleLast => {
                if let Some(id) = &self.last {
                    self.toasts.toaster().toggle(id);
                    self.toasts.sync();
                }
                Task::none()
            }
            Message::DismissAll => {
                self.toasts.toaster().dismiss_all();
                self.toasts.sync();
                Task::none()
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toasts)
    }

    fn options(&self) -> ToastOptions {
        ToastOptions::new().position(self.position)
    }

    fn show(&self, demo: Demo) -> ToastId {
        let options = self.options();
        let handle = match demo {
            Demo::Blank => toaster::toast("Here is your toast.", options),
            Demo::Success => toaster::success("Settings saved", options),
            Demo::Failure => toaster::failure("Could not reach the server", options),
            Demo::Warning => toaster::warning("Battery is running low", options),
            Demo::Loading => toaster::loading("Uploading...", options),
            Demo::Clickable => toaster::toast(
                "Click me to dismiss",
                options.dismiss_on_click(true).persistent(),
            ),
            Demo::Draggable => {
                toaster::success("Swipe me away", options.draggable(true).persistent())
            }
            Demo::Rendered => toaster::toast(
                Output::render(|toast| format!("I am toast #{}", toast.id())),
                options,
            ),
            Demo::Styled => toaster::toast("Styled with a class", options.class_name("accent")),
        };
        handle.id().clone()
    }
}
