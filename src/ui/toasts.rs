// SPDX-License-Identifier: MPL-2.0
//! The toast container component.
//!
//! `Toasts` renders every toast of a [`Toaster`] as a layer over the
//! application, one [`Controller`] per toast. Embed it like any other
//! component:
//!
//! ```ignore
//! // state
//! toasts: toastful::ui::Toasts,
//!
//! // update
//! Message::Toasts(message) => self.toasts.update(message),
//!
//! // view
//! stack![content, self.toasts.view().map(Message::Toasts)]
//!
//! // subscription
//! self.toasts.subscription().map(Message::Toasts)
//! ```
//!
//! The component follows store changes on its own: a store listener wakes it
//! whenever any code, including async tasks, adds or updates a toast.

use crate::config::defaults::{EDGE_MARGIN, TICK_INTERVAL_MS};
use crate::config::Config;
use crate::lifecycle::{Controller, Phase, Release};
use crate::store::ListenerId;
use crate::toast::{Position, Toast, ToastId};
use crate::toaster::Toaster;
use crate::ui::design_tokens::opacity;
use crate::ui::toast_bar::{self, Appearance, ClassStyle};
use crate::ui::widgets::toast_area;
use iced::futures::channel::mpsc;
use iced::futures::SinkExt;
use iced::widget::{container, Container, Stack};
use iced::{
    alignment, event, mouse, stream, time, touch, window, Element, Event, Length, Padding,
    Subscription, Theme,
};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Messages of the toast container.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick firing timers and advancing fades.
    Tick(Instant),
    /// The store changed.
    Changed,
    /// A toast reported its rendered height.
    Measured(ToastId, f32),
    /// The pointer entered or left a toast.
    Hovered(ToastId, bool),
    /// The pointer went down on a toast.
    Pressed { id: ToastId, x: f32, width: f32 },
    /// The pointer moved anywhere while a toast is pressed.
    PointerMoved(f32),
    /// The pointer was released anywhere while a toast is pressed.
    PointerReleased,
}

pub struct Toasts {
    toaster: Toaster,
    controllers: HashMap<ToastId, Controller>,
    /// Store contents as of the last sync; what `view` renders.
    snapshot: Vec<Toast>,
    default_style: bool,
    classes: HashMap<String, ClassStyle>,
    now: Instant,
}

impl fmt::Debug for Toasts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toasts")
            .field("controllers", &self.controllers)
            .field("snapshot", &self.snapshot)
            .field("default_style", &self.default_style)
            .field("classes", &self.classes.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Toasts {
    /// Creates the container for `toaster`, styled per `config`.
    pub fn new(toaster: Toaster, config: &Config) -> Self {
        let now = toaster.lock().now();
        let mut toasts = Self {
            toaster,
            controllers: HashMap::new(),
            snapshot: Vec::new(),
            default_style: config.default_style(),
            classes: HashMap::new(),
            now,
        };
        toasts.sync();
        toasts
    }

    /// Registers the style of toasts created with `class_name(name)`.
    #[must_use]
    pub fn with_class(
        mut self,
        name: impl Into<String>,
        style: impl Fn(&Theme) -> container::Style + Send + Sync + 'static,
    ) -> Self {
        self.classes.insert(name.into(), Arc::new(style));
        self
    }

    #[must_use]
    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    /// Toasts as of the last sync.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.snapshot
    }

    #[must_use]
    pub fn controller(&self, id: &ToastId) -> Option<&Controller> {
        self.controllers.get(id)
    }

    pub fn update(&mut self, message: Message) {
        {
            let mut store = self.toaster.lock();
            match message {
                Message::Tick(_) => {
                    store.tick();
                }
                Message::Changed => {}
                Message::Measured(id, height) => {
                    if let Some(controller) = self.controllers.get_mut(&id) {
                        controller.measured(&mut store, height);
                    }
                }
                Message::Hovered(id, hovered) => {
                    if let Some(controller) = self.controllers.get_mut(&id) {
                        match (hovered, controller.is_hovered()) {
                            (true, false) => controller.pointer_entered(&mut store),
                            (false, true) => controller.pointer_left(&mut store),
                            _ => {}
                        }
                    }
                }
                Message::Pressed { id, x, width } => {
                    if let Some(controller) = self.controllers.get_mut(&id) {
                        controller.pressed(&store, x, width);
                    }
                }
                Message::PointerMoved(x) => {
                    for controller in self.controllers.values_mut() {
                        if controller.is_pressed() {
                            controller.pointer_moved(x);
                        }
                    }
                }
                Message::PointerReleased => {
                    for controller in self.controllers.values_mut() {
                        let release = controller.released(&mut store);
                        if release != Release::Ignored {
                            debug!(id = %controller.id(), ?release, "toast released");
                        }
                    }
                }
            }
        }
        self.sync();
    }

    /// Mounts controllers for new toasts, reconciles the others, and drops
    /// those whose toast is gone.
    ///
    /// `update` calls this; call it yourself after changing the store if you
    /// need `toasts()` to be current before the next message.
    pub fn sync(&mut self) {
        let mut store = self.toaster.lock();
        self.now = store.now();

        let ids: Vec<ToastId> = store
            .toasts()
            .iter()
            .map(|toast| toast.id().clone())
            .collect();
        for id in ids {
            if !self.controllers.contains_key(&id) {
                if let Some(controller) = Controller::mount(&mut store, &id) {
                    self.controllers.insert(id, controller);
                }
            }
        }

        let gone: Vec<ToastId> = self
            .controllers
            .iter_mut()
            .filter_map(|(id, controller)| (!controller.sync(&mut store)).then(|| id.clone()))
            .collect();
        for id in gone {
            if let Some(controller) = self.controllers.remove(&id) {
                controller.unmount(&mut store);
            }
        }

        self.snapshot = store.toasts().to_vec();
    }

    /// Renders every toast with the built-in card.
    pub fn view(&self) -> Element<'_, Message> {
        self.layers(|toast, controller| {
            let appearance = Appearance {
                opacity: self.opacity(toast, controller),
                age: self.now.saturating_duration_since(toast.created_at()),
                default_style: self.default_style,
                class: toast
                    .class_name()
                    .and_then(|name| self.classes.get(name))
                    .cloned(),
            };
            toast_bar::view(toast, appearance)
        })
    }

    /// Renders every toast with `render`, keeping placement and gestures.
    pub fn view_with<'a>(
        &'a self,
        render: impl Fn(&'a Toast) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        self.layers(|toast, _| render(toast))
    }

    /// Ticks while toasts exist, follows store changes, and listens to the
    /// pointer anywhere in the window while a toast is pressed.
    pub fn subscription(&self) -> Subscription<Message> {
        let changes = Subscription::run_with(StoreKey(self.toaster.clone()), |key| {
            store_changes(key.0.clone())
        });

        let tick = if self.snapshot.is_empty() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        };

        let pointer = if self.tracks_pointer() {
            event::listen_with(pointer_event)
        } else {
            Subscription::none()
        };

        Subscription::batch([changes, tick, pointer])
    }

    /// Whether a toast is pressed and the pointer must be followed window-wide.
    pub fn tracks_pointer(&self) -> bool {
        self.controllers.values().any(Controller::is_pressed)
    }

    fn layers<'a>(
        &'a self,
        content: impl Fn(&'a Toast, &'a Controller) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        let layers: Vec<Element<'a, Message>> = self
            .snapshot
            .iter()
            .filter_map(|toast| {
                let controller = self.controllers.get(toast.id())?;
                match controller.phase(toast) {
                    Phase::Hidden => None,
                    Phase::Dismissing if controller.exit_progress(self.now) >= 1.0 => None,
                    _ => Some(self.layer(toast, controller, content(toast, controller))),
                }
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn layer<'a>(
        &'a self,
        toast: &'a Toast,
        controller: &'a Controller,
        content: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let id = toast.id();
        let drag = controller.drag_visual();
        let mut area = toast_area(content)
            .translate_x(drag.translate_x)
            .measured(controller.is_measured())
            .on_measure(move |height| Message::Measured(id.clone(), height));

        if toast.is_visible() {
            area = area
                .hovered(controller.is_hovered())
                .interactive(toast.is_draggable() || toast.dismiss_on_click())
                .on_hover(move |hovered| Message::Hovered(id.clone(), hovered))
                .on_press(move |x, width| Message::Pressed {
                    id: id.clone(),
                    x,
                    width,
                });
        }

        let position = toast.position();
        Container::new(area)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal_alignment(position))
            .align_y(vertical_alignment(position))
            .padding(stack_padding(position, controller.last_offset()))
            .into()
    }

    fn opacity(&self, toast: &Toast, controller: &Controller) -> f32 {
        let base = match controller.phase(toast) {
            Phase::Entering | Phase::Hidden => opacity::TRANSPARENT,
            Phase::Dismissing => 1.0 - controller.exit_progress(self.now),
            Phase::Visible | Phase::Paused => {
                let enter = controller.enter_progress(self.now);
                opacity::ENTER_START + (opacity::OPAQUE - opacity::ENTER_START) * enter
            }
        };
        base * controller.drag_visual().opacity
    }
}

/// Distance of a toast from its anchor edge, plus the side margins.
fn stack_padding(position: Position, offset: f32) -> Padding {
    let along = EDGE_MARGIN + offset;
    Padding {
        top: if position.is_top() { along } else { 0.0 },
        bottom: if position.is_top() { 0.0 } else { along },
        left: EDGE_MARGIN,
        right: EDGE_MARGIN,
    }
}

fn horizontal_alignment(position: Position) -> alignment::Horizontal {
    if position.is_centered() {
        alignment::Horizontal::Center
    } else if position.is_left() {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    }
}

fn vertical_alignment(position: Position) -> alignment::Vertical {
    if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    }
}

fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            Some(Message::PointerMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. }) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}

/// Unsubscribes a store listener when dropped.
struct ListenerGuard {
    toaster: Toaster,
    listener: ListenerId,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.toaster.lock().unsubscribe(self.listener);
    }
}

/// Identity of the store a change subscription follows.
struct StoreKey(Toaster);

impl Hash for StoreKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "toastful-store".hash(state);
        self.0.key().hash(state);
    }
}

/// Emits [`Message::Changed`] after every store mutation.
fn store_changes(toaster: Toaster) -> impl iced::futures::Stream<Item = Message> {
    stream::channel(16, move |mut output: mpsc::Sender<Message>| async move {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let listener = toaster.lock().subscribe(move |_| {
            let _ = tx.send(());
        });
        let _guard = ListenerGuard { toaster, listener };

        while rx.recv().await.is_some() {
            if output.send(Message::Changed).await.is_err() {
                break;
            }
        }
    })
}
