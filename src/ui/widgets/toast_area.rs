// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget giving a toast its pointer and layout reporting.
//!
//! The wrapper reports the content's measured height until told it has been
//! recorded, reports hover changes and presses, and shifts the content
//! horizontally while it is being dragged.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

type OnMeasure<'a, Message> = Box<dyn Fn(f32) -> Message + 'a>;
type OnHover<'a, Message> = Box<dyn Fn(bool) -> Message + 'a>;
/// Receives the press position (window x) and the content width.
type OnPress<'a, Message> = Box<dyn Fn(f32, f32) -> Message + 'a>;

/// Wraps the visual of one toast.
pub struct ToastArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    translate_x: f32,
    measured: bool,
    hovered: bool,
    interactive: bool,
    on_measure: Option<OnMeasure<'a, Message>>,
    on_hover: Option<OnHover<'a, Message>>,
    on_press: Option<OnPress<'a, Message>>,
}

impl<'a, Message, Theme, Renderer> ToastArea<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            translate_x: 0.0,
            measured: false,
            hovered: false,
            interactive: false,
            on_measure: None,
            on_hover: None,
            on_press: None,
        }
    }

    /// Horizontal displacement of the content.
    #[must_use]
    pub fn translate_x(mut self, translate_x: f32) -> Self {
        self.translate_x = translate_x;
        self
    }

    /// Whether the height has already been recorded; stops `on_measure`.
    #[must_use]
    pub fn measured(mut self, measured: bool) -> Self {
        self.measured = measured;
        self
    }

    /// Hover state as last recorded; `on_hover` fires when it differs.
    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// Shows a pointer cursor over the toast.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub fn on_measure(mut self, f: impl Fn(f32) -> Message + 'a) -> Self {
        self.on_measure = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_hover(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_hover = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_press(mut self, f: impl Fn(f32, f32) -> Message + 'a) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ToastArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let content = self
            .content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits);
        let size = content.size();

        layout::Node::with_children(
            size,
            vec![content.translate(Vector::new(self.translate_x, 0.0))],
        )
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(content) = layout.children().next() else {
            return;
        };
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            content,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let Some(content) = layout.children().next() else {
            return;
        };
        let bounds = content.bounds();

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            content,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if !self.measured && bounds.height > 0.0 {
            if let Some(on_measure) = &self.on_measure {
                shell.publish(on_measure(bounds.height));
            }
        }

        let is_over = cursor.is_over(bounds);
        if is_over != self.hovered {
            if let Some(on_hover) = &self.on_hover {
                // Reported once; the parent feeds the new state back in
                self.hovered = is_over;
                shell.publish(on_hover(is_over));
            }
        }

        if shell.is_event_captured() {
            return;
        }
        if let Some(position) = press_position(event, cursor, bounds) {
            if let Some(on_press) = &self.on_press {
                shell.publish(on_press(position.x, bounds.width));
                shell.capture_event();
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let Some(content) = layout.children().next() else {
            return mouse::Interaction::None;
        };
        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            content,
            cursor,
            viewport,
            renderer,
        );

        if interaction != mouse::Interaction::None || !cursor.is_over(content.bounds()) {
            interaction
        } else if self.interactive {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content) = layout.children().next() {
            self.content
                .as_widget_mut()
                .operate(&mut tree.children[0], content, renderer, operation);
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ToastArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: ToastArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a toast area.
pub fn toast_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> ToastArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ToastArea::new(content)
}

/// Position of a left-button or finger press landing inside `bounds`.
fn press_position(event: &Event, cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_over(bounds)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            bounds.contains(*position).then_some(*position)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(10.0, 10.0), Size::new(100.0, 40.0))
    }

    #[test]
    fn left_press_inside_is_detected() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(20.0, 20.0));
        assert_eq!(
            press_position(&event, cursor, bounds()),
            Some(Point::new(20.0, 20.0))
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(200.0, 20.0));
        assert!(press_position(&event, cursor, bounds()).is_none());
    }

    #[test]
    fn right_press_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::new(20.0, 20.0));
        assert!(press_position(&event, cursor, bounds()).is_none());
    }

    #[test]
    fn finger_press_uses_touch_position() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(50.0, 30.0),
        });
        assert_eq!(
            press_position(&event, mouse::Cursor::Unavailable, bounds()),
            Some(Point::new(50.0, 30.0))
        );
    }
}
