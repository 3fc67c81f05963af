// SPDX-License-Identifier: MPL-2.0
//! Demo layout: toast buttons, position picker and actions, with the toasts
//! stacked on top.

use super::{App, Demo, Message};
use crate::toast::Position;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, column, container, pick_list, row, stack, text, Row};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let demos = Row::with_children(Demo::ALL.iter().map(|demo| {
            button(text(demo.to_string()))
                .on_press(Message::Show(*demo))
                .into()
        }))
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS);

        let promises = row![
            button(text("Promise (resolves)")).on_press(Message::RunPromise { succeed: true }),
            button(text("Promise (rejects)")).on_press(Message::RunPromise { succeed: false }),
        ]
        .spacing(spacing::XS);

        let position = row![
            text("Position"),
            pick_list(Position::ALL, Some(self.position), Message::PositionSelected),
        ]
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center);

        let actions = row![
            button(text("Toggle last"))
                .on_press_maybe(self.last.as_ref().map(|_| Message::ToggleLast)),
            button(text("Dismiss all")).on_press(Message::DismissAll),
        ]
        .spacing(spacing::XS);

        let controls = column![
            text("Toastful").size(typography::TITLE_SM),
            demos,
            promises,
            position,
            actions,
        ]
        .spacing(spacing::MD)
        .max_width(640.0);

        let content = container(controls)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG);

        stack![content, self.toasts.view().map(Message::Toasts)].into()
    }
}
