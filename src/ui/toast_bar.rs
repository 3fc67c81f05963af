// SPDX-License-Identifier: MPL-2.0
//! Visual of a single toast: kind icon and text on a card.
//!
//! The card only carries content; placement, fades and pointer handling are
//! done by [`super::toasts::Toasts`].

use crate::toast::{Kind, Toast};
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, svg, text, Container, Row};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::sync::Arc;
use std::time::Duration;

/// Style function registered for a toast class name.
pub type ClassStyle = Arc<dyn Fn(&Theme) -> container::Style + Send + Sync>;

/// How a toast should look in the current frame.
#[derive(Clone)]
pub struct Appearance {
    /// Overall opacity, combining fades and drag.
    pub opacity: f32,
    /// How long the toast has existed; turns the loading spinner.
    pub age: Duration,
    /// Apply the built-in card style.
    pub default_style: bool,
    /// Style of the toast's class, drawn over the default one.
    pub class: Option<ClassStyle>,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            age: Duration::ZERO,
            default_style: true,
            class: None,
        }
    }
}

/// Accent of each kind.
#[must_use]
pub fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Success => palette::SUCCESS_500,
        Kind::Failure => palette::ERROR_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Loading => palette::GRAY_400,
    }
}

/// Renders the card of `toast`.
pub fn view<'a, Message: 'a>(toast: &Toast, appearance: Appearance) -> Element<'a, Message> {
    let opacity = appearance.opacity;

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if let Some(kind) = toast.kind() {
        content = content.push(kind_icon(kind, opacity, appearance.age));
    }
    content = content.push(text(toast.resolve_output()).size(typography::BODY));

    let default_style = appearance.default_style;
    let class = appearance.class;
    Container::new(content)
        .max_width(sizing::TOAST_MAX_WIDTH)
        .padding(if default_style || class.is_some() {
            [spacing::SM, spacing::MD]
        } else {
            [0.0, 0.0]
        })
        .style(move |theme: &Theme| {
            let style = match &class {
                Some(class) => class(theme),
                None if default_style => card_style(theme),
                None => container::Style::default(),
            };
            fade(style, opacity)
        })
        .into()
}

fn kind_icon<'a, Message: 'a>(kind: Kind, opacity: f32, age: Duration) -> Element<'a, Message> {
    let color = kind_color(kind).scale_alpha(opacity);
    let icon = match kind {
        Kind::Success => icons::check_circle(),
        Kind::Failure => icons::cross_circle(),
        Kind::Warning => icons::warning_triangle(),
        Kind::Loading => return AnimatedSpinner::new(color).elapsed(age).into_element(),
    };

    icon.width(Length::Fixed(sizing::ICON_TOAST))
        .height(Length::Fixed(sizing::ICON_TOAST))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
        .into()
}

/// Built-in card: white, rounded, dark text, soft shadow.
fn card_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        text_color: Some(palette::GRAY_800),
        ..container::Style::default()
    }
}

/// Scales every color of `style` by `opacity`.
fn fade(style: container::Style, opacity: f32) -> container::Style {
    if opacity >= 1.0 {
        return style;
    }
    container::Style {
        background: style
            .background
            .map(|background| background.scale_alpha(opacity)),
        text_color: style.text_color.map(|color| color.scale_alpha(opacity)),
        border: Border {
            color: style.border.color.scale_alpha(opacity),
            ..style.border
        },
        shadow: iced::Shadow {
            color: style.shadow.color.scale_alpha(opacity),
            ..style.shadow
        },
        ..style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_style_matches_default_look() {
        let style = card_style(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
        assert_eq!(style.text_color, Some(palette::GRAY_800));
        assert_eq!(style.shadow, shadow::SM);
    }

    #[test]
    fn fade_scales_all_colors() {
        let faded = fade(card_style(&Theme::Light), 0.5);
        assert_eq!(
            faded.background,
            Some(Background::Color(Color {
                a: 0.5,
                ..palette::WHITE
            }))
        );
        assert_eq!(faded.text_color.map(|color| color.a), Some(0.5));
        assert_eq!(faded.shadow.color.a, shadow::SM.color.a * 0.5);
    }

    #[test]
    fn full_opacity_keeps_style() {
        let style = card_style(&Theme::Light);
        assert_eq!(fade(style, 1.0), style);
    }

    #[test]
    fn each_kind_has_its_accent() {
        assert_eq!(kind_color(Kind::Success), palette::SUCCESS_500);
        assert_eq!(kind_color(Kind::Failure), palette::ERROR_500);
        assert_eq!(kind_color(Kind::Warning), palette::WARNING_500);
    }
}
