// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use std::time::{Duration, Instant};
    use toastful::toast::Kind;
    use toastful::ui::design_tokens::{opacity, palette, sizing, spacing};
    use toastful::ui::toast_bar::{self, Appearance};
    use toastful::ui::{icons, Message, Toasts};
    use toastful::config::Config;
    use toastful::store::Store;
    use toastful::{ToastOptions, Toaster};

    #[test]
    fn kind_colors_come_from_the_palette() {
        assert_eq!(toast_bar::kind_color(Kind::Success), palette::SUCCESS_500);
        assert_eq!(toast_bar::kind_color(Kind::Failure), palette::ERROR_500);
        assert_eq!(toast_bar::kind_color(Kind::Warning), palette::WARNING_500);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::ENTER_START;
        let _ = sizing::ICON_TOAST;
    }

    #[test]
    fn icons_and_cards_build() {
        let _ = icons::check_circle();
        let _ = icons::cross_circle();
        let _ = icons::warning_triangle();

        let toaster = Toaster::from_store(Store::new());
        let handle = toaster.loading("Uploading", ToastOptions::new());
        let toast = toaster.get(handle.id()).expect("toast exists");
        let _: iced::Element<'_, ()> = toast_bar::view(
            &toast,
            Appearance {
                opacity: 0.5,
                age: Duration::from_millis(300),
                ..Appearance::default()
            },
        );
    }

    #[test]
    fn container_renders_with_and_without_default_style() {
        let toaster = Toaster::new();
        toaster.success("Saved", ToastOptions::new());
        toaster.toast("Styled", ToastOptions::new().class_name("loud"));

        let plain = Config {
            default_style: Some(false),
            ..Config::default()
        };
        for config in [Config::default(), plain] {
            let mut toasts = Toasts::new(toaster.clone(), &config)
                .with_class("loud", |theme: &Theme| iced::widget::container::Style {
                    text_color: Some(theme.palette().danger),
                    ..Default::default()
                });
            toasts.update(Message::Tick(Instant::now()));
            let _ = toasts.view();
            let _ = toasts.view_with(|toast| iced::widget::text(toast.resolve_output()).into());
        }
    }
}
