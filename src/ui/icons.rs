// SPDX-License-Identifier: MPL-2.0
//! Kind icons.
//!
//! Each icon is a 24x24 outline path stroked in black; the view tints it with
//! the kind color through the SVG style. Handles are built once and cached in
//! a `OnceLock`.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Wraps an outline path in a stroked 24x24 SVG document.
fn outline_svg(path: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" fill=\"none\" viewBox=\"0 0 24 24\" \
         stroke=\"black\"><path stroke-linecap=\"round\" stroke-linejoin=\"round\" \
         stroke-width=\"2\" d=\"{path}\"/></svg>"
    )
}

macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle =
                HANDLE.get_or_init(|| Handle::from_memory(outline_svg($path).into_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    check_circle,
    "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    "Check mark in a circle."
);
define_icon!(
    cross_circle,
    "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
    "Cross in a circle."
);
define_icon!(
    warning_triangle,
    "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
    "Exclamation mark in a triangle."
);
