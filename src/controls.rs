//! Small display components shared by the picker and palette views.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::Hsv;
use crate::constants;

/// A square swatch whose background tracks `color`.
pub(crate) fn color_swatch(color: RwSignal<Hsv>) -> impl IntoView {
    empty().style(move |st| {
        let (r, g, b) = color.get().to_rgb();
        st.width(constants::SWATCH_SIZE)
            .height(constants::SWATCH_SIZE)
            .border_radius(constants::RADIUS)
            .border(1.0)
            .border_color(Color::rgb8(180, 180, 180))
            .background(Color::rgb8(r, g, b))
    })
}

/// A monospace `#RRGGBB` readout that tracks `color`.
pub(crate) fn hex_readout(color: RwSignal<Hsv>) -> impl IntoView {
    label(move || format!("#{}", color.get().to_hex())).style(|s| {
        s.font_size(constants::LABEL_FONT)
            .font_family("monospace".to_string())
            .color(Color::rgb8(80, 80, 80))
    })
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}
