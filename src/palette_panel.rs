//! Palette panel: six tonal rows derived from the selected color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet};

use crate::color::Hsv;
use crate::constants;
use crate::palette::monochromatic_palette;

/// One palette row: tone label, hex readout, and a swatch.
fn tone_row(selected: RwSignal<Hsv>, index: usize) -> impl IntoView {
    h_stack((
        label(move || monochromatic_palette(selected.get())[index].label).style(|s| {
            s.width(60.0)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(80, 80, 80))
        }),
        label(move || {
            format!(
                "#{}",
                monochromatic_palette(selected.get())[index].color.to_hex()
            )
        })
        .style(|s| {
            s.width(64.0)
                .font_size(constants::LABEL_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        empty().style(move |st| {
            let (r, g, b) = monochromatic_palette(selected.get())[index].color.to_rgb();
            st.flex_grow(1.0)
                .height(constants::PALETTE_SWATCH_HEIGHT)
                .border_radius(constants::RADIUS)
                .border(1.0)
                .border_color(Color::rgb8(200, 200, 200))
                .background(Color::rgb8(r, g, b))
        }),
    ))
    .style(|st| st.items_center().gap(constants::GAP))
}

/// Creates the palette panel bound to `selected`.
pub(crate) fn palette_panel(selected: RwSignal<Hsv>) -> impl IntoView {
    v_stack((
        tone_row(selected, 0),
        tone_row(selected, 1),
        tone_row(selected, 2),
        tone_row(selected, 3),
        tone_row(selected, 4),
        tone_row(selected, 5),
    ))
    .style(|st| {
        st.gap(constants::GAP / 2.0)
            .padding(constants::PADDING)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
