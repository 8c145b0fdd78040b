//! Main picker panel: color wheel, preview swatch, and hex readout.
//!
//! The wheel updates its marker live while dragging; the selected color is
//! published to `selected` only on pointer release, so the swatch, the hex
//! readout, and any palette view follow the committed color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::Hsv;
use crate::color_wheel::color_wheel;
use crate::constants;
use crate::controls::{color_swatch, copy_button, hex_readout};

/// Creates the picker panel bound to `selected`.
pub(crate) fn picker(selected: RwSignal<Hsv>) -> impl IntoView {
    v_stack((
        // Color wheel; commits the final color on release
        color_wheel(selected, move |color| {
            log::debug!("published selection #{}", color.to_hex());
            selected.set(color);
        })
        .style(|s| s.margin_top(12.0)),
        // Preview swatch + hex + copy row
        h_stack((
            color_swatch(selected),
            hex_readout(selected),
            empty().style(|s| s.flex_grow(1.0)),
            copy_button(move || format!("#{}", selected.get().to_hex())),
        ))
        .style(|st| st.items_center().gap(constants::GAP).margin_horiz(8.0)),
    ))
    .style(|st| {
        st.gap(constants::GAP)
            .padding_horiz(constants::PADDING)
            .padding_bottom(constants::PADDING)
            .padding_top(2.0)
            .size_full()
            .justify_center()
            .background(Color::rgb8(242, 242, 242))
    })
}
