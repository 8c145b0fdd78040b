//! # floem-tonal
//!
//! Small desktop GUI utilities for [Floem](https://github.com/lapce/floem):
//! a hue/saturation color wheel with a monochromatic palette view, and a
//! frameless draggable window shell.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_tonal::{tonal_picker, tonal_palette, Hsv};
//!
//! let selected = RwSignal::new(Hsv::new(210, 200, 255));
//! // Use `tonal_picker(selected)` and `tonal_palette(selected)` in your
//! // Floem view trees; the picker publishes the selected color on release.
//! ```

mod color;
mod color_wheel;
mod constants;
mod controls;
mod drag;
mod frameless;
mod geometry;
mod math;
mod palette;
mod palette_panel;
mod picker;

pub use color::{Hsv, CHANNEL_MAX};
pub use drag::DragState;
pub use geometry::{resolve_pointer, WheelSelection};
pub use palette::{monochromatic_palette, PaletteEntry, PALETTE_LEN};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the color picker view.
///
/// The wheel tracks the pointer while dragging and writes the final color to
/// `selected` on release; external changes to the signal move the marker.
pub fn tonal_picker(selected: RwSignal<Hsv>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker(selected)
}

/// Creates the monochromatic palette view for `selected`.
pub fn tonal_palette(selected: RwSignal<Hsv>) -> impl IntoView {
    palette_panel::palette_panel(selected)
}

/// Creates a rounded draggable body for an undecorated window.
///
/// Meant for windows configured with `undecorated(true)` and
/// `with_transparent(true)`; dragging anywhere on the body moves the window.
pub fn draggable_shell(width: f64, height: f64) -> impl IntoView {
    frameless::frameless_shell(width, height)
}
