//! Standalone demo: opens the picker window and the palette window.
//!
//! Escape (or closing the picker window) quits the app.

use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_tonal::{tonal_palette, tonal_picker, Hsv};

fn main() {
    env_logger::init();

    let selected = RwSignal::new(Hsv::new(210, 200, 255));

    floem::Application::new()
        .window(
            move |_| {
                tonal_picker(selected)
                    .on_key_down(
                        Key::Named(NamedKey::Escape),
                        |m| m.is_empty(),
                        |_| floem::quit_app(),
                    )
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 330.0))
                    .title("floem-tonal"),
            ),
        )
        .window(
            move |_| tonal_palette(selected),
            Some(
                WindowConfig::default()
                    .size((300.0, 240.0))
                    .title("palette"),
            ),
        )
        .run();
}
