//! Standalone demo: an undecorated, transparent window with a rounded body
//! that is dragged to move the window. Escape quits (there is no chrome).

use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_tonal::draggable_shell;

fn main() {
    env_logger::init();

    floem::Application::new()
        .window(
            move |_| {
                container(draggable_shell(800.0, 400.0))
                    .style(|s| s.size_full().items_center().justify_center())
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
                    .size((900.0, 500.0))
                    .title("frameless")
                    .undecorated(true)
                    .with_transparent(true)
                    .apply_default_theme(false),
            ),
        )
        .run();
}
