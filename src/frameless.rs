//! Frameless draggable window shell.
//!
//! A rounded body that fills its bounds and moves the whole window when
//! dragged. The shell observes pointer events before any children, so a
//! child never needs its handlers rewired to make the window draggable
//! through it.
//!
//! Pointer positions arrive relative to the current window origin, so the
//! origin resolved by [`DragState`] against a zero origin is exactly the
//! delta to apply to the window.

use floem::kurbo::{Point, Rect};
use floem_renderer::Renderer;
use floem::peniko::Color;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx},
    event::{Event, EventPropagation},
    View, ViewId,
};

use crate::constants;
use crate::drag::DragState;

pub(crate) struct FramelessShell {
    id: ViewId,
    drag: DragState,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a rounded shell of the given size that drags its window.
pub(crate) fn frameless_shell(width: f64, height: f64) -> FramelessShell {
    FramelessShell {
        id: ViewId::new(),
        drag: DragState::default(),
        size: Default::default(),
    }
    .style(move |s| {
        s.width(width as f32)
            .height(height as f32)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl View for FramelessShell {
    fn id(&self) -> ViewId {
        self.id
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.drag.press(e.pos, Point::ZERO);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if let Some(origin) = self.drag.origin_for(e.pos) {
                    floem::action::set_window_delta(origin.to_vec2());
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.drag.release();
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.drag.release();
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let body = Rect::new(0.0, 0.0, w, h).to_rounded_rect(constants::SHELL_CORNER_RADIUS);
        cx.fill(&body, Color::WHITE, 0.0);
        cx.stroke(
            &body,
            Color::rgba8(0, 0, 0, 30),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
