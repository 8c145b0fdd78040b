//! Circular HSV color wheel.
//!
//! Renders a wheel where angle maps to hue and radius maps to saturation,
//! at full value. The wheel is rasterized once to an RGBA8 pixel buffer and
//! the raster is scaled to widget size rather than redrawn. Dragging moves
//! the selection marker; releasing commits the selected color.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::Hsv;
use crate::constants;
use crate::geometry::{self, WheelSelection};
use crate::math;

/// Feather width in raster pixels for anti-aliasing the circle edge.
const FEATHER: f64 = 3.0;

/// Rasterize the color wheel at full value to an RGBA8 buffer.
///
/// `width`/`height` are in physical pixels. The circle is inset by
/// [`FEATHER`] so the full anti-alias gradient fits inside the buffer.
/// Saturation reaches 1.0 at the circle edge; the feather zone only
/// affects alpha, not color, so edge pixels stay fully saturated.
fn rasterize_wheel(width: u32, height: u32) -> Vec<u8> {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    let radius = cx.min(cy) - FEATHER;

    let mut buf = vec![0u8; (width * height * 4) as usize];

    for py in 0..height {
        let dy = py as f64 + 0.5 - cy;
        let row_offset = (py * width * 4) as usize;

        for px in 0..width {
            let dx = px as f64 + 0.5 - cx;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist > radius + FEATHER {
                continue; // fully outside
            }

            // Anti-alias: smooth fade over FEATHER pixels at the edge
            let alpha = ((radius + FEATHER - dist) / FEATHER).clamp(0.0, 1.0);

            // Clamp saturation to the circle edge so colors stay fully
            // saturated in the feather zone (feather only affects alpha).
            let sat = (dist / radius).min(1.0);
            let angle = dy.atan2(dx);
            let mut hue = angle / TAU;
            if hue < 0.0 {
                hue += 1.0;
            }

            let (r, g, b) = math::hsv_to_rgb(hue, sat, 1.0);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = (alpha * 255.0 + 0.5) as u8;
        }
    }

    buf
}

struct SelectionUpdate(Hsv);

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    selection: WheelSelection,
    size: floem::taffy::prelude::Size<f32>,
    on_commit: Option<Box<dyn Fn(Hsv)>>,
    /// Cached wheel image, rasterized once at a fixed resolution.
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates a circular color wheel bound to `selected`.
///
/// External writes to `selected` move the marker; dragging moves the marker
/// locally and `on_commit` receives the final color on pointer release.
pub(crate) fn color_wheel(
    selected: RwSignal<Hsv>,
    on_commit: impl Fn(Hsv) + 'static,
) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let color = selected.get();
        id.update_state(SelectionUpdate(color));
    });

    // Marker distance is normalized against a unit radius until the first
    // layout pass reports a real size.
    let initial = WheelSelection::from_hsv(selected.get_untracked(), 1.0);

    ColorWheel {
        id,
        held: false,
        selection: initial,
        size: Default::default(),
        on_commit: Some(Box::new(on_commit)),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(|s| {
        s.flex_grow(1.0)
            .aspect_ratio(1.0)
            .min_height(100.0)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    /// Side length of the square region used for the wheel.
    fn side(&self) -> f64 {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        w.min(h)
    }

    fn radius(&self) -> f64 {
        self.side() / 2.0
    }

    fn center(&self) -> Point {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        Point::new(w / 2.0, h / 2.0)
    }

    /// The square rect centered within the widget, used for drawing the wheel.
    fn wheel_rect(&self) -> Rect {
        let c = self.center();
        let r = self.radius();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        self.selection = geometry::resolve_pointer(pos, self.center(), radius);
    }

    fn selected_color(&self) -> Hsv {
        self.selection.to_hsv(self.radius())
    }

    /// Rasterize at a fixed resolution, then scale the raster image to
    /// widget size.
    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }

        let size = constants::WHEEL_RASTER_SIZE;
        let pixels = rasterize_wheel(size, size);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob, peniko::Format::Rgba8, size, size);

        self.wheel_hash = b"wheel".to_vec();
        self.wheel_img = Some(img);
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SelectionUpdate>() {
            let radius = self.radius().max(1.0);
            self.selection = WheelSelection::from_hsv(update.0, radius);
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.held {
                    self.held = false;
                    let color = self.selected_color();
                    if let Some(cb) = &self.on_commit {
                        cb(color);
                    }
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        // Before the first layout the marker distance is normalized to a
        // unit radius; rescale it whenever the wheel radius changes.
        let old_radius = if self.side() > 0.0 { self.radius() } else { 1.0 };
        self.size = layout.size;
        let new_radius = self.radius();
        if new_radius > 0.0 && (new_radius - old_radius).abs() > f64::EPSILON {
            self.selection.distance *= new_radius / old_radius;
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let center = self.center();
        let radius = self.radius();

        // Draw the wheel image (fixed-resolution, scaled by renderer)
        let wheel_rect = self.wheel_rect();
        let clip = Circle::new(center, radius);
        cx.save();
        cx.clip(&clip);
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                wheel_rect,
            );
        }
        cx.restore();

        // Draw the selection marker at the clamped on-wheel position
        let marker_pt = self.selection.marker_position(center);
        let outer = Circle::new(marker_pt, constants::MARKER_RADIUS + 1.0);
        cx.stroke(
            &outer,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let marker = Circle::new(marker_pt, constants::MARKER_RADIUS);
        cx.stroke(&marker, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
        let inner = Circle::new(marker_pt, constants::MARKER_RADIUS - 1.5);
        cx.stroke(
            &inner,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
