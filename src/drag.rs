//! Drag-to-move state for frameless windows.
//!
//! Records the pointer's grip offset at press time and, while the button is
//! held, maps pointer positions to the window origin that keeps the grip
//! point fixed. Without a recorded offset, move events resolve to nothing.

use floem::kurbo::{Point, Vec2};

/// Offset-based drag tracker; one per draggable surface.
#[derive(Debug, Default)]
pub struct DragState {
    offset: Option<Vec2>,
}

impl DragState {
    /// Start a drag: record pointer-minus-origin so the grip point stays
    /// under the pointer for the rest of the gesture.
    pub fn press(&mut self, pointer: Point, origin: Point) {
        self.offset = Some(pointer - origin);
    }

    /// The window origin that keeps the grip fixed for this pointer
    /// position, or `None` when no drag is in progress.
    pub fn origin_for(&self, pointer: Point) -> Option<Point> {
        self.offset.map(|offset| pointer - offset)
    }

    /// End the drag; subsequent moves are ignored.
    pub fn release(&mut self) {
        self.offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_sequence() {
        let mut drag = DragState::default();

        // Window at (100,100), press at (150,160): grip offset is (50,60).
        drag.press(Point::new(150.0, 160.0), Point::new(100.0, 100.0));
        assert!(drag.is_dragging());

        // Pointer at (200,200): origin follows to (150,140).
        assert_eq!(
            drag.origin_for(Point::new(200.0, 200.0)),
            Some(Point::new(150.0, 140.0))
        );

        // Release clears the offset; further moves resolve to nothing.
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.origin_for(Point::new(300.0, 300.0)), None);
    }

    #[test]
    fn moves_before_press_are_ignored() {
        let drag = DragState::default();
        assert_eq!(drag.origin_for(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn stationary_pointer_keeps_origin() {
        let mut drag = DragState::default();
        let press = Point::new(42.0, 17.0);
        drag.press(press, Point::new(40.0, 10.0));
        assert_eq!(drag.origin_for(press), Some(Point::new(40.0, 10.0)));
    }
}
