//! Sizing, color, and styling constants for the picker and shell.

/// Resolution (square, physical pixels) of the cached wheel raster.
pub const WHEEL_RASTER_SIZE: u32 = 512;

/// Marker circle radius on the wheel
pub const MARKER_RADIUS: f64 = 8.0;

/// Border radius for swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Label font size
pub const LABEL_FONT: f32 = 11.0;

/// Preview swatch side length
pub const SWATCH_SIZE: f32 = 32.0;

/// Palette row swatch height
pub const PALETTE_SWATCH_HEIGHT: f32 = 28.0;

/// Corner radius of the frameless shell body
pub const SHELL_CORNER_RADIUS: f64 = 50.0;
