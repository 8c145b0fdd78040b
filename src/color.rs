//! Hsv type — the public color representation for floem-tonal.
//!
//! Stores hue in degrees (0–359) and saturation/value as 0–255 channels.
//! Uses direct math for color space conversions and hex parsing/formatting.

use crate::math;

/// Maximum saturation/value channel magnitude.
pub const CHANNEL_MAX: u8 = u8::MAX;

/// HSV color: hue 0–359, saturation and value 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    h: u16,
    s: u8,
    v: u8,
}

impl Default for Hsv {
    fn default() -> Self {
        Self {
            h: 0,
            s: 0,
            v: CHANNEL_MAX,
        }
    }
}

impl Hsv {
    /// Create from channel values. Hue is normalized modulo 360.
    pub fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h: h % 360, s, v }
    }

    /// Hue in degrees (0–359).
    pub fn h(&self) -> u16 {
        self.h
    }
    /// Saturation (0–255).
    pub fn s(&self) -> u8 {
        self.s
    }
    /// Value (0–255).
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let (r, g, b) = math::hsv_to_rgb(
            self.h as f64 / 360.0,
            self.s as f64 / CHANNEL_MAX as f64,
            self.v as f64 / CHANNEL_MAX as f64,
        );
        (
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        )
    }

    /// Create from 0–255 RGB values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (h, s, v) = math::rgb_to_hsv(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        Self {
            h: (h * 360.0).round() as u16 % 360,
            s: (s * CHANNEL_MAX as f64).round() as u8,
            v: (v * CHANNEL_MAX as f64).round() as u8,
        }
    }

    /// Parse a hex string (with or without `#`, 3 or 6 chars).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            3 => {
                let r = u8::from_str_radix(&stripped[0..1], 16).ok()?;
                let g = u8::from_str_radix(&stripped[1..2], 16).ok()?;
                let b = u8::from_str_radix(&stripped[2..3], 16).ok()?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::from_rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix), always 6 chars (RRGGBB).
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_normalizes_modulo_360() {
        assert_eq!(Hsv::new(360, 10, 10).h(), 0);
        assert_eq!(Hsv::new(570, 10, 10).h(), 210);
    }

    #[test]
    fn primaries_to_rgb() {
        assert_eq!(Hsv::new(0, 255, 255).to_rgb(), (255, 0, 0));
        assert_eq!(Hsv::new(120, 255, 255).to_rgb(), (0, 255, 0));
        assert_eq!(Hsv::new(240, 255, 255).to_rgb(), (0, 0, 255));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Hsv::new(0, 255, 255).to_hex(), "FF0000");
        assert_eq!(Hsv::new(0, 0, 0).to_hex(), "000000");
        assert_eq!(Hsv::new(0, 0, 255).to_hex(), "FFFFFF");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Hsv::from_hex("#FF0000"), Some(Hsv::new(0, 255, 255)));
        assert_eq!(Hsv::from_hex("00ff00"), Some(Hsv::new(120, 255, 255)));
        assert_eq!(Hsv::from_hex("#fff"), Some(Hsv::new(0, 0, 255)));
        assert_eq!(Hsv::from_hex("not-hex"), None);
        assert_eq!(Hsv::from_hex("12345"), None);
    }

    #[test]
    fn hex_round_trip() {
        let c = Hsv::from_hex("FF8000").unwrap();
        assert_eq!((c.h(), c.s(), c.v()), (30, 255, 255));
        assert_eq!(c.to_hex(), "FF8000");
    }
}
