//! Monochromatic palette generation.
//!
//! Six tonal variants of one base color, derived by offsetting saturation
//! and pinning value per tone. Lighter tones wash out (less saturation, more
//! value); darker tones deepen (more saturation, less value). Hue is carried
//! through unchanged.

use crate::color::Hsv;

/// Number of entries in a generated palette.
pub const PALETTE_LEN: usize = 6;

/// One tone of a generated palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub label: &'static str,
    pub color: Hsv,
}

/// Tone table: (label, saturation delta, pinned value).
///
/// `None` for the value means the base color's own value is kept.
const TONES: [(&str, i16, Option<u8>); PALETTE_LEN] = [
    ("Lightest", -100, Some(255)),
    ("Light", -50, Some(240)),
    ("Base", 0, None),
    ("Dark", 30, Some(180)),
    ("Darker", 50, Some(120)),
    ("Darkest", 50, Some(60)),
];

/// Derive the six-tone monochromatic palette for `base`.
///
/// Pure and deterministic; saturation sums clamp to the channel range.
pub fn monochromatic_palette(base: Hsv) -> [PaletteEntry; PALETTE_LEN] {
    TONES.map(|(label, sat_delta, value)| {
        let s = (base.s() as i16 + sat_delta).clamp(0, 255) as u8;
        let v = value.unwrap_or_else(|| base.v());
        PaletteEntry {
            label,
            color: Hsv::new(base.h(), s, v),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_color_example() {
        let palette = monochromatic_palette(Hsv::new(210, 200, 255));
        let got: Vec<_> = palette
            .iter()
            .map(|e| (e.label, e.color.h(), e.color.s(), e.color.v()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("Lightest", 210, 100, 255),
                ("Light", 210, 150, 240),
                ("Base", 210, 200, 255),
                ("Dark", 210, 230, 180),
                ("Darker", 210, 250, 120),
                ("Darkest", 210, 250, 60),
            ]
        );
    }

    #[test]
    fn deterministic() {
        let base = Hsv::new(37, 142, 201);
        assert_eq!(monochromatic_palette(base), monochromatic_palette(base));
    }

    #[test]
    fn saturation_clamps_at_extremes() {
        // Fully saturated base: dark tones would overflow 255.
        let palette = monochromatic_palette(Hsv::new(0, 255, 255));
        assert_eq!(palette[3].color.s(), 255);
        assert_eq!(palette[4].color.s(), 255);
        assert_eq!(palette[5].color.s(), 255);

        // Desaturated black: light tones would go negative.
        let palette = monochromatic_palette(Hsv::new(0, 0, 0));
        assert_eq!(palette[0].color.s(), 0);
        assert_eq!(palette[1].color.s(), 0);
        assert_eq!(palette[2].color.v(), 0);
    }

    #[test]
    fn hue_is_preserved() {
        let palette = monochromatic_palette(Hsv::new(312, 90, 128));
        assert!(palette.iter().all(|e| e.color.h() == 312));
    }

    #[test]
    fn labels_in_order() {
        let labels: Vec<_> = monochromatic_palette(Hsv::default())
            .iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(
            labels,
            vec!["Lightest", "Light", "Base", "Dark", "Darker", "Darkest"]
        );
    }
}
