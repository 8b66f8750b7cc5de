//! Utility functions for visualization: series colors, number formatting, distances.

use super::types::Point;

/// 8-bit RGBA color, independent of any drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const HEART_RED: Rgba = Rgba::opaque(214, 31, 58);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Alpha in `0.0..=1.0`, as plotters expects it.
    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

const COLOR_SEED: u64 = 0x7AB1_07C0_10A5_EED5;

/// SplitMix64 finalizer; a bijection on `u64`, so distinct indices never share a state.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Fill color of series/row `index`: pseudo-random but a pure function of `index`,
/// so the window and the exported image agree.
pub fn color_of(index: usize) -> Rgba {
    let rgb = splitmix64(index as u64 ^ COLOR_SEED) & 0x00FF_FFFF;
    Rgba::opaque((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Up to four decimals, trailing zeros and dot trimmed: `80`, `0.5`, `1.25`.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        let cases = [
            ((0.0, 0.0), (3.0, 4.0), 5.0),
            ((0.0, 0.0), (5.0, -12.0), 13.0),
            ((-1.0, -1.0), (-1.0, -1.0), 0.0),
            ((-5.0, 0.0), (3.0, 0.0), 8.0),
            ((-7.0, -8.0), (-3.0, -5.0), 5.0),
        ];
        for ((ax, ay), (bx, by), want) in cases {
            let d = distance(Point::new(ax, ay), Point::new(bx, by));
            assert!((d - want).abs() < 1e-9, "{d} != {want}");
        }
    }

    #[test]
    fn format_trims_zeros() {
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(2.0 / 3.0), "0.6667");
    }

    #[test]
    fn colors_are_opaque() {
        for i in 0..64 {
            assert_eq!(color_of(i).a, 0xFF);
        }
    }
}
