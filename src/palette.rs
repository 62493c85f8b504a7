// Palette handling: hex <-> Color conversion, the built-in preset pairs,
// and the seeded RNG used to pick a random preset.

use crate::error::{Error, Result};
use crate::types::Color;

/// Starting palette: warm red shadows into yellow highlights.
pub const DEFAULT_LOW: &str = "#d92626";
pub const DEFAULT_HIGH: &str = "#fff000";

/// Built-in endpoint pairs, (shadow color, highlight color).
pub const PRESETS: &[(&str, &str)] = &[
    ("#d92626", "#fff000"), // crimson / canary
    ("#1a2a6c", "#fdbb2d"), // midnight / amber
    ("#0f2027", "#2c5364"), // deep teal
    ("#3a1c71", "#ffaf7b"), // violet / peach
    ("#000000", "#00ff87"), // terminal green
    ("#4b134f", "#c94b4b"), // plum / brick
    ("#134e5e", "#71b280"), // pine / sage
    ("#200122", "#6f0000"), // darkroom red
];

impl Color {
    /// Parse a 6-hex-digit color, with or without the leading '#'.
    /// Anything else is `InvalidColorFormat`; there is no fallback color.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(s.to_string()));
        }
        let byte = |range: std::ops::Range<usize>| -> Result<f32> {
            let v = u8::from_str_radix(&hex[range], 16)
                .map_err(|_| Error::InvalidColorFormat(s.to_string()))?;
            Ok(v as f32 / 255.0)
        };
        Ok(Color::new(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }

    /// Serialize back to `#rrggbb` (lowercase), quantizing each channel to
    /// 8 bits. Exact round-trip for anything `from_hex` produced.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

/// Deterministic xorshift32 RNG for preset picking.
/// Seeded by the caller, so tests (and anyone who wants a reproducible
/// session) control the sequence.
#[derive(Clone)]
pub struct Rng32 {
    state: u32,
}

impl Rng32 {
    pub fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Xorshift, fast and good enough for picking presets
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish index in [0, len).
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_u32() as usize) % len
    }
}

/// Pick one preset pair at random. The RNG comes in from the caller; this
/// module holds no global generator.
pub fn random_preset(rng: &mut Rng32) -> (&'static str, &'static str) {
    PRESETS[rng.index(PRESETS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let a = Color::from_hex("#ff8000").unwrap();
        let b = Color::from_hex("ff8000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.r, 1.0);
        assert!((a.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(a.b, 0.0);
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "#fff", "#ff80001", "gg8000", "#ff 000", "#ff8000ff"] {
            assert!(
                matches!(Color::from_hex(bad), Err(Error::InvalidColorFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_round_trips_exactly() {
        for s in ["#000000", "#ffffff", "#d92626", "#fff000", "#123abc", "#0a0b0c"] {
            assert_eq!(Color::from_hex(s).unwrap().to_hex(), s);
        }
    }

    #[test]
    fn color_round_trips_within_one_step() {
        let c = Color::new(0.85, 0.15, 0.15);
        let back = Color::from_hex(&c.to_hex()).unwrap();
        for ch in 0..3 {
            assert!((c.channel(ch) - back.channel(ch)).abs() <= 1.0 / 255.0);
        }
    }

    #[test]
    fn every_preset_parses() {
        for (low, high) in PRESETS {
            Color::from_hex(low).unwrap();
            Color::from_hex(high).unwrap();
        }
        Color::from_hex(DEFAULT_LOW).unwrap();
        Color::from_hex(DEFAULT_HIGH).unwrap();
    }

    #[test]
    fn seeded_rng_picks_reproducibly() {
        let mut a = Rng32::from_seed(0xC0FFEE);
        let mut b = Rng32::from_seed(0xC0FFEE);
        for _ in 0..32 {
            assert_eq!(random_preset(&mut a), random_preset(&mut b));
        }
    }

    #[test]
    fn rng_indices_stay_in_range() {
        let mut rng = Rng32::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.index(PRESETS.len()) < PRESETS.len());
        }
    }
}
