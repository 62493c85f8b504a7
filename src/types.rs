// Core data model: the two-color palette endpoints and the RGBA pixel grid
// every other module computes on.

/// One endpoint color of the duotone palette.
/// Channels are normalized intensities; the constructor keeps them in [0,1],
/// and nothing mutates a `Color` after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Build a color, clamping each channel into [0,1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Channel by index (0=red, 1=green, 2=blue). Handy for per-channel loops.
    #[inline]
    pub fn channel(&self, c: usize) -> f32 {
        match c {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }
}

/// A width x height image, 4 channels per pixel (R, G, B, A), one byte each,
/// stored row-major. Always exactly `width * height * 4` bytes.
/// Owned by whoever is computing on it; never shared mutably.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>, // RGBA, row-major
}

impl PixelBuffer {
    /// A zero-filled (transparent black) buffer of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u8; width * height * 4] }
    }

    /// Wrap an existing RGBA byte vector. The caller guarantees the length
    /// matches `width * height * 4`.
    pub fn from_rgba_bytes(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width * height * 4);
        Self { width, height, pixels }
    }

    /// Number of pixels (not bytes).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// True when the image has no pixels at all (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Pack into `out` as one 0x00RRGGBB u32 per pixel, the layout minifb
    /// wants. Alpha is not displayed; the window has no transparency.
    pub fn pack_0rgb(&self, out: &mut Vec<u32>) {
        out.clear();
        out.reserve(self.pixel_count());
        for px in self.pixels.chunks_exact(4) {
            let r = px[0] as u32;
            let g = px[1] as u32;
            let b = px[2] as u32;
            out.push((r << 16) | (g << 8) | b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_new_clamps_out_of_range_channels() {
        let c = Color::new(-0.5, 1.5, 0.25);
        assert_eq!(c, Color { r: 0.0, g: 1.0, b: 0.25 });
    }

    #[test]
    fn channel_indexes_rgb() {
        let c = Color::new(0.1, 0.2, 0.3);
        assert_eq!(c.channel(0), 0.1);
        assert_eq!(c.channel(1), 0.2);
        assert_eq!(c.channel(2), 0.3);
    }

    #[test]
    fn new_buffer_is_sized_and_zeroed() {
        let fb = PixelBuffer::new(3, 2);
        assert_eq!(fb.pixels.len(), 3 * 2 * 4);
        assert!(fb.pixels.iter().all(|&b| b == 0));
        assert!(!fb.is_empty());
        assert!(PixelBuffer::new(0, 5).is_empty());
    }

    #[test]
    fn pack_0rgb_lays_out_red_green_blue() {
        let fb = PixelBuffer::from_rgba_bytes(2, 1, vec![255, 0, 0, 255, 0, 128, 64, 10]);
        let mut out = Vec::new();
        fb.pack_0rgb(&mut out);
        assert_eq!(out, vec![0x00FF0000, 0x00008040]);
    }
}
