// The duotone mapping itself: every pixel's brightness picks a point on the
// line between the two palette endpoints.
// Visual outcome: shadows take on `color_low`, highlights take on
// `color_high`, midtones blend between them. Alpha is untouched.

use crate::types::{Color, PixelBuffer};

/// Perceptual luminance of an 8-bit RGB pixel, scaled to [0,1].
/// The 0.299/0.587/0.114 weights are the classic ITU-R BT.601 ones.
#[inline]
fn luma_weight(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Interpolate one channel between the endpoints and quantize to 8 bits.
/// `w` and both endpoint channels live in [0,1], so the result cannot
/// leave [0,255] before the cast.
#[inline]
fn mix_channel(low: f32, high: f32, w: f32) -> u8 {
    (255.0 * (low * (1.0 - w) + high * w)).round() as u8
}

/// Map `source` to a new duotone buffer. Pure: same inputs, byte-identical
/// output, `source` untouched. A zero-area source yields a zero-area result
/// with the same (degenerate) dimensions.
pub fn map(source: &PixelBuffer, color_low: Color, color_high: Color) -> PixelBuffer {
    let mut out = PixelBuffer::new(source.width, source.height);
    if source.is_empty() {
        return out;
    }

    for (src, dst) in source.pixels.chunks_exact(4).zip(out.pixels.chunks_exact_mut(4)) {
        let w = luma_weight(src[0], src[1], src[2]);
        dst[0] = mix_channel(color_low.r, color_high.r, w);
        dst[1] = mix_channel(color_low.g, color_high.g, w);
        dst[2] = mix_channel(color_low.b, color_high.b, w);
        dst[3] = src[3]; // alpha passes through unchanged
    }

    out
}
