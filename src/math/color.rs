//! Conversion between floating-point colors in `[0, 1]` and packed RGBA
//! bytes.
//!
//! Quantization truncates toward zero, so `0.999` maps to `254`. Channels
//! outside `[0, 1]` saturate to `0` or `255`.

use super::{Byte4, Float3, Float4};

/// Fully transparent black.
pub const BYTE4_ZERO: Byte4 = Byte4::new(0, 0, 0, 0);

/// Opaque white.
pub const BYTE4_WHITE: Byte4 = Byte4::new(255, 255, 255, 255);

/// Quantizes an opaque RGB color. Alpha is set to `255`.
#[must_use]
pub fn quantize_rgb(c: Float3) -> Byte4 {
    quantize_rgba(Float4::from_xyz(c, 1.0))
}

/// Quantizes an RGBA color.
#[must_use]
pub fn quantize_rgba(c: Float4) -> Byte4 {
    (c * 255.0).cast()
}

/// Expands packed bytes back into `[0, 1]` floats.
#[must_use]
pub fn color_to_vec(c: Byte4) -> Float4 {
    c.cast::<f32>() / 255.0
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn rgb_gets_opaque_alpha() {
        assert_eq!(quantize_rgb(Float3::new(1.0, 0.0, 0.5)), Byte4::new(255, 0, 127, 255));
    }

    #[test]
    fn rgba_truncates_and_saturates() {
        let c = Float4::new(0.999, -0.5, 2.0, 0.0);
        assert_eq!(quantize_rgba(c), Byte4::new(254, 0, 255, 0));
    }

    #[test]
    fn constants_expand_to_unit_range() {
        assert_eq!(color_to_vec(BYTE4_WHITE), Float4::splat(1.0));
        assert_eq!(color_to_vec(BYTE4_ZERO), Float4::zero());
    }

    #[test]
    fn round_trip_within_one_step() {
        let c = Float3::new(0.2, 0.55, 0.9);
        let back = color_to_vec(quantize_rgb(c));
        assert_abs_diff_eq!(back.xyz(), c, epsilon = 1.0 / 255.0);
        assert_eq!(back.w(), 1.0);
    }
}
