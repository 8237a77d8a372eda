use image::RgbImage;

use crate::color::factors::{Channel, ChannelFactors};
use crate::image_io::SourceImage;

/// Scale one 8-bit channel value.
///
/// The product is formed in `f32`, clipped to [0, 255] and truncated toward zero,
/// so `101 * 0.5` yields 50. A NaN product becomes 0.
pub fn scale_channel(value: u8, factor: f64) -> u8 {
    (value as f32 * factor as f32).clamp(0.0, 255.0) as u8
}

/// Multiply each channel of every pixel by its factor and clip to a byte.
///
/// Returns a new image of the same dimensions; `source` is left untouched, so the
/// transform can always be reapplied from scratch with different factors.
pub fn apply(source: &RgbImage, factors: ChannelFactors) -> RgbImage {
    let mut out = source.clone();
    for pixel in out.pixels_mut() {
        for &channel in Channel::ALL {
            let c = channel.index();
            pixel[c] = scale_channel(pixel[c], factors.get(channel));
        }
    }
    out
}

pub fn apply_rgb(source: &RgbImage, red: f64, green: f64, blue: f64) -> RgbImage {
    apply(source, ChannelFactors::new(red, green, blue))
}

pub fn apply_to_source(source: &SourceImage, factors: ChannelFactors) -> RgbImage {
    apply(source.image(), factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([
                (x * 255 / (w - 1)) as u8,
                (y * 255 / (h - 1)) as u8,
                ((x + y) * 255 / (w + h - 2)) as u8,
            ])
        })
    }

    #[test]
    fn identity_factors_return_source() {
        let img = gradient(32, 16);
        assert_eq!(apply(&img, ChannelFactors::default()), img);
    }

    #[test]
    fn output_has_source_dimensions() {
        let img = gradient(17, 5);
        let out = apply_rgb(&img, 0.3, 1.7, 2.0);
        assert_eq!(out.dimensions(), (17, 5));
    }

    #[test]
    fn mixed_factors_scale_each_channel() {
        let img = RgbImage::from_pixel(2, 2, Rgb([200, 100, 50]));
        let out = apply_rgb(&img, 0.5, 2.0, 1.0);
        assert!(out.pixels().all(|p| *p == Rgb([100, 200, 50])));
    }

    #[test]
    fn products_above_255_saturate() {
        let img = RgbImage::from_pixel(3, 1, Rgb([200, 200, 200]));
        let out = apply_rgb(&img, 2.0, 2.0, 2.0);
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn zero_factor_clears_channel() {
        let img = gradient(16, 16);
        let out = apply_rgb(&img, 1.0, 0.0, 1.0);
        for (src, dst) in img.pixels().zip(out.pixels()) {
            assert_eq!(dst[1], 0);
            assert_eq!(dst[0], src[0]);
            assert_eq!(dst[2], src[2]);
        }
    }

    #[test]
    fn fractional_results_truncate() {
        assert_eq!(scale_channel(101, 0.5), 50);
        assert_eq!(scale_channel(3, 0.9), 2);
        assert_eq!(scale_channel(255, 0.999), 254);
    }

    #[test]
    fn out_of_range_factors_still_clip() {
        assert_eq!(scale_channel(10, -1.0), 0);
        assert_eq!(scale_channel(1, 1000.0), 255);
        assert_eq!(scale_channel(0, 2.0), 0);
        assert_eq!(scale_channel(128, f64::NAN), 0);

        let img = gradient(8, 8);
        let out = apply_rgb(&img, -3.0, 10.0, 0.0);
        for (src, dst) in img.pixels().zip(out.pixels()) {
            assert_eq!(dst[0], 0);
            assert_eq!(dst[1], (src[1] as u32 * 10).min(255) as u8);
            assert_eq!(dst[2], 0);
        }
    }

    #[test]
    fn repeated_application_is_bit_identical() {
        let img = gradient(24, 24);
        let before = img.clone();
        let factors = ChannelFactors::new(0.37, 1.41, 1.99);
        let a = apply(&img, factors);
        let b = apply(&img, factors);
        assert_eq!(a, b);
        assert_eq!(img, before);
    }

    #[test]
    fn increasing_factor_increases_output_until_saturation() {
        let v = 60u8;
        let mut prev = scale_channel(v, 0.1);
        let mut saturated = false;
        for step in 2..=50 {
            let factor = step as f64 * 0.1;
            let out = scale_channel(v, factor);
            if saturated {
                assert_eq!(out, 255);
            } else {
                assert!(out > prev, "factor {factor}: {out} <= {prev}");
            }
            saturated = out == 255;
            prev = out;
        }
        assert!(saturated);
    }
}
