//! Built-in sample picture shown at startup.
//!
//! A procedurally painted 512x512 landscape: a sky gradient, a bright sun, hills
//! and a dark foreground. It covers the full byte range on every channel so that
//! both darkening and clipping are visible when the factors move.

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::image_io::SourceImage;

pub const SAMPLE_SIZE: u32 = 512;

const SUN_CENTER: (f32, f32) = (0.72, 0.24);
const SUN_RADIUS: f32 = 0.09;

pub fn sample_image() -> Result<SourceImage> {
    SourceImage::new(render(SAMPLE_SIZE, SAMPLE_SIZE))
}

fn render(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let u = x as f32 / (width - 1) as f32;
        let v = y as f32 / (height - 1) as f32;
        Rgb(to_bytes(shade(u, v)))
    })
}

/// Color at normalized coordinates, each component in [0, 1].
fn shade(u: f32, v: f32) -> [f32; 3] {
    let horizon = 0.55 + 0.06 * (u * 9.0).sin() + 0.03 * (u * 23.0).cos();

    if v < horizon {
        let t = v / horizon;
        let mut sky = [0.25 + 0.6 * t, 0.45 + 0.4 * t, 0.95 - 0.15 * t];

        let dx = u - SUN_CENTER.0;
        let dy = v - SUN_CENTER.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < SUN_RADIUS {
            return [1.0, 0.95, 0.7];
        }
        let glow = (1.0 - (dist - SUN_RADIUS) / 0.25).max(0.0);
        sky[0] += 0.5 * glow * glow;
        sky[1] += 0.3 * glow * glow;
        sky
    } else {
        let t = (v - horizon) / (1.0 - horizon);
        let stripes = 0.5 + 0.5 * (u * 60.0 + t * 14.0).sin();
        let shadow = 1.0 - 0.85 * t * t;
        [
            (0.35 + 0.25 * stripes) * shadow,
            (0.55 + 0.2 * stripes) * shadow,
            (0.15 + 0.1 * (1.0 - stripes)) * shadow,
        ]
    }
}

fn to_bytes(rgb: [f32; 3]) -> [u8; 3] {
    rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}
