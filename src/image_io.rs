use image::{DynamicImage, RgbImage};
use std::path::Path;

use crate::error::{Error, Result};

/// The immutable image every transform starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    image: RgbImage,
}

impl SourceImage {
    pub fn new(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { image })
    }

    /// Accept a decoded image only if it carries exactly three color channels.
    /// Deeper RGB formats are narrowed to 8 bits per channel.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        let channels = img.color().channel_count();
        if channels != 3 {
            return Err(Error::UnsupportedChannelCount { channels });
        }
        let rgb = match img {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => other.to_rgb8(),
        };
        Self::new(rgb)
    }

    /// Build from a raw interleaved RGB buffer.
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self> {
        let rgb = RgbImage::from_raw(width, height, bytes)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Self::new(rgb)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

pub fn load_image(path: &Path) -> Result<SourceImage> {
    let img = image::open(path)?;
    SourceImage::from_dynamic(img)
}

pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path)?;
    Ok(())
}
