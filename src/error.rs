use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported channel count: {channels} (expected 3)")]
    UnsupportedChannelCount { channels: u8 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
