//! Blocking image decode helpers.
//!
//! Decoding happens on rayon worker threads; only the raw RGB8 data
//! crosses back to the UI thread, where it becomes a `slint::Image`
//! (`slint::Image` is not `Send`).

use crate::error::Result;
use slint::{Image, Rgb8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGB8 data with dimensions.
pub type DecodedImage = (Vec<u8>, u32, u32);

/// Decodes an image file at full resolution.
pub fn load_image_blocking(path: &Path) -> Result<DecodedImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let rgb = img.to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    Ok((rgb.into_raw(), width, height))
}

/// Decodes an image file and downscales it so the longest edge is at most
/// `edge` pixels. Aspect ratio is preserved.
pub fn load_thumbnail_blocking(path: &Path, edge: u32) -> Result<DecodedImage> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let rgb = img.thumbnail(edge, edge).to_rgb8();
    let (width, height) = (rgb.width(), rgb.height());
    Ok((rgb.into_raw(), width, height))
}

/// Builds a `slint::Image` from raw RGB8 data. UI thread only.
pub fn create_slint_image(data: Vec<u8>, width: u32, height: u32) -> Image {
    let buffer = SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(&data, width, height);
    Image::from_rgb8(buffer)
}
