//! Pixel transforms backed by `image` and `imageproc`.
//!
//! These are the only places pixel math happens; the rest of the crate only
//! moves buffers around.

use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::edges::canny;

use crate::config::EdgeThresholds;

/// Convert image to grayscale
pub fn rgb_to_gray(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Replicate a single channel across R, G and B
pub fn gray_to_rgb(img: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(img).into_rgb8()
}

/// Detect edges using Canny edge detector. Output pixels are 0 or 255.
pub fn detect_edges(img: &GrayImage, thresholds: EdgeThresholds) -> GrayImage {
    canny(img, thresholds.low, thresholds.high)
}
