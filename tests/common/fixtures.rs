use flmap::ProcessedFrame;
use image::{Rgb, RgbImage};

/// A test frame: raw RGB bytes plus the dimensions to pass alongside them
pub struct TestFrame {
    pub bytes: Vec<u8>,
    pub width: i32,
    pub height: i32,
}

impl TestFrame {
    fn from_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            bytes: img.into_raw(),
            width: width as i32,
            height: height as i32,
        }
    }
}

/// Creates a width x height horizontal/vertical RGB gradient
pub fn gradient_frame(width: u32, height: u32) -> TestFrame {
    TestFrame::from_image(RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        Rgb([r, g, 128])
    }))
}

/// Creates a dark frame with a bright rectangle in the middle, which has
/// strong edges along its border.
pub fn square_frame(width: u32, height: u32) -> TestFrame {
    TestFrame::from_image(RgbImage::from_fn(width, height, |x, y| {
        let inside = x >= width / 4 && x < width * 3 / 4 && y >= height / 4 && y < height * 3 / 4;
        if inside {
            Rgb([240, 220, 200])
        } else {
            Rgb([10, 20, 30])
        }
    }))
}

/// Creates a frame filled with a single color
pub fn solid_frame(width: u32, height: u32, color: [u8; 3]) -> TestFrame {
    TestFrame::from_image(RgbImage::from_pixel(width, height, Rgb(color)))
}

/// Iterate the RGB triples of a processed frame
pub fn pixels(frame: &ProcessedFrame) -> impl Iterator<Item = &[u8]> {
    frame.as_bytes().chunks_exact(3)
}

/// Dimensions exercised by the shape tests
pub const TEST_SIZES: &[(u32, u32)] = &[
    (1, 1),
    (1, 7),
    (7, 1),
    (2, 1),
    (8, 8),
    (16, 9),
    (9, 16),
    (32, 24),
    (64, 12),
];
