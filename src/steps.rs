use image::DynamicImage;

use crate::config::EdgeThresholds;
use crate::error::Result;
use crate::pipeline::{FrameStep, PipelineContext};
use crate::transforms;

/// Convert image to single-channel luma
pub struct GrayscaleStep;

impl FrameStep for GrayscaleStep {
    fn process(&self, image: DynamicImage, _context: &PipelineContext) -> Result<DynamicImage> {
        Ok(DynamicImage::ImageLuma8(transforms::rgb_to_gray(&image)))
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Detect edges using Canny
pub struct EdgeDetectionStep {
    pub thresholds: EdgeThresholds,
}

impl FrameStep for EdgeDetectionStep {
    fn process(&self, image: DynamicImage, _context: &PipelineContext) -> Result<DynamicImage> {
        let gray = match image {
            DynamicImage::ImageLuma8(gray) => gray,
            other => transforms::rgb_to_gray(&other),
        };
        let edges = transforms::detect_edges(&gray, self.thresholds);
        Ok(DynamicImage::ImageLuma8(edges))
    }

    fn name(&self) -> &str {
        "Edge Detection"
    }
}

/// Replicate a single-channel result back into 3-channel RGB
pub struct ExpandToRgbStep;

impl FrameStep for ExpandToRgbStep {
    fn process(&self, image: DynamicImage, _context: &PipelineContext) -> Result<DynamicImage> {
        let rgb = match image {
            DynamicImage::ImageLuma8(gray) => transforms::gray_to_rgb(gray),
            other => other.into_rgb8(),
        };
        Ok(DynamicImage::ImageRgb8(rgb))
    }

    fn name(&self) -> &str {
        "Expand To RGB"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_grayscale_step_outputs_luma() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([90, 90, 90])));
        let out = GrayscaleStep.process(img, &PipelineContext::default()).unwrap();
        let gray = out.as_luma8().expect("luma output");
        assert!(gray.pixels().all(|p| p[0] == 90));
    }

    #[test]
    fn test_expand_step_outputs_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([12])));
        let out = ExpandToRgbStep.process(img, &PipelineContext::default()).unwrap();
        let rgb = out.as_rgb8().expect("rgb output");
        assert_eq!(rgb.dimensions(), (3, 2));
        assert!(rgb.pixels().all(|p| *p == Rgb([12, 12, 12])));
    }

    #[test]
    fn test_edge_step_keeps_dimensions() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(20, 10, |x, _| {
            if x < 10 { Luma([0]) } else { Luma([255]) }
        }));
        let step = EdgeDetectionStep {
            thresholds: EdgeThresholds::default(),
        };
        let out = step.process(img, &PipelineContext::default()).unwrap();
        assert_eq!((out.width(), out.height()), (20, 10));
        assert!(out.to_luma8().pixels().any(|p| p[0] == 255));
    }

    #[test]
    fn test_edge_step_accepts_rgb_and_luma() {
        let rgb = RgbImage::from_fn(16, 16, |x, _| {
            if x < 8 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        let step = EdgeDetectionStep {
            thresholds: EdgeThresholds::default(),
        };
        let context = PipelineContext::default();

        let luma = GrayscaleStep
            .process(DynamicImage::ImageRgb8(rgb.clone()), &context)
            .unwrap();
        let from_luma = step.process(luma, &context).unwrap();
        let from_rgb = step.process(DynamicImage::ImageRgb8(rgb), &context).unwrap();

        assert!(from_luma.as_luma8().is_some());
        assert_eq!(from_luma, from_rgb);
    }
}
