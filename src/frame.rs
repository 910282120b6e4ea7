use image::{DynamicImage, RgbImage};

use crate::error::{FrameError, Result};

/// Bytes per pixel of every frame crossing the bridge (interleaved RGB8).
pub const CHANNELS: usize = 3;

/// Validated frame dimensions. Only built through `FrameDims::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDims {
    width: u32,
    height: u32,
}

impl FrameDims {
    /// Validate caller-supplied dimensions. Both must be positive and the
    /// resulting byte length must fit in `usize`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(FrameError::invalid(format!(
                "frame dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Self {
            width: width as u32,
            height: height as u32,
        }
        .validated()
    }

    fn validated(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::invalid(format!(
                "frame dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.checked_byte_len().ok_or_else(|| {
            FrameError::invalid(format!("frame {}x{} is too large", self.width, self.height))
        })?;
        Ok(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn checked_byte_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(CHANNELS)
    }

    /// Number of bytes in an RGB frame of these dimensions
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * CHANNELS
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Read-only view over a caller-owned RGB buffer.
///
/// The view lives no longer than the borrow it was built from, so the bridge
/// cannot keep the caller's memory past the end of a call.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    data: &'a [u8],
    dims: FrameDims,
}

impl<'a> Frame<'a> {
    pub fn new(data: &'a [u8], width: i32, height: i32) -> Result<Self> {
        let dims = FrameDims::new(width, height)?;
        Self::with_dims(data, dims)
    }

    pub fn with_dims(data: &'a [u8], dims: FrameDims) -> Result<Self> {
        let dims = dims.validated()?;
        if data.len() != dims.byte_len() {
            return Err(FrameError::invalid(format!(
                "buffer length {} does not match {}x{}x{} = {}",
                data.len(),
                dims.width,
                dims.height,
                CHANNELS,
                dims.byte_len()
            )));
        }
        Ok(Self { data, dims })
    }

    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Copy the frame into a freshly allocated image.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let bytes = copy_to_owned(self.data)?;
        let rgb = RgbImage::from_raw(self.dims.width, self.dims.height, bytes)
            .ok_or_else(|| FrameError::invalid("buffer too small for frame dimensions"))?;
        Ok(DynamicImage::ImageRgb8(rgb))
    }
}

/// Output of a bridge call. Owns its bytes; always RGB8 with the input's
/// dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFrame {
    data: Vec<u8>,
    dims: FrameDims,
}

impl ProcessedFrame {
    /// Wrap a finished image, converting to RGB8 if needed. Fails when the
    /// image does not have the expected dimensions.
    pub fn from_image(image: DynamicImage, dims: FrameDims) -> Result<Self> {
        if image.width() != dims.width || image.height() != dims.height {
            return Err(FrameError::transform(
                "Output",
                format!(
                    "expected {}x{} image, got {}x{}",
                    dims.width,
                    dims.height,
                    image.width(),
                    image.height()
                ),
            ));
        }
        let data = image.into_rgb8().into_raw();
        if data.len() != dims.byte_len() {
            return Err(FrameError::transform(
                "Output",
                format!("expected {} bytes, got {}", dims.byte_len(), data.len()),
            ));
        }
        Ok(Self { data, dims })
    }

    /// Fresh copy of an input frame.
    pub fn copy_of(frame: &Frame<'_>) -> Result<Self> {
        Ok(Self {
            data: copy_to_owned(frame.as_bytes())?,
            dims: frame.dims(),
        })
    }

    pub fn dims(&self) -> FrameDims {
        self.dims
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGB triple at pixel index `i`
    pub fn pixel(&self, i: usize) -> Option<[u8; 3]> {
        let start = i.checked_mul(CHANNELS)?;
        let px = self.data.get(start..start.checked_add(CHANNELS)?)?;
        Some([px[0], px[1], px[2]])
    }
}

fn copy_to_owned(src: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(src.len())
        .map_err(|_| FrameError::AllocationFailure { bytes: src.len() })?;
    out.extend_from_slice(src);
    Ok(out)
}
