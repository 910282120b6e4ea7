//! The frame bridge: validate a caller's RGB buffer, run the transform chain
//! for the requested mode, and hand back a freshly allocated RGB buffer.
//!
//! Calls are stateless. A `FrameBridge` only holds immutable configuration,
//! so one instance can serve any number of threads.

use log::debug;
use std::time::Instant;

use crate::config::BridgeConfig;
use crate::error::Result;
use crate::frame::{Frame, ProcessedFrame};
use crate::mode::ProcessingMode;
use crate::pipeline::Pipeline;

#[derive(Clone, Debug, Default)]
pub struct FrameBridge {
    config: BridgeConfig,
}

impl FrameBridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Process one frame. `buffer` is only read, and is not referenced after
    /// this returns.
    pub fn process_frame(
        &self,
        buffer: &[u8],
        width: i32,
        height: i32,
        mode: ProcessingMode,
    ) -> Result<ProcessedFrame> {
        let frame = Frame::new(buffer, width, height)?;
        self.process(&frame, mode)
    }

    /// Process an already validated frame
    pub fn process(&self, frame: &Frame<'_>, mode: ProcessingMode) -> Result<ProcessedFrame> {
        let start = Instant::now();
        let dims = frame.dims();

        let output = match mode {
            ProcessingMode::PassThrough(_) => ProcessedFrame::copy_of(frame)?,
            ProcessingMode::Grayscale | ProcessingMode::EdgeDetect => {
                let pipeline = Pipeline::for_mode(mode, &self.config);
                let image = pipeline.run(frame.to_image()?)?;
                ProcessedFrame::from_image(image, dims)?
            }
        };

        debug!(
            "Processed {}x{} frame ({}) in {:?}",
            dims.width(),
            dims.height(),
            mode,
            start.elapsed()
        );
        Ok(output)
    }
}

/// Process one frame with the default configuration.
pub fn process_frame(
    buffer: &[u8],
    width: i32,
    height: i32,
    mode: ProcessingMode,
) -> Result<ProcessedFrame> {
    FrameBridge::default().process_frame(buffer, width, height, mode)
}
