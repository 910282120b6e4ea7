pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;
pub mod frame;
pub mod logging;
pub mod mode;
pub mod pipeline;
pub mod steps;
pub mod transforms;

pub use bridge::{FrameBridge, process_frame};
pub use config::{BridgeConfig, DebugConfig, EdgeThresholds};
pub use error::{FrameError, Result};
pub use frame::{CHANNELS, Frame, FrameDims, ProcessedFrame};
pub use mode::ProcessingMode;
pub use pipeline::{FrameStep, Pipeline, PipelineContext};
