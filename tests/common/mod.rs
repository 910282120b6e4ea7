mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from flmap for tests
pub use flmap::{
    BridgeConfig, DebugConfig, EdgeThresholds, FrameBridge, FrameError, ProcessedFrame,
    ProcessingMode, process_frame,
};
