//! Error type shared by every layer of the frame bridge.
//!
//! Errors travel up to the JNI boundary unchanged, where each variant is
//! thrown as the matching Java exception.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not allocate {bytes} byte output buffer")]
    AllocationFailure { bytes: usize },

    #[error("Transform '{step}' failed: {reason}")]
    TransformFailure { step: String, reason: String },

    #[error("Failed to write debug output {path}: {reason}")]
    DebugOutput { path: String, reason: String },

    #[error("JNI call failed: {0}")]
    Jni(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;

impl FrameError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FrameError::InvalidArgument(msg.into())
    }

    pub fn transform(step: impl Into<String>, reason: impl Into<String>) -> Self {
        FrameError::TransformFailure {
            step: step.into(),
            reason: reason.into(),
        }
    }

    pub fn debug_output(path: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        FrameError::DebugOutput {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// JNI class name of the exception thrown for this error.
    pub fn java_exception_class(&self) -> &'static str {
        match self {
            FrameError::InvalidArgument(_) => "java/lang/IllegalArgumentException",
            FrameError::AllocationFailure { .. } => "java/lang/OutOfMemoryError",
            FrameError::TransformFailure { .. }
            | FrameError::DebugOutput { .. }
            | FrameError::Jni(_) => "java/lang/RuntimeException",
        }
    }
}

/// Best-effort text of a caught panic payload
pub(crate) fn describe_panic(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl From<jni::errors::Error> for FrameError {
    fn from(err: jni::errors::Error) -> Self {
        FrameError::Jni(err.to_string())
    }
}
