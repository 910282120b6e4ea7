//! JNI exports for `com.flmap.NativeBridge`.
//!
//! Every export converts its outcome into either a return value or a pending
//! Java exception. Nothing unwinds across the boundary.

use jni::JNIEnv;
use jni::objects::{JByteArray, JObject, ReleaseMode};
use jni::sys::{jbyteArray, jint};
use log::{LevelFilter, warn};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::bridge::FrameBridge;
use crate::error::{FrameError, Result, describe_panic};
use crate::frame::{Frame, FrameDims};
use crate::logging;
use crate::mode::ProcessingMode;

/// `external fun processFrame(frameData: ByteArray, width: Int, height: Int, mode: Int): ByteArray`
///
/// Returns `null` with an exception pending when the frame is rejected.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_flmap_NativeBridge_processFrame<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    frame_data: JByteArray<'local>,
    width: jint,
    height: jint,
    mode: jint,
) -> jbyteArray {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        process_frame_array(&mut env, &frame_data, width, height, ProcessingMode::from_code(mode))
    }))
    .unwrap_or_else(|payload| {
        Err(FrameError::transform(
            "processFrame",
            format!("native panic: {}", describe_panic(payload.as_ref())),
        ))
    });

    match result {
        Ok(array) => array.into_raw(),
        Err(err) => {
            throw_frame_error(&mut env, &err);
            ptr::null_mut()
        }
    }
}

/// `external fun enableVerboseLogging()`
///
/// `NativeBridge` must declare this next to `processFrame` for the export to
/// be reachable:
///
/// ```kotlin
/// external fun enableVerboseLogging()
/// ```
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_flmap_NativeBridge_enableVerboseLogging<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    logging::init_logging(LevelFilter::Debug);
}

fn process_frame_array<'local>(
    env: &mut JNIEnv<'local>,
    frame_data: &JByteArray<'_>,
    width: jint,
    height: jint,
    mode: ProcessingMode,
) -> Result<JByteArray<'local>> {
    let dims = FrameDims::new(width, height)?;
    if frame_data.is_null() {
        return Err(FrameError::invalid("frameData is null"));
    }

    let length = env.get_array_length(frame_data)?;
    if usize::try_from(length).ok() != Some(dims.byte_len()) {
        return Err(FrameError::invalid(format!(
            "frameData length {} does not match {}x{} RGB frame ({} bytes)",
            length,
            dims.width(),
            dims.height(),
            dims.byte_len()
        )));
    }

    let processed = {
        // SAFETY: the array is only read through `elements`, and no other JNI
        // call touches it while the elements are held. Dropping `elements`
        // releases them with JNI_ABORT, on error paths as well.
        let elements = unsafe { env.get_array_elements(frame_data, ReleaseMode::NoCopyBack)? };
        let bytes: &[u8] = bytemuck::cast_slice(&*elements);
        let frame = Frame::with_dims(bytes, dims)?;
        FrameBridge::default().process(&frame, mode)?
    };

    Ok(env.byte_array_from_slice(processed.as_bytes())?)
}

fn throw_frame_error(env: &mut JNIEnv<'_>, err: &FrameError) {
    warn!("processFrame failed: {}", err);
    if env.exception_check().unwrap_or(false) {
        return;
    }
    if let Err(e) = env.throw_new(err.java_exception_class(), err.to_string()) {
        warn!("Failed to throw {}: {}", err.java_exception_class(), e);
    }
}
