use image::DynamicImage;
use log::debug;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::{BridgeConfig, DebugConfig};
use crate::error::{FrameError, Result, describe_panic};
use crate::mode::ProcessingMode;
use crate::steps::{EdgeDetectionStep, ExpandToRgbStep, GrayscaleStep};

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub debug: Option<DebugConfig>,
}

/// Trait that all frame steps must implement
pub trait FrameStep: Send + Sync {
    /// Transform one image into the next
    fn process(&self, image: DynamicImage, context: &PipelineContext) -> Result<DynamicImage>;

    /// Human-readable name for this step (used in logs and debug output)
    fn name(&self) -> &str;
}

/// Ordered chain of steps applied to a single frame
#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<Arc<dyn FrameStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard step chain for a processing mode
    pub fn for_mode(mode: ProcessingMode, config: &BridgeConfig) -> Self {
        let pipeline = Pipeline::new().with_context(PipelineContext {
            debug: config.debug.clone(),
        });

        match mode {
            ProcessingMode::Grayscale => pipeline
                .add_step(Arc::new(GrayscaleStep))
                .add_step(Arc::new(ExpandToRgbStep)),
            ProcessingMode::EdgeDetect => pipeline
                .add_step(Arc::new(GrayscaleStep))
                .add_step(Arc::new(EdgeDetectionStep {
                    thresholds: config.edge_thresholds,
                }))
                .add_step(Arc::new(ExpandToRgbStep)),
            ProcessingMode::PassThrough(_) => pipeline,
        }
    }

    pub fn with_context(mut self, context: PipelineContext) -> Self {
        self.context = context;
        self
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn FrameStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order. A panicking step is reported as a
    /// `TransformFailure` for that step.
    pub fn run(&self, input: DynamicImage) -> Result<DynamicImage> {
        if let Some(debug_config) = &self.context.debug {
            save_debug_image(debug_config, "00_input", &input)?;
        }

        let mut image = input;
        for (step_idx, step) in self.steps.iter().enumerate() {
            let step_name = step.name();
            debug!(
                "Running step: {} ({}x{})",
                step_name,
                image.width(),
                image.height()
            );

            let context = &self.context;
            image = panic::catch_unwind(AssertUnwindSafe(|| step.process(image, context)))
                .map_err(|payload| {
                    FrameError::transform(
                        step_name,
                        format!("panicked: {}", describe_panic(payload.as_ref())),
                    )
                })?
                .map_err(|e| match e {
                    FrameError::TransformFailure { .. } => e,
                    other => FrameError::transform(step_name, other.to_string()),
                })?;

            if let Some(debug_config) = &self.context.debug {
                let step_dir_name = format!(
                    "{:02}_{}",
                    step_idx + 1,
                    step_name.to_lowercase().replace(' ', "_")
                );
                save_debug_image(debug_config, &step_dir_name, &image)?;
            }
        }

        Ok(image)
    }
}

fn save_debug_image(debug_config: &DebugConfig, dir_name: &str, image: &DynamicImage) -> Result<()> {
    let step_dir = debug_config.output_dir.join(dir_name);
    let output_path = step_dir.join("frame.png");
    std::fs::create_dir_all(&step_dir).map_err(|e| FrameError::debug_output(&step_dir, e))?;
    image
        .save(&output_path)
        .map_err(|e| FrameError::debug_output(&output_path, e))?;
    debug!("Debug: saved {}/frame.png", dir_name);
    Ok(())
}
