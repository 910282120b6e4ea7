use std::path::PathBuf;

use crate::error::{FrameError, Result};

/// Canny hysteresis thresholds, in luma units (0-255)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeThresholds {
    pub low: f32,
    pub high: f32,
}

impl EdgeThresholds {
    pub const DEFAULT_LOW: f32 = 50.0;
    pub const DEFAULT_HIGH: f32 = 150.0;

    pub fn new(low: f32, high: f32) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(FrameError::invalid(format!(
                "edge thresholds must be finite, got {}/{}",
                low, high
            )));
        }
        if low < 0.0 || low > high {
            return Err(FrameError::invalid(format!(
                "edge thresholds must satisfy 0 <= low <= high, got {}/{}",
                low, high
            )));
        }
        Ok(Self { low, high })
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self {
            low: Self::DEFAULT_LOW,
            high: Self::DEFAULT_HIGH,
        }
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// The directory must be empty or non-existent; it is created if missing.
    pub fn new(output_dir: PathBuf) -> anyhow::Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }
        Ok(Self { output_dir })
    }
}

/// Settings shared by every call made through a `FrameBridge`
#[derive(Clone, Debug, Default)]
pub struct BridgeConfig {
    pub edge_thresholds: EdgeThresholds,
    pub debug: Option<DebugConfig>,
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_thresholds(mut self, thresholds: EdgeThresholds) -> Self {
        self.edge_thresholds = thresholds;
        self
    }

    pub fn with_debug(mut self, debug: DebugConfig) -> Self {
        self.debug = Some(debug);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = EdgeThresholds::default();
        assert_eq!((t.low, t.high), (50.0, 150.0));
        assert_eq!(BridgeConfig::new().edge_thresholds, t);
    }

    #[test]
    fn test_thresholds_validation() {
        assert!(EdgeThresholds::new(10.0, 20.0).is_ok());
        assert!(EdgeThresholds::new(20.0, 20.0).is_ok());
        assert!(EdgeThresholds::new(30.0, 20.0).is_err());
        assert!(EdgeThresholds::new(-1.0, 20.0).is_err());
        assert!(EdgeThresholds::new(f32::NAN, 20.0).is_err());
        assert!(EdgeThresholds::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        assert!(DebugConfig::new(dir.path().to_path_buf()).is_ok());

        std::fs::write(dir.path().join("stale.png"), b"x")?;
        assert!(DebugConfig::new(dir.path().to_path_buf()).is_err());

        let fresh = dir.path().join("nested/out");
        DebugConfig::new(fresh.clone())?;
        assert!(fresh.is_dir());
        Ok(())
    }
}
