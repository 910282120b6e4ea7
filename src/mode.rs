use std::fmt;

/// Operation selected by the caller's integer mode tag.
///
/// Every `i32` maps to a variant; anything that is not a known code becomes
/// `PassThrough`, keeping the raw value for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingMode {
    Grayscale,
    EdgeDetect,
    PassThrough(i32),
}

impl ProcessingMode {
    pub const GRAYSCALE_CODE: i32 = 0;
    pub const EDGE_DETECT_CODE: i32 = 1;

    pub fn from_code(code: i32) -> Self {
        match code {
            Self::GRAYSCALE_CODE => ProcessingMode::Grayscale,
            Self::EDGE_DETECT_CODE => ProcessingMode::EdgeDetect,
            other => ProcessingMode::PassThrough(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ProcessingMode::Grayscale => Self::GRAYSCALE_CODE,
            ProcessingMode::EdgeDetect => Self::EDGE_DETECT_CODE,
            ProcessingMode::PassThrough(code) => *code,
        }
    }
}

impl From<i32> for ProcessingMode {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingMode::Grayscale => write!(f, "grayscale"),
            ProcessingMode::EdgeDetect => write!(f, "edge-detect"),
            ProcessingMode::PassThrough(code) => write!(f, "pass-through (mode {})", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(ProcessingMode::from_code(0), ProcessingMode::Grayscale);
        assert_eq!(ProcessingMode::from_code(1), ProcessingMode::EdgeDetect);
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        for code in [-1, 2, 99, i32::MAX, i32::MIN] {
            let mode = ProcessingMode::from(code);
            assert_eq!(mode, ProcessingMode::PassThrough(code));
            assert_eq!(mode.code(), code);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ProcessingMode::EdgeDetect.to_string(), "edge-detect");
        assert_eq!(ProcessingMode::PassThrough(7).to_string(), "pass-through (mode 7)");
    }
}
