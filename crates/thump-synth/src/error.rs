//! Error types for thump synthesis and encoding.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while synthesizing or writing a thump.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The frame count does not fit in a 32-bit RIFF container.
    #[error("{frames} frames exceed the WAV size limit")]
    TooManyFrames {
        /// Requested frame count.
        frames: u64,
    },

    /// A quantized sample fell outside the signed 16-bit range.
    #[error("sample {index} overflows 16-bit range (scaled value {scaled})")]
    RangeOverflow {
        /// Frame index of the offending sample.
        index: usize,
        /// The scaled value before quantization.
        scaled: f64,
    },

    /// Parameter file could not be parsed.
    #[error("invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidSampleRate { .. } => "THUMP_001",
            SynthError::InvalidDuration { .. } => "THUMP_002",
            SynthError::InvalidParameter { .. } => "THUMP_003",
            SynthError::TooManyFrames { .. } => "THUMP_004",
            SynthError::RangeOverflow { .. } => "THUMP_005",
            SynthError::Json(_) => "THUMP_006",
            SynthError::Io(_) => "THUMP_007",
        }
    }

    /// Returns true for errors raised before any computation started.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            SynthError::InvalidSampleRate { .. }
                | SynthError::InvalidDuration { .. }
                | SynthError::InvalidParameter { .. }
                | SynthError::TooManyFrames { .. }
        )
    }
}
