//! Error types for the pixeltone codec.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding.
///
/// Every variant is fatal: the codec never returns a partial raster. A frame
/// whose spectrum is ambiguous still decodes to a best-effort gray value, so
/// there are no per-pixel errors.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Missing or malformed codec metadata.
    #[error("invalid codec metadata: {reason}")]
    InvalidMetadata {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// Fewer audio samples than a complete image requires.
    #[error("insufficient audio: need {expected} samples, got {actual}")]
    InsufficientAudio {
        /// Samples required for a full decode (`width * height * samples_per_pixel`).
        expected: usize,
        /// Samples actually supplied.
        actual: usize,
    },

    /// No FFT bin center falls inside the tolerance-widened frequency band.
    #[error(
        "no FFT bin inside {low:.1}..{high:.1} Hz (bin spacing {bin_hz:.1} Hz); \
         increase fft_size or narrow the frequency range"
    )]
    EmptyFrequencyBand {
        /// Lower edge of the search band in Hz.
        low: f64,
        /// Upper edge of the search band in Hz.
        high: f64,
        /// Spacing between adjacent bin centers in Hz.
        bin_hz: f64,
    },
}

impl CodecError {
    /// Creates an invalid-metadata error.
    pub fn invalid_metadata(reason: impl Into<String>) -> Self {
        Self::InvalidMetadata {
            reason: reason.into(),
        }
    }
}
