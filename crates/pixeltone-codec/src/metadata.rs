//! Codec metadata: the side-channel contract between encoder and decoder.
//!
//! The synthesizer produces this value object alongside the sample sequence;
//! a container collaborator persists it (as JSON) next to the audio, and the
//! estimator requires it back verbatim. The JSON field set is a versioned
//! contract — decoders reject any document with a missing or malformed field
//! before touching a single audio sample.

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, CodecResult};

/// Parameters required to invert an encoded sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodecMetadata {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Frequency mapped to black (gray = 0), in Hz.
    pub f_min: f64,
    /// Frequency mapped to white (gray = 1), in Hz.
    pub f_max: f64,
    /// Length of each pixel's tone burst in samples.
    pub samples_per_pixel: u32,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// FFT length used at decode time (zero-padded frame size).
    pub fft_size: u32,
}

impl CodecMetadata {
    /// Checks every field for presence of a usable value.
    ///
    /// Zero-area geometry is allowed (it round-trips to an empty image); the
    /// numeric parameters are not allowed any degenerate value.
    pub fn validate(&self) -> CodecResult<()> {
        if !self.f_min.is_finite() || !self.f_max.is_finite() {
            return Err(CodecError::invalid_metadata(
                "f_min and f_max must be finite",
            ));
        }
        if self.f_min < 0.0 {
            return Err(CodecError::invalid_metadata(format!(
                "f_min must be non-negative, got {}",
                self.f_min
            )));
        }
        if self.f_min >= self.f_max {
            return Err(CodecError::invalid_metadata(format!(
                "f_min ({}) must be below f_max ({})",
                self.f_min, self.f_max
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(CodecError::invalid_metadata(
                "samples_per_pixel must be at least 1",
            ));
        }
        if self.sample_rate == 0 {
            return Err(CodecError::invalid_metadata("sample_rate must be positive"));
        }
        if self.fft_size == 0 {
            return Err(CodecError::invalid_metadata("fft_size must be positive"));
        }
        if self.fft_size < self.samples_per_pixel {
            return Err(CodecError::invalid_metadata(format!(
                "fft_size ({}) must be at least samples_per_pixel ({})",
                self.fft_size, self.samples_per_pixel
            )));
        }
        Ok(())
    }

    /// Total pixel count.
    pub fn num_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Exact sample-sequence length of a complete encoding.
    pub fn expected_samples(&self) -> usize {
        self.num_pixels() * self.samples_per_pixel as usize
    }

    /// Duration of a complete encoding in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.expected_samples() as f64 / self.sample_rate as f64
    }

    /// Serializes to the side-channel JSON document.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("metadata serialization cannot fail")
    }

    /// Parses and validates a side-channel JSON document.
    ///
    /// Any missing field, wrong type, or out-of-range value is an
    /// [`CodecError::InvalidMetadata`].
    pub fn from_json(json: &str) -> CodecResult<Self> {
        let metadata: Self = serde_json::from_str(json)
            .map_err(|e| CodecError::invalid_metadata(format!("malformed JSON: {e}")))?;
        metadata.validate()?;
        Ok(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid() -> CodecMetadata {
        CodecMetadata {
            width: 2,
            height: 2,
            f_min: 500.0,
            f_max: 3000.0,
            samples_per_pixel: 48,
            sample_rate: 44100,
            fft_size: 512,
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        valid().validate().expect("default parameters are valid");
    }

    #[test]
    fn test_json_round_trip() {
        let metadata = valid();
        let parsed = CodecMetadata::from_json(&metadata.to_json()).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_json_field_names_are_the_contract() {
        let json = valid().to_json();
        for field in [
            "width",
            "height",
            "f_min",
            "f_max",
            "samples_per_pixel",
            "sample_rate",
            "fft_size",
        ] {
            assert!(json.contains(&format!("\"{field}\"")), "missing {field}");
        }
    }

    #[test]
    fn test_missing_field_is_invalid_metadata() {
        let err = CodecMetadata::from_json(r#"{"width":2,"height":2}"#).unwrap_err();
        assert!(matches!(err, CodecError::InvalidMetadata { .. }));
    }

    #[test]
    fn test_inverted_band_rejected() {
        let mut metadata = valid();
        metadata.f_min = 3000.0;
        metadata.f_max = 500.0;
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_fft_smaller_than_burst_rejected() {
        let mut metadata = valid();
        metadata.fft_size = 32;
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_zero_samples_per_pixel_rejected() {
        let mut metadata = valid();
        metadata.samples_per_pixel = 0;
        assert!(metadata.validate().is_err());
    }

    #[test]
    fn test_expected_samples() {
        assert_eq!(valid().expected_samples(), 2 * 2 * 48);
        let mut metadata = valid();
        metadata.width = 0;
        assert_eq!(metadata.expected_samples(), 0);
    }

    #[test]
    fn test_duration() {
        let metadata = valid();
        assert!((metadata.duration_seconds() - 192.0 / 44100.0).abs() < 1e-12);
    }
}
