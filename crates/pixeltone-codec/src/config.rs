//! Encoder configuration.
//!
//! All codec parameters travel in an explicit struct rather than process-wide
//! constants, so several configurations can coexist in one process (e.g. when
//! batch-testing different `samples_per_pixel` values).

use crate::error::CodecResult;
use crate::metadata::CodecMetadata;
use crate::raster::GrayRaster;

/// Tunable parameters of the synthesizer, minus the image geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncoderConfig {
    /// Frequency mapped to black, in Hz.
    pub f_min: f64,
    /// Frequency mapped to white, in Hz.
    pub f_max: f64,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Tone burst length per pixel in samples.
    pub samples_per_pixel: u32,
    /// FFT length the decoder will use; recorded into the metadata.
    pub fft_size: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            f_min: 500.0,
            f_max: 3000.0,
            sample_rate: 44100,
            samples_per_pixel: 48,
            fft_size: 512,
        }
    }
}

impl EncoderConfig {
    /// Attaches raster geometry to produce the metadata for one encoding.
    pub fn metadata_for(&self, raster: &GrayRaster) -> CodecMetadata {
        CodecMetadata {
            width: raster.width(),
            height: raster.height(),
            f_min: self.f_min,
            f_max: self.f_max,
            samples_per_pixel: self.samples_per_pixel,
            sample_rate: self.sample_rate,
            fft_size: self.fft_size,
        }
    }

    /// Validates the parameters via the metadata rules.
    pub fn validate(&self) -> CodecResult<()> {
        self.metadata_for(&GrayRaster::new(0, 0)).validate()
    }
}
