//! Synthesizer: raster in, frequency-modulated sample sequence out.
//!
//! Each pixel becomes a fixed-length burst of a pure sine tone whose
//! frequency encodes the intensity linearly between `f_min` (black) and
//! `f_max` (white). Phase resets to zero at every burst boundary; the
//! resulting clicks are accepted so that each burst's spectrum stays
//! independent of its neighbors and a single windowed FFT recovers it
//! exactly.

use std::f64::consts::TAU;

use crate::config::EncoderConfig;
use crate::error::CodecResult;
use crate::metadata::CodecMetadata;
use crate::raster::GrayRaster;
use crate::traversal::ScanOrder;

/// Result of one encoding run.
#[derive(Debug, Clone)]
pub struct EncodeOutput {
    /// Mono samples in `[-1, 1]`, exactly `width * height * samples_per_pixel` long.
    pub samples: Vec<f32>,
    /// Side-channel metadata the decoder needs verbatim.
    pub metadata: CodecMetadata,
}

/// Encodes a raster into a tone sequence.
///
/// Pixels are visited in `order`; burst `i` of the output always belongs to
/// `order.coord(i)`. A zero-area raster encodes to an empty sample sequence
/// with valid metadata.
///
/// # Errors
/// Returns [`crate::CodecError::InvalidMetadata`] when the configuration is
/// degenerate (`f_min >= f_max`, zero burst length, ...).
pub fn encode(
    raster: &GrayRaster,
    config: &EncoderConfig,
    order: ScanOrder,
) -> CodecResult<EncodeOutput> {
    let metadata = config.metadata_for(raster);
    metadata.validate()?;

    let num_pixels = raster.num_pixels();
    let burst_len = config.samples_per_pixel as usize;
    let mut samples = Vec::with_capacity(num_pixels * burst_len);

    let band = config.f_max - config.f_min;
    let sample_rate = config.sample_rate as f64;

    for i in 0..num_pixels {
        let (x, y) = order.coord(i, raster.width(), raster.height());
        let gray = raster.get(x, y) as f64;
        let freq = config.f_min + gray * band;
        append_burst(&mut samples, freq, sample_rate, burst_len);
    }

    debug_assert_eq!(samples.len(), metadata.expected_samples());
    Ok(EncodeOutput { samples, metadata })
}

/// Appends one phase-reset sine burst.
fn append_burst(samples: &mut Vec<f32>, freq: f64, sample_rate: f64, burst_len: usize) {
    let phase_step = TAU * freq / sample_rate;
    for n in 0..burst_len {
        // Sine is already bounded; the clamp only guards rounding at the
        // f32 conversion.
        let value = (phase_step * n as f64).sin() as f32;
        samples.push(value.clamp(-1.0, 1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gradient_raster(width: u32, height: u32) -> GrayRaster {
        let n = (width * height) as usize;
        let pixels = (0..n).map(|i| i as f32 / (n.max(2) - 1) as f32).collect();
        GrayRaster::from_pixels(width, height, pixels)
    }

    #[test]
    fn test_output_length_exact() {
        let config = EncoderConfig::default();
        for (w, h) in [(1, 1), (2, 2), (3, 5), (16, 1)] {
            let out = encode(&gradient_raster(w, h), &config, ScanOrder::ColumnMajor).unwrap();
            assert_eq!(out.samples.len(), (w * h * 48) as usize);
        }
    }

    #[test]
    fn test_zero_area_encodes_empty() {
        let out = encode(
            &GrayRaster::new(0, 4),
            &EncoderConfig::default(),
            ScanOrder::ColumnMajor,
        )
        .unwrap();
        assert!(out.samples.is_empty());
        assert_eq!(out.metadata.width, 0);
        out.metadata.validate().unwrap();
    }

    #[test]
    fn test_samples_bounded() {
        let out = encode(
            &gradient_raster(4, 4),
            &EncoderConfig::default(),
            ScanOrder::ColumnMajor,
        )
        .unwrap();
        assert!(out.samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_phase_resets_per_burst() {
        // Every burst starts at sin(0) = 0.
        let config = EncoderConfig::default();
        let out = encode(&gradient_raster(3, 3), &config, ScanOrder::ColumnMajor).unwrap();
        for burst in out.samples.chunks(config.samples_per_pixel as usize) {
            assert_eq!(burst[0], 0.0);
        }
    }

    #[test]
    fn test_black_pixel_is_f_min_tone() {
        let raster = GrayRaster::from_pixels(1, 1, vec![0.0]);
        let config = EncoderConfig::default();
        let out = encode(&raster, &config, ScanOrder::ColumnMajor).unwrap();
        for (n, &s) in out.samples.iter().enumerate() {
            let expected = (TAU * 500.0 * n as f64 / 44100.0).sin() as f32;
            assert!((s - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_determinism_bit_identical() {
        let raster = gradient_raster(8, 8);
        let config = EncoderConfig::default();
        let a = encode(&raster, &config, ScanOrder::ColumnMajor).unwrap();
        let b = encode(&raster, &config, ScanOrder::ColumnMajor).unwrap();
        let bits_a: Vec<u32> = a.samples.iter().map(|s| s.to_bits()).collect();
        let bits_b: Vec<u32> = b.samples.iter().map(|s| s.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_scan_order_changes_burst_layout() {
        // White at (1, 0): burst index 2 column-major, burst index 1 row-major.
        let raster = GrayRaster::from_pixels(2, 2, vec![0.0, 1.0, 0.0, 0.0]);
        let config = EncoderConfig::default();
        let col = encode(&raster, &config, ScanOrder::ColumnMajor).unwrap();
        let row = encode(&raster, &config, ScanOrder::RowMajor).unwrap();
        assert_ne!(col.samples, row.samples);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EncoderConfig {
            samples_per_pixel: 0,
            ..EncoderConfig::default()
        };
        assert!(encode(&gradient_raster(2, 2), &config, ScanOrder::ColumnMajor).is_err());
    }
}
