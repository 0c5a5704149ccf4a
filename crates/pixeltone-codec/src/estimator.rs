//! Frequency estimator: sample sequence in, raster out.
//!
//! Inverts the synthesizer by slicing the audio into per-pixel frames,
//! Hann-windowing each frame, zero-padding to `fft_size`, and picking the
//! strongest bin inside the tolerance-widened `[f_min, f_max]` band. The
//! winning bin's center frequency maps linearly back to a gray value.
//!
//! There are no per-pixel failures: a noisy frame still yields a best-effort
//! gray via the same peak-pick rule. A wrong pixel beats aborting a
//! long-running decode.

use rustfft::{num_complex::Complex, FftPlanner};

use crate::error::{CodecError, CodecResult};
use crate::metadata::CodecMetadata;
use crate::raster::GrayRaster;
use crate::traversal::ScanOrder;

/// Widening applied to `[f_min, f_max]` when restricting the spectral search,
/// absorbing bin quantization and channel noise. Not part of the metadata.
pub const FREQ_TOLERANCE_HZ: f64 = 100.0;

/// Decodes a sample sequence back into a raster.
///
/// `samples` may be longer than the encoding (container padding, re-encoding
/// artifacts); trailing samples are discarded. It must not be shorter.
///
/// # Errors
/// - [`CodecError::InvalidMetadata`] before any audio processing.
/// - [`CodecError::InsufficientAudio`] when a complete image cannot be decoded.
/// - [`CodecError::EmptyFrequencyBand`] when no FFT bin center falls inside
///   the search band (a fatal configuration error, checked before the frame
///   loop).
pub fn decode(
    samples: &[f32],
    metadata: &CodecMetadata,
    order: ScanOrder,
) -> CodecResult<GrayRaster> {
    metadata.validate()?;

    let expected = metadata.expected_samples();
    if samples.len() < expected {
        return Err(CodecError::InsufficientAudio {
            expected,
            actual: samples.len(),
        });
    }
    let samples = &samples[..expected];

    let (first_bin, last_bin) = band_bins(metadata)?;

    let fft_size = metadata.fft_size as usize;
    let burst_len = metadata.samples_per_pixel as usize;
    let bin_hz = metadata.sample_rate as f64 / fft_size as f64;
    let band = metadata.f_max - metadata.f_min;

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(fft_size);
    let window = hann(burst_len);
    let mut buffer = vec![Complex::new(0.0f32, 0.0); fft_size];
    let mut magnitudes = vec![0.0f32; last_bin - first_bin + 1];

    let mut raster = GrayRaster::new(metadata.width, metadata.height);

    for (i, frame) in samples.chunks_exact(burst_len).enumerate() {
        // Windowed frame up front, zeros as padding to fft_size.
        for (slot, (&sample, &w)) in buffer.iter_mut().zip(frame.iter().zip(window.iter())) {
            *slot = Complex::new(sample * w, 0.0);
        }
        for slot in buffer.iter_mut().skip(burst_len) {
            *slot = Complex::new(0.0, 0.0);
        }

        fft.process(&mut buffer);

        for (mag, c) in magnitudes.iter_mut().zip(&buffer[first_bin..=last_bin]) {
            *mag = (c.re * c.re + c.im * c.im).sqrt();
        }

        let peak = first_bin + peak_bin(&magnitudes);
        let estimated_freq = peak as f64 * bin_hz;
        let gray = ((estimated_freq - metadata.f_min) / band).clamp(0.0, 1.0) as f32;

        let (x, y) = order.coord(i, metadata.width, metadata.height);
        raster.set(x, y, gray);
    }

    Ok(raster)
}

/// Computes the inclusive bin index range whose centers lie in
/// `[f_min - tolerance, f_max + tolerance]`, within `0..=fft_size/2`.
fn band_bins(metadata: &CodecMetadata) -> CodecResult<(usize, usize)> {
    let fft_size = metadata.fft_size as usize;
    let bin_hz = metadata.sample_rate as f64 / fft_size as f64;
    let low = metadata.f_min - FREQ_TOLERANCE_HZ;
    let high = metadata.f_max + FREQ_TOLERANCE_HZ;

    let first_bin = if low <= 0.0 {
        0
    } else {
        (low / bin_hz).ceil() as usize
    };
    let nyquist_bin = fft_size / 2;
    let last_bin = ((high / bin_hz).floor() as usize).min(nyquist_bin);

    if first_bin > last_bin {
        return Err(CodecError::EmptyFrequencyBand { low, high, bin_hz });
    }
    Ok((first_bin, last_bin))
}

/// Index of the maximum magnitude; the first occurrence wins on ties, so the
/// result always resolves to the lowest (and therefore darkest) bin.
fn peak_bin(magnitudes: &[f32]) -> usize {
    let mut best_idx = 0;
    let mut best_mag = f32::NEG_INFINITY;
    for (idx, &mag) in magnitudes.iter().enumerate() {
        if mag > best_mag {
            best_mag = mag;
            best_idx = idx;
        }
    }
    best_idx
}

/// Symmetric Hann window (endpoints zero), suppressing spectral leakage from
/// the hard burst edges. Degenerates to `[1.0]` for a single-sample window.
fn hann(len: usize) -> Vec<f32> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let denom = (len - 1) as f64;
    (0..len)
        .map(|i| {
            let phase = std::f64::consts::TAU * i as f64 / denom;
            (0.5 * (1.0 - phase.cos())) as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metadata() -> CodecMetadata {
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
    fn test_peak_bin_first_max_wins() {
        assert_eq!(peak_bin(&[1.0, 3.0, 3.0, 2.0]), 1);
        assert_eq!(peak_bin(&[5.0, 5.0, 5.0]), 0);
        assert_eq!(peak_bin(&[0.0, 0.0, 7.0]), 2);
        assert_eq!(peak_bin(&[4.0]), 0);
    }

    #[test]
    fn test_hann_shape() {
        let w = hann(48);
        assert_eq!(w.len(), 48);
        assert_eq!(w[0], 0.0);
        assert!((w[47]).abs() < 1e-6);
        for i in 0..48 {
            assert!((w[i] - w[47 - i]).abs() < 1e-6, "window not symmetric");
        }
        // Midpoint of an even-length symmetric window straddles 1.0.
        assert!(w[23] > 0.99 && w[24] > 0.99);
        assert_eq!(hann(1), vec![1.0]);
        assert!(hann(0).is_empty());
    }

    #[test]
    fn test_band_bins_cover_target_band() {
        let (first, last) = band_bins(&metadata()).unwrap();
        let bin_hz = 44100.0 / 512.0;
        assert!(first as f64 * bin_hz >= 400.0);
        assert!((first as f64 - 1.0) * bin_hz < 400.0);
        assert!(last as f64 * bin_hz <= 3100.0);
        assert!((last as f64 + 1.0) * bin_hz > 3100.0);
    }

    #[test]
    fn test_band_bins_empty_when_spacing_too_coarse() {
        // Bin spacing 5512.5 Hz leaves no center inside [400, 3100].
        let mut m = metadata();
        m.fft_size = 8;
        m.samples_per_pixel = 8;
        let err = band_bins(&m).unwrap_err();
        assert!(matches!(err, CodecError::EmptyFrequencyBand { .. }));
    }

    #[test]
    fn test_decode_rejects_short_audio() {
        let m = metadata();
        let samples = vec![0.0f32; m.expected_samples() - 1];
        let err = decode(&samples, &m, ScanOrder::ColumnMajor).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InsufficientAudio {
                expected: 192,
                actual: 191
            }
        ));
    }

    #[test]
    fn test_decode_validates_metadata_first() {
        let mut m = metadata();
        m.f_max = m.f_min;
        let err = decode(&[], &m, ScanOrder::ColumnMajor).unwrap_err();
        assert!(matches!(err, CodecError::InvalidMetadata { .. }));
    }

    #[test]
    fn test_decode_empty_image() {
        let mut m = metadata();
        m.width = 0;
        let raster = decode(&[], &m, ScanOrder::ColumnMajor).unwrap();
        assert_eq!(raster.num_pixels(), 0);
    }

    #[test]
    fn test_decode_isolated_500hz_burst() {
        // One black pixel: a pure 500 Hz tone for 48 samples must estimate
        // within 100 Hz of 500, i.e. gray within 0.04 of zero.
        let mut m = metadata();
        m.width = 1;
        m.height = 1;
        let burst: Vec<f32> = (0..48)
            .map(|n| (std::f64::consts::TAU * 500.0 * n as f64 / 44100.0).sin() as f32)
            .collect();
        let raster = decode(&burst, &m, ScanOrder::ColumnMajor).unwrap();
        assert!(
            raster.get(0, 0) <= 0.04,
            "gray {} implies estimate further than 100 Hz from 500 Hz",
            raster.get(0, 0)
        );
    }
}
