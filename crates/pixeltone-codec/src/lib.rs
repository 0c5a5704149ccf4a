//! Pixeltone codec core.
//!
//! Encodes a grayscale image as an audible waveform — one pure sine burst per
//! pixel, frequency proportional to brightness — and decodes the waveform
//! back by windowed-FFT peak picking. The two halves are independent: encode
//! never touches the FFT, decode never touches the synthesizer.
//!
//! # Overview
//!
//! - [`synth::encode`] walks the raster in a [`ScanOrder`], maps each
//!   intensity linearly into `[f_min, f_max]` Hz, and emits a fixed-length
//!   phase-reset tone burst per pixel.
//! - [`estimator::decode`] slices the audio into per-pixel frames,
//!   Hann-windows and zero-pads each to `fft_size`, and picks the strongest
//!   FFT bin inside the ±100 Hz tolerance band around `[f_min, f_max]`.
//! - [`CodecMetadata`] is the side-channel contract tying the two together;
//!   a container collaborator persists it as JSON next to the audio.
//!
//! # Determinism
//!
//! Encoding is a pure function: the same raster and configuration always
//! produce a bit-identical sample sequence. Decoding is equally
//! deterministic, including its first-maximum tie-break.
//!
//! No I/O happens in this crate. Image files, audio containers, and metadata
//! persistence are the caller's business.

pub mod config;
pub mod error;
pub mod estimator;
pub mod metadata;
pub mod raster;
pub mod synth;
pub mod traversal;

// Re-export main types at crate root
pub use config::EncoderConfig;
pub use error::{CodecError, CodecResult};
pub use estimator::{decode, FREQ_TOLERANCE_HZ};
pub use metadata::CodecMetadata;
pub use raster::GrayRaster;
pub use synth::{encode, EncodeOutput};
pub use traversal::ScanOrder;
