//! Chunk-walking WAV reader.
//!
//! Tolerant of unknown chunks (skipped with word alignment, like the writer
//! emits them), 16-bit PCM and 32-bit IEEE float payloads, mono or stereo.
//! Stereo input keeps the left channel only; the codec is single-channel.

use thiserror::Error;

use super::format::WavFormat;
use super::METADATA_CHUNK_ID;

/// Errors that can occur while parsing a WAV file.
#[derive(Debug, Error)]
pub enum WavError {
    /// Not a RIFF/WAVE file at all.
    #[error("not a RIFF/WAVE file")]
    NotRiff,

    /// A required chunk never appeared.
    #[error("missing '{name}' chunk")]
    MissingChunk {
        /// Four-character chunk identifier.
        name: &'static str,
    },

    /// A chunk claims more bytes than the file holds.
    #[error("truncated '{name}' chunk")]
    TruncatedChunk {
        /// Four-character chunk identifier.
        name: String,
    },

    /// Sample encoding this reader does not handle.
    #[error("unsupported sample format: audio format {audio_format}, {bits} bits")]
    UnsupportedFormat {
        /// WAVE format tag (1 = PCM, 3 = IEEE float).
        audio_format: u16,
        /// Bits per sample.
        bits: u16,
    },

    /// Zero channels, or another nonsense fmt field.
    #[error("malformed fmt chunk: {reason}")]
    MalformedFormat {
        /// Human-readable description.
        reason: String,
    },
}

/// Parsed contents of a WAV file.
#[derive(Debug, Clone)]
pub struct WavFile {
    /// Format parameters from the `fmt ` chunk.
    pub format: WavFormat,
    /// Codec metadata JSON from the `pxtm` chunk, when present.
    pub metadata_json: Option<String>,
    /// Mono samples in `[-1, 1]` (left channel of stereo input).
    pub samples: Vec<f32>,
}

struct FmtChunk {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

/// Parses a complete WAV file from memory.
pub fn read_wav(wav_data: &[u8]) -> Result<WavFile, WavError> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return Err(WavError::NotRiff);
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut metadata_json: Option<String> = None;
    let mut data: Option<&[u8]> = None;

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id: [u8; 4] = wav_data[pos..pos + 4].try_into().unwrap();
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let body_start = pos + 8;
        let body_end = body_start + chunk_size;
        if body_end > wav_data.len() {
            return Err(WavError::TruncatedChunk {
                name: String::from_utf8_lossy(&chunk_id).into_owned(),
            });
        }
        let body = &wav_data[body_start..body_end];

        match &chunk_id {
            b"fmt " => fmt = Some(parse_fmt(body)?),
            id if id == METADATA_CHUNK_ID => {
                metadata_json = Some(String::from_utf8_lossy(body).into_owned());
            }
            b"data" => data = Some(body),
            _ => {} // unknown chunk, skip
        }

        pos = body_end;
        // Align to word boundary
        if chunk_size % 2 == 1 {
            pos += 1;
        }
    }

    let fmt = fmt.ok_or(WavError::MissingChunk { name: "fmt " })?;
    let data = data.ok_or(WavError::MissingChunk { name: "data" })?;
    let samples = decode_samples(&fmt, data)?;

    Ok(WavFile {
        format: WavFormat {
            channels: fmt.channels,
            sample_rate: fmt.sample_rate,
            bits_per_sample: fmt.bits_per_sample,
        },
        metadata_json,
        samples,
    })
}

fn parse_fmt(body: &[u8]) -> Result<FmtChunk, WavError> {
    if body.len() < 16 {
        return Err(WavError::MalformedFormat {
            reason: format!("fmt chunk is {} bytes, need at least 16", body.len()),
        });
    }
    let fmt = FmtChunk {
        audio_format: u16::from_le_bytes([body[0], body[1]]),
        channels: u16::from_le_bytes([body[2], body[3]]),
        sample_rate: u32::from_le_bytes([body[4], body[5], body[6], body[7]]),
        bits_per_sample: u16::from_le_bytes([body[14], body[15]]),
    };
    if fmt.channels == 0 {
        return Err(WavError::MalformedFormat {
            reason: "zero channels".into(),
        });
    }
    Ok(fmt)
}

/// Converts raw sample bytes to normalized mono f32, taking the first
/// channel when the file is multi-channel.
fn decode_samples(fmt: &FmtChunk, data: &[u8]) -> Result<Vec<f32>, WavError> {
    let channels = fmt.channels as usize;
    match (fmt.audio_format, fmt.bits_per_sample) {
        (1, 16) => {
            let frame = 2 * channels;
            Ok(data
                .chunks_exact(frame)
                .map(|f| i16::from_le_bytes([f[0], f[1]]) as f32 / 32767.0)
                .collect())
        }
        (3, 32) => {
            let frame = 4 * channels;
            Ok(data
                .chunks_exact(frame)
                .map(|f| f32::from_le_bytes([f[0], f[1], f[2], f[3]]))
                .collect())
        }
        (audio_format, bits) => Err(WavError::UnsupportedFormat { audio_format, bits }),
    }
}
