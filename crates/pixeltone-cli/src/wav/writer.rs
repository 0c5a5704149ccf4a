//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use super::format::WavFormat;
use super::METADATA_CHUNK_ID;

/// Writes a complete WAV file, with the metadata JSON in a `pxtm` chunk
/// between `fmt ` and `data`.
///
/// The output is fully deterministic: no timestamps, no tool tags, chunk
/// payloads word-aligned with a single zero pad byte where needed.
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &WavFormat,
    metadata_json: &[u8],
    pcm_data: &[u8],
) -> io::Result<()> {
    let meta_size = metadata_json.len() as u32;
    let meta_padded = meta_size + (meta_size % 2);
    let data_size = pcm_data.len() as u32;
    let data_padded = data_size + (data_size % 2);
    // "WAVE" + fmt chunk + pxtm chunk + data chunk
    let file_size = 4 + (8 + 16) + (8 + meta_padded) + (8 + data_padded);

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // pxtm chunk (codec metadata side channel)
    writer.write_all(METADATA_CHUNK_ID)?;
    writer.write_all(&meta_size.to_le_bytes())?;
    writer.write_all(metadata_json)?;
    if meta_size % 2 == 1 {
        writer.write_all(&[0u8])?;
    }

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;
    if data_size % 2 == 1 {
        writer.write_all(&[0u8])?;
    }

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, metadata_json: &[u8], pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + metadata_json.len() + 9 + pcm_data.len());
    write_wav(&mut buffer, format, metadata_json, pcm_data)
        .expect("writing to Vec should not fail");
    buffer
}

/// Converts f32 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]. Values outside this range
/// will be clipped.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}
