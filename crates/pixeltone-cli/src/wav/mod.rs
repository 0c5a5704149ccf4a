//! WAV container with an embedded codec-metadata chunk.
//!
//! The writer emits deterministic 16-bit PCM mono files with the codec
//! metadata JSON riding in a custom `pxtm` RIFF chunk between `fmt ` and
//! `data`; spec-compliant WAV readers skip chunks they don't know. The
//! reader walks chunks the same way, so an encoded file round-trips through
//! any tool that preserves unknown chunks.

mod format;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use reader::{read_wav, WavError, WavFile};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};

/// Chunk identifier carrying the codec metadata JSON.
pub const METADATA_CHUNK_ID: &[u8; 4] = b"pxtm";
