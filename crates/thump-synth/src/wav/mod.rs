//! Deterministic WAV file writer.
//!
//! This module writes 16-bit mono PCM WAV files with no timestamps or variable
//! metadata, so identical frames always produce identical bytes. The BLAKE3
//! hash of the PCM data identifies a render independently of its header.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{frames_to_pcm16, write_wav, write_wav_to_vec, WAV_HEADER_LEN};
