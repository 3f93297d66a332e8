//! Audio Module
//!
//! The in-memory audio pipeline stages:
//! - Clip buffers and mono mixdown
//! - Concatenation at the encoding target rate
//! - WAV serialization

pub mod buffer;
pub mod concat;
pub mod wav;

pub use buffer::{ClipBuffer, MonoClip};
pub use concat::{concat_clips, CombinedBuffer, TARGET_SAMPLE_RATE};
pub use wav::{encode_combined, encode_wav, interleave, WavBlob, WavSampleFormat, WAV_HEADER_LEN};
