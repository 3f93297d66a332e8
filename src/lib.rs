//! Ansage - Transit Announcement Audio Builder
//!
//! Ansage holds a static directory of transit stations and lines, and turns
//! ordered lists of announcement clip URLs into a single downloadable WAV:
//!
//! 1. Fetch each clip's bytes over HTTP, one URL at a time
//! 2. Decode to normalized f32 samples (symphonia, behind the `codecs` feature)
//! 3. Mix each clip down to mono and resample to the 48 kHz target rate
//! 4. Concatenate back-to-back into one continuous buffer
//! 5. Serialize as canonical 44-byte-header WAV, 16-bit PCM
//!
//! The first fetch or decode failure aborts the whole run; no partial WAV
//! is ever produced.

pub mod audio;
pub mod cli;
pub mod decode;
pub mod directory;
pub mod error;
pub mod fetch;
pub mod pipeline;

pub use audio::{ClipBuffer, CombinedBuffer, MonoClip, WavBlob, WavSampleFormat};
pub use directory::{Directory, Station, StationLookup, TransportMode, DIRECTORY};
pub use error::{AnsageError, Result};
pub use pipeline::ClipPipeline;
