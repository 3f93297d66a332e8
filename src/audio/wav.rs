//! WAV serialization
//!
//! Serializes a sample buffer into the canonical 44-byte RIFF/WAVE layout
//! with no extension chunks. The encoder is pure: identical samples and
//! parameters always produce byte-identical output.
//!
//! Payload formats:
//! - 16-bit integer PCM: samples clamped to -1.0..1.0, negatives scaled by
//!   32768 and non-negatives by 32767, truncated toward zero
//! - 32-bit IEEE float: written as-is, unclamped

use std::path::Path;

use crate::audio::concat::CombinedBuffer;
use crate::error::Result;

/// Byte length of the canonical WAV header
pub const WAV_HEADER_LEN: usize = 44;

/// Sample format of the WAV payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavSampleFormat {
    /// 16-bit signed integer PCM (format tag 1)
    Pcm16,
    /// 32-bit IEEE float PCM (format tag 3)
    Float32,
}

impl WavSampleFormat {
    /// The AudioFormat tag written to the fmt chunk
    #[inline]
    pub fn format_tag(&self) -> u16 {
        match self {
            WavSampleFormat::Pcm16 => 1,
            WavSampleFormat::Float32 => 3,
        }
    }

    /// Bits per encoded sample
    #[inline]
    pub fn bits_per_sample(&self) -> u16 {
        match self {
            WavSampleFormat::Pcm16 => 16,
            WavSampleFormat::Float32 => 32,
        }
    }

    /// Bytes per encoded sample
    #[inline]
    pub fn bytes_per_sample(&self) -> usize {
        self.bits_per_sample() as usize / 8
    }
}

/// Interleave two equal-length channels into L,R,L,R,... order
///
/// # Panics
/// Panics if the channel lengths differ
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    assert_eq!(
        left.len(),
        right.len(),
        "stereo channels must have equal length"
    );

    let mut result = Vec::with_capacity(left.len() + right.len());
    for (&l, &r) in left.iter().zip(right.iter()) {
        result.push(l);
        result.push(r);
    }
    result
}

/// Encode samples into a complete WAV byte buffer
///
/// `samples` is mono or already-interleaved stereo; `num_channels` declares
/// which. The output is exactly `44 + data_size` bytes, all multi-byte
/// integers little-endian.
pub fn encode_wav(
    samples: &[f32],
    num_channels: u16,
    sample_rate: u32,
    format: WavSampleFormat,
) -> Vec<u8> {
    let bytes_per_sample = format.bytes_per_sample();
    let block_align = num_channels as u32 * bytes_per_sample as u32;
    let byte_rate = sample_rate * block_align;
    let data_size = (samples.len() * bytes_per_sample) as u32;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);

    // RIFF chunk descriptor
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&format.format_tag().to_le_bytes());
    out.extend_from_slice(&num_channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&(block_align as u16).to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample().to_le_bytes());

    // data sub-chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    match format {
        WavSampleFormat::Pcm16 => {
            for &sample in samples {
                let s = sample.clamp(-1.0, 1.0);
                let scaled = if s < 0.0 { s * 32768.0 } else { s * 32767.0 };
                out.extend_from_slice(&(scaled as i16).to_le_bytes());
            }
        }
        WavSampleFormat::Float32 => {
            for &sample in samples {
                out.extend_from_slice(&sample.to_le_bytes());
            }
        }
    }

    out
}

/// Encode a combined mono buffer, the shape the pipeline produces
pub fn encode_combined(buffer: &CombinedBuffer, format: WavSampleFormat) -> Vec<u8> {
    encode_wav(buffer.samples(), 1, buffer.sample_rate(), format)
}

/// A finished WAV artifact tagged with its MIME type
#[derive(Debug, Clone)]
pub struct WavBlob {
    bytes: Vec<u8>,
}

impl WavBlob {
    /// MIME type of WAV audio
    pub const MIME_TYPE: &'static str = "audio/wav";

    /// Wrap encoded WAV bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the encoded bytes
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the size in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the blob holds no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the blob, returning the raw bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the MIME type for delivery to a download collaborator
    #[inline]
    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    /// Write the blob to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}
