//! Audio decoding capability
//!
//! The pipeline depends only on the [`ClipDecoder`] trait: raw compressed
//! bytes in, a [`ClipBuffer`] of normalized f32 samples out. The default
//! implementation decodes MP3, AAC, FLAC, Vorbis and WAV via symphonia and
//! is compiled behind the `codecs` feature; without it,
//! [`default_decoder`] reports an unsupported environment so callers fail
//! before any fetch begins.

use crate::audio::ClipBuffer;
use crate::error::Result;

/// Decodes compressed audio bytes into a clip buffer
pub trait ClipDecoder: Send + Sync {
    /// Decode one clip
    ///
    /// Returns a buffer with at least one channel, all channels equal
    /// length, samples in -1.0..1.0, at the clip's native sample rate.
    fn decode(&self, bytes: &[u8]) -> Result<ClipBuffer>;
}

/// Construct the default decoder, if one is compiled in
#[cfg(feature = "codecs")]
pub fn default_decoder() -> Result<Box<dyn ClipDecoder>> {
    Ok(Box::new(SymphoniaDecoder))
}

/// Construct the default decoder, if one is compiled in
#[cfg(not(feature = "codecs"))]
pub fn default_decoder() -> Result<Box<dyn ClipDecoder>> {
    Err(crate::error::AnsageError::UnsupportedEnvironment {
        reason: "no codec support compiled. Build with --features codecs".to_string(),
    })
}

/// Symphonia-backed decoder for compressed clip formats
#[cfg(feature = "codecs")]
pub struct SymphoniaDecoder;

#[cfg(feature = "codecs")]
mod symphonia_impl {
    use std::io::Cursor;

    use log::{debug, warn};
    use symphonia::core::audio::{AudioBufferRef, Signal};
    use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
    use symphonia::core::conv::FromSample;
    use symphonia::core::formats::FormatOptions;
    use symphonia::core::io::MediaSourceStream;
    use symphonia::core::meta::MetadataOptions;
    use symphonia::core::probe::Hint;
    use symphonia::core::sample::Sample;

    use super::{ClipDecoder, SymphoniaDecoder};
    use crate::audio::ClipBuffer;
    use crate::error::{AnsageError, Result};

    impl ClipDecoder for SymphoniaDecoder {
        fn decode(&self, bytes: &[u8]) -> Result<ClipBuffer> {
            let mss = MediaSourceStream::new(
                Box::new(Cursor::new(bytes.to_vec())),
                Default::default(),
            );

            // Probe by content; clip URLs carry no trustworthy extension here
            let probed = symphonia::default::get_probe()
                .format(
                    &Hint::new(),
                    mss,
                    &FormatOptions::default(),
                    &MetadataOptions::default(),
                )
                .map_err(|e| AnsageError::InvalidClip {
                    reason: format!("unrecognized audio container: {}", e),
                })?;

            let mut format = probed.format;

            let track = format
                .tracks()
                .iter()
                .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
                .ok_or_else(|| AnsageError::InvalidClip {
                    reason: "no audio track found".to_string(),
                })?;

            let track_id = track.id;
            let sample_rate =
                track
                    .codec_params
                    .sample_rate
                    .ok_or_else(|| AnsageError::InvalidClip {
                        reason: "sample rate unknown".to_string(),
                    })?;
            let num_channels = track
                .codec_params
                .channels
                .map(|c| c.count())
                .ok_or_else(|| AnsageError::InvalidClip {
                    reason: "channel count unknown".to_string(),
                })?;

            debug!(
                "Decoding clip: sample_rate={}, channels={}",
                sample_rate, num_channels
            );

            let mut decoder = symphonia::default::get_codecs()
                .make(&track.codec_params, &DecoderOptions::default())
                .map_err(|e| AnsageError::InvalidClip {
                    reason: format!("failed to create decoder: {}", e),
                })?;

            let mut channels: Vec<Vec<f32>> = vec![Vec::new(); num_channels];

            loop {
                let packet = match format.next_packet() {
                    Ok(packet) => packet,
                    Err(symphonia::core::errors::Error::IoError(ref e))
                        if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                    {
                        break;
                    }
                    Err(e) => {
                        warn!("Error reading packet: {}", e);
                        break;
                    }
                };

                if packet.track_id() != track_id {
                    continue;
                }

                match decoder.decode(&packet) {
                    Ok(decoded) => append_planar_f32(&decoded, &mut channels),
                    Err(e) => {
                        // Many decode errors are recoverable; skip the packet
                        warn!("Decode error (skipping packet): {}", e);
                        continue;
                    }
                }
            }

            debug!(
                "Decoded {} frames across {} channels",
                channels.first().map(|ch| ch.len()).unwrap_or(0),
                channels.len()
            );

            ClipBuffer::new(channels, sample_rate)
        }
    }

    /// Append one decoded buffer's planes to the accumulated channels as f32
    fn append_planar_f32(decoded: &AudioBufferRef, channels: &mut [Vec<f32>]) {
        match decoded {
            AudioBufferRef::U8(buf) => append_planes(buf, channels),
            AudioBufferRef::U16(buf) => append_planes(buf, channels),
            AudioBufferRef::U24(buf) => append_planes(buf, channels),
            AudioBufferRef::U32(buf) => append_planes(buf, channels),
            AudioBufferRef::S8(buf) => append_planes(buf, channels),
            AudioBufferRef::S16(buf) => append_planes(buf, channels),
            AudioBufferRef::S24(buf) => append_planes(buf, channels),
            AudioBufferRef::S32(buf) => append_planes(buf, channels),
            AudioBufferRef::F32(buf) => append_planes(buf, channels),
            AudioBufferRef::F64(buf) => append_planes(buf, channels),
        }
    }

    fn append_planes<S>(buf: &symphonia::core::audio::AudioBuffer<S>, channels: &mut [Vec<f32>])
    where
        S: Sample,
        f32: FromSample<S>,
    {
        let num_channels = buf.spec().channels.count().min(channels.len());
        let frames = buf.frames();

        for (ch, out) in channels.iter_mut().enumerate().take(num_channels) {
            let plane = buf.chan(ch);
            out.extend(plane[..frames].iter().map(|&s| f32::from_sample(s)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "codecs")]
    #[test]
    fn test_garbage_bytes_are_rejected() {
        let decoder = SymphoniaDecoder;
        let result = decoder.decode(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x01, 0x02, 0x03]);
        assert!(result.is_err());
    }

    #[cfg(feature = "codecs")]
    #[test]
    fn test_decodes_generated_wav() {
        // A tiny 16-bit PCM WAV written with hound, decoded back through symphonia
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut bytes = Vec::new();
        {
            let mut writer =
                hound::WavWriter::new(std::io::Cursor::new(&mut bytes), spec).unwrap();
            for i in 0..441 {
                let s = ((i as f32 / 441.0) * 2.0 - 1.0) * 0.5;
                let v = (s * 32767.0) as i16;
                writer.write_sample(v).unwrap();
                writer.write_sample(v).unwrap();
            }
            writer.finalize().unwrap();
        }

        let decoder = SymphoniaDecoder;
        let clip = decoder.decode(&bytes).unwrap();

        assert_eq!(clip.num_channels(), 2);
        assert_eq!(clip.sample_rate(), 44100);
        assert_eq!(clip.len(), 441);
        assert!(clip.channel(0).iter().all(|s| s.abs() <= 1.0));
    }

    #[cfg(not(feature = "codecs"))]
    #[test]
    fn test_default_decoder_unavailable_without_codecs() {
        let result = default_decoder();
        assert!(matches!(
            result,
            Err(crate::error::AnsageError::UnsupportedEnvironment { .. })
        ));
    }
}
