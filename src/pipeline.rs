//! Announcement pipeline
//!
//! Drives one encoding run: fetch each clip URL in order, decode, mix down
//! to mono, concatenate at the target rate and serialize as 16-bit PCM WAV.
//!
//! Acquisition is strictly sequential. One decoded clip's working set is in
//! memory at a time on top of the accumulated mono clips, and the first
//! fetch or decode failure aborts the whole run with no partial output.
//! Each run owns its buffers exclusively; nothing is shared across calls.

use log::{debug, info};

use crate::audio::{
    concat_clips, encode_combined, MonoClip, WavBlob, WavSampleFormat, TARGET_SAMPLE_RATE,
};
use crate::decode::{default_decoder, ClipDecoder};
use crate::error::{AnsageError, Result};
use crate::fetch::{ClipFetcher, HttpFetcher};

/// Fetch, decode and encode clip lists into single WAV announcements
pub struct ClipPipeline {
    fetcher: Box<dyn ClipFetcher>,
    decoder: Box<dyn ClipDecoder>,
    target_sample_rate: u32,
}

impl ClipPipeline {
    /// Create a pipeline from explicit collaborators
    pub fn new(fetcher: Box<dyn ClipFetcher>, decoder: Box<dyn ClipDecoder>) -> Self {
        Self {
            fetcher,
            decoder,
            target_sample_rate: TARGET_SAMPLE_RATE,
        }
    }

    /// Create a pipeline with the HTTP fetcher and the default decoder
    ///
    /// Fails with `UnsupportedEnvironment` before any fetch begins when no
    /// decoding capability is compiled in.
    pub fn try_default() -> Result<Self> {
        let decoder = default_decoder()?;
        let fetcher = Box::new(HttpFetcher::new()?);
        Ok(Self::new(fetcher, decoder))
    }

    /// Override the encoding target sample rate
    pub fn with_target_sample_rate(mut self, rate: u32) -> Self {
        self.target_sample_rate = rate;
        self
    }

    /// Get the encoding target sample rate
    pub fn target_sample_rate(&self) -> u32 {
        self.target_sample_rate
    }

    /// Fetch and decode every URL in order, concatenate and encode as WAV
    ///
    /// URLs are processed one at a time; the first failure aborts the run
    /// and identifies the offending URL. The result is always mono 16-bit
    /// PCM at the target rate, wrapped as an `audio/wav` blob.
    pub fn encode(&self, urls: &[String]) -> Result<WavBlob> {
        let mut monos: Vec<MonoClip> = Vec::with_capacity(urls.len());

        for url in urls {
            let bytes = self.fetcher.fetch(url)?;
            let clip = self
                .decoder
                .decode(&bytes)
                .map_err(|e| AnsageError::DecodeFailure {
                    url: url.clone(),
                    reason: e.to_string(),
                })?;

            debug!(
                "Clip {}: {} channels, {} Hz, {:.2}s",
                url,
                clip.num_channels(),
                clip.sample_rate(),
                clip.duration_secs()
            );

            monos.push(clip.mixdown());
        }

        let combined = concat_clips(&monos, self.target_sample_rate);
        info!(
            "Combined {} clips into {:.2}s at {} Hz",
            monos.len(),
            combined.duration_secs(),
            combined.sample_rate()
        );

        let bytes = encode_combined(&combined, WavSampleFormat::Pcm16);
        Ok(WavBlob::new(bytes))
    }
}
