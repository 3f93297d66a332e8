//! Audio clip buffers
//!
//! [`ClipBuffer`] is the in-memory form of one decoded clip: planar 32-bit
//! float samples, one `Vec<f32>` per channel, normalized to -1.0..1.0.
//! [`MonoClip`] is its single-channel reduction, produced by [`ClipBuffer::mixdown`].
//!
//! All buffers are transient: they exist for the duration of one encoding
//! run and are dropped once the WAV blob has been produced.

use crate::error::{AnsageError, Result};

/// One decoded audio clip with planar channel storage
#[derive(Debug, Clone)]
pub struct ClipBuffer {
    /// Sample data: outer Vec is channels, inner Vec is samples
    channels: Vec<Vec<f32>>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl ClipBuffer {
    /// Create a clip buffer from planar channel data
    ///
    /// Requires at least one channel; all channels must have equal length.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self> {
        if channels.is_empty() {
            return Err(AnsageError::InvalidClip {
                reason: "clip has no channels".to_string(),
            });
        }
        let len = channels[0].len();
        if channels.iter().any(|ch| ch.len() != len) {
            return Err(AnsageError::InvalidClip {
                reason: format!(
                    "channel lengths differ: {:?}",
                    channels.iter().map(|ch| ch.len()).collect::<Vec<_>>()
                ),
            });
        }
        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Create a clip buffer from interleaved sample data (L, R, L, R, ...)
    pub fn from_interleaved(
        interleaved: &[f32],
        num_channels: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        if num_channels == 0 {
            return Err(AnsageError::InvalidClip {
                reason: "clip has no channels".to_string(),
            });
        }
        if interleaved.len() % num_channels != 0 {
            return Err(AnsageError::InvalidClip {
                reason: format!(
                    "interleaved length {} is not divisible by channel count {}",
                    interleaved.len(),
                    num_channels
                ),
            });
        }

        let frames = interleaved.len() / num_channels;
        let mut channels = vec![Vec::with_capacity(frames); num_channels];
        for frame in interleaved.chunks_exact(num_channels) {
            for (ch, &sample) in frame.iter().enumerate() {
                channels[ch].push(sample);
            }
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Get the number of channels
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Get the number of samples per channel
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.first().map(|ch| ch.len()).unwrap_or(0)
    }

    /// Check if the clip holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Get immutable access to a channel's samples
    ///
    /// # Panics
    /// Panics if the channel index is out of bounds
    #[inline]
    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Collapse all channels to mono by per-sample averaging
    ///
    /// Single-channel clips are copied verbatim so no division is applied.
    /// Samples are not clamped or normalized; the sample rate is unchanged
    /// and the mono clip has the same length as each source channel.
    pub fn mixdown(&self) -> MonoClip {
        if self.num_channels() == 1 {
            return MonoClip {
                samples: self.channels[0].clone(),
                sample_rate: self.sample_rate,
            };
        }

        let num_channels = self.num_channels() as f32;
        let len = self.len();
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            let sum: f32 = self.channels.iter().map(|ch| ch[i]).sum();
            samples.push(sum / num_channels);
        }

        MonoClip {
            samples,
            sample_rate: self.sample_rate,
        }
    }
}

/// A single-channel clip derived from a [`ClipBuffer`]
#[derive(Debug, Clone)]
pub struct MonoClip {
    /// Mono samples normalized to -1.0..1.0
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl MonoClip {
    /// Create a mono clip from raw samples
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Get the number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the clip holds no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }

    /// Resample this clip to a different rate using linear interpolation
    ///
    /// Returns a clone when the rates already match. Linear interpolation
    /// introduces aliasing artifacts when downsampling; announcement speech
    /// tolerates this.
    pub fn resampled(&self, target_rate: u32) -> MonoClip {
        if self.sample_rate == target_rate || self.samples.is_empty() {
            return MonoClip {
                samples: self.samples.clone(),
                sample_rate: target_rate,
            };
        }

        let ratio = target_rate as f64 / self.sample_rate as f64;
        let source_len = self.samples.len();
        // Integer math: float rounding can overshoot duration * target_rate by one
        let target_len = (source_len as u64 * target_rate as u64 / self.sample_rate as u64) as usize;
        let mut output = Vec::with_capacity(target_len);

        for i in 0..target_len {
            // Map output index to source position
            let src_pos = i as f64 / ratio;
            let src_idx = src_pos.floor() as usize;
            let frac = (src_pos - src_idx as f64) as f32;

            let sample = if src_idx + 1 < source_len {
                self.samples[src_idx] * (1.0 - frac) + self.samples[src_idx + 1] * frac
            } else if src_idx < source_len {
                self.samples[src_idx]
            } else {
                0.0
            };

            output.push(sample);
        }

        MonoClip {
            samples: output,
            sample_rate: target_rate,
        }
    }
}
