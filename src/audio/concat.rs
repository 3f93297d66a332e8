//! Clip concatenation
//!
//! Lays mono clips end-to-end into one continuous buffer at a fixed target
//! sample rate. Clips whose native rate differs from the target are
//! resampled first, so a clip always contributes `duration × target_rate`
//! samples to the combined buffer.

use crate::audio::buffer::MonoClip;

/// Encoding target sample rate for combined announcement tracks (48 kHz)
pub const TARGET_SAMPLE_RATE: u32 = 48_000;

/// One continuous mono buffer holding concatenated clips
#[derive(Debug, Clone)]
pub struct CombinedBuffer {
    /// Samples of all clips, back-to-back in input order
    samples: Vec<f32>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl CombinedBuffer {
    /// Get the samples
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get the sample rate in Hz
    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the total number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples
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
}

/// Concatenate mono clips into one combined buffer at `target_rate`
///
/// Each clip is resampled to the target rate, the total length is computed
/// up front, and a single zero-initialized buffer of that size is filled by
/// copying each clip at the running offset. Placement is contiguous and
/// order-preserving; zero clips yield an empty buffer.
pub fn concat_clips(clips: &[MonoClip], target_rate: u32) -> CombinedBuffer {
    let resampled: Vec<MonoClip> = clips.iter().map(|c| c.resampled(target_rate)).collect();

    // The encoder needs a fixed-size buffer, so the total length is computed
    // before any samples are copied.
    let total_len: usize = resampled.iter().map(|c| c.len()).sum();
    let mut samples = vec![0.0_f32; total_len];

    let mut offset = 0;
    for clip in &resampled {
        samples[offset..offset + clip.len()].copy_from_slice(&clip.samples);
        offset += clip.len();
    }

    CombinedBuffer {
        samples,
        sample_rate: target_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_lengths_add_up() {
        let a = MonoClip::new(vec![0.1; 100], TARGET_SAMPLE_RATE);
        let b = MonoClip::new(vec![0.2; 50], TARGET_SAMPLE_RATE);

        let combined = concat_clips(&[a, b], TARGET_SAMPLE_RATE);

        assert_eq!(combined.len(), 150);
        assert!(combined.samples()[..100].iter().all(|&s| s == 0.1));
        assert!(combined.samples()[100..].iter().all(|&s| s == 0.2));
    }

    #[test]
    fn test_concat_preserves_input_order() {
        let a = MonoClip::new(vec![1.0], TARGET_SAMPLE_RATE);
        let b = MonoClip::new(vec![2.0], TARGET_SAMPLE_RATE);
        let c = MonoClip::new(vec![3.0], TARGET_SAMPLE_RATE);

        let combined = concat_clips(&[a, b, c], TARGET_SAMPLE_RATE);

        assert_eq!(combined.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_concat_zero_clips_is_empty() {
        let combined = concat_clips(&[], TARGET_SAMPLE_RATE);

        assert!(combined.is_empty());
        assert_eq!(combined.sample_rate(), TARGET_SAMPLE_RATE);
    }

    #[test]
    fn test_concat_resamples_mismatched_clip() {
        // 100 samples at 24 kHz carry ~200 samples worth of audio at 48 kHz
        let slow = MonoClip::new(vec![0.5; 100], 24_000);
        let native = MonoClip::new(vec![0.25; 50], TARGET_SAMPLE_RATE);

        let combined = concat_clips(&[slow, native], TARGET_SAMPLE_RATE);

        assert_eq!(combined.len(), 250);
        assert_eq!(combined.sample_rate(), TARGET_SAMPLE_RATE);
        // The resampled portion keeps its amplitude, the native one follows
        assert!((combined.samples()[0] - 0.5).abs() < 1e-6);
        assert!((combined.samples()[249] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_concat_single_clip_passthrough() {
        let a = MonoClip::new(vec![0.1, -0.2, 0.3], TARGET_SAMPLE_RATE);
        let combined = concat_clips(std::slice::from_ref(&a), TARGET_SAMPLE_RATE);

        assert_eq!(combined.samples(), a.samples.as_slice());
    }
}
