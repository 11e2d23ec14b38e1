//! Decoded audio buffer type.

use serde::{Deserialize, Serialize};

/// Fully decoded, interleaved audio.
///
/// Samples are ordered frame by frame: frame 0 channel 0, frame 0 channel 1,
/// ..., frame 1 channel 0, and so on. The length is always a whole number of
/// frames.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudioBuffer {
    name: String,
    sample_rate: u32,
    channel_count: u16,
    samples: Vec<f32>,
}

impl DecodedAudioBuffer {
    /// Assembles a buffer, dropping any trailing samples that do not form a
    /// complete frame.
    ///
    /// # Returns
    /// The buffer and the number of dropped samples
    pub(crate) fn assemble(
        name: String,
        sample_rate: u32,
        channel_count: u16,
        mut samples: Vec<f32>,
    ) -> (Self, usize) {
        debug_assert!(channel_count > 0);
        let dropped = samples.len() % channel_count as usize;
        samples.truncate(samples.len() - dropped);
        (
            Self {
                name,
                sample_rate,
                channel_count,
                samples,
            },
            dropped,
        )
    }

    /// Caller-supplied label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub fn channel_count(&self) -> u16 {
        self.channel_count
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Consumes the buffer, returning the interleaved samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channel_count as usize
    }

    /// Returns true if the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Iterates over frames; each item holds one sample per channel.
    pub fn frames(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.samples.chunks_exact(self.channel_count as usize)
    }

    /// De-interleaved copy of one channel, or `None` if out of range.
    pub fn channel(&self, index: u16) -> Option<Vec<f32>> {
        if index >= self.channel_count {
            return None;
        }
        Some(self.frames().map(|frame| frame[index as usize]).collect())
    }

    /// Drops the first `frames` frames. Skipping past the end leaves an empty
    /// buffer.
    pub fn skip_frames(mut self, frames: usize) -> Self {
        let skip = frames
            .saturating_mul(self.channel_count as usize)
            .min(self.samples.len());
        self.samples.drain(..skip);
        self
    }

    /// Peak absolute amplitude.
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0f32, |max, s| max.max(s))
    }

    /// RMS level over all channels.
    pub fn rms(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum_of_squares: f64 = self.samples.iter().map(|&s| (s as f64) * (s as f64)).sum();
        (sum_of_squares / self.samples.len() as f64).sqrt()
    }

    /// BLAKE3 hash of the samples as little-endian f32 bytes (hex string).
    ///
    /// Two decodes of the same input always produce the same hash.
    pub fn sample_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for sample in &self.samples {
            hasher.update(&sample.to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }

    /// Serializable summary of the buffer without the sample data.
    pub fn summary(&self) -> BufferSummary {
        BufferSummary {
            name: self.name.clone(),
            sample_rate: self.sample_rate,
            channels: self.channel_count,
            frame_count: self.frame_count(),
            duration_seconds: self.duration_seconds(),
            peak: self.peak(),
            rms: self.rms(),
            sample_hash: self.sample_hash(),
        }
    }
}

/// Buffer metadata and level statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferSummary {
    /// Buffer label
    pub name: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u16,
    /// Samples per channel
    pub frame_count: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute amplitude
    pub peak: f32,
    /// RMS level
    pub rms: f64,
    /// BLAKE3 hash of the sample data
    pub sample_hash: String,
}
