//! WAV fixtures shared by the integration tests.
#![allow(dead_code)]

use std::io::Cursor;

/// Hand-built WAV header, so tests can produce files hound refuses to write
/// (odd format tags, bogus sizes, short fmt chunks).
#[derive(Debug, Clone)]
pub struct WavFixture {
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub fmt_size: u32,
    /// Overrides the data chunk size field; defaults to the payload length.
    pub data_size: Option<u32>,
}

impl WavFixture {
    pub fn pcm(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Self {
            format_tag: 1,
            channels,
            sample_rate,
            bits_per_sample,
            fmt_size: 16,
            data_size: None,
        }
    }

    pub fn with_format_tag(mut self, format_tag: u16) -> Self {
        self.format_tag = format_tag;
        self
    }

    pub fn with_fmt_size(mut self, fmt_size: u32) -> Self {
        self.fmt_size = fmt_size;
        self
    }

    pub fn with_data_size(mut self, data_size: u32) -> Self {
        self.data_size = Some(data_size);
        self
    }

    /// Writes the full file around `payload`.
    pub fn build(&self, payload: &[u8]) -> Vec<u8> {
        let bytes_per_sample = (self.bits_per_sample / 8).max(1);
        let block_align = self.channels * bytes_per_sample;
        let byte_rate = self.sample_rate * block_align as u32;
        let data_size = self.data_size.unwrap_or(payload.len() as u32);
        let riff_size = 4 + 8 + self.fmt_size + 8 + payload.len() as u32;

        let mut wav = Vec::with_capacity(28 + self.fmt_size as usize + payload.len());

        // RIFF header
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&riff_size.to_le_bytes());
        wav.extend_from_slice(b"WAVE");

        // fmt chunk
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&self.fmt_size.to_le_bytes());
        wav.extend_from_slice(&self.format_tag.to_le_bytes());
        wav.extend_from_slice(&self.channels.to_le_bytes());
        wav.extend_from_slice(&self.sample_rate.to_le_bytes());
        wav.extend_from_slice(&byte_rate.to_le_bytes());
        wav.extend_from_slice(&block_align.to_le_bytes());
        wav.extend_from_slice(&self.bits_per_sample.to_le_bytes());
        wav.resize(20 + self.fmt_size as usize, 0);

        // data chunk
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_size.to_le_bytes());
        wav.extend_from_slice(payload);

        wav
    }
}

/// Little-endian 16-bit payload.
pub fn pcm16(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Little-endian 24-bit payload from values in the 24-bit range.
pub fn pcm24(samples: &[i32]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| {
            let [b0, b1, b2, _] = s.to_le_bytes();
            [b0, b1, b2]
        })
        .collect()
}

/// Little-endian 32-bit payload.
pub fn pcm32(samples: &[i32]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Writes an integer PCM file with hound.
pub fn hound_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, samples: &[i32]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &sample in samples {
            match bits_per_sample {
                8 => writer.write_sample(sample as i8).unwrap(),
                16 => writer.write_sample(sample as i16).unwrap(),
                _ => writer.write_sample(sample).unwrap(),
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}
