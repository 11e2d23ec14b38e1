//! Decoding files written by hound.

mod common;

use common::hound_wav;
use pretty_assertions::assert_eq;
use wavclip_decoder::{decode, BitDepth, FormatTag};

#[test]
fn test_decode_hound_8bit_mono() {
    let wav = hound_wav(1, 22050, 8, &[-128, 0, 127]);
    let decoded = decode(&wav, "eight").unwrap();

    assert_eq!(decoded.format.format_tag, FormatTag::Pcm);
    assert_eq!(decoded.format.bit_depth, BitDepth::Eight);
    assert!(decoded.is_clean());

    let samples = decoded.buffer.samples();
    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], -1.0);
    assert!(samples[1].abs() <= 1.0 / 127.5);
    assert_eq!(samples[2], 1.0);
}

#[test]
fn test_decode_hound_16bit_stereo() {
    let wav = hound_wav(2, 44100, 16, &[32767, -32768, 0, 16384]);
    let decoded = decode(&wav, "sixteen").unwrap();

    assert_eq!(decoded.format.channel_count, 2);
    assert_eq!(decoded.format.sample_rate, 44100);
    assert_eq!(decoded.buffer.frame_count(), 2);
    assert_eq!(
        decoded.buffer.samples(),
        &[1.0, -32768.0 / 32767.0, 0.0, 16384.0 / 32767.0]
    );
    assert_eq!(decoded.buffer.channel(0).unwrap(), vec![1.0, 0.0]);
}

#[test]
fn test_decode_hound_24bit() {
    let wav = hound_wav(1, 48000, 24, &[8_388_607, -8_388_608, -1, 0]);
    let decoded = decode(&wav, "twenty-four").unwrap();

    assert!(decoded.format.format_tag.is_supported());
    assert_eq!(decoded.format.bit_depth, BitDepth::TwentyFour);
    assert!(decoded.is_clean());

    let samples = decoded.buffer.samples();
    assert_eq!(samples.len(), 4);
    assert!(samples[0] > 0.9999 && samples[0] <= 1.0);
    assert_eq!(samples[1], -1.0);
    assert!(samples[2] < 0.0 && samples[2] > -1e-6);
    assert_eq!(samples[3], 0.0);
}

#[test]
fn test_decode_hound_32bit() {
    let wav = hound_wav(2, 96000, 32, &[i32::MAX, i32::MIN, 0, -1073741824]);
    let decoded = decode(&wav, "thirty-two").unwrap();

    assert_eq!(decoded.format.bit_depth, BitDepth::ThirtyTwo);
    let samples = decoded.buffer.samples();
    assert_eq!(samples[0], 1.0);
    assert_eq!(samples[1], -1.0);
    assert_eq!(samples[2], 0.0);
    assert!((samples[3] + 0.5).abs() < 1e-6);
}

#[test]
fn test_hound_data_offset_matches_fmt_size() {
    for bits in [8u16, 16, 24, 32] {
        let wav = hound_wav(1, 8000, bits, &[0, 0]);
        let decoded = decode(&wav, "offset").unwrap();
        assert_eq!(
            decoded.data.offset,
            16 + 4 + decoded.format.format_subchunk_size as usize + 4,
            "bits = {bits}"
        );
        assert_eq!(&wav[decoded.data.offset - 4..decoded.data.offset], b"data");
    }
}
