#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(decoded) = wavclip_decoder::decode(data, "fuzz") {
        let buffer = &decoded.buffer;
        assert_eq!(buffer.samples().len() % buffer.channel_count() as usize, 0);
        let floor = -32768.0f32 / 32767.0;
        assert!(buffer.samples().iter().all(|&s| (floor..=1.0).contains(&s)));
    }
});
