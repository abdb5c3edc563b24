#![no_main]

use libfuzzer_sys::fuzz_target;
use meterframe_rs::{decode_frame, decode_frame_with, DecodeOptions, ResultCodeRule};

fuzz_target!(|data: &[u8]| {
    // The decoder should handle any malformed input gracefully
    if let Ok(frame) = decode_frame(data) {
        assert!(frame.consumed <= data.len());
    }

    if data.len() >= 15 {
        // Force the uplink result-code path and the strict length bound
        let mut mutated = data.to_vec();
        mutated[12] = 0x86;
        let options = DecodeOptions::new()
            .strict_length(true)
            .result_code_rule(ResultCodeRule::Masked);
        let _ = decode_frame_with(&mutated, &options);

        // Declared length that matches the buffer
        let declared = (data.len() - 7) as u16;
        mutated[1..3].copy_from_slice(&declared.to_be_bytes());
        let _ = decode_frame_with(&mutated, &options);
    }
});
