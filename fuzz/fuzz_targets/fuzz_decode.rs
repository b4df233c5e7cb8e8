#![no_main]

use libfuzzer_sys::fuzz_target;
use zb8::{decompress, decompressed_size};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to the decoder - it must never panic.
    // May return Err for malformed input, that's fine.
    let mut out = Vec::new();
    if decompress(data, &mut out).is_ok() {
        // On success the output length must match the header
        let declared = decompressed_size(data).unwrap();
        assert_eq!(out.len() as u64, declared, "output length disagrees with header");
    }
});
