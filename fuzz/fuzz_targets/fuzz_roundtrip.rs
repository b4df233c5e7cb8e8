#![no_main]

use libfuzzer_sys::fuzz_target;
use zb8::{compress, compress_bound, decompress, decompressed_size};

fuzz_target!(|data: &[u8]| {
    let mut frame = Vec::new();
    compress(data, &mut frame);

    // Property 1: expansion is bounded by the header
    assert!(frame.len() <= compress_bound(data.len()), "expansion bound violated");

    // Property 2: the header declares the input length
    assert_eq!(decompressed_size(&frame).unwrap(), data.len() as u64, "header length mismatch");

    // Property 3: the frame decodes back to the input
    let mut restored = Vec::new();
    decompress(&frame, &mut restored).expect("own frame must decode");
    assert_eq!(restored, data, "round trip mismatch");
});
