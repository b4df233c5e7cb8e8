//! Profile zb8 throughput and compression ratio on a file or a generated
//! sparse payload, verifying the round trip along the way.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "zb8-bench")]
#[command(about = "Profile zb8 compression and decompression throughput")]
struct Args {
    /// Input file to compress (a sparse payload is generated when omitted)
    input: Option<PathBuf>,

    /// Generated payload size in bytes (default: 8 MiB)
    #[arg(short, long, default_value = "8388608")]
    bytes: usize,

    /// Generated payload: average one nonzero byte per this many bytes
    #[arg(long, default_value = "150")]
    density: u32,

    /// Timing iterations per direction
    #[arg(short, long, default_value = "10")]
    iterations: u32,

    /// RNG seed for the generated payload
    #[arg(long, default_value = "0")]
    seed: u64,
}

fn load_payload(args: &Args) -> Vec<u8> {
    match &args.input {
        Some(path) => match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error: failed to read {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            let density = args.density.max(1);
            (0..args.bytes)
                .map(|_| {
                    if rng.random_range(0..density) == 0 {
                        rng.random_range(1..=u8::MAX)
                    } else {
                        0
                    }
                })
                .collect()
        }
    }
}

fn mb_per_sec(bytes: usize, iterations: u32, elapsed: std::time::Duration) -> f64 {
    let total = bytes as f64 * f64::from(iterations);
    total / 1_000_000.0 / elapsed.as_secs_f64()
}

fn main() {
    let args = Args::parse();
    let payload = load_payload(&args);
    let iterations = args.iterations.max(1);

    let mut frame = Vec::new();
    let start = Instant::now();
    for _ in 0..iterations {
        zb8::compress(&payload, &mut frame);
    }
    let compress_time = start.elapsed();

    let mut restored = Vec::new();
    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(e) = zb8::decompress(&frame, &mut restored) {
            eprintln!("Error: decode failed: {e}");
            std::process::exit(1);
        }
    }
    let decompress_time = start.elapsed();

    if restored != payload {
        eprintln!("Error: round trip mismatch");
        std::process::exit(1);
    }

    let verbatim = frame[zb8::HEADER_SIZE - 1] & 0x80 != 0;

    println!("Original size:    {}", payload.len());
    println!("Compressed size:  {}{}", frame.len(), if verbatim { " (stored verbatim)" } else { "" });
    println!("Ratio:            {:.2}", payload.len() as f64 / frame.len() as f64);
    println!("Compress:         {:.1} MB/s", mb_per_sec(payload.len(), iterations, compress_time));
    println!("Decompress:       {:.1} MB/s", mb_per_sec(payload.len(), iterations, decompress_time));
}
