//! Generate sample zero-heavy payloads for exercising the codec.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
enum Pattern {
    /// Mostly zeros with isolated nonzero bytes (see --density)
    Sparse,
    /// All zero bytes
    Zeros,
    /// Uniform random bytes (incompressible, exercises the fallback)
    Random,
    /// Alternating zero blocks and literal blocks of random lengths
    Blocks,
    /// Lorem-ipsum filler text (no zero bytes, exercises the fallback)
    Text,
}

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
];

#[derive(Parser)]
#[command(name = "zb8-gen")]
#[command(about = "Generate sample payloads for the zb8 codec")]
struct Args {
    /// Output file path
    output: PathBuf,

    /// Payload size in bytes (default: 8 MiB)
    #[arg(short, long, default_value = "8388608")]
    bytes: usize,

    /// Fill pattern
    #[arg(short, long, value_enum, default_value = "sparse")]
    pattern: Pattern,

    /// With --pattern sparse: average one nonzero byte per this many bytes
    #[arg(long, default_value = "150")]
    density: u32,

    /// RNG seed for reproducible payloads (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn generate(args: &Args, rng: &mut StdRng) -> Vec<u8> {
    match args.pattern {
        Pattern::Zeros => vec![0; args.bytes],
        Pattern::Random => (0..args.bytes).map(|_| rng.random()).collect(),
        Pattern::Sparse => {
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
        Pattern::Blocks => {
            let mut payload = Vec::with_capacity(args.bytes);
            while payload.len() < args.bytes {
                let run = rng.random_range(1..=1024).min(args.bytes - payload.len());
                if rng.random_bool(0.5) {
                    payload.resize(payload.len() + run, 0);
                } else {
                    payload.extend((0..run).map(|_| rng.random_range(1..=u8::MAX)));
                }
            }
            payload
        }
        Pattern::Text => {
            let mut payload = Vec::with_capacity(args.bytes);
            while payload.len() < args.bytes {
                let word = LOREM_WORDS[rng.random_range(0..LOREM_WORDS.len())];
                payload.extend_from_slice(word.as_bytes());
                payload.push(b' ');
            }
            payload.truncate(args.bytes);
            payload
        }
    }
}

fn main() {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let payload = generate(&args, &mut rng);
    let nonzero = payload.iter().filter(|&&b| b != 0).count();

    if let Err(e) = fs::write(&args.output, &payload) {
        eprintln!("Error: failed to write {}: {}", args.output.display(), e);
        std::process::exit(1);
    }

    println!(
        "Wrote {} bytes to {} ({:?}, seed {}, {} nonzero)",
        payload.len(),
        args.output.display(),
        args.pattern,
        seed,
        nonzero
    );
}
