//! Prints UUIDv4 strings, optionally reproducible from a seed
//!
//! `uuid4 [-n count] [-s seed]` draws from the operating system by default. With `-s`, the
//! identifiers come from a `StdRng` seeded with `seed`, so the same seed prints the same list.

use rand::{rngs::StdRng, SeedableRng};
use std::{env, io, io::Write, process::ExitCode};
use uniqueid::{SystemEntropy, Uuid, V4Generator};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
struct Options {
    count: usize,
    seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: 1,
            seed: None,
        }
    }
}

fn main() -> io::Result<ExitCode> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "uuid4".to_owned());
    let opts = match Options::parse(args) {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} [-n count] [-s seed]", program);
            return Ok(ExitCode::FAILURE);
        }
    };

    let ids: Box<dyn Iterator<Item = Uuid>> = match opts.seed {
        Some(seed) => Box::new(V4Generator::with_rand08(StdRng::seed_from_u64(seed))),
        None => Box::new(V4Generator::<SystemEntropy>::default()),
    };

    let mut out = io::BufWriter::new(io::stdout().lock());
    for e in ids.take(opts.count) {
        writeln!(out, "{}", uuid::Uuid::from(e))?;
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

impl Options {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut opts = Self::default();
        let (mut count, mut seed) = (None, None);
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let slot = match flag.as_str() {
                "-n" => &mut count,
                "-s" => &mut seed,
                _ => return Err(format!("unrecognized argument '{}'", flag)),
            };
            if slot.is_some() {
                return Err(format!("option '{}' given more than once", flag));
            }
            let value = args
                .next()
                .ok_or_else(|| format!("argument to option '{}' missing", flag))?;
            *slot = Some(value);
        }

        if let Some(n) = count {
            opts.count = n
                .parse()
                .map_err(|_| format!("invalid argument to option '-n': '{}'", n))?;
        }
        if let Some(s) = seed {
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => s.parse(),
            };
            let seed = parsed.map_err(|_| format!("invalid argument to option '-s': '{}'", s))?;
            opts.seed = Some(seed);
        }
        Ok(opts)
    }
}
