use std::num::NonZeroUsize;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use island_core::IslandGenerator;
use log::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate an island map and print its land and water regions",
    long_about = None
)]
struct Args {
    /// The map width
    #[arg(long, default_value = "15")]
    width: NonZeroUsize,
    /// The map height
    #[arg(long, default_value = "15")]
    height: NonZeroUsize,
    /// A seed value, defaults to nanoseconds since the unix epoch
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,
}

fn clock_seed() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_nanos() as i64)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);

    // Negative seeds keep their bit pattern as generator seeds.
    let island = IslandGenerator::new(seed as u64, args.width.get(), args.height.get())
        .generate()
        .with_context(|| format!("Failed to generate a {}x{} map", args.width, args.height))?;
    info!(
        "seed {seed} produced {} regions, fingerprint {:016x}",
        island.region_count(),
        island.fingerprint()
    );

    println!("{island}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fifteen_by_fifteen_with_clock_seed() {
        let args = Args::try_parse_from(["islandgen"]).expect("no flags should parse");
        assert_eq!(args.width.get(), 15);
        assert_eq!(args.height.get(), 15);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from(["islandgen", "--width", "30", "--height=8", "-s", "77"])
            .expect("valid flags should parse");
        assert_eq!(args.width.get(), 30);
        assert_eq!(args.height.get(), 8);
        assert_eq!(args.seed, Some(77));
    }

    #[test]
    fn accepts_negative_seeds() {
        let args = Args::try_parse_from(["islandgen", "--seed=-5"]).expect("negative seed parses");
        assert_eq!(args.seed, Some(-5));

        let args = Args::try_parse_from(["islandgen", "-s", "-9223372036854775808"])
            .expect("smallest 64-bit seed parses");
        assert_eq!(args.seed, Some(i64::MIN));
    }

    #[test]
    fn rejects_zero_and_malformed_dimensions() {
        assert!(Args::try_parse_from(["islandgen", "--width", "0"]).is_err());
        assert!(Args::try_parse_from(["islandgen", "--height", "-3"]).is_err());
        assert!(Args::try_parse_from(["islandgen", "--seed", "abc"]).is_err());
    }

    #[test]
    fn clock_seed_is_nonzero() {
        assert_ne!(clock_seed(), 0);
    }
}
