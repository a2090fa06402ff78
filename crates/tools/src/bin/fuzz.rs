use anyhow::{Context, Result, bail};
use clap::Parser;
use island_core::{IslandGenerator, verify_labeling};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    #[arg(long, default_value_t = 40)]
    max_size: usize,
}

fn pick_size(rng: &mut ChaCha8Rng, max_size: usize) -> usize {
    1 + rng.next_u64() as usize % max_size
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.max_size == 0 {
        bail!("--max-size must be at least 1");
    }

    println!(
        "Starting labeling fuzz harness on seed {} for {} runs up to {}x{}...",
        args.seed, args.runs, args.max_size, args.max_size
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_regions = 0_u64;
    for run in 0..args.runs {
        let map_seed = args.seed.wrapping_add(u64::from(run));
        let width = pick_size(&mut rng, args.max_size);
        let height = pick_size(&mut rng, args.max_size);

        let grid = IslandGenerator::new(map_seed, width, height)
            .generate()
            .with_context(|| format!("Generation failed for seed {map_seed}"))?;
        verify_labeling(&grid).with_context(|| {
            format!("Invariant failed for seed {map_seed} at {width}x{height}:{grid}")
        })?;

        debug!("seed {map_seed} {width}x{height}: {} regions", grid.region_count());
        total_regions += u64::from(grid.region_count());
    }

    println!("Fuzzing completed successfully, {total_regions} regions checked.");
    Ok(())
}
