use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use log::info;
use maxsub::cs::randomized::{write_random_integers, MAGNITUDE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[derive(Parser, Debug)]
#[command(name = "random_integers")]
#[command(about = "Prints random integers in [-100, 100], one per line, for piping into maxsub")]
struct Args {
    /// How many integers to print
    amount: usize,

    /// Seed for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "generating {} integers in [-{}, {}] with seed {}",
        args.amount, MAGNITUDE, MAGNITUDE, seed
    );

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut out = BufWriter::new(io::stdout().lock());
    write_random_integers(&mut out, &mut rng, args.amount)?;
    Ok(())
}
