use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use maxsub::cs::array;
use maxsub::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "maxsub")]
#[command(about = "Finds the maximum-sum contiguous subarray of a list of integers")]
#[command(version)]
struct Args {
    /// Optional algorithm selector followed by the integers, or `-` to read
    /// one integer per line from stdin. An unrecognized selector is parsed
    /// as the first integer and dynamic programming is used.
    #[arg(
        value_name = "ALGORITHM | INTEGER",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    inputs: Vec<String>,
}

fn usage() -> String {
    format!(
        "usage: maxsub [{}] INTEGER INTEGER...",
        Algorithm::available_algorithms(" | ")
    )
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    debug!("parsed arguments: {:?}", args);
    match run(&args.inputs) {
        Ok(Some(report)) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(inputs: &[String]) -> Result<Option<String>> {
    run_with(inputs, io::stdin().lock())
}

/// Resolves the algorithm and input from `inputs`, solves, and returns the
/// report. A lone `-` reads the integers from `stdin` instead. `None` means
/// there was nothing to solve.
fn run_with<R: BufRead>(inputs: &[String], stdin: R) -> Result<Option<String>> {
    let Some(first) = inputs.first() else {
        return Ok(None);
    };

    let (algorithm, rest) = match first.parse::<Algorithm>() {
        Ok(algorithm) => (algorithm, &inputs[1..]),
        Err(_) => (Algorithm::default(), inputs),
    };
    if rest.is_empty() {
        return Ok(None);
    }

    let values = if rest.len() == 1 && rest[0] == "-" {
        info!("reading integers from stdin");
        array::parse_lines(stdin).context("reading stdin")?
    } else {
        array::parse(rest)?
    };
    info!("solving {} integers with {}", values.len(), algorithm);

    let best = algorithm.solve(&values)?;
    Ok(Some(format!(
        "-- Using algorithm: {}\n== maximum subarray ==\n{}",
        algorithm,
        best.display(&values)
    )))
}
