//! Experiment runner for randomized validation of the intersection engine.
//!
//! This executable generates random subspace pairs with a planted common
//! subspace of known dimension, computes their intersection basis, and
//! verifies the results against the rank-based ground truth: the computed
//! basis must have the planted dimension, and every one of its columns must
//! lie in both input spans. Per-trial measurements are written to a CSV file
//! for later analysis.

use anyhow::{Context, Result, anyhow, ensure};
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use zassenhaus_project::algorithms::zassenhaus::hstack;
use zassenhaus_project::rank::NumericalRank;
use zassenhaus_project::solvers::intersection_basis;
use zassenhaus_project::utils::generate::random_subspace_pair;

/// Command-line arguments for the randomized validation experiment.
#[derive(Parser, Debug)]
#[clap(
    name = "trials",
    about = "Runs randomized intersection computations against planted ground truth and records per-trial measurements."
)]
struct TrialArgs {
    /// Dimension of the ambient space.
    #[clap(long, default_value_t = 20)]
    n: usize,

    /// Number of random trials to run.
    #[clap(long, default_value_t = 50)]
    trials: usize,

    /// Seed for the random number generator, for reproducible runs.
    #[clap(long, default_value_t = 42)]
    seed: u64,

    /// Path to the output CSV file where results will be written.
    #[clap(long)]
    output: PathBuf,
}

/// A single row of the output CSV.
#[derive(Serialize, Debug)]
struct TrialRecord {
    trial: usize,
    n: usize,
    m1: usize,
    m2: usize,
    planted_dim: usize,
    computed_dim: usize,
    time_s: f64,
    containment_ok: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    let args = TrialArgs::parse();
    ensure!(args.n >= 2, "Ambient dimension must be at least 2.");
    log::info!("Starting {} trials in dimension {}.", args.trials, args.n);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create output file: {:?}", &args.output))?;

    for trial in 0..args.trials {
        let record = run_trial(trial, args.n, &mut rng)?;
        if !record.containment_ok {
            log::warn!(
                "Trial {}: a computed basis vector fell outside an input span.",
                trial
            );
        }
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("All trials completed; results written to {:?}.", args.output);
    Ok(())
}

/// Generates one random problem, computes its intersection basis, and checks
/// it against the planted ground truth.
fn run_trial(trial: usize, n: usize, rng: &mut StdRng) -> Result<TrialRecord> {
    // Sizes are drawn so that the planted subspace is the whole intersection:
    // the independently drawn remainders must fit in the ambient space.
    let m1 = rng.random_range(1..=n / 2);
    let m2 = rng.random_range(1..=n / 2);
    let planted_dim = rng.random_range(0..=m1.min(m2));
    let (u, v) = random_subspace_pair(n, m1, m2, planted_dim, rng);

    let start = Instant::now();
    let w = intersection_basis(u.as_ref(), v.as_ref())
        .map_err(|e| anyhow!("Trial {} failed: {}", trial, e))?;
    let time_s = start.elapsed().as_secs_f64();

    // The zero sentinel has rank 0, so the rank of W is the computed
    // intersection dimension in every case.
    let computed_dim = w.numerical_rank()?;
    ensure!(
        computed_dim == planted_dim,
        "Trial {}: computed dimension {} does not match planted dimension {}.",
        trial,
        computed_dim,
        planted_dim,
    );

    // Containment: appending W to either input must not increase its rank.
    let containment_ok = hstack(u.as_ref(), w.as_ref()).numerical_rank()? == m1
        && hstack(v.as_ref(), w.as_ref()).numerical_rank()? == m2;

    Ok(TrialRecord {
        trial,
        n,
        m1,
        m2,
        planted_dim,
        computed_dim,
        time_s,
        containment_ok,
    })
}
