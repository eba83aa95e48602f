//! Randomized trial runner.
//!
//! One group with synthetic names (`A0..`, `B0..`) is reused across trials.
//! Each trial reshuffles every preference list, runs the engine and
//! measures the result; the whole trial is timed. The RNG is a
//! `ChaCha8Rng`, so a fixed seed replays the exact same trials.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::engine::{Algorithm, MatchOutcome};
use crate::experiment::{ConfigError, ExperimentConfig, ExperimentReport};
use crate::ledger::Group;
use crate::metrics::QualitySummary;
use crate::types::MatchError;

/// Errors from [`run_experiment`] and [`scaling_sweep`]
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Synthetic participant names: `{prefix}0 .. {prefix}{count-1}`
pub fn synthetic_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{}{}", prefix, i)).collect()
}

/// One trial: reshuffle every preference list, match, measure.
pub fn run_trial<R: Rng + ?Sized>(
    group: &mut Group,
    algorithm: Algorithm,
    rng: &mut R,
) -> Result<(MatchOutcome, QualitySummary), MatchError> {
    group.randomize_all(rng);
    let outcome = algorithm.run(group)?;
    let quality = QualitySummary::measure(group)?;
    Ok((outcome, quality))
}

/// Run `config.run_count()` randomized trials and aggregate them.
///
/// # Example
///
/// ```
/// use stable_match::engine::Algorithm;
/// use stable_match::experiment::{run_experiment, ExperimentConfig};
///
/// let config = ExperimentConfig::new(Algorithm::GaleShapley)
///     .with_participant_count(8)
///     .with_run_count(20)
///     .with_seed(7);
/// let report = run_experiment(&config).unwrap();
///
/// assert_eq!(report.run_count, 20);
/// assert!(report.avg_happiness_a > report.avg_happiness_b);
/// ```
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    config.validate()?;

    let count = config.participant_count();
    let runs = config.run_count();
    let algorithm = config.algorithm();
    let seed = config.seed().unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let names_a = synthetic_names("A", count);
    let names_b = synthetic_names("B", count);
    let mut group = Group::new(names_a.as_slice(), names_b.as_slice())?;

    let mut total_a = 0.0;
    let mut total_b = 0.0;
    let mut total_overall = 0.0;
    let mut trial_time = Duration::ZERO;

    for run in 0..runs {
        let start = Instant::now();
        let (outcome, quality) = run_trial(&mut group, algorithm, &mut rng)?;
        trial_time += start.elapsed();

        total_a += quality.happiness_a;
        total_b += quality.happiness_b;
        total_overall += quality.happiness_overall;

        tracing::debug!(
            run,
            proposals = outcome.proposals,
            happiness = quality.happiness_overall,
            "trial complete"
        );
    }

    let runs_f = runs as f64;
    let report = ExperimentReport {
        algorithm,
        participant_count: count,
        run_count: runs,
        seed,
        avg_happiness_a: total_a / runs_f,
        avg_happiness_b: total_b / runs_f,
        avg_happiness_overall: total_overall / runs_f,
        fairness_ratio: total_a / total_b,
        avg_duration_per_run: trial_time.div_f64(runs_f),
    };

    tracing::info!(
        algorithm = %algorithm,
        participants = count,
        runs,
        happiness = report.avg_happiness_overall,
        fairness = report.fairness_ratio,
        ms_per_trial = report.avg_duration_ms(),
        "experiment complete"
    );
    Ok(report)
}

/// One experiment per group size, to see how cost scales.
///
/// Every size starts from the same `seed` when one is given.
pub fn scaling_sweep(
    sizes: &[usize],
    run_count: usize,
    algorithm: Algorithm,
    seed: Option<u64>,
) -> Result<Vec<ExperimentReport>, ExperimentError> {
    sizes
        .iter()
        .map(|&size| {
            let mut config = ExperimentConfig::new(algorithm)
                .with_participant_count(size)
                .with_run_count(run_count);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_experiment(&config)
        })
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
