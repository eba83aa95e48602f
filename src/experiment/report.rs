//! Aggregate results of an experiment.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::engine::Algorithm;

/// Averages over every trial of one experiment.
///
/// Happiness values are per-trial means. `fairness_ratio` is computed from
/// the cumulative A and B totals, not averaged per trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentReport {
    /// Engine under test
    pub algorithm: Algorithm,

    /// Size of each group
    pub participant_count: usize,

    /// Number of trials
    pub run_count: usize,

    /// Seed the trial RNG started from
    pub seed: u64,

    pub avg_happiness_a: f64,
    pub avg_happiness_b: f64,
    pub avg_happiness_overall: f64,

    /// 1.0 is fair, above 1 favors group A
    pub fairness_ratio: f64,

    /// Mean wall-clock time of one trial (reshuffle, match, measure)
    pub avg_duration_per_run: Duration,
}

impl ExperimentReport {
    /// Mean trial time in milliseconds
    pub fn avg_duration_ms(&self) -> f64 {
        self.avg_duration_per_run.as_secs_f64() * 1000.0
    }

    /// Mean trial time per participant in milliseconds
    pub fn ms_per_participant(&self) -> f64 {
        if self.participant_count == 0 {
            return 0.0;
        }
        self.avg_duration_ms() / self.participant_count as f64
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Experiment with {} participants for {} runs ({})",
            self.participant_count, self.run_count, self.algorithm
        )?;
        writeln!(f, "\tA happiness:       {:.2}", self.avg_happiness_a)?;
        writeln!(f, "\tB happiness:       {:.2}", self.avg_happiness_b)?;
        writeln!(f, "\tAverage happiness: {:.2}", self.avg_happiness_overall)?;
        writeln!(f, "\tFairness ratio:    {:.2} (1 is perfectly fair)", self.fairness_ratio)?;
        write!(f, "\tTime per trial:    {:.4} ms", self.avg_duration_ms())
    }
}
