//! Experiment harness: repeated randomized trials.
//!
//! Measures average happiness per side, the fairness ratio and matching
//! cost as group size scales. Pure measurement: nothing here affects how a
//! matching is computed.
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::Algorithm;
//! use stable_match::experiment::{run_experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::new(Algorithm::Naive)
//!     .with_participant_count(10)
//!     .with_run_count(20)
//!     .with_seed(1);
//! let report = run_experiment(&config).unwrap();
//! println!("{report}");
//! ```

pub mod config;
pub mod report;
pub mod runner;

pub use config::{ConfigError, ExperimentConfig};
pub use report::ExperimentReport;
pub use runner::{run_experiment, run_trial, scaling_sweep, synthetic_names, ExperimentError};
