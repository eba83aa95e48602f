//! Stable Match - demonstration binary
//!
//! Walks through a worked five-person example, then runs the naive vs
//! Gale-Shapley experiments and a scaling sweep.
//!
//! ```bash
//! cargo run --release                      # built-in defaults
//! cargo run --release -- experiment.toml   # custom experiment
//! RUST_LOG=debug cargo run                 # per-run tracing
//! ```

use std::error::Error;

use tracing_subscriber::EnvFilter;

use stable_match::experiment::{run_experiment, scaling_sweep, ExperimentConfig};
use stable_match::metrics::{blocking_pairs, happiness};
use stable_match::{Algorithm, Group, QualitySummary, Side};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            tracing::error!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("===========================================");
    println!("  Stable Match");
    println!("===========================================");

    worked_example()?;

    match std::env::args().nth(1) {
        Some(path) => {
            let config = ExperimentConfig::load(&path)?;
            println!("\n{}", run_experiment(&config)?);
        }
        None => default_experiments()?,
    }
    Ok(())
}

fn worked_example() -> Result<(), Box<dyn Error>> {
    let mut group = Group::new(
        &["Anna", "Avery", "Alastair", "Amelia", "Abby"],
        &["Bailey", "Brian", "Beverly", "Bob", "Biyu"],
    )?;

    // Least -> most preferred
    group.set_all_preferences(vec![
        ("Anna", vec!["Bob", "Brian", "Bailey", "Beverly", "Biyu"]),
        ("Amelia", vec!["Bailey", "Brian", "Beverly", "Bob", "Biyu"]),
        ("Avery", vec!["Bailey", "Biyu", "Beverly", "Bob", "Brian"]),
        ("Abby", vec!["Bob", "Bailey", "Beverly", "Biyu", "Brian"]),
        ("Alastair", vec!["Biyu", "Bob", "Beverly", "Bailey", "Brian"]),
        ("Biyu", vec!["Amelia", "Abby", "Avery", "Anna", "Alastair"]),
        ("Bailey", vec!["Anna", "Avery", "Alastair", "Amelia", "Abby"]),
        ("Beverly", vec!["Avery", "Alastair", "Amelia", "Abby", "Anna"]),
        ("Bob", vec!["Amelia", "Alastair", "Abby", "Anna", "Avery"]),
        ("Brian", vec!["Avery", "Anna", "Amelia", "Abby", "Alastair"]),
    ])?;

    for algorithm in Algorithm::ALL {
        let outcome = algorithm.run(&mut group)?;
        println!(
            "\n{} ({} proposals, {} rejected, {:.0}% accepted):",
            algorithm,
            outcome.proposals,
            outcome.rejections,
            outcome.acceptance_rate().unwrap_or(0.0) * 100.0
        );
        print_partnership_quality(&group)?;
    }
    Ok(())
}

fn print_partnership_quality(group: &Group) -> Result<(), Box<dyn Error>> {
    for (a, b) in group.partnerships() {
        println!(
            "  {:10}({}) {:10}({})",
            group.name(a),
            happiness(group, a)?,
            group.name(b),
            happiness(group, b)?
        );
    }

    let unpartnered: Vec<String> = [Side::A, Side::B]
        .into_iter()
        .flat_map(|side| group.unpartnered(side))
        .map(|key| group.display(key).to_string())
        .collect();
    println!("  Unpartnered: {}", unpartnered.join(", "));

    let quality = QualitySummary::measure(group)?;
    println!("  Group A happiness = {:.3}", quality.happiness_a);
    println!("  Group B happiness = {:.3}", quality.happiness_b);
    println!("    Total happiness = {:.3}", quality.happiness_overall);
    println!("     Blocking pairs = {}", blocking_pairs(group)?.len());
    println!("             Digest = {}", group.matching_digest_hex());
    Ok(())
}

fn default_experiments() -> Result<(), Box<dyn Error>> {
    for algorithm in Algorithm::ALL {
        let config = ExperimentConfig::new(algorithm)
            .with_participant_count(20)
            .with_run_count(100);
        println!("\n{}", run_experiment(&config)?);
    }

    println!("\nScaling (gale-shapley, 10 runs each)");
    let sizes: Vec<usize> = (1..30).map(|i| i * 10).collect();
    for report in scaling_sweep(&sizes, 10, Algorithm::GaleShapley, None)? {
        let bar = "#".repeat((report.avg_duration_ms() * 0.2).round() as usize);
        println!(
            "{:10}: {:.4} ms/participant {}",
            report.participant_count,
            report.ms_per_participant(),
            bar
        );
    }
    Ok(())
}
