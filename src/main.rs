//! CLI entry point for the attack sequence simulator.

use clap::{Parser, ValueEnum};
use mathhammer::{
    config::ScenarioConfig,
    simulation::{run_and_aggregate, run_trial, run_trial_with_seed},
    stats::TrialResult,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "mathhammer")]
#[command(version = "0.1")]
#[command(about = "Monte Carlo simulator for tabletop attack sequences", long_about = None)]
struct Args {
    /// Path to a scenario file (YAML or JSON); omit for the built-in demo scenario
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of trials to run
    #[arg(short = 'n', long, default_value = "10000")]
    trials: usize,

    /// Run trials across worker threads
    #[arg(short, long, default_value = "false")]
    parallel: bool,

    /// Base seed for reproducible runs (default: fresh entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Show timing information
    #[arg(long, default_value = "false")]
    timing: bool,

    /// Resolve one attack sequence and print its stage-by-stage breakdown
    #[arg(long, default_value = "false")]
    single: bool,
}

fn main() {
    let args = Args::parse();

    let scenario = match &args.config {
        Some(path) => match ScenarioConfig::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading scenario: {}", e);
                std::process::exit(1);
            }
        },
        None => ScenarioConfig::example(),
    };

    if args.single {
        let result = match args.seed {
            Some(seed) => run_trial_with_seed(&scenario, seed),
            None => run_trial(&scenario),
        };
        print_resolution(&result);
        return;
    }

    let start = Instant::now();
    let stats = match run_and_aggregate(&scenario, args.trials, args.parallel, args.seed) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    match args.output {
        OutputFormat::Text => {
            println!("=== Attack Simulation Results ===");
            println!("Trials: {}", stats.trials);
            println!(
                "Scenario: {} models, BS {}+, {} attacks each, S{} AP{} D{} vs T{} Sv{}+",
                scenario.attacker.models,
                scenario.attacker.ballistic_skill,
                scenario.weapon.attacks,
                scenario.weapon.strength,
                scenario.weapon.armour_penetration,
                scenario.weapon.damage,
                scenario.target.toughness,
                scenario.target.save,
            );
            println!();
            println!(
                "Average Hits:   {:.2} of {:.0} attacks",
                stats.avg_hits, stats.avg_attacks
            );
            println!("Average Wounds: {:.2}", stats.avg_wounds);
            println!("Average Saves:  {:.2}", stats.avg_saves);
            println!();
            println!(
                "Average Damage: {:.2} ± {:.2}",
                stats.avg_damage, stats.std_damage
            );
            println!("Damage Range: {} - {}", stats.min_damage, stats.max_damage);

            if args.timing {
                println!();
                println!("--- Performance ---");
                println!("Total time: {:.3}s", elapsed.as_secs_f64());
                println!(
                    "Per trial: {:.3}ms",
                    elapsed.as_secs_f64() * 1000.0 / stats.trials as f64
                );
                println!(
                    "Trials/sec: {:.0}",
                    stats.trials as f64 / elapsed.as_secs_f64()
                );
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "trials": stats.trials,
                "parallel": args.parallel,
                "seed": args.seed,
                "elapsed_seconds": elapsed.as_secs_f64(),
                "scenario": scenario,
                "stats": {
                    "avg_attacks": stats.avg_attacks,
                    "avg_hits": stats.avg_hits,
                    "avg_wounds": stats.avg_wounds,
                    "avg_saves": stats.avg_saves,
                    "avg_damage": stats.avg_damage,
                    "std_damage": stats.std_damage,
                    "min_damage": stats.min_damage,
                    "max_damage": stats.max_damage,
                }
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}

/// Print the stage-by-stage record of a single resolved attack.
fn print_resolution(result: &TrialResult) {
    println!(
        "{} attacks were made of which {} were successful.",
        result.attacks, result.hits
    );
    println!(
        "{} wounds were made of which {} were successful.",
        result.hits, result.wounds
    );
    println!(
        "{} saves were made of which {} were successful.",
        result.wounds, result.saves
    );
    println!("The total damage inflicted was {}.", result.damage);
}
