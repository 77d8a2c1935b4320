//! Batch trial running and aggregation.

use crate::attack::resolve_attack;
use crate::config::ScenarioConfig;
use crate::dice::{DiceSource, FastDice};
use crate::error::{Result, SimError};
use crate::stats::{AggregateResult, TrialResult};
use rayon::prelude::*;

/// Resolve a single trial with entropy-seeded dice.
pub fn run_trial(scenario: &ScenarioConfig) -> TrialResult {
    let mut dice = FastDice::from_entropy();
    run_trial_with_dice(scenario, &mut dice)
}

/// Resolve a single trial with a specific seed.
pub fn run_trial_with_seed(scenario: &ScenarioConfig, seed: u64) -> TrialResult {
    let mut dice = FastDice::with_seed(seed);
    run_trial_with_dice(scenario, &mut dice)
}

/// Resolve a single trial against a caller-supplied dice source.
pub fn run_trial_with_dice(scenario: &ScenarioConfig, dice: &mut impl DiceSource) -> TrialResult {
    resolve_attack(&scenario.attacker, &scenario.target, &scenario.weapon, dice)
}

/// Run `count` trials in order on one seeded stream.
pub fn run_trials_sequential(
    scenario: &ScenarioConfig,
    count: usize,
    seed: u64,
) -> Vec<TrialResult> {
    let mut dice = FastDice::with_seed(seed);
    (0..count)
        .map(|_| run_trial_with_dice(scenario, &mut dice))
        .collect()
}

/// Run `count` trials across rayon workers.
///
/// Trial `i` rolls its own source seeded `seed + i`, so no two trials share a
/// draw stream and a fixed base seed reproduces the whole batch regardless of
/// scheduling.
pub fn run_trials_parallel(
    scenario: &ScenarioConfig,
    count: usize,
    seed: u64,
) -> Vec<TrialResult> {
    (0..count)
        .into_par_iter()
        .map(|i| run_trial_with_seed(scenario, seed.wrapping_add(i as u64)))
        .collect()
}

/// Run trials and reduce them to aggregate statistics.
///
/// `seed = None` draws a fresh base seed from entropy. A zero trial count is
/// an error: there is no mean over zero samples.
pub fn run_and_aggregate(
    scenario: &ScenarioConfig,
    trials: usize,
    parallel: bool,
    seed: Option<u64>,
) -> Result<AggregateResult> {
    if trials == 0 {
        return Err(SimError::ZeroTrials);
    }

    let seed = seed.unwrap_or_else(rand::random);
    let results = if parallel {
        run_trials_parallel(scenario, trials, seed)
    } else {
        run_trials_sequential(scenario, trials, seed)
    };

    AggregateResult::from_trials(&results)
}
