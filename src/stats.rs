//! Per-trial results and their aggregation.

use crate::error::{Result, SimError};
use serde::Serialize;

/// Outcome of one fully resolved attack sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    /// Hit dice rolled: models times attacks per model.
    pub attacks: u32,
    /// Rolls that met the attacker's ballistic skill.
    pub hits: u32,
    /// Hits that met the wound threshold.
    pub wounds: u32,
    /// Wounds negated by a successful save.
    pub saves: u32,
    /// (wounds - saves) times weapon damage.
    pub damage: u64,
}

impl TrialResult {
    /// Wounds that got past the save.
    pub fn unsaved(&self) -> u32 {
        self.wounds - self.saves
    }
}

/// Mean outcomes over a batch of independent trials.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    pub trials: usize,
    pub avg_attacks: f64,
    pub avg_hits: f64,
    pub avg_wounds: f64,
    pub avg_saves: f64,
    pub avg_damage: f64,
    pub std_damage: f64,
    pub min_damage: u64,
    pub max_damage: u64,
}

impl AggregateResult {
    /// Reduce a batch of trials to arithmetic means plus damage spread.
    ///
    /// Errors on an empty batch rather than producing NaN means.
    pub fn from_trials(trials: &[TrialResult]) -> Result<Self> {
        if trials.is_empty() {
            return Err(SimError::ZeroTrials);
        }

        let n = trials.len() as f64;
        let mut attacks = 0u64;
        let mut hits = 0u64;
        let mut wounds = 0u64;
        let mut saves = 0u64;
        let mut damage = 0u64;
        let mut min_damage = u64::MAX;
        let mut max_damage = 0u64;

        for trial in trials {
            attacks += u64::from(trial.attacks);
            hits += u64::from(trial.hits);
            wounds += u64::from(trial.wounds);
            saves += u64::from(trial.saves);
            damage += trial.damage;
            min_damage = min_damage.min(trial.damage);
            max_damage = max_damage.max(trial.damage);
        }

        let avg_damage = damage as f64 / n;
        let variance = trials
            .iter()
            .map(|trial| {
                let delta = trial.damage as f64 - avg_damage;
                delta * delta
            })
            .sum::<f64>()
            / n;

        Ok(Self {
            trials: trials.len(),
            avg_attacks: attacks as f64 / n,
            avg_hits: hits as f64 / n,
            avg_wounds: wounds as f64 / n,
            avg_saves: saves as f64 / n,
            avg_damage,
            std_damage: variance.sqrt(),
            min_damage,
            max_damage,
        })
    }
}
