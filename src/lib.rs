//! Monte Carlo simulator for a tabletop wargame attack sequence.
//!
//! A trial walks the cascade of hit, wound, and save rolls that tabletop
//! players resolve by hand: each stage rolls one die per success from the
//! stage before it, and every wound that gets past the save inflicts the
//! weapon's damage. The simulation layer repeats the trial thousands of
//! times, sequentially or across rayon workers, and reports average
//! outcomes.

pub mod attack;
pub mod config;
pub mod dice;
pub mod error;
pub mod simulation;
pub mod stats;

pub use attack::{hit_succeeds, resolve_attack, save_succeeds, wound_threshold};
pub use config::{AttackerProfile, ScenarioConfig, TargetProfile, WeaponProfile};
pub use dice::{DiceSource, FastDice, ScriptedDice};
pub use error::{Result, SimError};
pub use simulation::{run_and_aggregate, run_trial, run_trial_with_seed};
pub use stats::{AggregateResult, TrialResult};
