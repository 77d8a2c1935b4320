//! Attack resolution: the hit, wound, save cascade.
//!
//! Each stage rolls exactly as many dice as the previous stage produced
//! successes, so a dry stage short-circuits the rest of the sequence to
//! zero. The stage predicates are plain functions over die faces; all
//! randomness comes in through the caller's [`DiceSource`].

use crate::config::{AttackerProfile, TargetProfile, WeaponProfile};
use crate::dice::DiceSource;
use crate::stats::TrialResult;

/// A hit lands when the roll meets the attacker's ballistic skill.
#[inline]
pub fn hit_succeeds(roll: i32, ballistic_skill: i32) -> bool {
    roll >= ballistic_skill
}

/// Minimum face a wound roll must show, from the strength/toughness matchup.
///
/// Doubled toughness wounds on 2+, anything above toughness on 3+, parity on
/// 4+, everything below on 5+. The comparisons widen to i64 so doubling an
/// extreme toughness cannot overflow.
pub fn wound_threshold(strength: i32, toughness: i32) -> i32 {
    let strength = i64::from(strength);
    let toughness = i64::from(toughness);

    if strength >= toughness * 2 {
        2
    } else if strength > toughness {
        3
    } else if strength == toughness {
        4
    } else {
        5
    }
}

/// A save holds when the penetration-modified roll meets the save value.
///
/// Negative penetration makes the save easier. The arithmetic is unclamped:
/// penetration can push the effective threshold past either end of the die,
/// making the save automatic or impossible.
#[inline]
pub fn save_succeeds(roll: i32, armour_penetration: i32, save: i32) -> bool {
    i64::from(roll) - i64::from(armour_penetration) >= i64::from(save)
}

/// Resolve one full attack sequence against the given dice source.
///
/// Total attack volume is models times attacks per model; zero volume is
/// well-defined and consumes no dice. Profile shape (positivity, die-face
/// ranges) is the config layer's concern and is not re-checked here.
pub fn resolve_attack(
    attacker: &AttackerProfile,
    target: &TargetProfile,
    weapon: &WeaponProfile,
    dice: &mut impl DiceSource,
) -> TrialResult {
    let attacks = attacker.models.saturating_mul(weapon.attacks).max(0) as usize;

    let hits = dice
        .roll_n(attacks)
        .iter()
        .filter(|&&roll| hit_succeeds(roll, attacker.ballistic_skill))
        .count();

    let threshold = wound_threshold(weapon.strength, target.toughness);
    let wounds = dice
        .roll_n(hits)
        .iter()
        .filter(|&&roll| roll >= threshold)
        .count();

    let saves = dice
        .roll_n(wounds)
        .iter()
        .filter(|&&roll| save_succeeds(roll, weapon.armour_penetration, target.save))
        .count();

    let unsaved = (wounds - saves) as i64;
    TrialResult {
        attacks: attacks as u32,
        hits: hits as u32,
        wounds: wounds as u32,
        saves: saves as u32,
        damage: (unsaved * i64::from(weapon.damage)).max(0) as u64,
    }
}
