//! Scenario profiles loaded from YAML/JSON files.

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The attacking unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackerProfile {
    /// Number of models in the unit; scales total attack volume.
    pub models: i32,
    /// Minimum die face that scores a hit (2..=6).
    pub ballistic_skill: i32,
}

/// The unit being shot at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetProfile {
    /// Compared against weapon strength to pick the wound threshold.
    pub toughness: i32,
    /// Minimum modified die face that negates a wound (2..=7).
    pub save: i32,
}

/// The weapon every model in the attacking unit fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Attacks made per attacking model.
    pub attacks: i32,
    /// Compared against target toughness to pick the wound threshold.
    pub strength: i32,
    /// Subtracted from each save roll; negative values make the save easier.
    pub armour_penetration: i32,
    /// Damage inflicted per unsaved wound.
    pub damage: i32,
}

/// Full scenario loaded from YAML/JSON: who is shooting, at what, with which
/// weapon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub attacker: AttackerProfile,
    pub target: TargetProfile,
    pub weapon: WeaponProfile,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML or JSON file, keyed on the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let path_str = path.as_ref().to_string_lossy().to_lowercase();

        if path_str.ends_with(".json") {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Load a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scenario from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ScenarioConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every profile field against its allowed range.
    ///
    /// Armour penetration is unbounded; any other field is either strictly
    /// positive or a die-face threshold.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: i32) -> Result<()> {
            if value > 0 {
                Ok(())
            } else {
                Err(SimError::InvalidProfile(format!(
                    "{name} must be positive (got {value})"
                )))
            }
        }

        positive("attacker.models", self.attacker.models)?;
        positive("target.toughness", self.target.toughness)?;
        positive("weapon.attacks", self.weapon.attacks)?;
        positive("weapon.strength", self.weapon.strength)?;
        positive("weapon.damage", self.weapon.damage)?;

        if !(2..=6).contains(&self.attacker.ballistic_skill) {
            return Err(SimError::InvalidProfile(format!(
                "attacker.ballistic_skill must be within 2..=6 (got {})",
                self.attacker.ballistic_skill
            )));
        }
        if !(2..=7).contains(&self.target.save) {
            return Err(SimError::InvalidProfile(format!(
                "target.save must be within 2..=7 (got {})",
                self.target.save
            )));
        }
        Ok(())
    }

    /// The built-in demo scenario: 10 models hitting on 3+ with 10 attacks
    /// each at S5 AP-1 D2, into a T4 unit saving on 3+.
    pub fn example() -> Self {
        Self {
            attacker: AttackerProfile {
                models: 10,
                ballistic_skill: 3,
            },
            target: TargetProfile {
                toughness: 4,
                save: 3,
            },
            weapon: WeaponProfile {
                attacks: 10,
                strength: 5,
                armour_penetration: -1,
                damage: 2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_YAML: &str = "\
attacker:
  models: 10
  ballistic_skill: 3
target:
  toughness: 4
  save: 3
weapon:
  attacks: 10
  strength: 5
  armour_penetration: -1
  damage: 2
";

    #[test]
    fn yaml_parses_into_the_demo_scenario() {
        let scenario = ScenarioConfig::from_yaml(SCENARIO_YAML).unwrap();
        assert_eq!(scenario, ScenarioConfig::example());
    }

    #[test]
    fn json_round_trips() {
        let json = serde_json::to_string(&ScenarioConfig::example()).unwrap();
        let scenario = ScenarioConfig::from_json(&json).unwrap();
        assert_eq!(scenario, ScenarioConfig::example());
    }

    #[test]
    fn example_scenario_validates() {
        assert!(ScenarioConfig::example().validate().is_ok());
    }

    #[test]
    fn non_positive_fields_are_rejected() {
        fn rejects(mutate: impl FnOnce(&mut ScenarioConfig)) {
            let mut config = ScenarioConfig::example();
            mutate(&mut config);
            assert!(matches!(
                config.validate(),
                Err(SimError::InvalidProfile(_))
            ));
        }

        rejects(|c| c.attacker.models = 0);
        rejects(|c| c.attacker.models = -1);
        rejects(|c| c.target.toughness = 0);
        rejects(|c| c.weapon.attacks = 0);
        rejects(|c| c.weapon.strength = -1);
        rejects(|c| c.weapon.damage = -2);
    }

    #[test]
    fn ballistic_skill_range_is_enforced() {
        for bad in [1, 7, 0, -3] {
            let mut config = ScenarioConfig::example();
            config.attacker.ballistic_skill = bad;
            assert!(config.validate().is_err(), "ballistic skill {bad} accepted");
        }
        for good in 2..=6 {
            let mut config = ScenarioConfig::example();
            config.attacker.ballistic_skill = good;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn save_range_is_enforced() {
        for bad in [1, 8] {
            let mut config = ScenarioConfig::example();
            config.target.save = bad;
            assert!(config.validate().is_err(), "save {bad} accepted");
        }
        // 7+ is a legal save that no unmodified roll can make.
        let mut config = ScenarioConfig::example();
        config.target.save = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn armour_penetration_is_unbounded() {
        for ap in [-1_000, -1, 0, 1, 1_000] {
            let mut config = ScenarioConfig::example();
            config.weapon.armour_penetration = ap;
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn invalid_file_content_is_reported_on_load() {
        let broken = SCENARIO_YAML.replace("models: 10", "models: 0");
        assert!(matches!(
            ScenarioConfig::from_yaml(&broken),
            Err(SimError::InvalidProfile(_))
        ));
    }
}
