//! Battle and session configuration.
//!
//! [`BattleConfig`] is the immutable input handed over by the scenario that
//! starts a battle. It uses camelCase keys so existing scenario JSON loads
//! as-is. [`SessionConfig`] carries the host-side knobs: RNG seed and phase
//! timings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BattleError, BattleResult};

/// The hero's ultimate ability as shown on the cut-in overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialMove {
    /// Display name of the move.
    pub name: String,
    /// Flavor text shown under the name.
    pub description: String,
}

impl Default for SpecialMove {
    fn default() -> Self {
        Self {
            name: "Ultimate Strike".to_string(),
            description: "A powerful attack that deals massive damage.".to_string(),
        }
    }
}

/// Unit stats and presentation data for one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattleConfig {
    /// Enemy display name.
    pub enemy_name: String,
    /// Enemy HP at the start of the battle.
    pub enemy_hp: u32,
    /// Enemy maximum HP.
    pub enemy_max_hp: u32,
    /// Hero HP at the start of the battle.
    pub hero_hp: u32,
    /// Hero maximum HP.
    pub hero_max_hp: u32,
    /// Optional background image reference, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_url: Option<String>,
    /// The hero's ultimate ability.
    pub special_move: SpecialMove,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            enemy_name: "Enemy".to_string(),
            enemy_hp: 100,
            enemy_max_hp: 100,
            hero_hp: 100,
            hero_max_hp: 100,
            background_url: None,
            special_move: SpecialMove::default(),
        }
    }
}

impl BattleConfig {
    /// Set the enemy's name and HP (current and max).
    pub fn with_enemy(mut self, name: impl Into<String>, hp: u32) -> Self {
        self.enemy_name = name.into();
        self.enemy_hp = hp;
        self.enemy_max_hp = hp;
        self
    }

    /// Set the hero's current and maximum HP.
    pub fn with_hero_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hero_hp = hp;
        self.hero_max_hp = max_hp;
        self
    }

    /// Set the special move shown on the skill cut-in.
    pub fn with_special_move(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.special_move = SpecialMove {
            name: name.into(),
            description: description.into(),
        };
        self
    }

    /// Set the background reference.
    pub fn with_background(mut self, url: impl Into<String>) -> Self {
        self.background_url = Some(url.into());
        self
    }

    /// Check that the config describes a playable battle.
    pub fn validate(&self) -> BattleResult<()> {
        if self.enemy_max_hp == 0 {
            return Err(BattleError::InvalidConfig(
                "enemyMaxHp must be positive".to_string(),
            ));
        }
        if self.hero_max_hp == 0 {
            return Err(BattleError::InvalidConfig(
                "heroMaxHp must be positive".to_string(),
            ));
        }
        if self.enemy_hp == 0 {
            return Err(BattleError::InvalidConfig(
                "enemyHp must be positive".to_string(),
            ));
        }
        if self.enemy_hp > self.enemy_max_hp {
            return Err(BattleError::InvalidConfig(format!(
                "enemyHp {} exceeds enemyMaxHp {}",
                self.enemy_hp, self.enemy_max_hp
            )));
        }
        if self.hero_hp > self.hero_max_hp {
            return Err(BattleError::InvalidConfig(format!(
                "heroHp {} exceeds heroMaxHp {}",
                self.hero_hp, self.hero_max_hp
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON text.
    pub fn from_json_str(json: &str) -> BattleResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a config file.
    pub fn from_path(path: &Path) -> BattleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> BattleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Durations of the timed phase transitions, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// How long the "PLAYER TURN" / "ENEMY TURN" banners stay up.
    pub banner_ms: u64,
    /// Delay before the enemy acts in its action phase.
    pub enemy_think_ms: u64,
    /// Delay between the defeat log line and the victory callback.
    pub victory_delay_ms: u64,
    /// How long the skill cut-in plays before the hit lands.
    pub skill_cut_in_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            banner_ms: 2000,
            enemy_think_ms: 1000,
            victory_delay_ms: 1500,
            skill_cut_in_ms: 2000,
        }
    }
}

impl Timings {
    /// All delays set to zero; every deferred step runs on the next `advance`.
    pub fn instant() -> Self {
        Self {
            banner_ms: 0,
            enemy_think_ms: 0,
            victory_delay_ms: 0,
            skill_cut_in_ms: 0,
        }
    }

    /// Banner duration.
    pub fn banner(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    /// Enemy thinking delay.
    pub fn enemy_think(&self) -> Duration {
        Duration::from_millis(self.enemy_think_ms)
    }

    /// Victory callback delay.
    pub fn victory_delay(&self) -> Duration {
        Duration::from_millis(self.victory_delay_ms)
    }

    /// Skill cut-in duration.
    pub fn skill_cut_in(&self) -> Duration {
        Duration::from_millis(self.skill_cut_in_ms)
    }
}

/// Host-side configuration for a battle session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible damage rolls.
    pub seed: u64,
    /// Phase timings.
    pub timings: Timings,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            timings: Timings::default(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the phase timings.
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }
}
