//! Unit state: hit points, position, and the hero's SP gauge.

use serde::{Deserialize, Serialize};

use crate::grid::Tile;

/// Maximum SP; the ultimate skill needs a full gauge.
pub const SP_MAX: u32 = 100;
/// SP gained when the hero's turn starts.
pub const SP_TURN_START: u32 = 20;
/// SP gained for landing a normal attack.
pub const SP_ON_HIT: u32 = 15;
/// SP gained for guarding.
pub const SP_ON_GUARD: u32 = 10;
/// SP gained when the enemy lands a hit on the hero.
pub const SP_ON_DAMAGE_TAKEN: u32 = 10;

/// Hit points and position of one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitState {
    /// Current HP, never above `max_hp`.
    pub hp: u32,
    /// Maximum HP.
    pub max_hp: u32,
    /// Where the unit stands.
    pub tile: Tile,
}

impl UnitState {
    /// Create a unit at the given tile.
    pub fn new(hp: u32, max_hp: u32, tile: Tile) -> Self {
        Self {
            hp: hp.min(max_hp),
            max_hp,
            tile,
        }
    }

    /// Whether the unit still has HP left.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Subtract damage, flooring at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }

    /// HP as a fraction of max, for gauges.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f64 / self.max_hp as f64
        }
    }
}

/// The hero's skill point gauge, clamped to `0..=SP_MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpGauge(u32);

impl SpGauge {
    /// Current SP.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Add SP, saturating at the maximum.
    pub fn gain(&mut self, amount: u32) {
        self.0 = self.0.saturating_add(amount).min(SP_MAX);
    }

    /// Empty the gauge.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Whether the ultimate skill can be paid for.
    pub fn is_full(self) -> bool {
        self.0 >= SP_MAX
    }
}

impl std::fmt::Display for SpGauge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
