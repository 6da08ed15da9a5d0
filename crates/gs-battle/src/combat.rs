//! Damage rolls.

use std::ops::RangeInclusive;

use rand::Rng;

/// An inclusive range of damage values rolled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    /// Lowest possible damage.
    pub min: u32,
    /// Highest possible damage.
    pub max: u32,
}

/// The hero's normal attack.
pub const NORMAL_ATTACK: DamageRange = DamageRange::new(20, 39);
/// The hero's ultimate skill.
pub const ULTIMATE_SKILL: DamageRange = DamageRange::new(60, 89);
/// The enemy's melee hit.
pub const ENEMY_ATTACK: DamageRange = DamageRange::new(5, 14);

impl DamageRange {
    /// Create a range; `min` must not exceed `max`.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Roll a damage value.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }

    /// The range as a `RangeInclusive`.
    pub fn as_range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

/// Which kind of hit the hero landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroStrike {
    /// Normal attack after locking on.
    Slash,
    /// Ultimate skill.
    Ultimate,
}

impl HeroStrike {
    /// Damage range for this strike.
    pub fn damage(self) -> DamageRange {
        match self {
            Self::Slash => NORMAL_ATTACK,
            Self::Ultimate => ULTIMATE_SKILL,
        }
    }

    /// Battle log line announcing the hit.
    pub fn log_line(self, damage: u32) -> String {
        match self {
            Self::Slash => format!(">> SLASH! Dealt {damage} DMG!"),
            Self::Ultimate => format!(">>> ULTIMATE HIT! {damage} DMG!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for range in [NORMAL_ATTACK, ULTIMATE_SKILL, ENEMY_ATTACK] {
            for _ in 0..500 {
                let dmg = range.roll(&mut rng);
                assert!(range.as_range().contains(&dmg), "{dmg} outside {range:?}");
            }
        }
    }

    #[test]
    fn rolls_cover_both_ends() {
        let mut rng = StdRng::seed_from_u64(7);
        let rolls: Vec<u32> = (0..2000).map(|_| ENEMY_ATTACK.roll(&mut rng)).collect();
        assert!(rolls.contains(&5));
        assert!(rolls.contains(&14));
    }

    #[test]
    fn strike_log_lines() {
        assert_eq!(HeroStrike::Slash.log_line(25), ">> SLASH! Dealt 25 DMG!");
        assert_eq!(HeroStrike::Ultimate.log_line(70), ">>> ULTIMATE HIT! 70 DMG!");
        assert_eq!(HeroStrike::Ultimate.damage(), ULTIMATE_SKILL);
    }
}
