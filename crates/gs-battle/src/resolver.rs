//! Player input: hero, enemy and tile selection plus the skill and guard
//! buttons.
//!
//! Every entry point returns whether the input was accepted. Input is only
//! accepted during `PlayerAction` while no skill is animating and the
//! battle is still ongoing; anything else is dropped without touching state.

use rand::Rng;

use crate::combat::HeroStrike;
use crate::grid::{ATTACK_RANGE, Tile, distance};
use crate::phase::InteractionState;
use crate::session::{BattleSession, PhaseTask};
use crate::unit::SP_ON_GUARD;

impl<R: Rng> BattleSession<R> {
    /// The hero was tapped.
    ///
    /// Picks the hero up, skips straight to targeting on a second tap, or
    /// cancels a pending attack.
    pub fn select_hero(&mut self) -> bool {
        if !self.input_open() {
            return self.reject("select_hero");
        }
        match self.interaction {
            InteractionState::Idle => {
                self.interaction = InteractionState::Moving;
                self.log.push("Move Mode: Select blue tile.");
            }
            InteractionState::Moving => {
                self.interaction = InteractionState::AttackSelect;
                self.log.push("Attack Mode: Select Enemy.");
            }
            _ => {
                self.interaction = InteractionState::Idle;
                self.log.push("Cancelled.");
            }
        }
        true
    }

    /// An empty tile was tapped.
    pub fn select_tile(&mut self, tile: Tile) -> bool {
        if !self.input_open() {
            return self.reject("select_tile");
        }
        if self.interaction == InteractionState::Moving && self.move_targets().contains(&tile) {
            tracing::debug!(from = %self.hero.tile, to = %tile, "hero moves");
            self.hero.tile = tile;
            self.interaction = InteractionState::AttackSelect;
            self.log.push("Moved. Select Enemy to Attack.");
            return true;
        }
        let occupied = tile == self.hero.tile || self.enemy_tile() == Some(tile);
        if !occupied && self.interaction != InteractionState::Idle {
            self.interaction = InteractionState::Idle;
            self.log.push("Action Cancelled.");
            return true;
        }
        self.reject("select_tile")
    }

    /// The enemy was tapped.
    ///
    /// While moving this dashes the hero as close as the move range allows;
    /// otherwise it locks on and then strikes.
    pub fn select_enemy(&mut self) -> bool {
        if !self.input_open() {
            return self.reject("select_enemy");
        }
        let Some(enemy) = self.enemy_tile() else {
            return self.reject("select_enemy");
        };
        match self.interaction {
            InteractionState::Moving => {
                self.dash_towards(enemy);
                true
            }
            InteractionState::AttackSelect => {
                if distance(self.hero.tile, enemy) <= ATTACK_RANGE {
                    self.interaction = InteractionState::TargetConfirm;
                    self.log.push("Target Locked! Tap again to Strike.");
                } else {
                    self.log.push("Too far to attack!");
                }
                true
            }
            InteractionState::TargetConfirm => {
                self.strike(HeroStrike::Slash);
                true
            }
            InteractionState::Idle | InteractionState::SkillAnimation => {
                self.reject("select_enemy")
            }
        }
    }

    /// Route a tap on `tile` to the hero, the enemy or the tile handler.
    pub fn tap(&mut self, tile: Tile) -> bool {
        if tile == self.hero.tile {
            self.select_hero()
        } else if self.enemy_tile() == Some(tile) {
            self.select_enemy()
        } else {
            self.select_tile(tile)
        }
    }

    /// Cast the special move. Needs a full SP gauge.
    pub fn use_skill(&mut self) -> bool {
        if !self.can_use_skill() {
            return self.reject("use_skill");
        }
        self.interaction = InteractionState::SkillAnimation;
        self.cut_in = true;
        self.sp.reset();
        tracing::debug!(skill = %self.config.special_move.name, "casting");
        self.scheduler
            .schedule(self.timings.skill_cut_in(), PhaseTask::ResolveSkill);
        true
    }

    /// Skip the attack, bank some SP and end the turn.
    pub fn guard(&mut self) -> bool {
        if !self.can_guard() {
            return self.reject("guard");
        }
        self.log.push(">> Defensive Stance. SP +10");
        self.sp.gain(SP_ON_GUARD);
        self.enter_enemy_start();
        true
    }

    /// Move to the reachable tile closest to `enemy`. The first tile in
    /// scan order wins ties and the hero stays put unless a tile is strictly
    /// closer.
    fn dash_towards(&mut self, enemy: Tile) {
        let start = self.hero.tile;
        let mut best = start;
        let mut best_distance = distance(start, enemy);
        for tile in self.move_targets() {
            let d = distance(tile, enemy);
            if d < best_distance {
                best = tile;
                best_distance = d;
            }
        }
        self.hero.tile = best;

        if best_distance <= ATTACK_RANGE {
            self.interaction = InteractionState::TargetConfirm;
            self.log.push(if best != start {
                "Dashed & Locked Target!"
            } else {
                "Locked Target!"
            });
        } else {
            self.interaction = InteractionState::AttackSelect;
            self.log.push("Moved closer.");
        }
    }

    fn reject(&self, input: &str) -> bool {
        tracing::trace!(
            input,
            phase = %self.phase,
            interaction = %self.interaction,
            "input ignored"
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::{BattleConfig, SessionConfig};
    use crate::phase::TurnPhase;

    fn t(i: usize) -> Tile {
        Tile::new(i).unwrap()
    }

    fn ready() -> BattleSession {
        let mut s =
            BattleSession::new(BattleConfig::default(), SessionConfig::default(), || {}).unwrap();
        s.advance(Duration::from_secs(2));
        assert_eq!(s.phase(), TurnPhase::PlayerAction);
        s
    }

    #[test]
    fn hero_tap_cycles_modes() {
        let mut s = ready();
        assert!(s.select_hero());
        assert_eq!(s.interaction(), InteractionState::Moving);
        assert_eq!(s.log().latest(), Some("Move Mode: Select blue tile."));
        assert_eq!(s.reachable_tiles().len(), 12);

        assert!(s.select_hero());
        assert_eq!(s.interaction(), InteractionState::AttackSelect);
        assert_eq!(s.log().latest(), Some("Attack Mode: Select Enemy."));
        assert!(s.reachable_tiles().is_empty());

        assert!(s.select_hero());
        assert_eq!(s.interaction(), InteractionState::Idle);
        assert_eq!(s.log().latest(), Some("Cancelled."));
    }

    #[test]
    fn move_then_lock_on() {
        let mut s = ready();
        s.select_hero();
        assert!(s.select_tile(t(7)));
        assert_eq!(s.hero().tile, t(7));
        assert_eq!(s.interaction(), InteractionState::AttackSelect);
        assert_eq!(s.log().latest(), Some("Moved. Select Enemy to Attack."));
        assert_eq!(s.attackable_tiles().into_iter().collect::<Vec<_>>(), vec![t(2)]);

        assert!(s.select_enemy());
        assert_eq!(s.interaction(), InteractionState::TargetConfirm);
        assert_eq!(s.log().latest(), Some("Target Locked! Tap again to Strike."));
    }

    #[test]
    fn too_far_to_attack() {
        let mut s = ready();
        s.select_hero();
        s.select_hero();
        assert!(s.select_enemy());
        assert_eq!(s.interaction(), InteractionState::AttackSelect);
        assert_eq!(s.log().latest(), Some("Too far to attack!"));
    }

    #[test]
    fn unreachable_tile_cancels() {
        let mut s = ready();
        s.select_hero();
        // Corner (0,4) is four steps away.
        assert!(s.select_tile(t(20)));
        assert_eq!(s.interaction(), InteractionState::Idle);
        assert_eq!(s.hero().tile, t(12));
        assert_eq!(s.log().latest(), Some("Action Cancelled."));
    }

    #[test]
    fn idle_tile_tap_is_ignored() {
        let mut s = ready();
        let before = s.snapshot();
        assert!(!s.select_tile(t(0)));
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn idle_enemy_tap_is_ignored() {
        let mut s = ready();
        let before = s.snapshot();
        assert!(!s.select_enemy());
        assert_eq!(s.snapshot(), before);
    }

    #[test]
    fn dash_locks_on_from_start() {
        let mut s = ready();
        s.select_hero();
        assert!(s.select_enemy());
        assert_eq!(s.hero().tile, t(7));
        assert_eq!(s.interaction(), InteractionState::TargetConfirm);
        assert_eq!(s.log().latest(), Some("Dashed & Locked Target!"));
    }

    #[test]
    fn dash_in_place_when_already_adjacent() {
        let mut s = ready();
        s.hero.tile = t(7);
        s.select_hero();
        assert!(s.select_enemy());
        assert_eq!(s.hero().tile, t(7));
        assert_eq!(s.log().latest(), Some("Locked Target!"));
    }

    #[test]
    fn dash_falls_short() {
        let mut s = ready();
        s.hero.tile = t(22);
        s.select_hero();
        assert!(s.select_enemy());
        // (2,4) to (2,0): two steps up leaves the hero two tiles short.
        assert_eq!(s.hero().tile, t(12));
        assert_eq!(s.interaction(), InteractionState::AttackSelect);
        assert_eq!(s.log().latest(), Some("Moved closer."));
    }

    #[test]
    fn dash_prefers_first_tile_in_scan_order() {
        let mut s = ready();
        // Hero in one corner, enemy in the opposite one.
        s.enemy.tile = t(24);
        s.hero.tile = t(0);
        s.select_hero();
        s.select_enemy();
        // Tiles 2, 6 and 10 are all distance 2 from the hero and 6 from (4,4).
        assert_eq!(s.hero().tile, t(2));
        assert_eq!(s.log().latest(), Some("Moved closer."));
    }

    #[test]
    fn strike_hands_turn_to_enemy() {
        let mut s = ready();
        s.select_hero();
        s.select_enemy();
        let sp = s.sp().value();
        assert!(s.select_enemy());
        let dealt = 100 - s.enemy().hp;
        assert!((20..=39).contains(&dealt), "dealt {dealt}");
        assert_eq!(s.sp().value(), sp + 15);
        assert_eq!(s.phase(), TurnPhase::EnemyStart);
        assert_eq!(s.interaction(), InteractionState::Idle);
        assert_eq!(s.log().latest(), Some(format!(">> SLASH! Dealt {dealt} DMG!").as_str()));
    }

    #[test]
    fn guard_banks_sp() {
        let mut s = ready();
        assert!(s.guard());
        assert_eq!(s.sp().value(), 30);
        assert_eq!(s.phase(), TurnPhase::EnemyStart);
        assert_eq!(s.log().latest(), Some(">> Defensive Stance. SP +10"));
        assert!(!s.guard());
    }

    #[test]
    fn skill_needs_full_gauge() {
        let mut s = ready();
        assert!(!s.can_use_skill());
        assert!(!s.use_skill());
        s.sp.gain(100);
        assert!(s.use_skill());
        assert_eq!(s.sp().value(), 0);
        assert_eq!(s.interaction(), InteractionState::SkillAnimation);
        assert_eq!(s.status_line(), "Casting Ultimate...");
        assert_eq!(s.cut_in().map(|m| m.name.as_str()), Some("Ultimate Strike"));
        // Everything is locked while the cut-in plays.
        assert!(!s.select_hero());
        assert!(!s.guard());
        assert!(!s.use_skill());

        s.advance(Duration::from_secs(2));
        assert!(s.cut_in().is_none());
        let dealt = 100 - s.enemy().hp;
        assert!((60..=89).contains(&dealt), "dealt {dealt}");
        assert_eq!(s.sp().value(), 0);
        assert_eq!(s.phase(), TurnPhase::EnemyStart);
    }

    #[test]
    fn tap_routes_by_occupant() {
        let mut s = ready();
        assert!(s.tap(t(12)));
        assert_eq!(s.interaction(), InteractionState::Moving);
        assert!(s.tap(t(2)));
        assert_eq!(s.interaction(), InteractionState::TargetConfirm);
        assert!(s.tap(t(20)));
        assert_eq!(s.interaction(), InteractionState::Idle);
    }

    #[test]
    fn input_refused_during_banner() {
        let mut s =
            BattleSession::new(BattleConfig::default(), SessionConfig::default(), || {}).unwrap();
        let before = s.snapshot();
        assert!(!s.select_hero());
        assert!(!s.tap(t(7)));
        assert!(!s.guard());
        assert_eq!(s.snapshot(), before);
    }
}
