//! Enemy policy: hit the hero when adjacent, otherwise step towards them.
//!
//! The choice between attacking and moving depends only on adjacency; the
//! RNG decides nothing but damage.

use std::cmp::Ordering;

use rand::Rng;

use crate::combat::ENEMY_ATTACK;
use crate::grid::{Tile, in_attack_range};

/// What the enemy does on its action phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyIntent {
    /// Hit the hero for this much damage.
    Attack {
        /// Rolled damage.
        damage: u32,
    },
    /// Step to an adjacent tile.
    Advance {
        /// Destination tile.
        to: Tile,
    },
    /// Nothing to do (already on the hero's row and column).
    Hold,
}

/// Decide the enemy's action.
pub fn decide<R: Rng + ?Sized>(enemy: Tile, hero: Tile, rng: &mut R) -> EnemyIntent {
    if in_attack_range(enemy, hero) {
        return EnemyIntent::Attack {
            damage: ENEMY_ATTACK.roll(rng),
        };
    }
    match step_towards(enemy, hero) {
        Some(to) if to != hero => EnemyIntent::Advance { to },
        _ => EnemyIntent::Hold,
    }
}

/// One greedy step from `from` towards `target`, closing the column gap
/// before the row gap.
pub fn step_towards(from: Tile, target: Tile) -> Option<Tile> {
    let (fx, fy) = from.coords();
    let (tx, ty) = target.coords();
    match fx.cmp(&tx) {
        Ordering::Less => return from.offset(1, 0),
        Ordering::Greater => return from.offset(-1, 0),
        Ordering::Equal => {}
    }
    match fy.cmp(&ty) {
        Ordering::Less => from.offset(0, 1),
        Ordering::Greater => from.offset(0, -1),
        Ordering::Equal => None,
    }
}
