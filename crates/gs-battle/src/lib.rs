//! Turn-based tactical battle engine for Grid Skirmish.
//!
//! A hero and a single enemy face off on a 5x5 grid. The player moves,
//! locks on and strikes, guards to bank SP, or spends a full SP gauge on the
//! special move; the enemy answers with a simple chase-and-hit policy. All
//! state lives in a [`BattleSession`], which a front-end drives with raw
//! inputs and [`BattleSession::advance`] and observes through read-only
//! accessors or a [`BattleSnapshot`].

/// Enemy decision policy.
pub mod ai;
/// Damage ranges and strike kinds.
pub mod combat;
/// Battle and session configuration.
pub mod config;
/// Error types for the battle crate.
pub mod error;
/// The 5x5 grid: tiles, distance and ranges.
pub mod grid;
/// The rolling battle log.
pub mod log;
/// Turn phases, interaction states and battle status.
pub mod phase;
/// Player input handling.
pub mod resolver;
/// Virtual-time task queue.
pub mod schedule;
/// The battle session.
pub mod session;
/// Hit points, positions and the SP gauge.
pub mod unit;

pub use ai::EnemyIntent;
pub use combat::{DamageRange, HeroStrike};
pub use config::{BattleConfig, SessionConfig, SpecialMove, Timings};
pub use error::{BattleError, BattleResult};
pub use grid::Tile;
pub use log::BattleLog;
pub use phase::{BattleStatus, InteractionState, TurnPhase};
pub use schedule::Scheduler;
pub use session::{BattleSession, BattleSnapshot, VictoryCallback};
pub use unit::{SpGauge, UnitState};
