//! Error types for the battle engine.

use thiserror::Error;

/// Result type for battle operations.
pub type BattleResult<T> = Result<T, BattleError>;

/// Errors raised while setting up a battle.
///
/// Gameplay itself never fails: rejected input is a silent no-op.
#[derive(Debug, Error)]
pub enum BattleError {
    /// A grid index outside the 5x5 field.
    #[error("tile index {0} is outside the grid (0..=24)")]
    TileOutOfRange(usize),

    /// The battle configuration is not playable.
    #[error("invalid battle config: {0}")]
    InvalidConfig(String),

    /// A config file could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A config file could not be read.
    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}
