//! Turn phases and the player's interaction sub-state.

use serde::{Deserialize, Serialize};

/// Top-level alternation between player and enemy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnPhase {
    /// "PLAYER TURN" banner is showing; input is not accepted yet.
    PlayerStart,
    /// The player may act.
    PlayerAction,
    /// "ENEMY TURN" banner is showing.
    EnemyStart,
    /// The enemy is thinking or acting.
    EnemyAction,
}

impl TurnPhase {
    /// Banner text shown while this phase is being announced.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::PlayerStart => Some("PLAYER TURN"),
            Self::EnemyStart => Some("ENEMY TURN"),
            Self::PlayerAction | Self::EnemyAction => None,
        }
    }

    /// Whether this phase belongs to the player.
    pub fn is_player(self) -> bool {
        matches!(self, Self::PlayerStart | Self::PlayerAction)
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlayerStart => write!(f, "PLAYER_START"),
            Self::PlayerAction => write!(f, "PLAYER_ACTION"),
            Self::EnemyStart => write!(f, "ENEMY_START"),
            Self::EnemyAction => write!(f, "ENEMY_ACTION"),
        }
    }
}

/// What the next tap means during the player's action phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// Hero picked up; reachable tiles are highlighted.
    Moving,
    /// Waiting for the enemy to be picked as a target.
    AttackSelect,
    /// Target locked; the next enemy tap strikes.
    TargetConfirm,
    /// Ultimate skill cut-in is playing; all input is dropped.
    SkillAnimation,
}

impl std::fmt::Display for InteractionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Moving => write!(f, "MOVING"),
            Self::AttackSelect => write!(f, "ATTACK_SELECT"),
            Self::TargetConfirm => write!(f, "TARGET_CONFIRM"),
            Self::SkillAnimation => write!(f, "SKILL_ANIMATION"),
        }
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    /// Turns are alternating.
    #[default]
    Ongoing,
    /// Enemy HP hit zero; the victory callback is pending.
    EnemyDefeated,
    /// The victory callback has fired.
    Victory,
    /// The host tore the session down.
    Abandoned,
}

impl BattleStatus {
    /// Whether the battle is over or about to be.
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners() {
        assert_eq!(TurnPhase::PlayerStart.banner(), Some("PLAYER TURN"));
        assert_eq!(TurnPhase::EnemyStart.banner(), Some("ENEMY TURN"));
        assert_eq!(TurnPhase::PlayerAction.banner(), None);
    }

    #[test]
    fn display_uses_screaming_case() {
        assert_eq!(TurnPhase::EnemyAction.to_string(), "ENEMY_ACTION");
        assert_eq!(InteractionState::TargetConfirm.to_string(), "TARGET_CONFIRM");
        assert_eq!(
            serde_json::to_string(&TurnPhase::PlayerAction).unwrap(),
            "\"PLAYER_ACTION\""
        );
    }

    #[test]
    fn status_finished() {
        assert!(!BattleStatus::Ongoing.is_finished());
        assert!(BattleStatus::EnemyDefeated.is_finished());
        assert!(BattleStatus::Abandoned.is_finished());
    }
}
