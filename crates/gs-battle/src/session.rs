//! Battle session: owns all battle state and drives the turn cycle.
//!
//! `BattleSession` is created from a [`BattleConfig`] and lives for one
//! battle. Deferred transitions (banners, the enemy's thinking pause, the
//! skill cut-in, the victory delay) are queued on an internal
//! [`Scheduler`] and only run when the host calls [`BattleSession::advance`].
//! Player input is handled in [`crate::resolver`].

use std::collections::BTreeSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::ai::{self, EnemyIntent};
use crate::combat::HeroStrike;
use crate::config::{BattleConfig, SessionConfig, SpecialMove, Timings};
use crate::error::BattleResult;
use crate::grid::{self, ATTACK_RANGE, MOVE_RANGE, Tile};
use crate::log::BattleLog;
use crate::phase::{BattleStatus, InteractionState, TurnPhase};
use crate::schedule::Scheduler;
use crate::unit::{SP_ON_DAMAGE_TAKEN, SP_ON_HIT, SP_TURN_START, SpGauge, UnitState};

/// Tile the hero starts on (centre of the field).
pub const HERO_START_TILE: usize = 12;
/// Tile the enemy starts on (top row, middle column).
pub const ENEMY_START_TILE: usize = 2;

/// Called once when the battle is won.
pub type VictoryCallback = Box<dyn FnOnce()>;

/// Deferred work queued on the session's scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PhaseTask {
    BeginPlayerAction,
    BeginEnemyAction,
    EnemyThink,
    ResolveSkill,
    DeclareVictory,
}

/// One battle between the hero and a single enemy.
pub struct BattleSession<R = StdRng> {
    pub(crate) config: BattleConfig,
    pub(crate) timings: Timings,
    pub(crate) rng: R,
    pub(crate) hero: UnitState,
    pub(crate) enemy: UnitState,
    pub(crate) sp: SpGauge,
    pub(crate) phase: TurnPhase,
    pub(crate) interaction: InteractionState,
    pub(crate) status: BattleStatus,
    pub(crate) banner: Option<&'static str>,
    pub(crate) cut_in: bool,
    pub(crate) log: BattleLog,
    pub(crate) turn: u32,
    pub(crate) scheduler: Scheduler<PhaseTask>,
    on_victory: Option<VictoryCallback>,
}

impl BattleSession<StdRng> {
    /// Start a battle with a seeded `StdRng`.
    pub fn new(
        config: BattleConfig,
        session: SessionConfig,
        on_victory: impl FnOnce() + 'static,
    ) -> BattleResult<Self> {
        Self::with_rng(
            config,
            session.timings,
            StdRng::seed_from_u64(session.seed),
            on_victory,
        )
    }
}

impl<R: Rng> BattleSession<R> {
    /// Start a battle with a caller-supplied random source.
    ///
    /// The session enters `PlayerStart` immediately: the first banner is up
    /// and the hero already has the turn-start SP.
    pub fn with_rng(
        config: BattleConfig,
        timings: Timings,
        rng: R,
        on_victory: impl FnOnce() + 'static,
    ) -> BattleResult<Self> {
        config.validate()?;
        let hero = UnitState::new(
            config.hero_hp,
            config.hero_max_hp,
            Tile::new(HERO_START_TILE)?,
        );
        let enemy = UnitState::new(
            config.enemy_hp,
            config.enemy_max_hp,
            Tile::new(ENEMY_START_TILE)?,
        );
        let mut log = BattleLog::default();
        log.push("Battle Commenced!");

        let mut session = Self {
            config,
            timings,
            rng,
            hero,
            enemy,
            sp: SpGauge::default(),
            phase: TurnPhase::PlayerStart,
            interaction: InteractionState::Idle,
            status: BattleStatus::Ongoing,
            banner: None,
            cut_in: false,
            log,
            turn: 0,
            scheduler: Scheduler::new(),
            on_victory: Some(Box::new(on_victory)),
        };
        tracing::info!(enemy = %session.config.enemy_name, "battle started");
        session.enter_player_start();
        Ok(session)
    }

    /// Let `elapsed` of virtual time pass, running every task that falls
    /// due in that window in order.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self
            .scheduler
            .now_ms()
            .saturating_add(elapsed.as_millis() as u64);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.settle(until);
    }

    /// Tear the session down: pending transitions are dropped, input is
    /// refused and the victory callback will never run.
    pub fn abandon(&mut self) {
        if self.status == BattleStatus::Victory || self.status == BattleStatus::Abandoned {
            return;
        }
        let dropped = self.scheduler.cancel_all();
        self.on_victory = None;
        self.status = BattleStatus::Abandoned;
        self.banner = None;
        self.cut_in = false;
        tracing::info!(dropped, "battle abandoned");
    }

    fn run_task(&mut self, task: PhaseTask) {
        tracing::debug!(?task, at_ms = self.scheduler.now_ms(), "running task");
        match task {
            PhaseTask::BeginPlayerAction => {
                self.banner = None;
                self.set_phase(TurnPhase::PlayerAction);
                self.interaction = InteractionState::Idle;
                self.log.push("Your turn.");
            }
            PhaseTask::BeginEnemyAction => {
                self.banner = None;
                self.set_phase(TurnPhase::EnemyAction);
                self.scheduler
                    .schedule(self.timings.enemy_think(), PhaseTask::EnemyThink);
            }
            PhaseTask::EnemyThink => {
                self.run_enemy_turn();
                self.enter_player_start();
            }
            PhaseTask::ResolveSkill => {
                self.cut_in = false;
                self.strike(HeroStrike::Ultimate);
            }
            PhaseTask::DeclareVictory => {
                self.status = BattleStatus::Victory;
                tracing::info!(turn = self.turn, "victory");
                if let Some(callback) = self.on_victory.take() {
                    callback();
                }
            }
        }
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        tracing::debug!(from = %self.phase, to = %phase, "phase change");
        self.phase = phase;
    }

    pub(crate) fn enter_player_start(&mut self) {
        self.turn += 1;
        self.set_phase(TurnPhase::PlayerStart);
        self.banner = TurnPhase::PlayerStart.banner();
        self.sp.gain(SP_TURN_START);
        self.scheduler
            .schedule(self.timings.banner(), PhaseTask::BeginPlayerAction);
    }

    pub(crate) fn enter_enemy_start(&mut self) {
        self.set_phase(TurnPhase::EnemyStart);
        self.banner = TurnPhase::EnemyStart.banner();
        self.interaction = InteractionState::Idle;
        self.scheduler
            .schedule(self.timings.banner(), PhaseTask::BeginEnemyAction);
    }

    /// Roll and apply a hero strike, then either schedule victory or hand
    /// the turn to the enemy.
    pub(crate) fn strike(&mut self, strike: HeroStrike) {
        let damage = strike.damage().roll(&mut self.rng);
        self.enemy.take_damage(damage);
        if strike == HeroStrike::Slash {
            self.sp.gain(SP_ON_HIT);
        }
        self.log.push(strike.log_line(damage));

        if self.enemy.is_alive() {
            self.enter_enemy_start();
        } else {
            self.log.push(">> ENEMY DEFEATED!");
            self.interaction = InteractionState::Idle;
            self.status = BattleStatus::EnemyDefeated;
            tracing::info!(turn = self.turn, "enemy defeated");
            self.scheduler
                .schedule(self.timings.victory_delay(), PhaseTask::DeclareVictory);
        }
    }

    fn run_enemy_turn(&mut self) {
        match ai::decide(self.enemy.tile, self.hero.tile, &mut self.rng) {
            EnemyIntent::Attack { damage } => {
                self.hero.take_damage(damage);
                self.sp.gain(SP_ON_DAMAGE_TAKEN);
                self.log.push(format!(">> Enemy attacks! Taken {damage} DMG."));
            }
            EnemyIntent::Advance { to } => {
                self.enemy.tile = to;
                self.log.push(">> Enemy moves closer...");
            }
            EnemyIntent::Hold => {}
        }
    }

}

impl<R> BattleSession<R> {
    /// The battle's configuration.
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Current interaction state.
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Lifecycle status.
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    /// The hero.
    pub fn hero(&self) -> &UnitState {
        &self.hero
    }

    /// The enemy, including its HP after death.
    pub fn enemy(&self) -> &UnitState {
        &self.enemy
    }

    /// Where the enemy stands, or `None` once it has been defeated.
    pub fn enemy_tile(&self) -> Option<Tile> {
        self.enemy.is_alive().then_some(self.enemy.tile)
    }

    /// The hero's SP gauge.
    pub fn sp(&self) -> SpGauge {
        self.sp
    }

    /// Banner text, while a turn banner is showing.
    pub fn banner(&self) -> Option<&'static str> {
        self.banner
    }

    /// The special move, while its cut-in is showing.
    pub fn cut_in(&self) -> Option<&SpecialMove> {
        self.cut_in.then_some(&self.config.special_move)
    }

    /// Tiles the hero can move to. Empty unless the hero is picked up.
    pub fn reachable_tiles(&self) -> BTreeSet<Tile> {
        if self.interaction != InteractionState::Moving {
            return BTreeSet::new();
        }
        self.move_targets()
    }

    pub(crate) fn move_targets(&self) -> BTreeSet<Tile> {
        grid::reachable_tiles(self.hero.tile, MOVE_RANGE, &[self.enemy.tile])
    }

    /// Tiles the hero can strike. Empty unless selecting or confirming a
    /// target.
    pub fn attackable_tiles(&self) -> BTreeSet<Tile> {
        match (self.interaction, self.enemy_tile()) {
            (InteractionState::AttackSelect | InteractionState::TargetConfirm, Some(enemy)) => {
                grid::attackable_tiles(self.hero.tile, enemy, ATTACK_RANGE)
            }
            _ => BTreeSet::new(),
        }
    }

    /// Whether player input is currently accepted.
    pub(crate) fn input_open(&self) -> bool {
        self.status == BattleStatus::Ongoing
            && self.phase == TurnPhase::PlayerAction
            && self.interaction != InteractionState::SkillAnimation
    }

    /// Whether the skill button would be accepted.
    pub fn can_use_skill(&self) -> bool {
        self.input_open() && self.sp.is_full()
    }

    /// Whether the guard button would be accepted.
    pub fn can_guard(&self) -> bool {
        self.input_open()
    }

    /// One-line status for the action bar.
    pub fn status_line(&self) -> String {
        if self.interaction == InteractionState::SkillAnimation {
            "Casting Ultimate...".to_string()
        } else {
            format!("Turn: {}", self.phase)
        }
    }

    /// The battle log.
    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// Turn number, starting at 1.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Virtual time since the battle started.
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.scheduler.now_ms())
    }

    /// Time until the next deferred transition, if one is pending.
    pub fn next_event_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    /// Capture everything a front-end can observe.
    pub fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            phase: self.phase,
            interaction: self.interaction,
            status: self.status,
            turn: self.turn,
            hero: self.hero.clone(),
            enemy: self.enemy.clone(),
            sp: self.sp.value(),
            banner: self.banner.map(str::to_string),
            cut_in: self.cut_in,
            reachable: self.reachable_tiles().into_iter().collect(),
            attackable: self.attackable_tiles().into_iter().collect(),
            log: self.log.entries().map(str::to_string).collect(),
            log_total: self.log.total(),
            elapsed_ms: self.scheduler.now_ms(),
            pending_tasks: self.scheduler.pending(),
        }
    }
}

impl<R> std::fmt::Debug for BattleSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSession")
            .field("phase", &self.phase)
            .field("interaction", &self.interaction)
            .field("status", &self.status)
            .field("turn", &self.turn)
            .field("hero", &self.hero)
            .field("enemy", &self.enemy)
            .field("sp", &self.sp)
            .field("elapsed_ms", &self.scheduler.now_ms())
            .finish_non_exhaustive()
    }
}

/// Serializable view of a session at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    /// Turn phase.
    pub phase: TurnPhase,
    /// Interaction state.
    pub interaction: InteractionState,
    /// Lifecycle status.
    pub status: BattleStatus,
    /// Turn number.
    pub turn: u32,
    /// Hero state.
    pub hero: UnitState,
    /// Enemy state.
    pub enemy: UnitState,
    /// Hero SP.
    pub sp: u32,
    /// Visible banner.
    pub banner: Option<String>,
    /// Whether the skill cut-in is showing.
    pub cut_in: bool,
    /// Highlighted move targets.
    pub reachable: Vec<Tile>,
    /// Highlighted attack targets.
    pub attackable: Vec<Tile>,
    /// Log lines, newest first.
    pub log: Vec<String>,
    /// Lines ever logged.
    pub log_total: u64,
    /// Virtual time in milliseconds.
    pub elapsed_ms: u64,
    /// Deferred transitions still queued.
    pub pending_tasks: usize,
}
