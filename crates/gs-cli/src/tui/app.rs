use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gs_battle::grid::GRID_SIZE;
use gs_battle::{BattleConfig, BattleResult, BattleSession, SessionConfig, Tile};

pub struct App {
    pub session: BattleSession,
    pub cursor: Tile,
    won: Rc<Cell<bool>>,
}

impl App {
    pub fn new(config: BattleConfig, session: SessionConfig) -> BattleResult<Self> {
        let won = Rc::new(Cell::new(false));
        let flag = Rc::clone(&won);
        let session = BattleSession::new(config, session, move || flag.set(true))?;
        let cursor = session.hero().tile;
        Ok(Self {
            session,
            cursor,
            won,
        })
    }

    /// Feed wall-clock time into the battle.
    pub fn tick(&mut self, elapsed: Duration) {
        self.session.advance(elapsed);
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let (x, y) = self.cursor.coords();
        let nx = x.saturating_add_signed(dx).min(GRID_SIZE - 1);
        let ny = y.saturating_add_signed(dy).min(GRID_SIZE - 1);
        if let Some(tile) = Tile::from_coords(nx, ny) {
            self.cursor = tile;
        }
    }

    pub fn tap(&mut self) {
        self.session.tap(self.cursor);
    }

    pub fn skill(&mut self) {
        self.session.use_skill();
    }

    pub fn guard(&mut self) {
        self.session.guard();
    }

    pub fn won(&self) -> bool {
        self.won.get()
    }

    /// Stop the battle; a pending victory is dropped.
    pub fn quit(&mut self) {
        self.session.abandon();
    }
}
