mod app;
mod view;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use gs_battle::{BattleConfig, SessionConfig};

use app::App;

/// How long to wait for a key before redrawing.
const FRAME: Duration = Duration::from_millis(50);

pub fn run(config: BattleConfig, session: SessionConfig) -> Result<(), String> {
    let mut app = App::new(config, session).map_err(|e| format!("cannot start battle: {e}"))?;

    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    app.quit();
    if app.won() {
        println!("VICTORY against {}!", app.session.config().enemy_name);
    }
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        app.tick(now - last);
        last = now;

        terminal
            .draw(|frame| view::draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if !event::poll(FRAME).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            // Ctrl+C always quits
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1, 0),
                KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1, 0),
                KeyCode::Char('k') | KeyCode::Up => app.move_cursor(0, -1),
                KeyCode::Char('j') | KeyCode::Down => app.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => app.tap(),
                KeyCode::Char('s') => app.skill(),
                KeyCode::Char('g') => app.guard(),
                _ => {}
            }
        }
    }
}
