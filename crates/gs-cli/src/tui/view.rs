use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph};

use gs_battle::grid::GRID_SIZE;
use gs_battle::unit::SP_MAX;
use gs_battle::{BattleStatus, Tile};

use super::app::App;

/// Columns per board cell.
const CELL_WIDTH: u16 = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Board and side panel
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH * GRID_SIZE as u16 + 2),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    draw_board(frame, app, body[0]);
    draw_side_panel(frame, app, body[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(text) = app.session.banner() {
        draw_banner(frame, text);
    }
    if let Some(special) = app.session.cut_in() {
        draw_popup(
            frame,
            &special.name,
            &special.description,
            Color::Magenta,
        );
    }
    match app.session.status() {
        BattleStatus::EnemyDefeated => {
            draw_popup(frame, "ENEMY DEFEATED", "", Color::Green);
        }
        BattleStatus::Victory => {
            draw_popup(frame, "VICTORY", "Press q to leave the battle.", Color::Green);
        }
        BattleStatus::Ongoing | BattleStatus::Abandoned => {}
    }
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let title = Line::from(vec![
        Span::styled(" Grid Skirmish ", Style::default().bold()),
        Span::raw(format!("vs {} ", session.config().enemy_name)),
        Span::styled(
            format!("| turn {}", session.turn()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_board(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let reachable = session.reachable_tiles();
    let attackable = session.attackable_tiles();
    let hero = session.hero().tile;
    let enemy = session.enemy_tile();

    let mut lines = Vec::with_capacity(GRID_SIZE * 2);
    for y in 0..GRID_SIZE {
        let mut spans = Vec::with_capacity(GRID_SIZE);
        for x in 0..GRID_SIZE {
            let Some(tile) = Tile::from_coords(x, y) else {
                continue;
            };
            let (glyph, mut style) = if tile == hero {
                ("H", Style::default().fg(Color::Cyan).bold())
            } else if Some(tile) == enemy {
                ("E", Style::default().fg(Color::Red).bold())
            } else {
                ("·", Style::default().fg(Color::DarkGray))
            };
            if attackable.contains(&tile) {
                style = style.bg(Color::Red).fg(Color::White);
            } else if reachable.contains(&tile) {
                style = style.bg(Color::Blue);
            }
            let text = if tile == app.cursor {
                format!("[ {glyph} ]")
            } else {
                format!("  {glyph}  ")
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Field ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(board, area);
}

fn draw_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let hero = session.hero();
    let enemy = session.enemy();
    frame.render_widget(
        hp_gauge("Hero", hero.hp, hero.max_hp, hero.hp_ratio(), Color::Cyan),
        rows[0],
    );
    frame.render_widget(
        hp_gauge(
            &session.config().enemy_name,
            enemy.hp,
            enemy.max_hp,
            enemy.hp_ratio(),
            Color::Red,
        ),
        rows[1],
    );

    let sp = session.sp();
    let sp_color = if sp.is_full() {
        Color::Yellow
    } else {
        Color::Magenta
    };
    let sp_gauge = Gauge::default()
        .block(Block::default().title(" SP ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(sp_color))
        .ratio(f64::from(sp.value()) / f64::from(SP_MAX))
        .label(if sp.is_full() {
            "READY (s)".to_string()
        } else {
            sp.to_string()
        });
    frame.render_widget(sp_gauge, rows[2]);

    let items: Vec<ListItem> = session
        .log()
        .entries()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(line.to_string()).style(style)
        })
        .collect();
    let log = List::new(items).block(Block::default().title(" Log ").borders(Borders::ALL));
    frame.render_widget(log, rows[3]);
}

fn hp_gauge(name: &str, hp: u32, max_hp: u32, ratio: f64, color: Color) -> Gauge<'static> {
    Gauge::default()
        .block(
            Block::default()
                .title(format!(" {name} "))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{hp}/{max_hp}"))
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut keys = String::from("hjkl:cursor Enter:tap");
    if session.can_use_skill() {
        keys.push_str(" s:skill");
    }
    if session.can_guard() {
        keys.push_str(" g:guard");
    }
    keys.push_str(" q:quit");

    let status = format!("{} | {} | {keys}", session.status_line(), app.cursor);
    let bar = Paragraph::new(status).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}

fn draw_banner(frame: &mut Frame, text: &str) {
    let area = centered_rect(40, 20, frame.area());
    let banner = Paragraph::new(Line::from(text).style(Style::default().bold()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(banner, area);
}

fn draw_popup(frame: &mut Frame, title: &str, body: &str, color: Color) {
    let area = centered_rect(50, 30, frame.area());
    let text = vec![
        Line::from(title.to_string()).style(Style::default().fg(color).bold()),
        Line::from(""),
        Line::from(body.to_string()),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
