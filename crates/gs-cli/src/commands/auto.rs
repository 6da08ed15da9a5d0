use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gs_battle::{BattleSession, BattleStatus, InteractionState, SessionConfig, TurnPhase};

/// What the scripted player did over the battle.
#[derive(Debug, Default)]
struct Tally {
    strikes: u32,
    skills: u32,
    guards: u32,
}

pub fn run(
    config: Option<&Path>,
    seed: u64,
    max_turns: u32,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let config = super::load_config(config)?;
    let enemy_name = config.enemy_name.clone();

    let won = Rc::new(Cell::new(false));
    let flag = Rc::clone(&won);
    let mut session = BattleSession::new(config, SessionConfig::default().with_seed(seed), move || {
        flag.set(true)
    })
    .map_err(|e| format!("cannot start battle: {e}"))?;

    println!(
        "  {} hero vs {} {}",
        "Battle".bold(),
        enemy_name,
        format!("(seed={seed}, max {max_turns} turns)").dimmed()
    );
    println!();

    let mut tally = Tally::default();
    let mut seen = 0;
    loop {
        if verbose {
            print_new_lines(&session, &mut seen);
        }
        if won.get() {
            break;
        }
        if session.turn() > max_turns {
            session.abandon();
            break;
        }

        if ready_for_input(&session) {
            play_turn(&mut session, &mut tally);
        } else {
            match session.next_event_in() {
                Some(wait) => session.advance(wait),
                None => break,
            }
        }
    }
    if verbose {
        println!();
    }

    print_summary(&session, &tally);
    if json {
        let snapshot = serde_json::to_string_pretty(&session.snapshot())
            .map_err(|e| format!("cannot serialize snapshot: {e}"))?;
        println!("{snapshot}");
        println!();
    }

    if won.get() {
        println!(
            "  {} in {} turns ({:.1}s of battle time)",
            "VICTORY".green().bold(),
            session.turn(),
            session.elapsed().as_secs_f64()
        );
        Ok(())
    } else {
        Err(format!("no victory within {max_turns} turns"))
    }
}

fn ready_for_input(session: &BattleSession) -> bool {
    session.status() == BattleStatus::Ongoing
        && session.phase() == TurnPhase::PlayerAction
        && session.interaction() != InteractionState::SkillAnimation
}

/// Ultimate when the gauge is full, otherwise close in and strike, or
/// guard when the enemy is out of reach.
fn play_turn(session: &mut BattleSession, tally: &mut Tally) {
    if session.can_use_skill() {
        session.use_skill();
        tally.skills += 1;
        return;
    }
    session.select_hero();
    session.select_enemy();
    if session.interaction() == InteractionState::TargetConfirm {
        session.select_enemy();
        tally.strikes += 1;
    } else {
        session.guard();
        tally.guards += 1;
    }
}

fn print_new_lines(session: &BattleSession, seen: &mut u64) {
    let stamp = format!("[{:>6.1}s]", session.elapsed().as_secs_f64());
    for line in session.log().since(*seen) {
        println!("  {} {}", stamp.dimmed(), colorize_line(line));
    }
    *seen = session.log().total();
}

fn colorize_line(line: &str) -> colored::ColoredString {
    if line.starts_with(">>>") {
        line.magenta().bold()
    } else if line == ">> ENEMY DEFEATED!" {
        line.green().bold()
    } else if line.starts_with(">> Enemy") {
        line.red()
    } else if line.starts_with(">>") {
        line.yellow()
    } else {
        line.normal()
    }
}

fn print_summary(session: &BattleSession, tally: &Tally) {
    println!("  {}", "Battle Summary".bold().underline());
    println!();

    let hero = session.hero();
    let enemy = session.enemy();
    let enemy_tile = session
        .enemy_tile()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "--".to_string());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Unit", "HP", "Tile", "SP"]);
    table.add_row(vec![
        "Hero".to_string(),
        format!("{}/{}", hero.hp, hero.max_hp),
        hero.tile.to_string(),
        session.sp().to_string(),
    ]);
    table.add_row(vec![
        session.config().enemy_name.clone(),
        format!("{}/{}", enemy.hp, enemy.max_hp),
        enemy_tile,
        "--".to_string(),
    ]);
    println!("{table}");
    println!(
        "  {} strikes, {} ultimates, {} guards",
        tally.strikes, tally.skills, tally.guards
    );
    println!();
}
