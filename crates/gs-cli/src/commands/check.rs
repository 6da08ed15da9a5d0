use std::path::Path;

use gs_battle::BattleConfig;

pub fn run(file: &Path) -> Result<(), String> {
    let config = BattleConfig::from_path(file)
        .map_err(|e| format!("'{}' is not a valid battle config: {e}", file.display()))?;

    println!("  All checks passed for '{}'.", file.display());
    println!(
        "  {} ({}/{} HP) vs hero ({}/{} HP), special move '{}'",
        config.enemy_name,
        config.enemy_hp,
        config.enemy_max_hp,
        config.hero_hp,
        config.hero_max_hp,
        config.special_move.name
    );

    Ok(())
}
