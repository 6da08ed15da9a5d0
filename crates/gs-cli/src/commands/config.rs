use std::path::Path;

use gs_battle::BattleConfig;

pub fn run(output: Option<&Path>) -> Result<(), String> {
    let json = BattleConfig::default()
        .to_json_pretty()
        .map_err(|e| format!("cannot serialize config: {e}"))?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .map_err(|e| format!("cannot write '{}': {e}", path.display()))?;
            println!("  Wrote default battle config to '{}'.", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
