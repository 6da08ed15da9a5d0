pub mod auto;
pub mod check;
pub mod config;
pub mod play;

use std::path::Path;

use gs_battle::BattleConfig;

/// Load a battle config from `path`, or fall back to the defaults.
fn load_config(path: Option<&Path>) -> Result<BattleConfig, String> {
    match path {
        Some(path) => BattleConfig::from_path(path)
            .map_err(|e| format!("cannot load '{}': {e}", path.display())),
        None => Ok(BattleConfig::default()),
    }
}
