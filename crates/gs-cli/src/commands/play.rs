use std::path::Path;

use gs_battle::SessionConfig;

pub fn run(config: Option<&Path>, seed: u64) -> Result<(), String> {
    let config = super::load_config(config)?;
    crate::tui::run(config, SessionConfig::default().with_seed(seed))
}
