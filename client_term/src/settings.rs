//! Game configuration for the terminal client, read from the environment.

use anyhow::{anyhow, Context, Result};
use planet_walker_shared::config::GameConfig;

/// Path to a JSON `GameConfig`; missing fields keep their defaults.
pub const CONFIG_ENV: &str = "PLANET_WALKER_CONFIG";
/// Fixed world seed, overriding the config file.
pub const SEED_ENV: &str = "PLANET_WALKER_SEED";
/// File that receives log output; no logging when unset.
pub const LOG_ENV: &str = "PLANET_WALKER_LOG";

pub fn load_from_env() -> Result<GameConfig> {
    let json = match std::env::var(CONFIG_ENV) {
        Ok(path) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {}", path))?,
        ),
        Err(_) => None,
    };
    let seed = std::env::var(SEED_ENV).ok();
    build_config(json.as_deref(), seed.as_deref())
}

/// Combine an optional JSON document and seed override into a validated config.
pub fn build_config(json: Option<&str>, seed: Option<&str>) -> Result<GameConfig> {
    let mut config = match json {
        Some(json) => GameConfig::from_json(json).map_err(|e| anyhow!(e))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        let seed = seed
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", SEED_ENV, seed))?;
        config.rng_seed = Some(seed);
    }
    config
        .validate()
        .map_err(|e| anyhow!("invalid game configuration: {}", e))?;
    Ok(config)
}
