//! Process-wide query defaults
//!
//! Read once from the config file and cached, so resolving a query never
//! touches the disk.

use anyhow::Result;
use log::{info, warn};
use once_cell::sync::Lazy;
use simtelemetry_types::Query;
use std::path::Path;
use std::sync::RwLock;

use super::settings::AppConfig;

/// Global cached query defaults
static DEFAULTS_CACHE: Lazy<RwLock<Query>> =
    Lazy::new(|| RwLock::new(AppConfig::load_or_warn().defaults));

/// Query defaults stored in `path`; built-ins when it is missing or unreadable
pub fn defaults_from_path(path: &Path) -> Query {
    AppConfig::load_or_warn_from(path).defaults
}

/// Current query defaults (from the cache)
pub fn query_defaults() -> Query {
    DEFAULTS_CACHE
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| {
            warn!("Failed to read defaults cache, using built-in query defaults");
            Query::default_query()
        })
}

/// Store new query defaults in the per-user config file and the cache
pub fn set_query_defaults(defaults: Query) -> Result<()> {
    set_query_defaults_at(&AppConfig::config_path()?, defaults)
}

/// Store new query defaults in the config file at `path` and the cache
///
/// Other settings in the file are kept. A file that cannot be parsed is an
/// error rather than being overwritten.
pub fn set_query_defaults_at(path: &Path, defaults: Query) -> Result<()> {
    let mut config = AppConfig::load_or_default(path)?;
    config.defaults = defaults.clone();
    config.save_to_path(path)?;
    info!("Saved query defaults to {}", path.display());

    if let Ok(mut cache) = DEFAULTS_CACHE.write() {
        *cache = defaults;
    }
    Ok(())
}
