//! Configuration management

mod defaults;
mod settings;

pub use defaults::{defaults_from_path, query_defaults, set_query_defaults, set_query_defaults_at};
pub use settings::{AppConfig, CONFIG_VERSION};
