//! simtelemetry: query configuration for racing simulation telemetry
//!
//! This library ties together:
//! - The per-source channel catalog (`simtelemetry-sources`)
//! - Query resolution and change dispatch (`simtelemetry-core`)
//! - Configuration of query defaults
//! - An in-memory recording host for driving the editor outside a UI

pub mod config;
pub mod host;

// Re-export commonly used types
pub use config::{query_defaults, AppConfig};
pub use host::{HostEvent, RecordingHost};
pub use simtelemetry_core::{
    apply_change, resolve, stream_channel, FieldChange, QueryEditor, QueryHost, Resolution,
};
pub use simtelemetry_sources::{options_for, source_info, source_options, FALLBACK_SOURCE};
pub use simtelemetry_types::{ChannelOption, Query, Source};
