//! simtelemetry-sources: Static telemetry channel catalog.
//!
//! One ordered option table per racing simulation or telemetry protocol,
//! plus the lookup that maps a source to its table.

mod acc;
mod catalog;
mod dirt_rally;
mod forza;
mod info;
mod iracing;
mod outgauge;

pub use acc::ACC_OPTIONS;
pub use catalog::{
    options_for, options_for_id, source_options, source_or_fallback, SourceOption,
    FALLBACK_SOURCE,
};
pub use dirt_rally::DIRT_RALLY_OPTIONS;
pub use forza::{FORZA_HORIZON_OPTIONS, MOTORSPORT_2023_OPTIONS};
pub use info::{source_info, SourceInfo, Transport, STREAM_FRAME_INTERVAL};
pub use iracing::IRACING_OPTIONS;
pub use outgauge::OUTGAUGE_OPTIONS;
