//! Telemetry channel options offered for a source

use serde::Serialize;

/// A single selectable telemetry channel
///
/// `value` is what a query stores in its `telemetry` field; `label` is what
/// the channel picker shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChannelOption {
    /// Human-readable name
    pub label: &'static str,
    /// Channel identifier, unique within a source's option set
    pub value: &'static str,
}

impl ChannelOption {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// Find the option carrying `value` in an option set
pub fn find_option<'a>(options: &'a [ChannelOption], value: &str) -> Option<&'a ChannelOption> {
    options.iter().find(|o| o.value == value)
}
