//! The telemetry query record edited by the user

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Channel selected when neither the query nor its defaults name one
pub const DEFAULT_TELEMETRY: &str = "Time";

/// Telemetry query configuration
///
/// Every field is optional: `None` means "not set, use the default", which is
/// different from an explicit `Some(false)`. Fields the host adds on its own
/// (`refId`, `datasource`, ...) are kept in `extra` so they survive edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Source identifier, e.g. `"acc"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Selected channel value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_streaming: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Query {
    /// Built-in defaults applied to new queries
    pub fn default_query() -> Self {
        Self {
            telemetry: Some(DEFAULT_TELEMETRY.to_string()),
            with_streaming: Some(false),
            ..Self::default()
        }
    }

    /// Fill every unset field of `self` from `defaults`
    ///
    /// Set fields win even when they hold `false` or an empty string.
    pub fn merged_over(&self, defaults: &Query) -> Query {
        let mut extra = defaults.extra.clone();
        extra.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        Query {
            source: self.source.clone().or_else(|| defaults.source.clone()),
            telemetry: self.telemetry.clone().or_else(|| defaults.telemetry.clone()),
            with_streaming: self.with_streaming.or(defaults.with_streaming),
            graph: self.graph.or(defaults.graph),
            extra,
        }
    }

    /// Whether streaming is on; unset reads as off
    pub fn streaming_enabled(&self) -> bool {
        self.with_streaming.unwrap_or(false)
    }

    /// Whether graphing is on; unset reads as off
    pub fn graph_enabled(&self) -> bool {
        self.graph.unwrap_or(false)
    }
}
