//! Field changes and the publish-then-run protocol

use simtelemetry_types::{Query, Source};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Capabilities the editing surface provides to the dispatcher
///
/// The host owns the query. `on_change` receives a full replacement value
/// and is expected to make it the new current query.
pub trait QueryHost {
    /// Error raised by the host's callbacks; `Infallible` for hosts that cannot fail
    type Error;

    /// Current query as last published
    fn query(&self) -> &Query;

    /// Accept a replacement query
    fn on_change(&mut self, query: Query) -> Result<(), Self::Error>;

    /// Request (re)execution of the current query
    fn on_run_query(&mut self) -> Result<(), Self::Error>;
}

/// A single-field edit of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Source(String),
    Telemetry(String),
    WithStreaming(bool),
    Graph(bool),
}

impl FieldChange {
    pub fn source(source: Source) -> Self {
        FieldChange::Source(source.id().to_string())
    }

    /// Wire name of the field this change touches
    pub fn field(&self) -> &'static str {
        match self {
            FieldChange::Source(_) => "source",
            FieldChange::Telemetry(_) => "telemetry",
            FieldChange::WithStreaming(_) => "withStreaming",
            FieldChange::Graph(_) => "graph",
        }
    }

    /// A copy of `query` with only this field replaced
    pub fn apply_to(&self, query: &Query) -> Query {
        let mut next = query.clone();
        match self {
            FieldChange::Source(id) => next.source = Some(id.clone()),
            FieldChange::Telemetry(value) => next.telemetry = Some(value.clone()),
            FieldChange::WithStreaming(on) => next.with_streaming = Some(*on),
            FieldChange::Graph(on) => next.graph = Some(*on),
        }
        next
    }
}

impl fmt::Display for FieldChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldChange::Source(v) | FieldChange::Telemetry(v) => write!(f, "{}={}", self.field(), v),
            FieldChange::WithStreaming(b) | FieldChange::Graph(b) => {
                write!(f, "{}={}", self.field(), b)
            }
        }
    }
}

/// Error parsing a `field=value` assignment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldChangeError {
    #[error("expected field=value, got '{0}'")]
    MissingValue(String),
    #[error("unknown query field '{0}' (expected source, telemetry, withStreaming or graph)")]
    UnknownField(String),
    #[error("invalid value '{value}' for {field}: expected true or false")]
    InvalidBool { field: &'static str, value: String },
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, FieldChangeError> {
    match value.trim() {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(FieldChangeError::InvalidBool {
            field,
            value: value.to_string(),
        }),
    }
}

impl FromStr for FieldChange {
    type Err = FieldChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| FieldChangeError::MissingValue(s.to_string()))?;

        // Values are taken verbatim; channel values may carry spaces
        match field.trim() {
            "source" => Ok(FieldChange::Source(value.to_string())),
            "telemetry" => Ok(FieldChange::Telemetry(value.to_string())),
            "withStreaming" | "with_streaming" => {
                Ok(FieldChange::WithStreaming(parse_bool("withStreaming", value)?))
            }
            "graph" => Ok(FieldChange::Graph(parse_bool("graph", value)?)),
            other => Err(FieldChangeError::UnknownField(other.to_string())),
        }
    }
}

/// Apply one field change: publish the new query, then request a run.
///
/// Host errors are returned unchanged. If `on_change` fails, `on_run_query`
/// is not called.
pub fn apply_change<H>(host: &mut H, change: &FieldChange) -> Result<(), H::Error>
where
    H: QueryHost + ?Sized,
{
    let next = change.apply_to(host.query());
    log::debug!("Applying query change {}", change);

    host.on_change(next)?;
    host.on_run_query()
}
