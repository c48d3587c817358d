//! Query editor bound to a host

use simtelemetry_types::{Query, Source};

use crate::dispatcher::{apply_change, FieldChange, QueryHost};
use crate::resolver::{resolve, Resolution};

/// Editing surface for one query
///
/// Borrows the host for the duration of an interaction; the host keeps
/// ownership of the query itself.
pub struct QueryEditor<'h, H: QueryHost> {
    host: &'h mut H,
}

impl<'h, H: QueryHost> QueryEditor<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self { host }
    }

    /// Effective query and channel options for rendering
    pub fn resolve(&self, defaults: &Query) -> Resolution {
        resolve(self.host.query(), defaults)
    }

    pub fn on_source_change(&mut self, source: Source) -> Result<(), H::Error> {
        self.apply(&FieldChange::source(source))
    }

    pub fn on_telemetry_change(&mut self, value: impl Into<String>) -> Result<(), H::Error> {
        self.apply(&FieldChange::Telemetry(value.into()))
    }

    pub fn on_with_streaming_change(&mut self, enabled: bool) -> Result<(), H::Error> {
        self.apply(&FieldChange::WithStreaming(enabled))
    }

    pub fn on_graph_change(&mut self, enabled: bool) -> Result<(), H::Error> {
        self.apply(&FieldChange::Graph(enabled))
    }

    pub fn apply(&mut self, change: &FieldChange) -> Result<(), H::Error> {
        apply_change(&mut *self.host, change)
    }
}
