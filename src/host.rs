//! In-memory query host that records every callback

use serde::Serialize;
use simtelemetry_core::{Query, QueryHost};
use std::convert::Infallible;

/// A callback the dispatcher made on the host
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    Change { query: Query },
    Run,
}

/// Host that keeps the query in memory and logs `change`/`run` events
#[derive(Debug, Default)]
pub struct RecordingHost {
    query: Query,
    events: Vec<HostEvent>,
}

impl RecordingHost {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn into_parts(self) -> (Query, Vec<HostEvent>) {
        (self.query, self.events)
    }
}

impl QueryHost for RecordingHost {
    type Error = Infallible;

    fn query(&self) -> &Query {
        &self.query
    }

    fn on_change(&mut self, query: Query) -> Result<(), Infallible> {
        self.query = query.clone();
        self.events.push(HostEvent::Change { query });
        Ok(())
    }

    fn on_run_query(&mut self) -> Result<(), Infallible> {
        log::trace!("Run requested for {:?}", self.query.source);
        self.events.push(HostEvent::Run);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simtelemetry_core::{QueryEditor, Source};

    #[test]
    fn test_source_change_records_change_then_run() {
        let mut host = RecordingHost::new(Query {
            telemetry: Some("Speed".to_string()),
            ..Query::default()
        });
        QueryEditor::new(&mut host)
            .on_source_change(Source::IRacing)
            .unwrap();

        let expected = Query {
            source: Some("iRacing".to_string()),
            telemetry: Some("Speed".to_string()),
            ..Query::default()
        };
        assert_eq!(
            host.events(),
            &[HostEvent::Change { query: expected }, HostEvent::Run]
        );
    }

    #[test]
    fn test_two_telemetry_edits_make_two_pairs() {
        let mut host = RecordingHost::default();
        let mut editor = QueryEditor::new(&mut host);
        editor.on_telemetry_change("A").unwrap();
        editor.on_telemetry_change("B").unwrap();

        let (query, events) = host.into_parts();
        assert_eq!(query.telemetry.as_deref(), Some("B"));
        assert_eq!(events.len(), 4);
        assert_eq!(events[1], HostEvent::Run);
        assert_eq!(events[3], HostEvent::Run);
    }

    #[test]
    fn test_events_serialize_tagged() {
        let event = HostEvent::Change {
            query: Query {
                graph: Some(true),
                ..Query::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "event": "change", "query": { "graph": true } })
        );
        assert_eq!(
            serde_json::to_value(HostEvent::Run).unwrap(),
            json!({ "event": "run" })
        );
    }
}
