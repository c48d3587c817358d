//! Query resolution: defaults merge and option selection

use simtelemetry_sources::{options_for, source_or_fallback};
use simtelemetry_types::{find_option, ChannelOption, Query, Source};

/// The effective state of a query at render time
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Query with defaults filled in and `source` normalized to a known id
    pub query: Query,
    pub source: Source,
    /// Channel options offered for `source`
    pub options: &'static [ChannelOption],
}

impl Resolution {
    /// The option matching the query's telemetry value, if it is listed
    pub fn selected_option(&self) -> Option<&'static ChannelOption> {
        let value = self.query.telemetry.as_deref()?;
        find_option(self.options, value)
    }

    /// False when the telemetry value is left over from another source.
    ///
    /// An unset or empty value counts as listed.
    pub fn telemetry_is_listed(&self) -> bool {
        match self.query.telemetry.as_deref() {
            None | Some("") => true,
            Some(_) => self.selected_option().is_some(),
        }
    }
}

/// Merge `raw` over `defaults` and select the channel options for its source.
///
/// Unknown or missing sources resolve to the fallback source. A telemetry
/// value that the selected source does not offer is kept as-is.
pub fn resolve(raw: &Query, defaults: &Query) -> Resolution {
    let mut query = raw.merged_over(defaults);
    let source = source_or_fallback(query.source.as_deref());
    query.source = Some(source.id().to_string());

    Resolution {
        query,
        source,
        options: options_for(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simtelemetry_sources::{ACC_OPTIONS, DIRT_RALLY_OPTIONS, IRACING_OPTIONS};

    fn query(value: serde_json::Value) -> Query {
        serde_json::from_value(value).unwrap()
    }

    fn scenario_defaults() -> Query {
        query(json!({ "telemetry": "Time", "withStreaming": false, "graph": false }))
    }

    #[test]
    fn test_acc_with_defaults() {
        let resolution = resolve(&query(json!({ "source": "acc" })), &scenario_defaults());

        assert_eq!(resolution.source, Source::Acc);
        assert_eq!(resolution.query.source.as_deref(), Some("acc"));
        assert_eq!(resolution.query.telemetry.as_deref(), Some("Time"));
        assert_eq!(resolution.query.with_streaming, Some(false));
        assert_eq!(resolution.query.graph, Some(false));
        assert_eq!(resolution.options, ACC_OPTIONS);
    }

    #[test]
    fn test_raw_fields_win_over_defaults() {
        let raw = query(json!({
            "source": "iRacing",
            "telemetry": "RPM",
            "withStreaming": false,
            "graph": true
        }));
        let defaults = query(json!({
            "source": "acc",
            "telemetry": "Time",
            "withStreaming": true,
            "graph": false
        }));

        let resolution = resolve(&raw, &defaults);
        assert_eq!(resolution.query.source.as_deref(), Some("iRacing"));
        assert_eq!(resolution.query.telemetry.as_deref(), Some("RPM"));
        assert_eq!(resolution.query.with_streaming, Some(false));
        assert_eq!(resolution.query.graph, Some(true));
        assert_eq!(resolution.options, IRACING_OPTIONS);
    }

    #[test]
    fn test_missing_source_uses_fallback() {
        let resolution = resolve(&Query::default(), &Query::default_query());
        assert_eq!(resolution.source, Source::DirtRally2);
        assert_eq!(resolution.query.source.as_deref(), Some("dirtRally2"));
        assert_eq!(resolution.options, DIRT_RALLY_OPTIONS);
    }

    #[test]
    fn test_unknown_source_is_normalized() {
        let resolution = resolve(&query(json!({ "source": "rfactor2" })), &Query::default());
        assert_eq!(resolution.source, Source::DirtRally2);
        assert_eq!(resolution.query.source.as_deref(), Some("dirtRally2"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let defaults = scenario_defaults();
        let cases = [
            json!({}),
            json!({ "source": "acc" }),
            json!({ "source": "nope", "telemetry": "Speed" }),
            json!({ "source": "beamng", "withStreaming": true, "refId": "B" }),
        ];

        for case in cases {
            let first = resolve(&query(case), &defaults);
            let second = resolve(&first.query, &defaults);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_stale_telemetry_is_kept() {
        // "Time" is a DiRT Rally channel; ACC has no such channel
        let resolution = resolve(
            &query(json!({ "source": "acc", "telemetry": "Time" })),
            &Query::default(),
        );

        assert_eq!(resolution.query.telemetry.as_deref(), Some("Time"));
        assert!(resolution.selected_option().is_none());
        assert!(!resolution.telemetry_is_listed());
    }

    #[test]
    fn test_listed_telemetry() {
        let resolution = resolve(
            &query(json!({ "source": "acc", "telemetry": "SpeedKmh" })),
            &Query::default(),
        );
        assert!(resolution.telemetry_is_listed());
        assert_eq!(resolution.selected_option().map(|o| o.label), Some("Speed (km/h)"));

        let unset = resolve(&query(json!({ "source": "acc" })), &Query::default());
        assert!(unset.telemetry_is_listed());
    }
}
