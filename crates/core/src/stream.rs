//! Live stream channel addressing

use crate::resolver::Resolution;

/// Datasource-scoped live channel for a resolved query.
///
/// The stream path is the source id, so every panel streaming the same game
/// shares one stream. Returns `None` when streaming is off.
pub fn stream_channel(resolution: &Resolution, datasource_uid: &str) -> Option<String> {
    if !resolution.query.streaming_enabled() {
        return None;
    }
    Some(format!("ds/{}/{}", datasource_uid, resolution.source.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use simtelemetry_types::Query;

    #[test]
    fn test_channel_only_when_streaming() {
        let raw = Query {
            source: Some("forzaHorizon5".to_string()),
            ..Query::default()
        };
        let off = resolve(&raw, &Query::default_query());
        assert_eq!(stream_channel(&off, "abc123"), None);

        let on = resolve(
            &Query {
                with_streaming: Some(true),
                ..raw
            },
            &Query::default_query(),
        );
        assert_eq!(
            stream_channel(&on, "abc123").as_deref(),
            Some("ds/abc123/forzaHorizon5")
        );
    }

    #[test]
    fn test_unknown_source_streams_fallback() {
        let raw = Query {
            source: Some("gt7".to_string()),
            with_streaming: Some(true),
            ..Query::default()
        };
        let resolution = resolve(&raw, &Query::default());
        assert_eq!(
            stream_channel(&resolution, "uid").as_deref(),
            Some("ds/uid/dirtRally2")
        );
    }
}
