//! How each source delivers its telemetry

use serde::Serialize;
use simtelemetry_types::Source;
use std::time::Duration;

/// Streamed frames are throttled to 60 per second
pub const STREAM_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Telemetry transport used by a source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    /// Game pushes packets to a local UDP listener
    Udp,
    /// Game exposes a memory-mapped page that is polled
    SharedMemory,
}

impl Transport {
    /// Shared memory readers only exist on Windows
    pub fn requires_windows(self) -> bool {
        matches!(self, Transport::SharedMemory)
    }
}

/// Metadata about a telemetry source
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub source: Source,
    /// Human-readable name
    pub label: &'static str,
    pub transport: Transport,
    /// Minimum spacing between streamed frames
    #[serde(skip)]
    pub frame_interval: Duration,
}

pub fn source_info(source: Source) -> SourceInfo {
    let transport = match source {
        Source::Acc | Source::IRacing => Transport::SharedMemory,
        Source::DirtRally2
        | Source::ForzaHorizon5
        | Source::ForzaMotorsport2023
        | Source::BeamNg
        | Source::OutGauge => Transport::Udp,
    };

    SourceInfo {
        source,
        label: source.label(),
        transport,
        frame_interval: STREAM_FRAME_INTERVAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_memory_sources() {
        assert_eq!(source_info(Source::Acc).transport, Transport::SharedMemory);
        assert_eq!(source_info(Source::IRacing).transport, Transport::SharedMemory);
        assert!(source_info(Source::IRacing).transport.requires_windows());
        assert!(!source_info(Source::OutGauge).transport.requires_windows());
    }

    #[test]
    fn test_frame_interval_is_sixty_hz() {
        let info = source_info(Source::DirtRally2);
        assert_eq!(info.frame_interval.as_micros(), 16_666);
        assert_eq!(info.label, "DiRT Rally 2.0");
    }
}
