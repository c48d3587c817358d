//! Source to channel-option lookup

use simtelemetry_types::{ChannelOption, Source};

use crate::acc::ACC_OPTIONS;
use crate::dirt_rally::DIRT_RALLY_OPTIONS;
use crate::forza::{FORZA_HORIZON_OPTIONS, MOTORSPORT_2023_OPTIONS};
use crate::iracing::IRACING_OPTIONS;
use crate::outgauge::OUTGAUGE_OPTIONS;

/// Source whose options are used when a query names no known source
pub const FALLBACK_SOURCE: Source = Source::DirtRally2;

/// Channel options for a source, in display order
pub fn options_for(source: Source) -> &'static [ChannelOption] {
    match source {
        Source::DirtRally2 => DIRT_RALLY_OPTIONS,
        Source::ForzaHorizon5 => FORZA_HORIZON_OPTIONS,
        Source::ForzaMotorsport2023 => MOTORSPORT_2023_OPTIONS,
        Source::Acc => ACC_OPTIONS,
        Source::IRacing => IRACING_OPTIONS,
        Source::BeamNg | Source::OutGauge => OUTGAUGE_OPTIONS,
    }
}

/// Resolve an optional raw source id, falling back to [`FALLBACK_SOURCE`]
pub fn source_or_fallback(id: Option<&str>) -> Source {
    match id {
        Some(id) => Source::from_id(id).unwrap_or_else(|| {
            log::debug!("Unknown source '{}', using {}", id, FALLBACK_SOURCE);
            FALLBACK_SOURCE
        }),
        None => FALLBACK_SOURCE,
    }
}

/// Channel options for a raw source id
///
/// Never fails: unknown or missing ids get the fallback source's options.
pub fn options_for_id(id: Option<&str>) -> &'static [ChannelOption] {
    options_for(source_or_fallback(id))
}

/// A source picker entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SourceOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Entries for the source picker, in display order
pub fn source_options() -> Vec<SourceOption> {
    Source::ALL
        .into_iter()
        .map(|s| SourceOption {
            label: s.label(),
            value: s.id(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_source_has_options() {
        for source in Source::ALL {
            assert!(!options_for(source).is_empty(), "{} has no options", source);
        }
    }

    #[test]
    fn test_option_values_unique_per_source() {
        for source in Source::ALL {
            let options = options_for(source);
            let values: HashSet<_> = options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), options.len(), "duplicate value in {}", source);
        }
    }

    #[test]
    fn test_lookup_is_order_stable() {
        for source in Source::ALL {
            assert_eq!(options_for(source), options_for(source));
        }
        assert_eq!(options_for(Source::Acc)[0].value, "SpeedKmh");
        assert_eq!(options_for(Source::DirtRally2)[0].value, "Time");
    }

    #[test]
    fn test_beamng_shares_outgauge_options() {
        assert_eq!(options_for(Source::BeamNg), options_for(Source::OutGauge));
        assert!(std::ptr::eq(
            options_for(Source::BeamNg),
            options_for(Source::OutGauge)
        ));
    }

    #[test]
    fn test_unknown_and_missing_ids_fall_back() {
        let fallback = options_for(FALLBACK_SOURCE);
        assert_eq!(options_for_id(Some("rfactor2")), fallback);
        assert_eq!(options_for_id(Some("")), fallback);
        assert_eq!(options_for_id(None), fallback);
        assert_eq!(options_for_id(Some("acc")), options_for(Source::Acc));
    }

    #[test]
    fn test_fallback_is_first_listed_source() {
        assert_eq!(FALLBACK_SOURCE, Source::ALL[0]);
    }

    #[test]
    fn test_source_options_order() {
        let values: Vec<_> = source_options().iter().map(|o| o.value).collect();
        assert_eq!(
            values,
            vec![
                "dirtRally2",
                "forzaHorizon5",
                "forzaMotorsport2023",
                "acc",
                "iRacing",
                "beamng",
                "outgauge"
            ]
        );
        assert_eq!(source_options()[3].label, "Assetto Corsa Competizione");
    }
}
