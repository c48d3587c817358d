//! Telemetry source identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A racing simulation or telemetry protocol a query can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "dirtRally2")]
    DirtRally2,
    #[serde(rename = "forzaHorizon5")]
    ForzaHorizon5,
    #[serde(rename = "forzaMotorsport2023")]
    ForzaMotorsport2023,
    #[serde(rename = "acc")]
    Acc,
    #[serde(rename = "iRacing")]
    IRacing,
    #[serde(rename = "beamng")]
    BeamNg,
    #[serde(rename = "outgauge")]
    OutGauge,
}

impl Source {
    /// All sources in source-picker order
    pub const ALL: [Source; 7] = [
        Source::DirtRally2,
        Source::ForzaHorizon5,
        Source::ForzaMotorsport2023,
        Source::Acc,
        Source::IRacing,
        Source::BeamNg,
        Source::OutGauge,
    ];

    /// Wire identifier, as stored in a query's `source` field
    pub fn id(self) -> &'static str {
        match self {
            Source::DirtRally2 => "dirtRally2",
            Source::ForzaHorizon5 => "forzaHorizon5",
            Source::ForzaMotorsport2023 => "forzaMotorsport2023",
            Source::Acc => "acc",
            Source::IRacing => "iRacing",
            Source::BeamNg => "beamng",
            Source::OutGauge => "outgauge",
        }
    }

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            Source::DirtRally2 => "DiRT Rally 2.0",
            Source::ForzaHorizon5 => "Forza Horizon 5",
            Source::ForzaMotorsport2023 => "Forza Motorsport 2023",
            Source::Acc => "Assetto Corsa Competizione",
            Source::IRacing => "iRacing",
            Source::BeamNg => "BeamNG Drive",
            Source::OutGauge => "OutGauge",
        }
    }

    /// Look up a source by its exact wire identifier
    pub fn from_id(id: &str) -> Option<Source> {
        Source::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when a string is not a known source identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown telemetry source: {0}")]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::from_id(s).ok_or_else(|| UnknownSource(s.to_string()))
    }
}
