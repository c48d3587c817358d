//! simtelemetry-types: Shared data types for simtelemetry.
//!
//! Pure data types (source identifiers, channel options, the query record)
//! shared by the catalog, the resolver and the front end.

pub mod channel;
pub mod query;
pub mod source;

pub use channel::{find_option, ChannelOption};
pub use query::{Query, DEFAULT_TELEMETRY};
pub use source::{Source, UnknownSource};
