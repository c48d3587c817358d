//! simtelemetry-core: Query resolution and change dispatch.
//!
//! Resolves a partial query against defaults and the channel catalog, and
//! turns single-field edits into publish-then-run calls on the host.

mod dispatcher;
mod editor;
mod resolver;
mod stream;

pub use dispatcher::{apply_change, FieldChange, FieldChangeError, QueryHost};
pub use editor::QueryEditor;
pub use resolver::{resolve, Resolution};
pub use stream::stream_channel;

// Re-export types used in signatures for convenience
pub use simtelemetry_types::{ChannelOption, Query, Source};
