//! jellyfin-nowplaying-types: Shared data types for the now-playing measures.
//!
//! This crate contains pure data types (field kinds, the playback snapshot,
//! measure configuration) shared across all crates. Nothing here performs
//! I/O, making it suitable as a foundation layer.

pub mod field;
pub mod format;
pub mod identity;
pub mod snapshot;
pub mod source_configs;

// Re-export commonly used types at the crate root for convenience
pub use field::{FieldKind, FieldMetadata, FieldPurpose, FieldType, ParseFieldKindError};
pub use format::format_duration;
pub use identity::{ScopeId, UnitIdentity};
pub use snapshot::{PlayState, PlaybackSnapshot};
pub use source_configs::{MeasureConfig, DEFAULT_SERVER};
