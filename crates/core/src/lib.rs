//! jellyfin-nowplaying-core: Core traits and registry for the now-playing measures.
//!
//! This crate contains the fundamental trait (Measure), the error taxonomy,
//! the Registry of live primaries, the transport boundary and shared
//! constants.

pub mod constants;
mod error;
mod fetch;
mod measure;
mod registry;

pub use constants::{AUDIO_ITEM_TYPE, COVER_IMAGE_QUERY, DEFAULT_TIMEOUT_SECS, TICKS_PER_SECOND};
pub use error::{ConfigError, DerivationError, TransportError};
pub use fetch::Fetch;
pub use measure::{resolve_kind, Measure, MeasureMetadata};
pub use registry::{RegistrationId, Registry, UnitHandle};

// Re-export types used in trait signatures for convenience
pub use jellyfin_nowplaying_types::{
    FieldKind, FieldMetadata, FieldPurpose, FieldType, MeasureConfig, PlaybackSnapshot, ScopeId,
    UnitIdentity, DEFAULT_SERVER,
};
