//! jellyfin-nowplaying: live "now playing" state of a Jellyfin server for
//! polling hosts
//!
//! This library provides:
//! - The host lifecycle adapter mapping opaque handles to measures
//! - Configuration of a polling host
//! - Re-exports of the measure types from the workspace crates

pub mod config;
pub mod host;

// Re-export commonly used types
pub use config::{HostConfig, MeasureEntry, ScopeConfig};
pub use host::{HostError, MeasureHost, UnitHandle};
pub use jellyfin_nowplaying_core::{
    ConfigError, FieldKind, Fetch, Measure, MeasureConfig, ScopeId, TransportError,
    UnitIdentity,
};
pub use jellyfin_nowplaying_sources::{HttpFetcher, PrimaryMeasure, SecondaryMeasure};
