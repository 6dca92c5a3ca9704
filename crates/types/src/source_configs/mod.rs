//! Source configuration types for all measures.

pub mod jellyfin;

pub use jellyfin::{MeasureConfig, DEFAULT_SERVER};
