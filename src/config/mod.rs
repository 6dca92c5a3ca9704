//! Configuration management

mod settings;

pub use settings::{HostConfig, MeasureEntry, ScopeConfig};
