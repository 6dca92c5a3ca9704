//! Measure trait and related types

use crate::error::ConfigError;
use jellyfin_nowplaying_types::{FieldKind, FieldMetadata, MeasureConfig};

/// Metadata about a measure implementation
#[derive(Debug, Clone)]
pub struct MeasureMetadata {
    /// Unique identifier for this measure type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this measure provides
    pub description: String,
}

/// Trait for all measures
///
/// The host drives a measure through `reload` (once per configuration
/// change), then repeated `update` calls, reading text in between. Calls
/// are expected to be sequential.
pub trait Measure: Send {
    /// Get metadata about this measure
    fn metadata(&self) -> &MeasureMetadata;

    /// Describe every field this measure can be configured to report
    fn fields(&self) -> Vec<FieldMetadata> {
        FieldKind::ALL.iter().map(|kind| kind.metadata()).collect()
    }

    /// The field this measure currently reports
    fn kind(&self) -> FieldKind;

    /// Apply configuration
    ///
    /// Everything that can be applied is applied; the returned issues
    /// describe what could not, and the measure keeps working with
    /// defaults for those.
    fn reload(&mut self, config: &MeasureConfig) -> Vec<ConfigError>;

    /// Refresh state and return the numeric value of the configured field
    fn update(&mut self) -> f64;

    /// Text value of the configured field from the last update
    fn read_text(&self) -> Option<String>;
}

/// Resolve `PlayerType`, keeping `current` when the value is not recognized
pub fn resolve_kind(current: &mut FieldKind, player_type: &str) -> Option<ConfigError> {
    match player_type.parse::<FieldKind>() {
        Ok(kind) => {
            *current = kind;
            None
        }
        Err(err) => Some(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kind_keeps_previous_on_error() {
        let mut kind = FieldKind::Duration;
        let err = resolve_kind(&mut kind, "bogus");
        assert_eq!(err, Some(ConfigError::UnknownFieldKind("bogus".to_string())));
        assert_eq!(kind, FieldKind::Duration);

        assert_eq!(resolve_kind(&mut kind, "artist"), None);
        assert_eq!(kind, FieldKind::Artist);
    }
}
