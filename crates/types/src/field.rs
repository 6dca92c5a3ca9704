//! Field kinds and the metadata describing what a measure can report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Type of data a field contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Text data (e.g., album or artist name)
    Text,
    /// Numerical data (e.g., track number, seconds)
    Numerical,
    /// Percentage (0.0 to 100.0)
    Percentage,
}

/// Purpose/role of a field in the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPurpose {
    /// Descriptive tag of the playing item
    Tag,
    /// Timing value (duration, position, progress)
    Timing,
    /// Status or state information
    Status,
    /// Generic/other purpose
    Other,
}

/// Metadata describing a single data field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Unique identifier for this field (the host option value)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this field represents
    pub description: String,
    /// Type of data this field contains
    pub field_type: FieldType,
    /// Purpose/role of this field
    pub purpose: FieldPurpose,
}

impl FieldMetadata {
    /// Create a new field metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
        purpose: FieldPurpose,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            field_type,
            purpose,
        }
    }
}

/// The field a measure reports
///
/// Every kind has both a numeric and a textual projection of the same
/// underlying snapshot; see [`crate::PlaybackSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FieldKind {
    Album,
    Artist,
    #[default]
    Title,
    TrackNumber,
    Year,
    CoverUrl,
    FilePath,
    Duration,
    Position,
    Progress,
    State,
}

impl FieldKind {
    pub const ALL: [FieldKind; 11] = [
        FieldKind::Album,
        FieldKind::Artist,
        FieldKind::Title,
        FieldKind::TrackNumber,
        FieldKind::Year,
        FieldKind::CoverUrl,
        FieldKind::FilePath,
        FieldKind::Duration,
        FieldKind::Position,
        FieldKind::Progress,
        FieldKind::State,
    ];

    /// The `PlayerType` option value selecting this kind
    pub fn id(self) -> &'static str {
        match self {
            FieldKind::Album => "album",
            FieldKind::Artist => "artist",
            FieldKind::Title => "title",
            FieldKind::TrackNumber => "number",
            FieldKind::Year => "year",
            FieldKind::CoverUrl => "cover",
            FieldKind::FilePath => "file",
            FieldKind::Duration => "duration",
            FieldKind::Position => "position",
            FieldKind::Progress => "progress",
            FieldKind::State => "state",
        }
    }

    /// Whether the numeric projection of this kind is always 0
    pub fn is_text_only(self) -> bool {
        matches!(
            self,
            FieldKind::Album
                | FieldKind::Artist
                | FieldKind::Title
                | FieldKind::Year
                | FieldKind::CoverUrl
                | FieldKind::FilePath
        )
    }

    pub fn metadata(self) -> FieldMetadata {
        let (name, description, field_type, purpose) = match self {
            FieldKind::Album => ("Album", "Album of the playing track", FieldType::Text, FieldPurpose::Tag),
            FieldKind::Artist => ("Artist", "First artist of the playing track", FieldType::Text, FieldPurpose::Tag),
            FieldKind::Title => ("Title", "Title of the playing track", FieldType::Text, FieldPurpose::Tag),
            FieldKind::TrackNumber => ("Track Number", "Index of the track on its album", FieldType::Numerical, FieldPurpose::Tag),
            FieldKind::Year => ("Year", "Production year", FieldType::Text, FieldPurpose::Tag),
            FieldKind::CoverUrl => ("Cover", "URL of the album cover image", FieldType::Text, FieldPurpose::Other),
            FieldKind::FilePath => ("File", "Path of the track on the server", FieldType::Text, FieldPurpose::Other),
            FieldKind::Duration => ("Duration", "Track length in seconds (text: M:SS)", FieldType::Numerical, FieldPurpose::Timing),
            FieldKind::Position => ("Position", "Playback position in seconds (text: M:SS)", FieldType::Numerical, FieldPurpose::Timing),
            FieldKind::Progress => ("Progress", "Position relative to duration", FieldType::Percentage, FieldPurpose::Timing),
            FieldKind::State => ("State", "0 = stopped, 1 = playing, 2 = paused", FieldType::Numerical, FieldPurpose::Status),
        };
        FieldMetadata::new(self.id(), name, description, field_type, purpose)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A `PlayerType` value that names no known field kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field kind {0:?}")]
pub struct ParseFieldKindError(pub String);

impl FromStr for FieldKind {
    type Err = ParseFieldKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "album" => FieldKind::Album,
            "artist" => FieldKind::Artist,
            "title" => FieldKind::Title,
            "number" | "tracknumber" => FieldKind::TrackNumber,
            "year" => FieldKind::Year,
            "cover" | "coverurl" => FieldKind::CoverUrl,
            "file" | "filepath" => FieldKind::FilePath,
            "duration" => FieldKind::Duration,
            "position" => FieldKind::Position,
            "progress" => FieldKind::Progress,
            "state" => FieldKind::State,
            _ => return Err(ParseFieldKindError(s.to_string())),
        };
        Ok(kind)
    }
}
