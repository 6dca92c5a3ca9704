//! Cached playback state and its numeric/text projections

use crate::field::FieldKind;
use crate::format::format_duration;

/// Playback state code reported by the `State` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    /// No session, or state unknown
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlayState {
    pub fn code(self) -> u8 {
        match self {
            PlayState::Stopped => 0,
            PlayState::Playing => 1,
            PlayState::Paused => 2,
        }
    }
}

/// The last derived set of now-playing fields
///
/// The default value is the cleared state: text fields are absent and
/// every number is zero. Text fields hold `Some("")` when the session was
/// present but the field could not be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSnapshot {
    pub album: Option<String>,
    pub artist: Option<String>,
    pub title: Option<String>,
    pub track_number: u32,
    pub year: Option<String>,
    pub cover_url: Option<String>,
    pub file_path: Option<String>,
    pub duration_secs: u64,
    pub position_secs: u64,
    pub progress_percent: f64,
    pub state: PlayState,
}

impl PlaybackSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }

    /// Numeric projection of `kind`; text-only kinds project to 0
    pub fn numeric(&self, kind: FieldKind) -> f64 {
        if kind.is_text_only() {
            return 0.0;
        }
        match kind {
            FieldKind::TrackNumber => f64::from(self.track_number),
            FieldKind::Duration => self.duration_secs as f64,
            FieldKind::Position => self.position_secs as f64,
            FieldKind::Progress => self.progress_percent,
            FieldKind::State => f64::from(self.state.code()),
            _ => 0.0,
        }
    }

    /// Text projection of `kind`
    ///
    /// `FilePath` has no text projection and always yields `None`.
    pub fn text(&self, kind: FieldKind, suppress_leading_zero: bool) -> Option<String> {
        match kind {
            FieldKind::Album => self.album.clone(),
            FieldKind::Artist => self.artist.clone(),
            FieldKind::Title => self.title.clone(),
            FieldKind::Year => self.year.clone(),
            FieldKind::CoverUrl => self.cover_url.clone(),
            FieldKind::FilePath => None,
            FieldKind::TrackNumber => Some(self.track_number.to_string()),
            FieldKind::Duration => Some(format_duration(self.duration_secs, suppress_leading_zero)),
            FieldKind::Position => Some(format_duration(self.position_secs, suppress_leading_zero)),
            // f64::round goes half away from zero, `{:.0}` alone would not
            FieldKind::Progress => Some(format!("{:.0}", self.progress_percent.round())),
            FieldKind::State => Some(self.state.code().to_string()),
        }
    }
}
