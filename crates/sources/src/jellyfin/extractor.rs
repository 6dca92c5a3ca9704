//! Derive a playback snapshot from one selected session
//!
//! Every field is computed as its own `Result`. A failure is logged at
//! debug level and replaced by the field's unknown value; it never stops
//! the other fields from being read.

use super::api::RawSession;
use jellyfin_nowplaying_core::{
    DerivationError, PlaybackSnapshot, COVER_IMAGE_QUERY, TICKS_PER_SECOND,
};
use jellyfin_nowplaying_types::PlayState;
use log::debug;

/// Build a snapshot from `session`; `base_url` prefixes the cover URL
pub fn extract(session: &RawSession, base_url: &str) -> PlaybackSnapshot {
    let duration_secs = settle("Duration", duration_secs(session));
    let (position_secs, progress_percent) =
        settle("Position", position_and_progress(session, duration_secs));

    PlaybackSnapshot {
        album: Some(settle("Album", text_field(session, "Album"))),
        artist: Some(settle("Artist", artist(session))),
        title: Some(settle("Title", text_field(session, "Name"))),
        track_number: settle("Number", track_number(session)),
        year: Some(settle("Year", year(session))),
        cover_url: Some(settle("Cover", cover_url(session, base_url))),
        file_path: Some(settle("File", file_path(session))),
        duration_secs,
        position_secs,
        progress_percent,
        state: settle("State", play_state(session)),
    }
}

fn settle<T: Default>(field: &str, result: Result<T, DerivationError>) -> T {
    result.unwrap_or_else(|err| {
        debug!("Error reading {}: {}", field, err);
        T::default()
    })
}

fn text_field(session: &RawSession, key: &'static str) -> Result<String, DerivationError> {
    Ok(session.item()?.text(key)?.to_string())
}

fn artist(session: &RawSession) -> Result<String, DerivationError> {
    Ok(session.item()?.first_text("Artists")?.to_string())
}

fn track_number(session: &RawSession) -> Result<u32, DerivationError> {
    let index = session.item()?.integer("IndexNumber")?;
    u32::try_from(index).map_err(|_| DerivationError::OutOfRange {
        field: "IndexNumber",
        value: index,
    })
}

fn year(session: &RawSession) -> Result<String, DerivationError> {
    session.item()?.text_or_number("ProductionYear")
}

fn cover_url(session: &RawSession, base_url: &str) -> Result<String, DerivationError> {
    let parent_id = session.item()?.text("ParentId")?;
    Ok(format!("{base_url}/Items/{parent_id}/{COVER_IMAGE_QUERY}"))
}

fn file_path(session: &RawSession) -> Result<String, DerivationError> {
    Ok(session.item()?.text("Path")?.replace("\\\\", "\\"))
}

fn ticks_to_secs(field: &'static str, ticks: i64) -> Result<u64, DerivationError> {
    u64::try_from(ticks / TICKS_PER_SECOND)
        .map_err(|_| DerivationError::OutOfRange { field, value: ticks })
}

fn duration_secs(session: &RawSession) -> Result<u64, DerivationError> {
    ticks_to_secs("RunTimeTicks", session.item()?.integer("RunTimeTicks")?)
}

fn play_state(session: &RawSession) -> Result<PlayState, DerivationError> {
    if session.play_state()?.flag_or_false("IsPaused")? {
        Ok(PlayState::Paused)
    } else {
        Ok(PlayState::Playing)
    }
}

/// Position and progress succeed or fail together
fn position_and_progress(
    session: &RawSession,
    duration_secs: u64,
) -> Result<(u64, f64), DerivationError> {
    let ticks = session.play_state()?.integer_or_zero("PositionTicks")?;
    let position_secs = ticks_to_secs("PositionTicks", ticks)?;
    if duration_secs == 0 {
        return Err(DerivationError::DivideByZero("Progress"));
    }
    let progress = position_secs as f64 / duration_secs as f64 * 100.0;
    Ok((position_secs, progress))
}
