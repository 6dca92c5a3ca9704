//! Pick the one session to display

use super::api::RawSession;
use jellyfin_nowplaying_core::AUDIO_ITEM_TYPE;

/// First session, in server order, that is playing audio and (when a
/// filter is given) belongs to `username`
pub fn select_session<'a>(
    sessions: &'a [RawSession],
    username: Option<&str>,
) -> Option<&'a RawSession> {
    sessions.iter().find(|session| {
        let playing_audio = session
            .item()
            .and_then(|item| item.text("Type"))
            .is_ok_and(|item_type| item_type == AUDIO_ITEM_TYPE);

        playing_audio
            && username.map_or(true, |name| session.user_name.as_deref() == Some(name))
    })
}
