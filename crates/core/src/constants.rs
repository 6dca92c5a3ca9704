//! Shared constants

/// Jellyfin ticks are 100-nanosecond units
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Item type a session must be playing to be selected
pub const AUDIO_ITEM_TYPE: &str = "Audio";

/// Query appended to the cover image URL
pub const COVER_IMAGE_QUERY: &str = "Images/Primary?fillHeight=600&fillWidth=600";

/// Default HTTP timeout for the session query, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
