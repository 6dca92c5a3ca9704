//! jellyfin-nowplaying-sources: Measure implementations backed by a Jellyfin server.

mod http;
mod jellyfin;

pub use http::HttpFetcher;
pub use jellyfin::{
    extract, parse_sessions, select_session, PrimaryHandle, PrimaryMeasure, PrimaryRegistry,
    RawObject, RawSession, SecondaryMeasure,
};
