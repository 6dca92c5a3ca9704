//! Jellyfin now-playing measures
//!
//! A [`PrimaryMeasure`] polls `/Sessions`, narrows the list to one audio
//! session and caches the derived snapshot. [`SecondaryMeasure`]s proxy
//! single fields of a primary found through the [`PrimaryRegistry`].

mod api;
mod extractor;
mod primary;
mod secondary;
mod selector;

pub use api::{parse_sessions, RawObject, RawSession};
pub use extractor::extract;
pub use primary::{PrimaryHandle, PrimaryMeasure, PrimaryRegistry};
pub use secondary::SecondaryMeasure;
pub use selector::select_session;
