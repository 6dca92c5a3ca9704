//! Transport boundary: fetch a URL, get bytes or a failure

use crate::error::TransportError;

/// Blocking HTTP GET
///
/// Each call fully completes before returning; any timeout is the
/// implementation's concern.
pub trait Fetch: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}
