//! `ureq`-backed transport for the session query

use jellyfin_nowplaying_core::{Fetch, TransportError, DEFAULT_TIMEOUT_SECS};
use log::trace;
use std::time::Duration;
use ureq::Agent;

/// Blocking HTTP fetcher with a global per-request timeout
pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        trace!("Session query answered {}", status);
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .body_mut()
            .read_to_vec()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return its URL
    fn serve_once(response: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/Sessions?ApiKey=secret", listener.local_addr().unwrap());
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, server)
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(2))
    }

    #[test]
    fn test_non_success_status_is_status_error() {
        let (url, server) = serve_once(
            "HTTP/1.1 401 Unauthorized\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        let result = fetcher().fetch(&url);
        server.join().unwrap();
        assert!(matches!(result, Err(TransportError::Status(401))));
    }

    #[test]
    fn test_success_returns_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
        );
        let result = fetcher().fetch(&url);
        server.join().unwrap();
        assert_eq!(result.unwrap(), b"[]".to_vec());
    }

    #[test]
    fn test_refused_connection_is_request_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let result = fetcher().fetch(&format!("http://127.0.0.1:{port}/Sessions"));
        assert!(matches!(result, Err(TransportError::Request(_))));
    }
}
