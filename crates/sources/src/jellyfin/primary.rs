//! Primary measure: polls the server and caches the playback snapshot

use super::api::{parse_sessions, RawSession};
use super::extractor::extract;
use super::selector::select_session;
use jellyfin_nowplaying_core::{
    resolve_kind, ConfigError, FieldKind, Fetch, Measure, MeasureConfig, MeasureMetadata,
    PlaybackSnapshot, Registry, TransportError, UnitHandle, UnitIdentity, DEFAULT_SERVER,
};
use log::{debug, error, trace};
use std::sync::{Arc, Mutex};

/// Shared handle to a primary, as stored by the host
pub type PrimaryHandle = UnitHandle<PrimaryMeasure>;

/// Registry that secondaries resolve their primary from
pub type PrimaryRegistry = Registry<PrimaryMeasure>;

/// Polling measure
///
/// Owns the server query and the only [`PlaybackSnapshot`] of its
/// identity. Every `update` starts from a cleared snapshot, so no field
/// ever outlives the poll it was read in.
pub struct PrimaryMeasure {
    metadata: MeasureMetadata,
    identity: UnitIdentity,
    kind: FieldKind,
    server: String,
    token: String,
    username: Option<String>,
    suppress_leading_zero: bool,
    fetcher: Arc<dyn Fetch>,
    snapshot: PlaybackSnapshot,
}

impl PrimaryMeasure {
    pub fn new(identity: UnitIdentity, fetcher: Arc<dyn Fetch>) -> Self {
        let metadata = MeasureMetadata {
            id: "jellyfin.player".to_string(),
            name: "Jellyfin Player".to_string(),
            description: "Now-playing state of a Jellyfin server session".to_string(),
        };

        Self {
            metadata,
            identity,
            kind: FieldKind::default(),
            server: DEFAULT_SERVER.to_string(),
            token: String::new(),
            username: None,
            suppress_leading_zero: false,
            fetcher,
            snapshot: PlaybackSnapshot::default(),
        }
    }

    pub fn into_handle(self) -> PrimaryHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn identity(&self) -> &UnitIdentity {
        &self.identity
    }

    pub fn snapshot(&self) -> &PlaybackSnapshot {
        &self.snapshot
    }

    /// Numeric value of any field from the cached snapshot
    pub fn value_of(&self, kind: FieldKind) -> f64 {
        self.snapshot.numeric(kind)
    }

    /// Text value of any field from the cached snapshot
    pub fn text_of(&self, kind: FieldKind) -> Option<String> {
        self.snapshot.text(kind, self.suppress_leading_zero)
    }

    fn sessions_url(&self) -> String {
        format!("{}/Sessions?ApiKey={}", self.server, self.token)
    }

    fn query_sessions(&self) -> Result<Vec<RawSession>, TransportError> {
        debug!(
            "{}: Query {}/Sessions?ApiKey=***",
            self.identity, self.server
        );
        let body = self.fetcher.fetch(&self.sessions_url())?;
        Ok(parse_sessions(&body)?)
    }

    fn poll(&mut self) {
        match self.query_sessions() {
            Ok(sessions) => match select_session(&sessions, self.username.as_deref()) {
                Some(session) => self.snapshot = extract(session, &self.server),
                None => {
                    trace!(
                        "{}: no audio session among {}",
                        self.identity,
                        sessions.len()
                    );
                    self.snapshot.clear();
                }
            },
            Err(err) => {
                error!("{}: error querying sessions: {}", self.identity, err);
                self.snapshot.clear();
            }
        }
    }
}

impl Measure for PrimaryMeasure {
    fn metadata(&self) -> &MeasureMetadata {
        &self.metadata
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn reload(&mut self, config: &MeasureConfig) -> Vec<ConfigError> {
        let mut issues: Vec<ConfigError> =
            resolve_kind(&mut self.kind, &config.player_type).into_iter().collect();

        self.server = config.jellyfin_server.clone();
        self.token = config.jellyfin_token.clone();
        self.username = config.username_filter().map(str::to_string);
        self.suppress_leading_zero = config.suppress_leading_zero();

        if self.token.is_empty() {
            self.snapshot.clear();
            issues.push(ConfigError::MissingToken);
        }
        issues
    }

    fn update(&mut self) -> f64 {
        if !self.token.is_empty() {
            self.poll();
        }
        self.value_of(self.kind)
    }

    fn read_text(&self) -> Option<String> {
        self.text_of(self.kind)
    }
}
