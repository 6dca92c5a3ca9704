//! Secondary measure: reports one field of a named primary

use super::primary::{PrimaryMeasure, PrimaryRegistry};
use jellyfin_nowplaying_core::{
    resolve_kind, ConfigError, FieldKind, Measure, MeasureConfig, MeasureMetadata, UnitIdentity,
};
use log::debug;
use std::sync::{Arc, Mutex, Weak};

/// Proxy measure
///
/// Resolves its primary by (own scope, `PlayerName`) on every reload and
/// holds it weakly. It never polls; it reads whatever the primary cached
/// on its last update, projected for this measure's own field kind.
pub struct SecondaryMeasure {
    metadata: MeasureMetadata,
    identity: UnitIdentity,
    kind: FieldKind,
    registry: Arc<PrimaryRegistry>,
    target: Option<Weak<Mutex<PrimaryMeasure>>>,
}

impl SecondaryMeasure {
    pub fn new(identity: UnitIdentity, registry: Arc<PrimaryRegistry>) -> Self {
        let metadata = MeasureMetadata {
            id: "jellyfin.player_field".to_string(),
            name: "Jellyfin Player Field".to_string(),
            description: "A field of another Jellyfin player measure".to_string(),
        };

        Self {
            metadata,
            identity,
            kind: FieldKind::default(),
            registry,
            target: None,
        }
    }

    pub fn identity(&self) -> &UnitIdentity {
        &self.identity
    }

    /// Whether the last reload found a primary that is still alive
    pub fn is_resolved(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| target.strong_count() > 0)
    }

    fn with_target<R>(&self, read: impl FnOnce(&PrimaryMeasure) -> R) -> Option<R> {
        let target = self.target.as_ref()?.upgrade()?;
        let primary = target.lock().ok()?;
        Some(read(&primary))
    }
}

impl Measure for SecondaryMeasure {
    fn metadata(&self) -> &MeasureMetadata {
        &self.metadata
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn reload(&mut self, config: &MeasureConfig) -> Vec<ConfigError> {
        let mut issues: Vec<ConfigError> =
            resolve_kind(&mut self.kind, &config.player_type).into_iter().collect();

        self.target = self
            .registry
            .resolve(&self.identity.scope, &config.player_name);

        match self.target {
            Some(_) => debug!(
                "{}: reading {} from {}/{}",
                self.identity, self.kind, self.identity.scope, config.player_name
            ),
            None => issues.push(ConfigError::UnresolvedTarget(config.player_name.clone())),
        }
        issues
    }

    fn update(&mut self) -> f64 {
        self.with_target(|primary| primary.value_of(self.kind))
            .unwrap_or(0.0)
    }

    fn read_text(&self) -> Option<String> {
        self.with_target(|primary| primary.text_of(self.kind))
            .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jellyfin_nowplaying_core::{Fetch, ScopeId, TransportError};

    struct FixedFetcher(&'static str);

    impl Fetch for FixedFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>, TransportError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    const SESSIONS: &str = r#"[{
        "UserName": "alice",
        "PlayState": { "PositionTicks": 650000000, "IsPaused": false },
        "NowPlayingItem": { "Type": "Audio", "Name": "Freddie Freeloader", "Album": "Kind of Blue", "RunTimeTicks": 5880000000 }
    }]"#;

    fn identity(scope: &str, name: &str) -> UnitIdentity {
        UnitIdentity::new(ScopeId::new(scope), name)
    }

    fn secondary_config(player_type: &str, player_name: &str) -> MeasureConfig {
        MeasureConfig {
            player_type: player_type.to_string(),
            player_name: player_name.to_string(),
            ..MeasureConfig::default()
        }
    }

    fn registered_primary(registry: &PrimaryRegistry, scope: &str, name: &str) -> Arc<Mutex<PrimaryMeasure>> {
        let mut primary = PrimaryMeasure::new(identity(scope, name), Arc::new(FixedFetcher(SESSIONS)));
        primary.reload(&MeasureConfig {
            player_type: "title".to_string(),
            jellyfin_token: "secret".to_string(),
            disable_leading_zero: 1,
            ..MeasureConfig::default()
        });
        let handle = primary.into_handle();
        registry.register(identity(scope, name), &handle);
        handle
    }

    #[test]
    fn test_unresolved_target_reports_defaults() {
        let registry = Arc::new(PrimaryRegistry::new());
        let _other_scope = registered_primary(&registry, "skin-b", "Player");
        let mut measure = SecondaryMeasure::new(identity("skin-a", "Album"), registry);

        let issues = measure.reload(&secondary_config("album", "Player"));
        assert_eq!(issues, vec![ConfigError::UnresolvedTarget("Player".to_string())]);
        assert!(!measure.is_resolved());
        assert_eq!(measure.update(), 0.0);
        assert_eq!(measure.read_text(), None);
    }

    #[test]
    fn test_reads_own_kind_from_primary_cache() {
        let registry = Arc::new(PrimaryRegistry::new());
        let primary = registered_primary(&registry, "skin", "Player");
        let mut position = SecondaryMeasure::new(identity("skin", "Position"), registry.clone());
        let mut album = SecondaryMeasure::new(identity("skin", "Album"), registry);

        assert!(position.reload(&secondary_config("position", "Player")).is_empty());
        assert!(album.reload(&secondary_config("album", "Player")).is_empty());

        // Nothing polled yet
        assert_eq!(position.update(), 0.0);
        assert_eq!(album.read_text(), None);

        primary.lock().unwrap().update();
        assert_eq!(position.update(), 65.0);
        assert_eq!(position.read_text().as_deref(), Some("1:05"));
        assert_eq!(album.read_text().as_deref(), Some("Kind of Blue"));
    }

    #[test]
    fn test_destroyed_primary_is_not_resolved() {
        let registry = Arc::new(PrimaryRegistry::new());
        let primary = registered_primary(&registry, "skin", "Player");
        let mut measure = SecondaryMeasure::new(identity("skin", "Title"), registry);
        assert!(measure.reload(&secondary_config("title", "Player")).is_empty());
        primary.lock().unwrap().update();
        assert_eq!(measure.read_text().as_deref(), Some("Freddie Freeloader"));

        drop(primary);
        assert!(!measure.is_resolved());
        assert_eq!(measure.read_text(), None);
        assert_eq!(measure.update(), 0.0);
        assert_eq!(
            measure.reload(&secondary_config("title", "Player")),
            vec![ConfigError::UnresolvedTarget("Player".to_string())]
        );
    }
}
