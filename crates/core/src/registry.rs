//! Registry of live primary measures
//!
//! Primaries are registered under their (scope, name) identity for their
//! whole lifetime. Secondaries resolve against it when they are configured
//! and keep only a `Weak` handle, so a destroyed primary is never kept
//! alive by its readers.

use jellyfin_nowplaying_types::{ScopeId, UnitIdentity};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

/// Thread-safe handle to a registered unit
pub type UnitHandle<T> = Arc<Mutex<T>>;

/// Token returned by [`Registry::register`], used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

struct Entry<T> {
    id: RegistrationId,
    identity: UnitIdentity,
    unit: Weak<Mutex<T>>,
}

/// Collection of live units keyed by (scope, name)
///
/// Names are not enforced unique. Lookup is a linear scan in registration
/// order and the first match wins.
pub struct Registry<T> {
    entries: RwLock<Vec<Entry<T>>>,
    next_id: AtomicU64,
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    // The entry list stays consistent even if a holder panicked
    fn read(&self) -> RwLockReadGuard<'_, Vec<Entry<T>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Entry<T>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a unit under `identity`
    pub fn register(&self, identity: UnitIdentity, unit: &UnitHandle<T>) -> RegistrationId {
        let id = RegistrationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut entries = self.write();
        if entries.iter().any(|e| e.identity == identity) {
            warn!(
                "Measure {} registered twice, lookups resolve to the first one",
                identity
            );
        }
        info!("Registered measure {} ({} live)", identity, entries.len() + 1);
        entries.push(Entry {
            id,
            identity,
            unit: Arc::downgrade(unit),
        });
        id
    }

    /// Remove a registration; returns false if it was already gone
    pub fn unregister(&self, id: RegistrationId) -> bool {
        let mut entries = self.write();
        match entries.iter().position(|e| e.id == id) {
            Some(index) => {
                let entry = entries.remove(index);
                info!("Unregistered measure {} ({} live)", entry.identity, entries.len());
                true
            }
            None => false,
        }
    }

    /// Find the first live unit registered under (`scope`, `name`)
    pub fn resolve(&self, scope: &ScopeId, name: &str) -> Option<Weak<Mutex<T>>> {
        let entries = self.read();
        let found = entries
            .iter()
            .filter(|e| e.identity.scope == *scope && e.identity.name == name)
            .find(|e| e.unit.strong_count() > 0)
            .map(|e| e.unit.clone());
        debug!(
            "Resolving {}/{}: {}",
            scope,
            name,
            if found.is_some() { "found" } else { "no match" }
        );
        found
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(scope: &str, name: &str) -> UnitIdentity {
        UnitIdentity::new(ScopeId::new(scope), name)
    }

    fn unit(value: u32) -> UnitHandle<u32> {
        Arc::new(Mutex::new(value))
    }

    fn value_of(weak: Option<Weak<Mutex<u32>>>) -> Option<u32> {
        let unit = weak?.upgrade()?;
        let value = *unit.lock().unwrap();
        Some(value)
    }

    #[test]
    fn test_resolve_matches_scope_and_name() {
        let registry = Registry::new();
        let a = unit(1);
        let b = unit(2);
        registry.register(identity("skin-a", "Player"), &a);
        registry.register(identity("skin-b", "Player"), &b);

        assert_eq!(value_of(registry.resolve(&ScopeId::new("skin-a"), "Player")), Some(1));
        assert_eq!(value_of(registry.resolve(&ScopeId::new("skin-b"), "Player")), Some(2));
        assert!(registry.resolve(&ScopeId::new("skin-c"), "Player").is_none());
        assert!(registry.resolve(&ScopeId::new("skin-a"), "Other").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let registry = Registry::new();
        let first = unit(1);
        let second = unit(2);
        registry.register(identity("skin", "Player"), &first);
        registry.register(identity("skin", "Player"), &second);

        assert_eq!(registry.len(), 2);
        assert_eq!(value_of(registry.resolve(&ScopeId::new("skin"), "Player")), Some(1));
    }

    #[test]
    fn test_unregister_removes_entry() {
        let registry = Registry::new();
        let a = unit(1);
        let id = registry.register(identity("skin", "Player"), &a);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
        assert!(registry.resolve(&ScopeId::new("skin"), "Player").is_none());
    }

    #[test]
    fn test_dropped_unit_does_not_resolve() {
        let registry = Registry::new();
        let a = unit(1);
        registry.register(identity("skin", "Player"), &a);
        drop(a);

        assert!(registry.resolve(&ScopeId::new("skin"), "Player").is_none());
    }

    #[test]
    fn test_registry_does_not_own_units() {
        let registry = Registry::new();
        let a = unit(1);
        registry.register(identity("skin", "Player"), &a);
        assert_eq!(Arc::strong_count(&a), 1);
    }
}
