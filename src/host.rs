//! Host lifecycle adapter
//!
//! Turns the host's create/reload/update/read/destroy calls on opaque
//! handles into operations on primary and secondary measures. The host owns
//! the registry, so scope+name resolution never touches global state.

use jellyfin_nowplaying_core::{
    ConfigError, Fetch, Measure, MeasureConfig, RegistrationId, ScopeId, UnitIdentity,
};
use jellyfin_nowplaying_sources::{
    HttpFetcher, PrimaryHandle, PrimaryMeasure, PrimaryRegistry, SecondaryMeasure,
};
use log::{debug, error, info};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Opaque handle the host keeps for each measure it created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitHandle(Uuid);

impl fmt::Display for UnitHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown measure handle {0}")]
    UnknownHandle(UnitHandle),

    #[error("measure {0} lock poisoned")]
    Lock(String),
}

enum Unit {
    Primary {
        unit: PrimaryHandle,
        registration: RegistrationId,
    },
    Secondary(SecondaryMeasure),
}

/// Owner of every live measure of one host process
pub struct MeasureHost {
    registry: Arc<PrimaryRegistry>,
    fetcher: Arc<dyn Fetch>,
    units: HashMap<UnitHandle, Unit>,
}

impl MeasureHost {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            registry: Arc::new(PrimaryRegistry::new()),
            fetcher,
            units: HashMap::new(),
        }
    }

    /// Host querying the server over HTTP with the given timeout
    pub fn with_http(timeout: Duration) -> Self {
        Self::new(Arc::new(HttpFetcher::new(timeout)))
    }

    pub fn registry(&self) -> &Arc<PrimaryRegistry> {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Create a measure named `name` in `scope`
    ///
    /// An empty `PlayerName` creates a primary, registered right away; any
    /// other value creates a secondary. Call [`MeasureHost::reload`] next.
    pub fn create(&mut self, scope: ScopeId, name: &str, config: &MeasureConfig) -> UnitHandle {
        let handle = UnitHandle(Uuid::new_v4());
        let identity = UnitIdentity::new(scope, name);

        let unit = if config.is_secondary() {
            let secondary = SecondaryMeasure::new(identity, self.registry.clone());
            info!("Created {} {}", secondary.metadata().name, secondary.identity());
            Unit::Secondary(secondary)
        } else {
            let primary = PrimaryMeasure::new(identity.clone(), self.fetcher.clone());
            info!("Created {} {}", primary.metadata().name, identity);
            let unit = primary.into_handle();
            let registration = self.registry.register(identity, &unit);
            Unit::Primary { unit, registration }
        };

        self.units.insert(handle, unit);
        handle
    }

    /// Reconfigure a measure; every issue is logged once and returned
    pub fn reload(
        &mut self,
        handle: UnitHandle,
        config: &MeasureConfig,
    ) -> Result<Vec<ConfigError>, HostError> {
        let (identity, issues) = match self.unit_mut(handle)? {
            Unit::Primary { unit, .. } => {
                let mut primary = unit
                    .lock()
                    .map_err(|_| HostError::Lock(handle.to_string()))?;
                let issues = primary.reload(config);
                (primary.identity().clone(), issues)
            }
            Unit::Secondary(secondary) => {
                let issues = secondary.reload(config);
                (secondary.identity().clone(), issues)
            }
        };

        for issue in &issues {
            error!("{}: {}", identity, issue);
        }
        Ok(issues)
    }

    /// Poll (primaries) or read through (secondaries) and return the
    /// numeric value
    pub fn update(&mut self, handle: UnitHandle) -> Result<f64, HostError> {
        match self.unit_mut(handle)? {
            Unit::Primary { unit, .. } => unit
                .lock()
                .map(|mut primary| primary.update())
                .map_err(|_| HostError::Lock(handle.to_string())),
            Unit::Secondary(secondary) => Ok(secondary.update()),
        }
    }

    /// Text value from the last update; never touches the network
    pub fn read_text(&self, handle: UnitHandle) -> Result<Option<String>, HostError> {
        match self.units.get(&handle) {
            Some(Unit::Primary { unit, .. }) => unit
                .lock()
                .map(|primary| primary.read_text())
                .map_err(|_| HostError::Lock(handle.to_string())),
            Some(Unit::Secondary(secondary)) => Ok(secondary.read_text()),
            None => Err(HostError::UnknownHandle(handle)),
        }
    }

    /// Drop a measure; primaries are unregistered first
    pub fn destroy(&mut self, handle: UnitHandle) -> Result<(), HostError> {
        match self.units.remove(&handle) {
            Some(Unit::Primary { registration, .. }) => {
                self.registry.unregister(registration);
                Ok(())
            }
            Some(Unit::Secondary(secondary)) => {
                debug!("Destroyed secondary measure {}", secondary.identity());
                Ok(())
            }
            None => Err(HostError::UnknownHandle(handle)),
        }
    }

    fn unit_mut(&mut self, handle: UnitHandle) -> Result<&mut Unit, HostError> {
        self.units
            .get_mut(&handle)
            .ok_or(HostError::UnknownHandle(handle))
    }
}
