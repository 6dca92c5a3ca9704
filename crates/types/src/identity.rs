//! Identity of a measure within its host

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of the host scope (e.g. a skin) a measure lives in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeId(pub String);

impl ScopeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// (scope, name) pair; names are unique only by convention
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitIdentity {
    pub scope: ScopeId,
    pub name: String,
}

impl UnitIdentity {
    pub fn new(scope: ScopeId, name: impl Into<String>) -> Self {
        Self {
            scope,
            name: name.into(),
        }
    }
}

impl fmt::Display for UnitIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}
