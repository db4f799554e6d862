//! Component — one architectural unit ("bee") under measurement.

use serde::{Deserialize, Serialize};

/// Stable component identifier (service name, aggregate name, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub String);

impl ComponentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The closed set of architectural primitives a component can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Aggregate,
    Transformation,
    Connector,
    Event,
    Command,
    Query,
    Saga,
}

/// A component with its derived physical quantities.
///
/// Produced by the quantity mapper from one data-source snapshot; immutable
/// once produced and discarded at the end of an analysis run. Identity
/// across runs exists only through the identifier string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub kind: PrimitiveKind,
    /// Resource weight derived from usage metrics. Never negative.
    pub mass: f64,
    /// Signed tendency derived from volatility/stability metrics.
    /// Positive charge attracts dependents under the bond-force convention.
    pub charge: f64,
}

impl Component {
    pub fn new(id: impl Into<ComponentId>, kind: PrimitiveKind) -> Self {
        Self { id: id.into(), kind, mass: 0.0, charge: 0.0 }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }
}
