//! Bond — a modeled coupling relationship between two components.

use serde::{Deserialize, Serialize};
use super::ComponentId;

/// Canonical (sorted) pair key identifying a bond.
///
/// Identical regardless of the direction a bond was declared in, so force
/// maps keyed by it are order-independent of input edge direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BondKey(pub ComponentId, pub ComponentId);

impl BondKey {
    pub fn canonical(a: ComponentId, b: ComponentId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

impl std::fmt::Display for BondKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.0, self.1)
    }
}

/// A coupling edge between two components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub a: ComponentId,
    pub b: ComponentId,
    /// Coupling distance; smaller means tighter. Floored at the mapper's
    /// epsilon so it is never zero.
    pub distance: f64,
    /// Filled in once a predictor has run over the owning snapshot.
    pub force: Option<f64>,
}

impl Bond {
    pub fn new(a: impl Into<ComponentId>, b: impl Into<ComponentId>, distance: f64) -> Self {
        Self { a: a.into(), b: b.into(), distance, force: None }
    }

    pub fn with_force(mut self, force: f64) -> Self {
        self.force = Some(force);
        self
    }

    /// The canonical key for this bond.
    pub fn key(&self) -> BondKey {
        BondKey::canonical(self.a.clone(), self.b.clone())
    }

    /// The "other" end of the bond from the given component.
    pub fn other_end(&self, from: &ComponentId) -> Option<&ComponentId> {
        if *from == self.a {
            Some(&self.b)
        } else if *from == self.b {
            Some(&self.a)
        } else {
            None
        }
    }
}
