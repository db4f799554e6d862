//! # Bond Strength Prediction
//!
//! Electromagnetic bond forces over a physical snapshot. Like-signed
//! charges repel (positive force, destabilizing); opposite-signed charges
//! attract (negative force, stabilizing). The gravitational mass-coupling
//! analogue lives in [`coupling`].

pub mod coupling;

use std::collections::BTreeMap;

use tracing::debug;

use crate::constants::{self, PhysicalConstants};
use crate::model::{BondKey, ComponentId, PhysicalSnapshot};
use crate::{DataQualityWarning, Result};

/// Predicted force per bond, keyed canonically, plus the bonds skipped.
#[derive(Debug, Clone)]
pub struct ForceReport {
    /// One entry per evaluated bond; `BTreeMap` for deterministic order.
    pub forces: BTreeMap<BondKey, f64>,
    pub warnings: Vec<DataQualityWarning>,
}

impl ForceReport {
    /// Force for a pair in either declaration order.
    pub fn force(&self, a: &ComponentId, b: &ComponentId) -> Option<f64> {
        self.forces
            .get(&BondKey::canonical(a.clone(), b.clone()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }
}

/// Predict the electromagnetic force on every bond in the snapshot:
///
/// `force = k_hive_electro · charge_a · charge_b / distance²`
///
/// A bond without a usable distance is skipped with a warning rather than
/// failing the run. Fails with `MissingConstant` when `k_hive_electro` is
/// absent from the supplied constants.
pub fn predict(snapshot: &PhysicalSnapshot, constants: &PhysicalConstants) -> Result<ForceReport> {
    let k = constants.require(constants::K_HIVE_ELECTRO)?;

    let mut forces = BTreeMap::new();
    let mut warnings = Vec::new();

    for bond in snapshot.bonds() {
        if !bond.distance.is_finite() || bond.distance <= 0.0 {
            let warning = DataQualityWarning::MissingDistance {
                a: bond.a.clone(),
                b: bond.b.clone(),
            };
            tracing::warn!(%warning, "data quality");
            warnings.push(warning);
            continue;
        }

        // Endpoints are guaranteed present by the snapshot invariant.
        let qa = snapshot.component(&bond.a).map_or(0.0, |c| c.charge);
        let qb = snapshot.component(&bond.b).map_or(0.0, |c| c.charge);

        let force = k * qa * qb / (bond.distance * bond.distance);
        forces.insert(bond.key(), force);
    }

    debug!(evaluated = forces.len(), skipped = warnings.len(), "predicted bond forces");
    Ok(ForceReport { forces, warnings })
}
