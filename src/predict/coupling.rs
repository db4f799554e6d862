//! Gravitational coupling — mass-based bond strength over architectural
//! distance.

use crate::constants::{self, PhysicalConstants};
use crate::model::{ComponentId, PhysicalSnapshot};
use crate::{Error, Result};

/// Predict the gravitational bond strength between two components:
///
/// `strength = g_hive · mass_a · mass_b / hops²`
///
/// where hops is the shortest architectural path between the pair. An
/// unreachable pair couples with strength `0.0`; a component coupled with
/// itself is infinitely bound. Fails with `UnknownComponent` when either
/// endpoint is absent and `MissingConstant` when `g_hive` is.
pub fn predict_bond_strength(
    snapshot: &PhysicalSnapshot,
    constants: &PhysicalConstants,
    a: &ComponentId,
    b: &ComponentId,
) -> Result<f64> {
    let g = constants.require(constants::G_HIVE)?;

    let mass_a = snapshot
        .component(a)
        .ok_or_else(|| Error::UnknownComponent(a.clone()))?
        .mass;
    let mass_b = snapshot
        .component(b)
        .ok_or_else(|| Error::UnknownComponent(b.clone()))?
        .mass;

    match snapshot.architectural_hops(a, b)? {
        None => Ok(0.0),
        Some(0) => Ok(f64::INFINITY),
        Some(hops) => {
            let r = hops as f64;
            Ok(g * mass_a * mass_b / (r * r))
        }
    }
}
