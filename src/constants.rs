//! Physical constants of the hive universe.
//!
//! Loaded once at process start (typically from a JSON map) and threaded
//! explicitly through every computation — never ambient/global state, so
//! differently-configured runs can execute concurrently.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Component attraction constant (gravitational analogue).
pub const G_HIVE: &str = "g_hive";
/// Electromagnetic constant (Coulomb analogue) for bond forces.
pub const K_HIVE_ELECTRO: &str = "k_hive_electro";
/// Target ratio of strong to weak bonds (fine-structure analogue).
pub const ALPHA_HIVE_TARGET: &str = "alpha_hive_target";
/// Target growth rate representing slow, stable expansion.
pub const LAMBDA_HIVE_TARGET: &str = "lambda_hive_target";
/// Nectar distribution entropy constant (Boltzmann analogue).
pub const K_HIVE_ENTROPY: &str = "k_hive_entropy";

/// Named real-valued constants used by every formula.
///
/// Immutable after construction. `Default` carries the canonical hive
/// values; a deployment overrides them by deserializing a JSON map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalConstants {
    values: HashMap<String, f64>,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        let mut values = HashMap::new();
        values.insert(G_HIVE.to_owned(), 0.01);
        values.insert(K_HIVE_ELECTRO.to_owned(), 1.0);
        values.insert(ALPHA_HIVE_TARGET.to_owned(), 0.01);
        values.insert(LAMBDA_HIVE_TARGET.to_owned(), 0.001);
        values.insert(K_HIVE_ENTROPY.to_owned(), 1.38e-23);
        Self { values }
    }
}

impl PhysicalConstants {
    /// A table with no constants at all. Useful for exercising the
    /// missing-constant failure path.
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    /// Parse a JSON object of name → value, e.g. `{"k_hive_electro": 2.0}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Override or add a single constant.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Look up a constant a formula cannot do without.
    pub fn require(&self, name: &str) -> Result<f64> {
        self.get(name)
            .ok_or_else(|| Error::MissingConstant(name.to_owned()))
    }
}
