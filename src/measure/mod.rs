//! # Measurements
//!
//! Scalar observables of the hive: the component growth rate Λ and the
//! thermodynamic temperature T. Both are pure functions of materialized
//! event data — no wall clock, no I/O.

pub mod growth;
pub mod temperature;

pub use growth::growth_rate;
pub use temperature::{temperature, HivePhase};
