//! # hive-physics — Physical Model of a Live Software Architecture
//!
//! Computes physical analogues (mass, charge, bond force, growth rate) over
//! a software architecture graph and runs predictive algorithms on top of
//! them: bond-strength prediction, stability-path search, and growth-rate
//! regression.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `DataSource` is the contract between the physics core
//!    and any metrics/topology/history backend
//! 2. **Clean DTOs**: `Component`, `Bond`, `PhysicalSnapshot` cross all
//!    boundaries and are immutable once built
//! 3. **Pure core**: mapping, measuring, predicting, and simulating are
//!    synchronous functions of fully-materialized inputs — all I/O lives in
//!    the adapters behind `DataSource`
//! 4. **Explicit constants**: `PhysicalConstants` is threaded through every
//!    call, never read from ambient state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hive_physics::{Hive, StaticSource};
//!
//! # async fn example() -> hive_physics::Result<()> {
//! let source = StaticSource::new();
//! source.set_metric("order-aggregate", "commands_handled_rate", 10.0);
//! source.set_metric("billing-saga", "commands_handled_rate", 5.0);
//! source.link("order-aggregate", "billing-saga", 2.0);
//!
//! let hive = Hive::new(source);
//! let report = hive.snapshot().await?;
//! let forces = hive.predict_forces(&report.snapshot)?;
//!
//! for (pair, force) in &forces.forces {
//!     println!("{pair}: {force:.4}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Acquire | `source` (adapters) | metrics / topology / history feeds |
//! | Map | `mapper` | `PhysicalSnapshot` |
//! | Measure | `measure` | growth rate, hive temperature |
//! | Predict | `predict` | per-bond forces, pairwise coupling |
//! | Simulate | `simulate` | most stable path |

// ============================================================================
// Modules
// ============================================================================

pub mod constants;
pub mod model;
pub mod source;
pub mod mapper;
pub mod measure;
pub mod predict;
pub mod simulate;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Bond, BondKey, Component, ComponentId, GrowthEvent, PhysicalSnapshot,
    PrimitiveKind,
};

// ============================================================================
// Re-exports: Constants & Sources
// ============================================================================

pub use constants::PhysicalConstants;
pub use source::{DataSource, LinkHint, MetricsFeed, StaticSource, TopologyFeed};

// ============================================================================
// Re-exports: Computations
// ============================================================================

pub use mapper::{build_snapshot, MapperConfig, SnapshotReport};
pub use measure::{growth_rate, temperature, HivePhase};
pub use predict::ForceReport;
pub use simulate::{find_most_stable_path, StablePath};

// ============================================================================
// Top-level Hive handle
// ============================================================================

/// The primary entry point. A `Hive` wraps a data-source adapter and
/// provides the four physics computations over its feeds.
///
/// All computations are pure functions of the materialized feeds; the handle
/// itself holds no mutable state and may be shared freely.
pub struct Hive<D: DataSource> {
    source: D,
    constants: PhysicalConstants,
    mapper: MapperConfig,
}

impl<D: DataSource> Hive<D> {
    /// Create a Hive over the given adapter with default constants and
    /// mapping configuration.
    pub fn new(source: D) -> Self {
        Self {
            source,
            constants: PhysicalConstants::default(),
            mapper: MapperConfig::default(),
        }
    }

    /// Replace the physical constants (loaded once at startup).
    pub fn with_constants(mut self, constants: PhysicalConstants) -> Self {
        self.constants = constants;
        self
    }

    /// Replace the quantity-mapping configuration.
    pub fn with_mapper_config(mut self, config: MapperConfig) -> Self {
        self.mapper = config;
        self
    }

    /// Fetch metrics + topology from the adapter and map them into a
    /// `PhysicalSnapshot`, collecting data-quality warnings along the way.
    pub async fn snapshot(&self) -> Result<SnapshotReport> {
        let metrics = self.source.fetch_metrics().await?;
        let topology = self.source.fetch_topology().await?;
        mapper::build_snapshot(&metrics, &topology, &self.mapper)
    }

    /// Fetch history from the adapter and measure the component growth rate
    /// over the trailing window. `now` anchors the window end; when `None`
    /// the latest event timestamp is used.
    pub async fn growth_rate(
        &self,
        window_days: f64,
        now: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<f64> {
        let history = self.source.fetch_history().await?;
        measure::growth_rate(&history, window_days, now)
    }

    /// Predict the electromagnetic force on every bond in the snapshot.
    pub fn predict_forces(&self, snapshot: &PhysicalSnapshot) -> Result<ForceReport> {
        predict::predict(snapshot, &self.constants)
    }

    /// Search the snapshot for the most stable chain of components
    /// reachable from `start`.
    pub fn most_stable_path(
        &self,
        snapshot: &PhysicalSnapshot,
        start: &ComponentId,
    ) -> Result<StablePath> {
        simulate::find_most_stable_path(snapshot, &self.constants, start)
    }

    /// The constants this handle threads through every computation.
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Access the underlying adapter (for advanced use).
    pub fn source(&self) -> &D {
        &self.source
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structural input defect, e.g. a disallowed self-link.
    #[error("Malformed topology: {0}")]
    MalformedTopology(String),

    /// Non-positive (or non-finite) time window for growth measurement.
    #[error("Invalid measurement window: {0}")]
    InvalidWindow(String),

    /// A required named physical constant is absent.
    #[error("Missing physical constant: {0}")]
    MissingConstant(String),

    /// Requested start/target component not present in the snapshot.
    #[error("Unknown component: {0}")]
    UnknownComponent(ComponentId),

    /// A data-source adapter failed while materializing a feed.
    #[error("Data source error: {0}")]
    Source(String),

    /// Constants or mapper configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Data-quality warnings
// ============================================================================

/// Non-fatal defect affecting a single data point.
///
/// Per the error-handling policy, these are recovered locally with a
/// documented default and reported to the caller; the computation proceeds.
#[derive(Debug, Clone, PartialEq)]
pub enum DataQualityWarning {
    /// A configured metric was absent for a component that reported others.
    MissingMetric { component: String, metric: String },
    /// A component in the topology reported no metrics at all.
    Uninstrumented { component: String },
    /// A declared link references a component missing from the topology.
    DanglingLink { from: String, to: String },
    /// A link carried a non-positive or non-finite frequency hint.
    UnusableFrequency { from: String, to: String, frequency: f64 },
    /// A bond's distance was unusable, so no force was predicted for it.
    MissingDistance { a: ComponentId, b: ComponentId },
}

impl std::fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMetric { component, metric } => {
                write!(f, "component '{component}' is missing metric '{metric}' (contribution defaulted to 0)")
            }
            Self::Uninstrumented { component } => {
                write!(f, "component '{component}' reported no metrics (mass/charge defaulted to 0)")
            }
            Self::DanglingLink { from, to } => {
                write!(f, "link {from} -> {to} references a component absent from the topology (dropped)")
            }
            Self::UnusableFrequency { from, to, frequency } => {
                write!(f, "link {from} -> {to} carries unusable frequency hint {frequency} (dropped)")
            }
            Self::MissingDistance { a, b } => {
                write!(f, "bond {a} <-> {b} has no usable distance (skipped)")
            }
        }
    }
}
