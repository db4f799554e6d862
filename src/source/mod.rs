//! # Data Source Contract
//!
//! This is THE contract between the physics core and any backend that can
//! describe a running architecture. The core never talks to a metrics
//! server, an orchestrator, or a version-control system directly — it
//! consumes the three fully-materialized feeds an adapter produces.
//!
//! ## Implementations
//!
//! | Adapter | Module | Description |
//! |---------|--------|-------------|
//! | `StaticSource` | `static_source` | In-memory feeds for testing/embedding |
//!
//! Production adapters (metrics backends, cluster inventories, repository
//! history walkers) live outside this crate and implement the same trait.

pub mod static_source;

use async_trait::async_trait;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::model::GrowthEvent;
use crate::Result;

pub use static_source::StaticSource;

/// Per-component named metric readings, keyed by the naming convention the
/// instrumented application exposes.
pub type MetricsFeed = HashMap<String, HashMap<String, f64>>;

/// A declared link with its observed call-frequency hint
/// (higher frequency ⇒ tighter coupling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkHint {
    pub to: String,
    pub frequency: f64,
}

impl LinkHint {
    pub fn new(to: impl Into<String>, frequency: f64) -> Self {
        Self { to: to.into(), frequency }
    }
}

/// Declared links per component identifier.
pub type TopologyFeed = HashMap<String, Vec<LinkHint>>;

/// Capability interface over the three feeds the core depends on.
///
/// Adapters own all I/O, concurrency, timeouts, and retry policy; each
/// fetch returns a fully-materialized value with no partial results. The
/// core only ever reads.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Per-component scalar metric readings.
    async fn fetch_metrics(&self) -> Result<MetricsFeed>;

    /// The component graph with frequency hints on each declared link.
    async fn fetch_topology(&self) -> Result<TopologyFeed>;

    /// Historical component creation/removal events, ordered by timestamp.
    async fn fetch_history(&self) -> Result<Vec<GrowthEvent>>;
}
