//! In-memory data source.
//!
//! This is the reference implementation of `DataSource`. It holds the three
//! feeds in RwLock-protected maps so a test harness (or an embedding
//! application) can assemble them incrementally, then hands out clones on
//! fetch.
//!
//! Use this adapter for:
//! - Testing the mapper, predictors, and simulator end to end
//! - Embedding the engine in applications that already hold their own
//!   operational data

use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::GrowthEvent;
use crate::Result;
use super::{DataSource, LinkHint, MetricsFeed, TopologyFeed};

/// In-memory feeds, cheap to clone and share.
#[derive(Clone, Default)]
pub struct StaticSource {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    metrics: RwLock<MetricsFeed>,
    topology: RwLock<TopologyFeed>,
    history: RwLock<Vec<GrowthEvent>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one metric reading for a component.
    pub fn set_metric(&self, component: &str, metric: &str, value: f64) {
        self.inner
            .metrics
            .write()
            .entry(component.to_owned())
            .or_insert_with(HashMap::new)
            .insert(metric.to_owned(), value);
    }

    /// Declare a component with no links (it may gain links later).
    pub fn declare(&self, component: &str) {
        self.inner
            .topology
            .write()
            .entry(component.to_owned())
            .or_default();
    }

    /// Declare a link with its frequency hint. Both endpoints are entered
    /// into the topology so the link is never dangling.
    pub fn link(&self, from: &str, to: &str, frequency: f64) {
        let mut topology = self.inner.topology.write();
        topology
            .entry(from.to_owned())
            .or_default()
            .push(LinkHint::new(to, frequency));
        topology.entry(to.to_owned()).or_default();
    }

    /// Declare a link without entering its target — for exercising the
    /// dangling-link warning path.
    pub fn link_dangling(&self, from: &str, to: &str, frequency: f64) {
        self.inner
            .topology
            .write()
            .entry(from.to_owned())
            .or_default()
            .push(LinkHint::new(to, frequency));
    }

    /// Append a growth event to the history feed.
    pub fn push_event(&self, event: GrowthEvent) {
        self.inner.history.write().push(event);
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch_metrics(&self) -> Result<MetricsFeed> {
        Ok(self.inner.metrics.read().clone())
    }

    async fn fetch_topology(&self) -> Result<TopologyFeed> {
        Ok(self.inner.topology.read().clone())
    }

    async fn fetch_history(&self) -> Result<Vec<GrowthEvent>> {
        let mut history = self.inner.history.read().clone();
        history.sort_by_key(|e| e.at);
        Ok(history)
    }
}
