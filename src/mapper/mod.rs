//! # Quantity Mapper
//!
//! Converts raw metrics + topology feeds into the physical model: a mass
//! and charge per component, a distance per link. This is the only place
//! where operational signals become physical quantities; everything
//! downstream consumes the resulting `PhysicalSnapshot` unchanged.
//!
//! Single-data-point defects (a missing metric, a dangling link) are
//! recovered with documented defaults and reported as `DataQualityWarning`s.
//! Structural defects (a disallowed self-link) fail the whole build.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{Bond, BondKey, Component, ComponentId, PhysicalSnapshot, PrimitiveKind};
use crate::source::{MetricsFeed, TopologyFeed};
use crate::{DataQualityWarning, Error, Result};

/// How raw readings become physical quantities.
///
/// Loaded once at startup (typically from JSON alongside the constants)
/// and passed by reference into every build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Weighted combination producing mass. Metric → weight; metrics a
    /// component does not report contribute zero.
    pub mass_weights: HashMap<String, f64>,

    /// Weighted combination producing charge. The **sign of the weight**
    /// is the polarity convention: a positive weight makes the metric pull
    /// toward attracting dependents, a negative weight toward repelling
    /// them. Polarity is configuration, never hard-coded per metric name.
    pub charge_weights: HashMap<String, f64>,

    /// Identifier-suffix → primitive kind, checked in order against the
    /// lowercased identifier. Components matching nothing default to
    /// `Aggregate`.
    pub kind_rules: Vec<(String, PrimitiveKind)>,

    /// Permit a component to declare a link to itself.
    pub allow_self_links: bool,

    /// Lower bound on bond distance, so inverse-square formulas never see
    /// zero.
    pub min_distance: f64,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            mass_weights: [("commands_handled_rate".to_owned(), 1.0)].into_iter().collect(),
            charge_weights: [
                ("stability_score".to_owned(), 1.0),
                ("deploy_churn".to_owned(), -1.0),
            ]
            .into_iter()
            .collect(),
            kind_rules: vec![
                ("-aggregate".to_owned(), PrimitiveKind::Aggregate),
                ("-transformation".to_owned(), PrimitiveKind::Transformation),
                ("-connector".to_owned(), PrimitiveKind::Connector),
                ("-event".to_owned(), PrimitiveKind::Event),
                ("-command".to_owned(), PrimitiveKind::Command),
                ("-query".to_owned(), PrimitiveKind::Query),
                ("-saga".to_owned(), PrimitiveKind::Saga),
            ],
            allow_self_links: false,
            min_distance: 1e-6,
        }
    }
}

impl MapperConfig {
    /// Parse a JSON configuration, e.g.
    /// `{"mass_weights": {"memory_mb": 0.5}, "allow_self_links": true}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    fn kind_for(&self, id: &str) -> PrimitiveKind {
        let lowered = id.to_ascii_lowercase();
        self.kind_rules
            .iter()
            .find(|(suffix, _)| lowered.ends_with(suffix.as_str()))
            .map(|(_, kind)| *kind)
            .unwrap_or(PrimitiveKind::Aggregate)
    }
}

/// A mapped snapshot plus the data-quality warnings hit while building it.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub snapshot: PhysicalSnapshot,
    pub warnings: Vec<DataQualityWarning>,
}

/// Build the physical model for one analysis run.
///
/// Every component present in the topology appears in the snapshot, even
/// with zero metrics — structure matters even absent measured activity.
/// Links to components missing from the topology are dropped with a
/// warning; duplicate declarations of the same pair collapse to the
/// tighter (higher-frequency) link.
pub fn build_snapshot(
    metrics: &MetricsFeed,
    topology: &TopologyFeed,
    config: &MapperConfig,
) -> Result<SnapshotReport> {
    let mut warnings = Vec::new();

    // Deterministic build order regardless of feed hashing.
    let mut ids: Vec<&String> = topology.keys().collect();
    ids.sort();

    let mut components = Vec::with_capacity(ids.len());
    for id in &ids {
        let readings = metrics.get(id.as_str());
        if readings.is_none() && !(config.mass_weights.is_empty() && config.charge_weights.is_empty()) {
            record(&mut warnings, DataQualityWarning::Uninstrumented { component: (*id).clone() });
        }

        let mass = weighted_sum(id, readings, &config.mass_weights, readings.is_some(), &mut warnings)
            .max(0.0);
        let charge = weighted_sum(id, readings, &config.charge_weights, readings.is_some(), &mut warnings);

        components.push(
            Component::new(id.as_str(), config.kind_for(id))
                .with_mass(mass)
                .with_charge(charge),
        );
    }

    // Collapse declared links into canonical bonds.
    let mut frequencies: HashMap<BondKey, f64> = HashMap::new();
    for from in &ids {
        for hint in &topology[*from] {
            if hint.to == **from && !config.allow_self_links {
                return Err(Error::MalformedTopology(format!(
                    "component '{from}' declares a link to itself",
                )));
            }
            if !topology.contains_key(&hint.to) {
                record(&mut warnings, DataQualityWarning::DanglingLink {
                    from: (*from).clone(),
                    to: hint.to.clone(),
                });
                continue;
            }
            if !(hint.frequency > 0.0) || !hint.frequency.is_finite() {
                record(&mut warnings, DataQualityWarning::UnusableFrequency {
                    from: (*from).clone(),
                    to: hint.to.clone(),
                    frequency: hint.frequency,
                });
                continue;
            }

            let key = BondKey::canonical(
                ComponentId::from(from.as_str()),
                ComponentId::from(hint.to.as_str()),
            );
            let entry = frequencies.entry(key).or_insert(hint.frequency);
            if hint.frequency > *entry {
                *entry = hint.frequency;
            }
        }
    }

    let mut keyed: Vec<(BondKey, f64)> = frequencies.into_iter().collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));

    let bonds = keyed
        .into_iter()
        .map(|(BondKey(a, b), frequency)| {
            // Higher frequency ⇒ shorter distance, floored at epsilon.
            let distance = (1.0 / frequency).max(config.min_distance);
            Bond { a, b, distance, force: None }
        })
        .collect();

    let snapshot = PhysicalSnapshot::new(components, bonds)?;
    debug!(
        components = snapshot.component_count(),
        bonds = snapshot.bond_count(),
        warnings = warnings.len(),
        "mapped physical snapshot",
    );

    Ok(SnapshotReport { snapshot, warnings })
}

/// Σ weight · reading, missing readings contributing zero. Per-metric
/// warnings only fire for components that reported *some* metrics; fully
/// uninstrumented components get the single `Uninstrumented` warning.
fn weighted_sum(
    component: &str,
    readings: Option<&HashMap<String, f64>>,
    weights: &HashMap<String, f64>,
    warn_missing: bool,
    warnings: &mut Vec<DataQualityWarning>,
) -> f64 {
    let mut sum = 0.0;
    for (metric, weight) in weights {
        match readings.and_then(|r| r.get(metric)) {
            Some(value) => sum += weight * value,
            None if warn_missing => {
                record(warnings, DataQualityWarning::MissingMetric {
                    component: component.to_owned(),
                    metric: metric.clone(),
                });
            }
            None => {}
        }
    }
    sum
}

fn record(warnings: &mut Vec<DataQualityWarning>, warning: DataQualityWarning) {
    warn!(%warning, "data quality");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_rules_match_suffix() {
        let config = MapperConfig::default();
        assert_eq!(config.kind_for("billing-saga"), PrimitiveKind::Saga);
        assert_eq!(config.kind_for("REST-Connector"), PrimitiveKind::Connector);
        assert_eq!(config.kind_for("mystery-service"), PrimitiveKind::Aggregate);
    }

    #[test]
    fn test_config_from_json() {
        let config = MapperConfig::from_json(r#"{"allow_self_links": true}"#).unwrap();
        assert!(config.allow_self_links);
        assert_eq!(config.min_distance, 1e-6);
    }
}
