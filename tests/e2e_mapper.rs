//! End-to-end tests for the quantity mapper.
//!
//! Exercises the metrics/topology → PhysicalSnapshot conversion: mass and
//! charge weighting, distance derivation, kind tagging, and every
//! data-quality recovery path.

use hive_physics::{
    build_snapshot, DataQualityWarning, Error, MapperConfig, MetricsFeed, PrimitiveKind,
    StaticSource, TopologyFeed,
};

// ============================================================================
// Helper: assemble feeds through StaticSource (the reference adapter).
// ============================================================================

async fn feeds(source: &StaticSource) -> (MetricsFeed, TopologyFeed) {
    use hive_physics::DataSource;
    let metrics = source.fetch_metrics().await.unwrap();
    let topology = source.fetch_topology().await.unwrap();
    (metrics, topology)
}

// ============================================================================
// 1. Mass and charge are configured weighted combinations
// ============================================================================

#[tokio::test]
async fn test_mass_and_charge_weighting() {
    let source = StaticSource::new();
    source.set_metric("order-aggregate", "commands_handled_rate", 10.0);
    source.set_metric("order-aggregate", "stability_score", 2.0);
    source.set_metric("order-aggregate", "deploy_churn", 0.5);
    source.link("order-aggregate", "billing-saga", 1.0);
    source.set_metric("billing-saga", "commands_handled_rate", 4.0);
    source.set_metric("billing-saga", "stability_score", 1.0);
    source.set_metric("billing-saga", "deploy_churn", 3.0);

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    let order = report.snapshot.component(&"order-aggregate".into()).unwrap();
    assert_eq!(order.mass, 10.0);
    // stability 2.0 * +1 + churn 0.5 * -1
    assert_eq!(order.charge, 1.5);
    assert_eq!(order.kind, PrimitiveKind::Aggregate);

    let saga = report.snapshot.component(&"billing-saga".into()).unwrap();
    assert_eq!(saga.mass, 4.0);
    assert_eq!(saga.charge, -2.0);
    assert_eq!(saga.kind, PrimitiveKind::Saga);

    assert!(report.warnings.is_empty(), "fully instrumented feeds should warn about nothing");
}

// ============================================================================
// 2. Zero-metrics component still appears (structure matters)
// ============================================================================

#[tokio::test]
async fn test_uninstrumented_component_defaults_to_zero() {
    let source = StaticSource::new();
    source.set_metric("a", "commands_handled_rate", 1.0);
    source.link("a", "dark-matter", 1.0);

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    let dark = report.snapshot.component(&"dark-matter".into()).unwrap();
    assert_eq!(dark.mass, 0.0);
    assert_eq!(dark.charge, 0.0);
    assert_eq!(report.snapshot.bond_count(), 1, "the link to it must survive");

    assert!(
        report.warnings.iter().any(|w| matches!(
            w,
            DataQualityWarning::Uninstrumented { component } if component == "dark-matter",
        )),
        "expected an uninstrumented warning, got: {:?}",
        report.warnings,
    );
}

// ============================================================================
// 3. Partially-instrumented component warns per missing metric
// ============================================================================

#[tokio::test]
async fn test_missing_metric_contributes_zero() {
    let source = StaticSource::new();
    source.set_metric("half", "stability_score", 2.0);
    source.declare("half");

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    let half = report.snapshot.component(&"half".into()).unwrap();
    assert_eq!(half.mass, 0.0);
    assert_eq!(half.charge, 2.0);
    assert!(report.warnings.iter().any(|w| matches!(
        w,
        DataQualityWarning::MissingMetric { metric, .. } if metric == "commands_handled_rate",
    )));
}

// ============================================================================
// 4. Distance is inverse frequency, floored at epsilon
// ============================================================================

#[tokio::test]
async fn test_distance_inverse_frequency_with_floor() {
    let source = StaticSource::new();
    source.link("a", "b", 2.0);
    source.link("a", "c", 1e12);

    let (metrics, topology) = feeds(&source).await;
    let config = MapperConfig::default();
    let report = build_snapshot(&metrics, &topology, &config).unwrap();

    let by_pair = |x: &str, y: &str| {
        report
            .snapshot
            .bonds()
            .iter()
            .find(|b| b.key() == hive_physics::BondKey::canonical(x.into(), y.into()))
            .map(|b| b.distance)
            .unwrap()
    };

    assert_eq!(by_pair("a", "b"), 0.5);
    assert_eq!(by_pair("a", "c"), config.min_distance, "huge frequency floors at epsilon");
}

// ============================================================================
// 5. Dangling links drop with a warning, never fail the build
// ============================================================================

#[tokio::test]
async fn test_dangling_link_dropped_and_warned() {
    let source = StaticSource::new();
    source.declare("a");
    source.link_dangling("a", "ghost-service", 3.0);

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    assert_eq!(report.snapshot.component_count(), 1);
    assert_eq!(report.snapshot.bond_count(), 0);
    assert!(report.warnings.iter().any(|w| matches!(
        w,
        DataQualityWarning::DanglingLink { to, .. } if to == "ghost-service",
    )));
}

// ============================================================================
// 6. Self-links are structural errors unless configured in
// ============================================================================

#[tokio::test]
async fn test_self_link_rejected_by_default() {
    let source = StaticSource::new();
    source.link("a", "a", 1.0);

    let (metrics, topology) = feeds(&source).await;
    let err = build_snapshot(&metrics, &topology, &MapperConfig::default());
    assert!(matches!(err, Err(Error::MalformedTopology(_))));

    let permissive = MapperConfig { allow_self_links: true, ..MapperConfig::default() };
    let report = build_snapshot(&metrics, &topology, &permissive).unwrap();
    assert_eq!(report.snapshot.bond_count(), 1);
}

// ============================================================================
// 7. Reverse and duplicate declarations collapse to the tighter bond
// ============================================================================

#[tokio::test]
async fn test_duplicate_links_collapse_to_highest_frequency() {
    let source = StaticSource::new();
    source.link("a", "b", 2.0);
    source.link("b", "a", 8.0);

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    assert_eq!(report.snapshot.bond_count(), 1);
    assert_eq!(report.snapshot.bonds()[0].distance, 1.0 / 8.0);
}

// ============================================================================
// 8. Unusable frequency hints drop with a warning
// ============================================================================

#[tokio::test]
async fn test_unusable_frequency_dropped() {
    let source = StaticSource::new();
    source.link("a", "b", 0.0);
    source.link("a", "c", f64::NAN);

    let (metrics, topology) = feeds(&source).await;
    let report = build_snapshot(&metrics, &topology, &MapperConfig::default()).unwrap();

    assert_eq!(report.snapshot.bond_count(), 0);
    let unusable = report
        .warnings
        .iter()
        .filter(|w| matches!(w, DataQualityWarning::UnusableFrequency { .. }))
        .count();
    assert_eq!(unusable, 2);
}
