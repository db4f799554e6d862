//! Hive temperature T — average event processing rate per component.

use chrono::{DateTime, Utc};

/// Interpretation bands for the measured temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HivePhase {
    Hibernation,
    Stable,
    Overheated,
    Meltdown,
}

impl HivePhase {
    pub fn classify(temperature: f64) -> Self {
        if temperature < 10.0 {
            Self::Hibernation
        } else if temperature < 100.0 {
            Self::Stable
        } else if temperature < 1000.0 {
            Self::Overheated
        } else {
            Self::Meltdown
        }
    }
}

/// T = (events per second over the observed span) / component count.
///
/// The span is the interval between the earliest and latest timestamps,
/// clamped to at least one second so a burst of same-instant events still
/// yields a finite rate. Empty input or zero components yields `0.0`.
pub fn temperature(event_times: &[DateTime<Utc>], component_count: usize) -> f64 {
    if event_times.is_empty() || component_count == 0 {
        return 0.0;
    }

    let (earliest, latest) = match (event_times.iter().min(), event_times.iter().max()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return 0.0,
    };
    let span_seconds = ((latest - earliest).num_milliseconds() as f64 / 1000.0).max(1.0);

    let events_per_second = event_times.len() as f64 / span_seconds;
    events_per_second / component_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(temperature(&[], 4), 0.0);
        let t = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(temperature(&[t], 0), 0.0);
    }

    #[test]
    fn test_rate_per_component() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let times: Vec<_> = (0..10).map(|s| base + chrono::Duration::seconds(s)).collect();
        // 10 events over 9 seconds across 2 components.
        let t = temperature(&times, 2);
        assert!((t - 10.0 / 9.0 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_instant_burst_clamps_span() {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let times = vec![base; 100];
        // Span clamps to 1s: 100 events/s over 10 components.
        assert_eq!(temperature(&times, 10), 10.0);
    }

    #[test]
    fn test_phase_bands() {
        assert_eq!(HivePhase::classify(0.0), HivePhase::Hibernation);
        assert_eq!(HivePhase::classify(50.0), HivePhase::Stable);
        assert_eq!(HivePhase::classify(500.0), HivePhase::Overheated);
        assert_eq!(HivePhase::classify(5000.0), HivePhase::Meltdown);
    }
}
