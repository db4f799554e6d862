//! Growth rate Λ — components created/removed per day.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::model::GrowthEvent;
use crate::{Error, Result};

/// Measure the component growth rate over the trailing window.
///
/// The window ends at `now` when supplied, otherwise at the latest event
/// timestamp; it spans `window_days` back from there, inclusive at both
/// ends. Signed deltas inside the window are summed and divided by the
/// window length, giving components per day.
///
/// An empty restricted window yields exactly `0.0`. The result is
/// bit-for-bit reproducible for the same inputs — no randomness and no
/// wall-clock reads.
pub fn growth_rate(
    events: &[GrowthEvent],
    window_days: f64,
    now: Option<DateTime<Utc>>,
) -> Result<f64> {
    if !(window_days > 0.0) || !window_days.is_finite() {
        return Err(Error::InvalidWindow(format!(
            "window_days must be a positive finite number of days, got {window_days}",
        )));
    }

    let end = match now.or_else(|| events.iter().map(|e| e.at).max()) {
        Some(end) => end,
        // No anchor and no events: nothing grew in the window.
        None => return Ok(0.0),
    };
    let start = end - Duration::milliseconds((window_days * 86_400_000.0) as i64);

    let total: i64 = events
        .iter()
        .filter(|e| e.at >= start && e.at <= end)
        .map(|e| e.delta)
        .sum();

    let rate = total as f64 / window_days;
    debug!(total, window_days, rate, "measured growth rate");
    Ok(rate)
}
