//! Percentile-based ring thresholds

use crate::types::{Archetype, RingThresholds};
use std::collections::BTreeSet;

/// Percentile of the sorted distances that closes ring 0.
pub const INNER_PERCENTILE: f64 = 0.33;

/// Percentile of the sorted distances that closes ring 1.
pub const OUTER_PERCENTILE: f64 = 0.66;

/// Comfort maximalist: ring 0 cutoff multiplier.
pub const COMFORT_MAXIMALIST_SHRINK: f64 = 0.8;

/// Flavor explorer: ring 1 cutoff multiplier.
pub const FLAVOR_EXPLORER_STRETCH: f64 = 1.2;

/// Minimum gap forced between the two cutoffs.
pub const MIN_THRESHOLD_GAP: f64 = 0.01;

/// Derive `(t0, t1)` from the full distance distribution.
///
/// Cutoffs sit at `floor(n * 0.33)` and `floor(n * 0.66)` of the sorted
/// distances (clamped to the last index), are scaled by the comfort
/// maximalist and flavor explorer archetypes, and are then forced apart so
/// that `t0 < t1` always holds. An empty distribution yields `(0.0, 0.01)`.
pub fn compute_ring_thresholds(
    distances: &[f64],
    archetypes: &BTreeSet<Archetype>,
) -> RingThresholds {
    let mut sorted = distances.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut inner = percentile(&sorted, INNER_PERCENTILE);
    let mut outer = percentile(&sorted, OUTER_PERCENTILE);

    if archetypes.contains(&Archetype::ComfortMaximalist) {
        inner *= COMFORT_MAXIMALIST_SHRINK;
    }
    if archetypes.contains(&Archetype::FlavorExplorer) {
        outer *= FLAVOR_EXPLORER_STRETCH;
    }

    if inner >= outer {
        outer = inner + MIN_THRESHOLD_GAP;
    }

    RingThresholds(inner, outer)
}

fn percentile(sorted: &[f64], fraction: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        n => {
            let idx = ((n as f64) * fraction).floor() as usize;
            sorted[idx.min(n - 1)]
        }
    }
}
