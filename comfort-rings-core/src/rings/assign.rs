//! Ring assignment
//!
//! Ties the pipeline together: per-food distances, thresholds over the full
//! distribution, partitioning into three rings, then personality.

use super::distance::compute_distance;
use super::personality::determine_personality;
use super::thresholds::compute_ring_thresholds;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::{Archetype, FoodDistance, Ring, RingAssignment, RingThresholds, TasteVector};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Foods bucketed into rings, each sorted by `(distance, name)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub ring_0: Vec<FoodDistance>,
    pub ring_1: Vec<FoodDistance>,
    pub ring_2: Vec<FoodDistance>,
}

/// Total order used inside every ring: distance ascending, then name.
pub fn by_distance_then_name(a: &FoodDistance, b: &FoodDistance) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.food_name.cmp(&b.food_name))
}

/// Bucket every food by the thresholds and sort each ring.
///
/// Each input appears in exactly one ring; its `ring` field is overwritten
/// to match.
pub fn partition(foods: Vec<FoodDistance>, thresholds: RingThresholds) -> Partition {
    let mut result = Partition::default();

    for mut fd in foods {
        fd.ring = thresholds.ring_for(fd.distance);
        match fd.ring {
            Ring::CoreComfort => result.ring_0.push(fd),
            Ring::SafeStretch => result.ring_1.push(fd),
            Ring::Experimental => result.ring_2.push(fd),
        }
    }

    result.ring_0.sort_by(by_distance_then_name);
    result.ring_1.sort_by(by_distance_then_name);
    result.ring_2.sort_by(by_distance_then_name);
    result
}

/// Assign every catalog food to a comfort ring for this user.
///
/// The user vector must hold only the discrete levels; anything else is
/// rejected with [`crate::Error::InvalidVectorValue`]. Dislikes naming foods
/// outside the catalog simply never match.
pub fn assign_to_rings(
    catalog: &Catalog,
    user: &TasteVector,
    dislikes: &BTreeSet<String>,
    archetypes: &BTreeSet<Archetype>,
) -> Result<RingAssignment> {
    if let Err(e) = user.validate() {
        tracing::warn!(error = %e, "rejecting user vector");
        return Err(e);
    }

    let foods: Vec<FoodDistance> = catalog
        .iter()
        .map(|entry| {
            let adjusted = compute_distance(user, &entry.taste, &entry.name, dislikes, archetypes);
            tracing::trace!(
                food = %entry.name,
                distance = adjusted.distance,
                "computed food distance"
            );
            FoodDistance {
                food_name: entry.name.clone(),
                distance: adjusted.distance,
                // Provisional; partition() sets the real ring.
                ring: Ring::CoreComfort,
                contributions: adjusted.contributions,
            }
        })
        .collect();

    let distances: Vec<f64> = foods.iter().map(|fd| fd.distance).collect();
    let thresholds = compute_ring_thresholds(&distances, archetypes);

    let Partition {
        ring_0,
        ring_1,
        ring_2,
    } = partition(foods, thresholds);

    tracing::debug!(
        t0 = thresholds.inner(),
        t1 = thresholds.outer(),
        ring_0 = ring_0.len(),
        ring_1 = ring_1.len(),
        ring_2 = ring_2.len(),
        "assigned foods to rings"
    );

    let personality = determine_personality(user, archetypes, &ring_0, &ring_1, &ring_2);

    Ok(RingAssignment {
        user_vector: *user,
        dislikes: dislikes.clone(),
        archetypes: archetypes.clone(),
        ring_0,
        ring_1,
        ring_2,
        ring_thresholds: thresholds,
        personality,
    })
}
