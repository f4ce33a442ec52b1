//! Taste distance with tolerance damping and archetype adjustments
//!
//! The adjusted distance starts from per-dimension squared differences and
//! applies, in order:
//!
//! 1. Asymmetric damping on the directional dimensions
//! 2. The dislike penalty
//! 3. Archetype adjustments (texture avoider, heat seeker, refined minimalist)
//!
//! Every adjustment is recorded in the contribution map so a result can be
//! explained after the fact.

use crate::types::{Archetype, Dimension, TasteVector};
use std::collections::{BTreeMap, BTreeSet};

/// Share of a directional squared difference kept when the food is on the
/// safe side of the user's tolerance.
pub const DAMPING_FACTOR: f64 = 0.05;

/// Flat penalty added to every dimension of a disliked food.
pub const DISLIKE_PENALTY: f64 = 1.5;

/// Texture avoider: extra share of the original texture mismatch.
pub const TEXTURE_AVOIDER_WEIGHT: f64 = 0.5;

/// Heat seeker: share of the original spice mismatch forgiven.
pub const HEAT_SEEKER_RELIEF: f64 = 0.3;

/// Refined minimalist: flat penalty on high-richness foods.
pub const RICHNESS_PENALTY: f64 = 0.4;

/// Richness at or above which the refined minimalist penalty applies.
pub const HIGH_RICHNESS: f64 = 0.8;

/// Contribution key for the total dislike penalty.
pub const DISLIKE_PENALTY_KEY: &str = "dislike_penalty";
/// Contribution key for the texture avoider penalty.
pub const TEXTURE_AVOIDER_KEY: &str = "texture_avoider_penalty";
/// Contribution key for the (negative) heat seeker reduction.
pub const HEAT_SEEKER_KEY: &str = "heat_seeker_reduction";
/// Contribution key for the refined minimalist richness penalty.
pub const REFINED_MINIMALIST_KEY: &str = "refined_minimalist_penalty";

/// Adjusted distance for one food plus its explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedDistance {
    /// Square root of the summed adjusted dimensions, always `>= 0`
    pub distance: f64,
    /// Raw squared difference per dimension, then one signed entry per
    /// adjustment that applied
    pub contributions: BTreeMap<String, f64>,
}

/// Plain Euclidean distance between two taste vectors.
///
/// This is the undamped baseline: non-negative, `d(x, x) = 0`, symmetric,
/// and satisfies the triangle inequality.
pub fn euclidean_distance(a: &TasteVector, b: &TasteVector) -> f64 {
    a.values()
        .iter()
        .zip(b.values().iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Contribution key recording the damping removed from a dimension.
pub fn damping_key(dimension: Dimension) -> String {
    format!("{}_damping", dimension.as_str())
}

/// Distance between a user and one food with every adjustment applied.
pub fn compute_distance(
    user: &TasteVector,
    food: &TasteVector,
    food_name: &str,
    dislikes: &BTreeSet<String>,
    archetypes: &BTreeSet<Archetype>,
) -> AdjustedDistance {
    let original: [f64; 5] = Dimension::ALL.map(|d| (user.get(d) - food.get(d)).powi(2));
    let mut adjusted = original;
    let mut contributions: BTreeMap<String, f64> = Dimension::ALL
        .iter()
        .zip(original.iter())
        .map(|(d, diff)| (d.as_str().to_string(), *diff))
        .collect();

    // Tolerance floors: a milder, more familiar, or less exotic food than the
    // user accepts keeps only a sliver of its mismatch.
    for dimension in Dimension::ALL {
        let i = dimension.index();
        if dimension.is_directional() && food.get(dimension) < user.get(dimension) {
            adjusted[i] = original[i] * DAMPING_FACTOR;
            contributions.insert(damping_key(dimension), adjusted[i] - original[i]);
        }
    }

    if dislikes.contains(food_name) {
        for value in adjusted.iter_mut() {
            *value += DISLIKE_PENALTY;
        }
        contributions.insert(
            DISLIKE_PENALTY_KEY.to_string(),
            DISLIKE_PENALTY * adjusted.len() as f64,
        );
    }

    if archetypes.contains(&Archetype::TextureAvoider) {
        let i = Dimension::TextureIntensity.index();
        let penalty = original[i] * TEXTURE_AVOIDER_WEIGHT;
        adjusted[i] += penalty;
        contributions.insert(TEXTURE_AVOIDER_KEY.to_string(), penalty);
    }

    if archetypes.contains(&Archetype::HeatSeeker) {
        let i = Dimension::SpiceIntensity.index();
        let reduction = original[i] * HEAT_SEEKER_RELIEF;
        adjusted[i] = (adjusted[i] - reduction).max(0.0);
        contributions.insert(HEAT_SEEKER_KEY.to_string(), -reduction);
    }

    if archetypes.contains(&Archetype::RefinedMinimalist) && food.richness >= HIGH_RICHNESS {
        let i = Dimension::Richness.index();
        adjusted[i] += RICHNESS_PENALTY;
        contributions.insert(REFINED_MINIMALIST_KEY.to_string(), RICHNESS_PENALTY);
    }

    let distance = adjusted.iter().map(|v| v.max(0.0)).sum::<f64>().sqrt();

    AdjustedDistance {
        distance,
        contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn none() -> (BTreeSet<String>, BTreeSet<Archetype>) {
        (BTreeSet::new(), BTreeSet::new())
    }

    fn archetypes(list: &[Archetype]) -> BTreeSet<Archetype> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_metric_properties() {
        let a = TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2);
        let b = TasteVector::new(0.8, 0.5, 0.8, 0.5, 0.8);
        let c = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5);

        let d_ab = euclidean_distance(&a, &b);
        assert!(d_ab >= 0.0);
        assert_eq!(euclidean_distance(&a, &a), 0.0);
        assert!((d_ab - euclidean_distance(&b, &a)).abs() < EPS);
        assert!(euclidean_distance(&a, &c) <= d_ab + euclidean_distance(&b, &c) + EPS);
    }

    #[test]
    fn test_asymmetric_damping_example() {
        let user = TasteVector::new(0.8, 0.5, 0.5, 0.5, 0.8);
        let food = TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2);
        let (dislikes, arch) = none();

        let result = compute_distance(&user, &food, "Cheeseburger", &dislikes, &arch);

        // 0.36 * 0.05 + 0 + 0.09 * 0.05 + 0.09 + 0.36 * 0.05
        let expected = (0.018_f64 + 0.0045 + 0.09 + 0.018).sqrt();
        assert!((result.distance - expected).abs() < EPS);
        assert!(result.distance < euclidean_distance(&user, &food) / 2.0);

        let spice = result.contributions["spice_intensity_damping"];
        assert!((spice + 0.342).abs() < EPS);
        assert!(result.contributions.contains_key("preparation_familiarity_damping"));
        assert!(result.contributions.contains_key("psychological_distance_damping"));
        assert!(!result.contributions.contains_key("richness_damping"));
    }

    #[test]
    fn test_no_damping_when_food_exceeds_user() {
        let user = TasteVector::new(0.2, 0.5, 0.2, 0.5, 0.2);
        let food = TasteVector::new(0.8, 0.5, 0.8, 0.5, 0.8);
        let (dislikes, arch) = none();

        let result = compute_distance(&user, &food, "Kimchi stew", &dislikes, &arch);

        assert!((result.distance - euclidean_distance(&user, &food)).abs() < EPS);
        assert!(result.contributions.keys().all(|k| !k.ends_with("_damping")));
    }

    #[test]
    fn test_identical_vectors_have_zero_distance() {
        let v = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5);
        let (dislikes, arch) = none();
        let result = compute_distance(&v, &v, "Tacos al pastor", &dislikes, &arch);
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn test_dislike_penalty_applies_to_every_dimension() {
        let v = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5);
        let dislikes: BTreeSet<String> = ["Tacos al pastor".to_string()].into_iter().collect();
        let arch = BTreeSet::new();

        let result = compute_distance(&v, &v, "Tacos al pastor", &dislikes, &arch);

        assert!((result.distance - 7.5_f64.sqrt()).abs() < EPS);
        assert_eq!(result.contributions[DISLIKE_PENALTY_KEY], 7.5);
    }

    #[test]
    fn test_texture_avoider_uses_original_difference() {
        let user = TasteVector::new(0.5, 0.2, 0.5, 0.5, 0.5);
        let food = TasteVector::new(0.5, 0.8, 0.5, 0.5, 0.5);
        let dislikes = BTreeSet::new();

        let result = compute_distance(
            &user,
            &food,
            "Fufu",
            &dislikes,
            &archetypes(&[Archetype::TextureAvoider]),
        );

        assert!((result.contributions[TEXTURE_AVOIDER_KEY] - 0.18).abs() < EPS);
        assert!((result.distance - 0.54_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_heat_seeker_reduction_is_floored() {
        // Food milder than the user: spice is damped to 0.018, relief of
        // 0.108 would go negative and is floored at zero.
        let user = TasteVector::new(0.8, 0.5, 0.5, 0.5, 0.5);
        let food = TasteVector::new(0.2, 0.5, 0.5, 0.5, 0.5);
        let dislikes = BTreeSet::new();

        let result = compute_distance(
            &user,
            &food,
            "Mild",
            &dislikes,
            &archetypes(&[Archetype::HeatSeeker]),
        );

        assert_eq!(result.distance, 0.0);
        assert!((result.contributions[HEAT_SEEKER_KEY] + 0.108).abs() < EPS);
    }

    #[test]
    fn test_heat_seeker_softens_hotter_food() {
        let user = TasteVector::new(0.2, 0.5, 0.5, 0.5, 0.5);
        let food = TasteVector::new(0.8, 0.5, 0.5, 0.5, 0.5);
        let dislikes = BTreeSet::new();

        let result = compute_distance(
            &user,
            &food,
            "Hot",
            &dislikes,
            &archetypes(&[Archetype::HeatSeeker]),
        );

        assert!((result.distance - (0.36_f64 * 0.7).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_refined_minimalist_only_penalizes_rich_food() {
        let user = TasteVector::new(0.5, 0.5, 0.5, 0.8, 0.5);
        let rich = TasteVector::new(0.5, 0.5, 0.5, 0.8, 0.5);
        let lean = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5);
        let dislikes = BTreeSet::new();
        let arch = archetypes(&[Archetype::RefinedMinimalist]);

        let rich_result = compute_distance(&user, &rich, "Rich", &dislikes, &arch);
        assert!((rich_result.distance - 0.4_f64.sqrt()).abs() < EPS);
        assert_eq!(rich_result.contributions[REFINED_MINIMALIST_KEY], 0.4);

        let lean_result = compute_distance(&user, &lean, "Lean", &dislikes, &arch);
        assert!(!lean_result.contributions.contains_key(REFINED_MINIMALIST_KEY));
    }

    #[test]
    fn test_archetypes_combine_additively() {
        let user = TasteVector::new(0.2, 0.2, 0.5, 0.5, 0.5);
        let food = TasteVector::new(0.8, 0.8, 0.5, 0.8, 0.5);
        let dislikes = BTreeSet::new();
        let arch = archetypes(&[
            Archetype::TextureAvoider,
            Archetype::HeatSeeker,
            Archetype::RefinedMinimalist,
        ]);

        let result = compute_distance(&user, &food, "Everything", &dislikes, &arch);

        // spice 0.36 - 0.108, texture 0.36 + 0.18, richness 0.09 + 0.4
        let expected = (0.252_f64 + 0.54 + 0.49).sqrt();
        assert!((result.distance - expected).abs() < EPS);
        assert_eq!(result.contributions.len(), 5 + 3);
    }
}
