//! Food personality classification
//!
//! Scores a fixed table of personality patterns against the user's taste
//! vector, archetypes and ring sizes, then reports the top two.

use crate::format::describe_level;
use crate::types::{Archetype, FoodDistance, TasteVector};
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Food personality labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    /// Low preparation familiarity and low psychological distance
    ComfortSeeker,
    /// High spice
    SpiceLover,
    /// High texture
    TextureExplorer,
    /// High psychological distance
    AdventurousEater,
    /// Low richness, restrained overall
    Minimalist,
    /// Every dimension moderate
    BalancedEater,
    /// High richness
    RichFoodLover,
    /// Low preparation familiarity
    FamiliarFirst,
    /// Open on both preparation and psychological distance
    GlobalPalate,
}

impl Personality {
    /// Get the display name for this personality.
    pub fn name(&self) -> &'static str {
        match self {
            Personality::ComfortSeeker => "Comfort Seeker",
            Personality::SpiceLover => "Spice Lover",
            Personality::TextureExplorer => "Texture Explorer",
            Personality::AdventurousEater => "Adventurous Eater",
            Personality::Minimalist => "Minimalist",
            Personality::BalancedEater => "Balanced Eater",
            Personality::RichFoodLover => "Rich Food Lover",
            Personality::FamiliarFirst => "Familiar First",
            Personality::GlobalPalate => "Global Palate",
        }
    }

    /// Reasons citing the user's own values, one per line of explanation.
    fn rationale(&self, vec: &TasteVector, counts: &RingCounts) -> Vec<String> {
        let spice = describe_level(vec.spice_intensity);
        let texture = describe_level(vec.texture_intensity);
        let prep = describe_level(vec.preparation_familiarity);
        let richness = describe_level(vec.richness);
        let psych = describe_level(vec.psychological_distance);

        match self {
            Personality::ComfortSeeker => vec![
                format!("Your preparation familiarity preference is {}", prep),
                format!("Your psychological distance tolerance is {}", psych),
                format!("Ring 0 contains {} foods (comfort zone)", counts.core),
            ],
            Personality::SpiceLover => {
                vec![format!("Your spice intensity preference is {}", spice)]
            }
            Personality::TextureExplorer => {
                vec![format!("Your texture intensity preference is {}", texture)]
            }
            Personality::AdventurousEater => vec![
                format!("Your psychological distance tolerance is {}", psych),
                format!("Ring 2 contains {} foods (experimental zone)", counts.far),
            ],
            Personality::Minimalist => vec![
                format!("Your richness preference is {}", richness),
                format!("Overall taste vector sum is {:.2} (restrained)", vec.sum()),
            ],
            Personality::BalancedEater => {
                vec!["All dimensions fall in moderate range [0.4-0.6]".to_string()]
            }
            Personality::RichFoodLover => {
                vec![format!("Your richness preference is {}", richness)]
            }
            Personality::FamiliarFirst => vec![format!(
                "Your preparation familiarity preference is {}, you prefer familiar dishes",
                prep
            )],
            Personality::GlobalPalate => vec![
                format!("Your preparation familiarity is {}", prep),
                format!("Your psychological distance tolerance is {}", psych),
            ],
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Personality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Primary and secondary personality with confidences in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityProfile {
    #[serde(rename = "primary_personality")]
    pub primary: Personality,
    #[serde(rename = "secondary_personality")]
    pub secondary: Personality,
    #[serde(rename = "confidence_primary")]
    pub primary_confidence: f64,
    #[serde(rename = "confidence_secondary")]
    pub secondary_confidence: f64,
    pub explanation: String,
}

// ============================================
// Pattern table
// ============================================

#[derive(Debug, Clone, Copy)]
struct RingCounts {
    core: usize,
    far: usize,
}

/// When a bonus applies.
#[derive(Debug, Clone, Copy)]
enum Condition {
    Has(Archetype),
    Lacks(Archetype),
    /// |ring 0| > |ring 2|
    CoreOutnumbersFar,
    /// |ring 2| > |ring 0|
    FarOutnumbersCore,
}

impl Condition {
    fn holds(&self, archetypes: &BTreeSet<Archetype>, counts: &RingCounts) -> bool {
        match self {
            Condition::Has(a) => archetypes.contains(a),
            Condition::Lacks(a) => !archetypes.contains(a),
            Condition::CoreOutnumbersFar => counts.core > counts.far,
            Condition::FarOutnumbersCore => counts.far > counts.core,
        }
    }
}

struct Pattern {
    personality: Personality,
    matches: fn(&TasteVector) -> bool,
    bonuses: &'static [(Condition, f64)],
}

const PATTERNS: [Pattern; 9] = [
    Pattern {
        personality: Personality::ComfortSeeker,
        matches: |v| v.preparation_familiarity <= 0.2 && v.psychological_distance <= 0.2,
        bonuses: &[
            (Condition::Has(Archetype::ComfortMaximalist), 0.3),
            (Condition::CoreOutnumbersFar, 0.2),
        ],
    },
    Pattern {
        personality: Personality::SpiceLover,
        matches: |v| v.spice_intensity >= 0.8,
        bonuses: &[(Condition::Has(Archetype::HeatSeeker), 0.3)],
    },
    Pattern {
        personality: Personality::TextureExplorer,
        matches: |v| v.texture_intensity >= 0.8,
        bonuses: &[(Condition::Lacks(Archetype::TextureAvoider), 0.2)],
    },
    Pattern {
        personality: Personality::AdventurousEater,
        matches: |v| v.psychological_distance >= 0.8,
        bonuses: &[
            (Condition::Has(Archetype::FlavorExplorer), 0.3),
            (Condition::FarOutnumbersCore, 0.2),
        ],
    },
    Pattern {
        personality: Personality::Minimalist,
        matches: |v| v.richness <= 0.2 && v.sum() < 2.0,
        bonuses: &[(Condition::Has(Archetype::RefinedMinimalist), 0.3)],
    },
    Pattern {
        personality: Personality::BalancedEater,
        matches: |v| v.values().iter().all(|x| (0.4..=0.6).contains(x)),
        bonuses: &[],
    },
    Pattern {
        personality: Personality::RichFoodLover,
        matches: |v| v.richness >= 0.8,
        bonuses: &[],
    },
    Pattern {
        personality: Personality::FamiliarFirst,
        matches: |v| v.preparation_familiarity <= 0.2,
        bonuses: &[],
    },
    Pattern {
        personality: Personality::GlobalPalate,
        matches: |v| v.preparation_familiarity >= 0.5 && v.psychological_distance >= 0.5,
        bonuses: &[],
    },
];

/// Score every pattern: 1.0 for a match, plus any bonuses that hold.
fn score_patterns(
    vec: &TasteVector,
    archetypes: &BTreeSet<Archetype>,
    counts: &RingCounts,
) -> Vec<(Personality, f64)> {
    PATTERNS
        .iter()
        .map(|pattern| {
            let base = if (pattern.matches)(vec) { 1.0 } else { 0.0 };
            let bonus: f64 = pattern
                .bonuses
                .iter()
                .filter(|(condition, _)| condition.holds(archetypes, counts))
                .map(|(_, amount)| amount)
                .sum();
            (pattern.personality, base + bonus)
        })
        .collect()
}

/// Determine the primary and secondary food personality.
pub fn determine_personality(
    vec: &TasteVector,
    archetypes: &BTreeSet<Archetype>,
    ring_0: &[FoodDistance],
    _ring_1: &[FoodDistance],
    ring_2: &[FoodDistance],
) -> PersonalityProfile {
    let counts = RingCounts {
        core: ring_0.len(),
        far: ring_2.len(),
    };

    let mut scores = score_patterns(vec, archetypes, &counts);
    // Score descending, then name ascending
    scores.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.name().cmp(b.0.name())));

    let total: f64 = scores.iter().map(|(_, s)| s).sum();
    let confidence = |score: f64| {
        if total > 0.0 {
            (score / total).min(1.0)
        } else {
            0.0
        }
    };

    let (primary, primary_score) = scores[0];
    let (secondary, secondary_score) = scores[1];

    let mut reasons = primary.rationale(vec, &counts);
    reasons.extend(archetypes.iter().map(|a| format!("Archetype: {}", a)));

    PersonalityProfile {
        primary,
        secondary,
        primary_confidence: confidence(primary_score),
        secondary_confidence: confidence(secondary_score),
        explanation: reasons.join(" | "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ring;

    fn foods(n: usize) -> Vec<FoodDistance> {
        (0..n)
            .map(|i| FoodDistance {
                food_name: format!("food-{}", i),
                distance: i as f64,
                ring: Ring::CoreComfort,
                contributions: Default::default(),
            })
            .collect()
    }

    fn archetypes(list: &[Archetype]) -> BTreeSet<Archetype> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_comfort_seeker_classification() {
        let vec = TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2);
        let profile = determine_personality(
            &vec,
            &archetypes(&[Archetype::ComfortMaximalist]),
            &foods(8),
            &foods(5),
            &foods(5),
        );

        // Comfort Seeker 1.5, Familiar First and Rich Food Lover 1.0,
        // Texture Explorer 0.2 from the missing texture_avoider
        assert_eq!(profile.primary, Personality::ComfortSeeker);
        assert_eq!(profile.secondary, Personality::FamiliarFirst);
        assert!((profile.primary_confidence - 1.5 / 3.7).abs() < 1e-9);
        assert!((profile.secondary_confidence - 1.0 / 3.7).abs() < 1e-9);
        assert!(profile.explanation.contains("Ring 0 contains 8 foods"));
        assert!(profile.explanation.ends_with("Archetype: comfort_maximalist"));
    }

    #[test]
    fn test_adventurous_eater_with_explorer_bonus() {
        let vec = TasteVector::new(0.8, 0.8, 0.8, 0.5, 0.8);
        let profile = determine_personality(
            &vec,
            &archetypes(&[Archetype::FlavorExplorer, Archetype::HeatSeeker]),
            &foods(4),
            &foods(6),
            &foods(8),
        );

        // Adventurous 1.5, Spice Lover 1.3, Texture Explorer 1.2, Global Palate 1.0
        assert_eq!(profile.primary, Personality::AdventurousEater);
        assert_eq!(profile.secondary, Personality::SpiceLover);
        assert_eq!(
            profile.explanation,
            "Your psychological distance tolerance is 0.8 (high) | \
             Ring 2 contains 8 foods (experimental zone) | \
             Archetype: heat_seeker | Archetype: flavor_explorer"
        );
    }

    #[test]
    fn test_balanced_eater() {
        let vec = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5);
        let profile = determine_personality(
            &vec,
            &archetypes(&[Archetype::TextureAvoider]),
            &foods(6),
            &foods(6),
            &foods(6),
        );

        // Balanced Eater and Global Palate tie at 1.0; name order decides
        assert_eq!(profile.primary, Personality::BalancedEater);
        assert_eq!(profile.secondary, Personality::GlobalPalate);
        assert!((profile.primary_confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_single_match_takes_full_confidence() {
        let vec = TasteVector::new(0.5, 0.5, 0.2, 0.5, 0.5);
        let profile = determine_personality(
            &vec,
            &archetypes(&[Archetype::TextureAvoider]),
            &foods(6),
            &foods(6),
            &foods(6),
        );

        assert_eq!(profile.primary, Personality::FamiliarFirst);
        assert_eq!(profile.primary_confidence, 1.0);
        assert_eq!(profile.secondary_confidence, 0.0);
        assert_eq!(
            profile.explanation,
            "Your preparation familiarity preference is 0.2 (low), you prefer familiar dishes \
             | Archetype: texture_avoider"
        );
    }

    #[test]
    fn test_all_zero_ties_break_by_name() {
        let vec = TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.2);
        let profile = determine_personality(
            &vec,
            &archetypes(&[Archetype::TextureAvoider]),
            &foods(6),
            &foods(6),
            &foods(6),
        );

        assert_eq!(profile.primary, Personality::AdventurousEater);
        assert_eq!(profile.secondary, Personality::BalancedEater);
        assert_eq!(profile.primary_confidence, 0.0);
        assert_eq!(profile.secondary_confidence, 0.0);
        assert_eq!(
            profile.explanation,
            "Your psychological distance tolerance is 0.2 (low) | \
             Ring 2 contains 6 foods (experimental zone) | \
             Archetype: texture_avoider"
        );
    }

    #[test]
    fn test_personality_display() {
        assert_eq!(Personality::GlobalPalate.to_string(), "Global Palate");
        let json = serde_json::to_string(&Personality::RichFoodLover).unwrap();
        assert_eq!(json, "\"Rich Food Lover\"");
    }
}
