//! Core domain types for comfort-rings
//!
//! Users and foods share one encoding: a [`TasteVector`] of five named
//! dimensions, each restricted to one of three discrete levels.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Taste vector** | 5-dimensional discrete preference/profile encoding |
//! | **Ring** | Distance bucket: 0 = core comfort, 2 = experimental |
//! | **Archetype** | Named behavioral modifier altering penalties or thresholds |
//! | **Damping** | Reduction applied when a tolerance dimension is on the safe side |
//! | **Personality** | Descriptive label derived from dimensions, archetypes and rings |

use crate::error::{Error, Result};
use crate::rings::personality::PersonalityProfile;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// The only values a taste dimension may take.
pub const VALID_VALUES: [f64; 3] = [0.2, 0.5, 0.8];

// ============================================
// Dimensions
// ============================================

/// One of the five taste dimensions, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    SpiceIntensity,
    TextureIntensity,
    PreparationFamiliarity,
    Richness,
    PsychologicalDistance,
}

impl Dimension {
    /// All dimensions in vector order.
    pub const ALL: [Dimension; 5] = [
        Dimension::SpiceIntensity,
        Dimension::TextureIntensity,
        Dimension::PreparationFamiliarity,
        Dimension::Richness,
        Dimension::PsychologicalDistance,
    ];

    /// Position within a taste vector.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::SpiceIntensity => "spice_intensity",
            Dimension::TextureIntensity => "texture_intensity",
            Dimension::PreparationFamiliarity => "preparation_familiarity",
            Dimension::Richness => "richness",
            Dimension::PsychologicalDistance => "psychological_distance",
        }
    }

    /// Human-friendly label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::SpiceIntensity => "Spice Intensity",
            Dimension::TextureIntensity => "Texture Intensity",
            Dimension::PreparationFamiliarity => "Preparation Familiarity",
            Dimension::Richness => "Richness",
            Dimension::PsychologicalDistance => "Psychological Distance",
        }
    }

    /// Directional dimensions encode a tolerance, not a symmetric preference.
    ///
    /// A food sitting below the user's value on one of these is damped rather
    /// than penalized in full.
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            Dimension::SpiceIntensity
                | Dimension::PreparationFamiliarity
                | Dimension::PsychologicalDistance
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named discrete level, accepted wherever a dimension value is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Mid,
    High,
}

impl Level {
    pub fn value(&self) -> f64 {
        match self {
            Level::Low => 0.2,
            Level::Mid => 0.5,
            Level::High => 0.8,
        }
    }

    /// Map a valid dimension value back to its level.
    pub fn from_value(value: f64) -> Option<Level> {
        [Level::Low, Level::Mid, Level::High]
            .into_iter()
            .find(|level| level.value() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Mid => "mid",
            Level::High => "high",
        }
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "0.2" => Ok(Level::Low),
            "mid" | "medium" | "0.5" => Ok(Level::Mid),
            "high" | "0.8" => Ok(Level::High),
            other => Err(format!(
                "invalid level '{}': use low/mid/high or 0.2/0.5/0.8",
                other
            )),
        }
    }
}

// ============================================
// Taste Vector
// ============================================

/// A 5-dimensional taste profile shared by users and foods.
///
/// Fields hold raw values so that unvalidated input can be represented and
/// rejected by [`TasteVector::validate`] instead of being silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TasteVector {
    pub spice_intensity: f64,
    pub texture_intensity: f64,
    pub preparation_familiarity: f64,
    pub richness: f64,
    pub psychological_distance: f64,
}

impl TasteVector {
    pub const fn new(
        spice_intensity: f64,
        texture_intensity: f64,
        preparation_familiarity: f64,
        richness: f64,
        psychological_distance: f64,
    ) -> Self {
        Self {
            spice_intensity,
            texture_intensity,
            preparation_familiarity,
            richness,
            psychological_distance,
        }
    }

    pub fn from_levels(levels: [Level; 5]) -> Self {
        Self::new(
            levels[0].value(),
            levels[1].value(),
            levels[2].value(),
            levels[3].value(),
            levels[4].value(),
        )
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::SpiceIntensity => self.spice_intensity,
            Dimension::TextureIntensity => self.texture_intensity,
            Dimension::PreparationFamiliarity => self.preparation_familiarity,
            Dimension::Richness => self.richness,
            Dimension::PsychologicalDistance => self.psychological_distance,
        }
    }

    /// Values in [`Dimension::ALL`] order.
    pub fn values(&self) -> [f64; 5] {
        Dimension::ALL.map(|d| self.get(d))
    }

    pub fn sum(&self) -> f64 {
        self.values().iter().sum()
    }

    /// Ensure every dimension is one of [`VALID_VALUES`].
    pub fn validate(&self) -> Result<()> {
        for dimension in Dimension::ALL {
            let value = self.get(dimension);
            if !VALID_VALUES.contains(&value) {
                return Err(Error::InvalidVectorValue {
                    dimension: dimension.as_str().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

// ============================================
// Archetypes
// ============================================

/// Behavioral modifiers a user may hold in any combination.
///
/// The derived ordering is the declaration order, which keeps
/// `BTreeSet<Archetype>` iteration (and therefore explanations) stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Penalizes texture mismatches
    TextureAvoider,
    /// Softens spice mismatches
    HeatSeeker,
    /// Shrinks the core comfort ring
    ComfortMaximalist,
    /// Widens the safe stretch ring
    FlavorExplorer,
    /// Penalizes rich foods
    RefinedMinimalist,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::TextureAvoider,
        Archetype::HeatSeeker,
        Archetype::ComfortMaximalist,
        Archetype::FlavorExplorer,
        Archetype::RefinedMinimalist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::TextureAvoider => "texture_avoider",
            Archetype::HeatSeeker => "heat_seeker",
            Archetype::ComfortMaximalist => "comfort_maximalist",
            Archetype::FlavorExplorer => "flavor_explorer",
            Archetype::RefinedMinimalist => "refined_minimalist",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Archetype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Archetype::ALL
            .into_iter()
            .find(|a| a.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownArchetype(s.to_string()))
    }
}

// ============================================
// Rings
// ============================================

/// Comfort ring, ordered from closest to farthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ring {
    /// Ring 0
    CoreComfort,
    /// Ring 1
    SafeStretch,
    /// Ring 2
    Experimental,
}

impl Ring {
    pub const ALL: [Ring; 3] = [Ring::CoreComfort, Ring::SafeStretch, Ring::Experimental];

    pub fn index(&self) -> u8 {
        match self {
            Ring::CoreComfort => 0,
            Ring::SafeStretch => 1,
            Ring::Experimental => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ring::CoreComfort => "Core Comfort",
            Ring::SafeStretch => "Adjacent / Safe Stretch",
            Ring::Experimental => "Far Edge / Experimental",
        }
    }
}

impl Serialize for Ring {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

/// Distance cutoffs `(t0, t1)` separating the three rings, with `t0 < t1`.
///
/// Serializes as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingThresholds(pub f64, pub f64);

impl RingThresholds {
    /// Upper bound (inclusive) of ring 0.
    pub fn inner(&self) -> f64 {
        self.0
    }

    /// Upper bound (inclusive) of ring 1.
    pub fn outer(&self) -> f64 {
        self.1
    }

    /// Bucket a distance: `<= t0` is ring 0, `<= t1` is ring 1, else ring 2.
    pub fn ring_for(&self, distance: f64) -> Ring {
        if distance <= self.0 {
            Ring::CoreComfort
        } else if distance <= self.1 {
            Ring::SafeStretch
        } else {
            Ring::Experimental
        }
    }
}

// ============================================
// Results
// ============================================

/// Per-food result of the distance computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodDistance {
    pub food_name: String,
    /// Adjusted distance, always `>= 0`
    pub distance: f64,
    pub ring: Ring,
    /// Named contributions; keys depend on which adjustments applied
    #[serde(rename = "dimension_contributions")]
    pub contributions: BTreeMap<String, f64>,
}

/// Complete output of a ring assignment.
#[derive(Debug, Clone, Serialize)]
pub struct RingAssignment {
    pub user_vector: TasteVector,
    pub dislikes: BTreeSet<String>,
    pub archetypes: BTreeSet<Archetype>,
    /// Core comfort, sorted by (distance, name)
    pub ring_0: Vec<FoodDistance>,
    /// Safe stretch, sorted by (distance, name)
    pub ring_1: Vec<FoodDistance>,
    /// Experimental, sorted by (distance, name)
    pub ring_2: Vec<FoodDistance>,
    pub ring_thresholds: RingThresholds,
    pub personality: PersonalityProfile,
}

impl RingAssignment {
    /// Foods of a single ring.
    pub fn ring(&self, ring: Ring) -> &[FoodDistance] {
        match ring {
            Ring::CoreComfort => &self.ring_0,
            Ring::SafeStretch => &self.ring_1,
            Ring::Experimental => &self.ring_2,
        }
    }

    /// Every food, ring 0 first.
    pub fn all_foods(&self) -> impl Iterator<Item = &FoodDistance> {
        self.ring_0
            .iter()
            .chain(self.ring_1.iter())
            .chain(self.ring_2.iter())
    }

    pub fn find(&self, food_name: &str) -> Option<&FoodDistance> {
        self.all_foods().find(|fd| fd.food_name == food_name)
    }
}
