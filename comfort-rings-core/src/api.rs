//! Request and response payloads
//!
//! [`AssignRequest`] is the JSON shape a front end submits; validating it
//! against a [`Catalog`] yields the typed inputs of
//! [`crate::rings::assign_to_rings`]. [`AssignResponse`] joins the engine's
//! output with registry metadata for display.

use crate::catalog::{food_metadata, Catalog};
use crate::error::{Error, Result};
use crate::rings::PersonalityProfile;
use crate::types::{Archetype, FoodDistance, Ring, RingAssignment, RingThresholds, TasteVector};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Incoming ring assignment request.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignRequest {
    pub spice_intensity: f64,
    pub texture_intensity: f64,
    pub preparation_familiarity: f64,
    pub richness: f64,
    pub psychological_distance: f64,
    #[serde(default)]
    pub dislikes: Option<Vec<String>>,
    #[serde(default)]
    pub archetypes: Option<Vec<String>>,
}

/// Engine inputs that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub user_vector: TasteVector,
    pub dislikes: BTreeSet<String>,
    pub archetypes: BTreeSet<Archetype>,
}

impl AssignRequest {
    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn user_vector(&self) -> TasteVector {
        TasteVector::new(
            self.spice_intensity,
            self.texture_intensity,
            self.preparation_familiarity,
            self.richness,
            self.psychological_distance,
        )
    }

    /// Check dimension values, dislike names and archetype names.
    pub fn validate(&self, catalog: &Catalog) -> Result<ValidatedRequest> {
        let user_vector = self.user_vector();
        user_vector.validate()?;

        let dislikes = validate_dislikes(catalog, self.dislikes.iter().flatten())?;
        let archetypes = parse_archetypes(self.archetypes.iter().flatten())?;

        Ok(ValidatedRequest {
            user_vector,
            dislikes,
            archetypes,
        })
    }
}

/// Ensure every dislike names a catalog food.
pub fn validate_dislikes<'a, I>(catalog: &Catalog, names: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .map(|name| {
            if catalog.contains(name) {
                Ok(name.clone())
            } else {
                Err(Error::UnknownFood(name.clone()))
            }
        })
        .collect()
}

/// Parse archetype names into a set.
pub fn parse_archetypes<'a, I>(names: I) -> Result<BTreeSet<Archetype>>
where
    I: IntoIterator<Item = &'a String>,
{
    names.into_iter().map(|name| name.parse()).collect()
}

// ============================================
// Response
// ============================================

/// A ring entry joined with its display metadata.
///
/// Foods outside the built-in registry keep their id as display name and
/// carry no other metadata.
#[derive(Debug, Clone, Serialize)]
pub struct RingedFood {
    pub food_name: String,
    pub display_name: String,
    pub distance: f64,
    pub ring: Ring,
    pub dimension_contributions: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl From<&FoodDistance> for RingedFood {
    fn from(fd: &FoodDistance) -> Self {
        let meta = food_metadata(&fd.food_name).ok();
        Self {
            food_name: fd.food_name.clone(),
            display_name: meta
                .map(|m| m.display_name.to_string())
                .unwrap_or_else(|| fd.food_name.clone()),
            distance: fd.distance,
            ring: fd.ring,
            dimension_contributions: fd.contributions.clone(),
            image_url: meta.map(|m| m.image_url.to_string()),
            description: meta.map(|m| m.description.to_string()),
            origin: meta.map(|m| m.origin.to_string()),
            region: meta.map(|m| m.region.to_string()),
        }
    }
}

/// Outgoing ring assignment response.
#[derive(Debug, Clone, Serialize)]
pub struct AssignResponse {
    pub ring_0: Vec<RingedFood>,
    pub ring_1: Vec<RingedFood>,
    pub ring_2: Vec<RingedFood>,
    pub personality: PersonalityProfile,
    pub ring_thresholds: RingThresholds,
}

impl From<&RingAssignment> for AssignResponse {
    fn from(assignment: &RingAssignment) -> Self {
        let join = |foods: &[FoodDistance]| foods.iter().map(RingedFood::from).collect();
        Self {
            ring_0: join(&assignment.ring_0),
            ring_1: join(&assignment.ring_1),
            ring_2: join(&assignment.ring_2),
            personality: assignment.personality.clone(),
            ring_thresholds: assignment.ring_thresholds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::assign_to_rings;

    #[test]
    fn test_parse_minimal_request() {
        let request = AssignRequest::from_json(
            r#"{
                "spice_intensity": 0.2,
                "texture_intensity": 0.5,
                "preparation_familiarity": 0.2,
                "richness": 0.8,
                "psychological_distance": 0.2
            }"#,
        )
        .unwrap();

        let validated = request.validate(&Catalog::builtin()).unwrap();
        assert!(validated.dislikes.is_empty());
        assert!(validated.archetypes.is_empty());
        assert_eq!(validated.user_vector.richness, 0.8);
    }

    #[test]
    fn test_null_lists_are_empty() {
        let request = AssignRequest::from_json(
            r#"{"spice_intensity": 0.5, "texture_intensity": 0.5,
                "preparation_familiarity": 0.5, "richness": 0.5,
                "psychological_distance": 0.5, "dislikes": null, "archetypes": null}"#,
        )
        .unwrap();
        assert!(request.validate(&Catalog::builtin()).is_ok());
    }

    #[test]
    fn test_rejects_unknown_names() {
        let catalog = Catalog::builtin();
        let mut request = AssignRequest {
            spice_intensity: 0.5,
            texture_intensity: 0.5,
            preparation_familiarity: 0.5,
            richness: 0.5,
            psychological_distance: 0.5,
            dislikes: Some(vec!["Sushi".to_string(), "Lutefisk".to_string()]),
            archetypes: None,
        };
        assert!(matches!(
            request.validate(&catalog),
            Err(Error::UnknownFood(name)) if name == "Lutefisk"
        ));

        request.dislikes = Some(vec!["Sushi".to_string()]);
        request.archetypes = Some(vec!["heat_seeker".to_string(), "snacker".to_string()]);
        assert!(matches!(
            request.validate(&catalog),
            Err(Error::UnknownArchetype(name)) if name == "snacker"
        ));
    }

    #[test]
    fn test_rejects_off_grid_dimension() {
        let request = AssignRequest {
            spice_intensity: 0.5,
            texture_intensity: 0.5,
            preparation_familiarity: 0.5,
            richness: 0.6,
            psychological_distance: 0.5,
            dislikes: None,
            archetypes: None,
        };
        assert!(matches!(
            request.validate(&Catalog::builtin()),
            Err(Error::InvalidVectorValue { dimension, .. }) if dimension == "richness"
        ));
    }

    #[test]
    fn test_response_joins_metadata() {
        let catalog = Catalog::builtin();
        let user = TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2);
        let assignment =
            assign_to_rings(&catalog, &user, &BTreeSet::new(), &BTreeSet::new()).unwrap();

        let response = AssignResponse::from(&assignment);
        let json = serde_json::to_value(&response).unwrap();

        let first = &json["ring_0"][0];
        assert_eq!(first["ring"], 0);
        assert!(first["image_url"].as_str().unwrap().starts_with("https://"));
        assert!(json["ring_thresholds"].as_array().unwrap().len() == 2);
        assert!(json["personality"]["primary_personality"].is_string());
    }

    #[test]
    fn test_response_without_registry_metadata() {
        let catalog = Catalog::from_entries([("Toast", TasteVector::new(0.2, 0.2, 0.2, 0.2, 0.2))]);
        let user = TasteVector::new(0.2, 0.2, 0.2, 0.2, 0.2);
        let assignment =
            assign_to_rings(&catalog, &user, &BTreeSet::new(), &BTreeSet::new()).unwrap();

        let json = serde_json::to_value(AssignResponse::from(&assignment)).unwrap();
        let toast = &json["ring_0"][0];
        assert_eq!(toast["display_name"], "Toast");
        assert!(toast.get("image_url").is_none());
    }
}
