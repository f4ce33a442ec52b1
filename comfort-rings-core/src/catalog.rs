//! Food catalog and registry
//!
//! The registry is the single source of truth for the 18 built-in foods:
//! their taste vectors plus the display metadata a front end shows next to
//! ring results. The ring engine only ever sees the [`Catalog`] projection
//! (food id to taste vector); metadata is joined back in by the caller.

use crate::error::{Error, Result};
use crate::types::{Dimension, TasteVector, VALID_VALUES};
use serde::Serialize;

/// Number of foods the built-in registry must contain.
pub const EXPECTED_FOOD_COUNT: usize = 18;

/// Complete food profile with semantic and display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodProfile {
    /// Stable identifier, also the catalog key
    pub food_id: &'static str,
    pub display_name: &'static str,
    #[serde(rename = "taste_profile")]
    pub taste: TasteVector,
    pub description: &'static str,
    pub origin: &'static str,
    pub region: &'static str,
    pub image_url: &'static str,
}

/// The built-in registry, in display order.
pub static FOOD_REGISTRY: &[FoodProfile] = &[
    FoodProfile {
        food_id: "Cheeseburger",
        display_name: "Cheeseburger",
        taste: TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2),
        description: "A classic American comfort food featuring a beef patty, melted cheese, and condiments on a toasted bun. The quintessential fast-food icon that has become a global symbol of American dining culture.",
        origin: "United States",
        region: "Multiple claims (Louis' Lunch, CT or Lionel Sternberger, CA)",
        image_url: "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Pepperoni pizza",
        display_name: "Pepperoni Pizza",
        taste: TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2),
        description: "A beloved Italian-American creation featuring a yeasted flatbread topped with tomato sauce, mozzarella cheese, and spicy pepperoni slices. The most popular pizza variety in the United States.",
        origin: "Italy/United States",
        region: "Naples (pizza) / New York (pepperoni style)",
        image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Fried chicken",
        display_name: "Fried Chicken",
        taste: TasteVector::new(0.2, 0.8, 0.2, 0.8, 0.2),
        description: "Chicken pieces coated in seasoned flour or batter and deep-fried until crispy and golden. A comfort food staple with roots in Southern American cuisine, beloved worldwide for its crunchy exterior and juicy interior.",
        origin: "United States",
        region: "Southern United States",
        image_url: "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Butter chicken",
        display_name: "Butter Chicken",
        taste: TasteVector::new(0.5, 0.5, 0.2, 0.8, 0.2),
        description: "A rich, creamy tomato-based curry with tender chicken pieces marinated in yogurt and spices. Invented in Delhi in the 1950s at Moti Mahal restaurant, it has become one of the most popular Indian dishes worldwide.",
        origin: "India",
        region: "Delhi, North India",
        image_url: "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Pasta with red sauce",
        display_name: "Pasta with Red Sauce",
        taste: TasteVector::new(0.2, 0.2, 0.2, 0.5, 0.2),
        description: "Classic Italian pasta served with a tomato-based sauce, often featuring garlic, basil, and olive oil. A staple of Italian cuisine that has become a comfort food standard across the globe.",
        origin: "Italy",
        region: "Southern Italy (Naples region)",
        image_url: "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Tacos al pastor",
        display_name: "Tacos al Pastor",
        taste: TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5),
        description: "Mexican street tacos featuring marinated pork cooked on a vertical spit, inspired by Lebanese shawarma. Served with pineapple, onions, cilantro, and a corn tortilla, representing the fusion of Middle Eastern and Mexican cuisines.",
        origin: "Mexico",
        region: "Mexico City",
        image_url: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Ethiopian injera with stew",
        display_name: "Ethiopian Injera with Stew",
        taste: TasteVector::new(0.5, 0.8, 0.5, 0.5, 0.5),
        description: "A traditional Ethiopian meal featuring spongy sourdough flatbread (injera) served with spiced stews (wot). The injera acts as both plate and utensil, reflecting Ethiopia's unique communal dining culture.",
        origin: "Ethiopia",
        region: "Ethiopian Highlands",
        image_url: "https://images.unsplash.com/photo-1604329760661-e71dc83f8f26?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Sushi",
        display_name: "Sushi",
        taste: TasteVector::new(0.2, 0.5, 0.5, 0.2, 0.5),
        description: "A Japanese art form combining vinegared rice with fresh seafood, vegetables, and seaweed. Originating as a preservation method in Southeast Asia, it evolved in Japan over centuries into the refined cuisine enjoyed worldwide today.",
        origin: "Japan",
        region: "Tokyo & Osaka",
        image_url: "https://images.unsplash.com/photo-1579871494447-9811cf80d66c?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Pho",
        display_name: "Pho",
        taste: TasteVector::new(0.2, 0.2, 0.5, 0.2, 0.5),
        description: "Vietnam's beloved noodle soup featuring a fragrant beef or chicken broth, rice noodles, and fresh herbs. Developed in the early 20th century in northern Vietnam, it has become the country's most iconic culinary export.",
        origin: "Vietnam",
        region: "Hanoi, Northern Vietnam",
        image_url: "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Falafel wrap",
        display_name: "Falafel Wrap",
        taste: TasteVector::new(0.2, 0.5, 0.5, 0.5, 0.5),
        description: "Deep-fried chickpea or fava bean balls wrapped in pita with vegetables and tahini sauce. A staple of Middle Eastern cuisine with roots tracing back to ancient Egypt, now enjoyed as street food globally.",
        origin: "Middle East",
        region: "Egypt / Levant",
        image_url: "https://images.unsplash.com/photo-1547058881-aa0edd92aab3?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Beef tongue tacos",
        display_name: "Beef Tongue Tacos",
        taste: TasteVector::new(0.2, 0.8, 0.8, 0.5, 0.8),
        description: "Mexican tacos featuring tender, slow-cooked beef tongue (lengua) served in corn tortillas with onions, cilantro, and salsa. A delicacy in Mexican cuisine that challenges Western diners' comfort zones with organ meat.",
        origin: "Mexico",
        region: "Central Mexico",
        image_url: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Lamb curry",
        display_name: "Lamb Curry",
        taste: TasteVector::new(0.8, 0.5, 0.5, 0.8, 0.5),
        description: "A richly spiced South Asian curry featuring tender lamb cooked with aromatic spices, tomatoes, and often yogurt or coconut milk. Popular across India, Pakistan, and Bangladesh with countless regional variations.",
        origin: "India/Pakistan",
        region: "Kashmir & Hyderabad",
        image_url: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Kimchi stew",
        display_name: "Kimchi Stew (Kimchi-jjigae)",
        taste: TasteVector::new(0.8, 0.5, 0.8, 0.5, 0.8),
        description: "A fiery Korean comfort food made with fermented kimchi, pork, tofu, and vegetables in a spicy broth. A staple of Korean home cooking that exemplifies the bold, fermented flavors central to Korean cuisine.",
        origin: "South Korea",
        region: "Korea",
        image_url: "https://images.unsplash.com/photo-1498654896293-37aacf113fd9?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Oxtail stew",
        display_name: "Oxtail Stew",
        taste: TasteVector::new(0.2, 0.8, 0.8, 0.8, 0.8),
        description: "A rich, gelatinous stew made from slow-cooked oxtail (beef tail), vegetables, and aromatics. Popular in Caribbean, Korean, and European cuisines, this dish requires adventurous eaters willing to embrace unconventional cuts.",
        origin: "Multiple (Caribbean/Korea/Europe)",
        region: "Jamaica, Korea, Italy",
        image_url: "https://images.unsplash.com/photo-1547928576-f5208b0488a6?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Steak tartare",
        display_name: "Steak Tartare",
        taste: TasteVector::new(0.2, 0.5, 0.8, 0.5, 0.8),
        description: "A French delicacy of finely chopped or minced raw beef, seasoned with capers, onions, and a raw egg yolk. Named after Tatar horsemen but refined in Parisian bistros, it challenges diners with its completely raw preparation.",
        origin: "France",
        region: "Paris, France",
        image_url: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Escargot",
        display_name: "Escargot",
        taste: TasteVector::new(0.2, 0.8, 0.8, 0.5, 0.8),
        description: "Cooked land snails, typically served in their shells with garlic-parsley butter. A classic French delicacy that epitomizes haute cuisine while challenging diners unfamiliar with gastropods as food.",
        origin: "France",
        region: "Burgundy, France",
        image_url: "https://images.unsplash.com/photo-1599921841143-819065a55cc6?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Haggis",
        display_name: "Haggis",
        taste: TasteVector::new(0.2, 0.8, 0.8, 0.8, 0.8),
        description: "Scotland's national dish made from sheep organs (heart, liver, lungs) mixed with oatmeal, onions, and spices, traditionally encased in a sheep's stomach. A source of fierce national pride and culinary courage.",
        origin: "Scotland",
        region: "Scottish Highlands",
        image_url: "https://images.unsplash.com/photo-1626200419199-391ae4be7a41?w=800&h=600&fit=crop&q=80",
    },
    FoodProfile {
        food_id: "Fufu",
        display_name: "Fufu",
        taste: TasteVector::new(0.2, 0.8, 0.8, 0.5, 0.8),
        description: "A starchy West African staple made by pounding boiled cassava, yams, or plantains into a smooth, dough-like consistency. Served with soups and stews, it represents the foundation of many West African meals.",
        origin: "West Africa",
        region: "Ghana, Nigeria, Cameroon",
        image_url: "https://images.unsplash.com/photo-1569562211093-4ed0d0758f12?w=800&h=600&fit=crop&q=80",
    },
];

/// Look up the full profile for a food id.
pub fn food_metadata(food_id: &str) -> Result<&'static FoodProfile> {
    FOOD_REGISTRY
        .iter()
        .find(|p| p.food_id == food_id)
        .ok_or_else(|| Error::UnknownFood(food_id.to_string()))
}

/// All registered food ids in registry order.
pub fn list_foods() -> Vec<&'static str> {
    FOOD_REGISTRY.iter().map(|p| p.food_id).collect()
}

/// Validate the built-in registry.
///
/// Every problem is collected so a single failure report lists all of them.
pub fn validate_registry() -> Result<()> {
    validate_profiles(FOOD_REGISTRY, EXPECTED_FOOD_COUNT)
}

fn validate_profiles(profiles: &[FoodProfile], expected: usize) -> Result<()> {
    let mut errors = Vec::new();

    if profiles.len() != expected {
        errors.push(format!(
            "expected exactly {} foods, found {}",
            expected,
            profiles.len()
        ));
    }

    for (i, profile) in profiles.iter().enumerate() {
        let id = profile.food_id;

        if id.trim().is_empty() {
            errors.push(format!("entry {}: food_id is empty", i));
        }
        if profiles[..i].iter().any(|p| p.food_id == id) {
            errors.push(format!("food '{}': duplicate food_id", id));
        }

        let required = [
            ("display_name", profile.display_name),
            ("description", profile.description),
            ("origin", profile.origin),
            ("region", profile.region),
            ("image_url", profile.image_url),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(format!("food '{}': {} is empty", id, field));
            }
        }

        if !(profile.image_url.starts_with("http://") || profile.image_url.starts_with("https://"))
        {
            errors.push(format!(
                "food '{}': image_url must be a valid HTTP(S) URL",
                id
            ));
        }

        errors.extend(vector_problems(id, &profile.taste));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::warn!(problems = errors.len(), "food registry validation failed");
        Err(Error::Registry(
            errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}

fn vector_problems(id: &str, taste: &TasteVector) -> Vec<String> {
    Dimension::ALL
        .into_iter()
        .filter(|d| !VALID_VALUES.contains(&taste.get(*d)))
        .map(|d| {
            format!(
                "food '{}': {} has invalid value {} (must be one of {:?})",
                id,
                d,
                taste.get(d),
                VALID_VALUES
            )
        })
        .collect()
}

// ============================================
// Catalog
// ============================================

/// An immutable catalog entry: identity is the name.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodEntry {
    pub name: String,
    pub taste: TasteVector,
}

/// Read-only mapping of food id to taste vector consumed by the ring engine.
///
/// Never mutated after construction, so a single instance can be shared
/// across independent requests.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<FoodEntry>,
}

impl Catalog {
    /// Catalog projection of [`FOOD_REGISTRY`].
    pub fn builtin() -> Self {
        Self::from_entries(
            FOOD_REGISTRY
                .iter()
                .map(|p| (p.food_id.to_string(), p.taste)),
        )
    }

    /// Build a catalog from `(name, vector)` pairs.
    ///
    /// A repeated name replaces the earlier vector and keeps its position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TasteVector)>,
        S: Into<String>,
    {
        let mut catalog = Catalog::default();
        for (name, taste) in entries {
            let name = name.into();
            match catalog.entries.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.taste = taste,
                None => catalog.entries.push(FoodEntry { name, taste }),
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&TasteVector> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.taste)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check every vector against the discrete value set.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<String> = self
            .entries
            .iter()
            .flat_map(|e| vector_problems(&e.name, &e.taste))
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Registry(errors.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_is_valid() {
        validate_registry().expect("built-in registry should validate");
        assert_eq!(FOOD_REGISTRY.len(), EXPECTED_FOOD_COUNT);
    }

    #[test]
    fn test_builtin_catalog_matches_registry() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), EXPECTED_FOOD_COUNT);
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.get("Kimchi stew"),
            Some(&TasteVector::new(0.8, 0.5, 0.8, 0.5, 0.8))
        );
        assert_eq!(list_foods().first(), Some(&"Cheeseburger"));
    }

    #[test]
    fn test_food_metadata_lookup() {
        let profile = food_metadata("Pho").unwrap();
        assert_eq!(profile.origin, "Vietnam");
        assert!(matches!(
            food_metadata("Lutefisk"),
            Err(Error::UnknownFood(_))
        ));
    }

    #[test]
    fn test_validation_collects_all_problems() {
        let broken = [
            FoodProfile {
                food_id: "Toast",
                display_name: "",
                taste: TasteVector::new(0.2, 0.3, 0.2, 0.2, 0.2),
                description: "Bread, heated.",
                origin: "Everywhere",
                region: "Kitchens",
                image_url: "ftp://example.com/toast.png",
            },
            FoodProfile {
                food_id: "Toast",
                display_name: "Toast",
                taste: TasteVector::new(0.2, 0.2, 0.2, 0.2, 0.2),
                description: "Bread, heated again.",
                origin: "Everywhere",
                region: "Kitchens",
                image_url: "https://example.com/toast.png",
            },
        ];

        let err = validate_profiles(&broken, 2).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("display_name is empty"));
        assert!(message.contains("image_url must be a valid HTTP(S) URL"));
        assert!(message.contains("texture_intensity has invalid value 0.3"));
        assert!(message.contains("duplicate food_id"));
        assert!(!message.contains("expected exactly"));
    }

    #[test]
    fn test_from_entries_replaces_duplicates() {
        let catalog = Catalog::from_entries([
            ("Soup", TasteVector::new(0.2, 0.2, 0.2, 0.2, 0.2)),
            ("Bread", TasteVector::new(0.5, 0.5, 0.5, 0.5, 0.5)),
            ("Soup", TasteVector::new(0.8, 0.8, 0.8, 0.8, 0.8)),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().map(|e| e.name.as_str()), Some("Soup"));
        assert_eq!(catalog.get("Soup").map(|v| v.spice_intensity), Some(0.8));
    }
}
