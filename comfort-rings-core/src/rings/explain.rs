//! Human-readable reports for ring assignments

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::format::{format_distance, format_percent};
use crate::types::{Dimension, Ring, RingAssignment};

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Full report: inputs, thresholds, personality, and every ring.
pub fn explain_ring_assignment(assignment: &RingAssignment) -> String {
    let mut lines = vec![
        rule(),
        "FOOD PERSONALITY & COMFORT RING ASSIGNMENT".to_string(),
        rule(),
        String::new(),
        "USER TASTE VECTOR:".to_string(),
    ];

    for dimension in Dimension::ALL {
        lines.push(format!(
            "  {}: {}",
            dimension.label(),
            assignment.user_vector.get(dimension)
        ));
    }
    lines.push(String::new());

    if !assignment.dislikes.is_empty() {
        let dislikes: Vec<&str> = assignment.dislikes.iter().map(String::as_str).collect();
        lines.push(format!("DISLIKES: {}", dislikes.join(", ")));
        lines.push(String::new());
    }

    if !assignment.archetypes.is_empty() {
        lines.push("ARCHETYPES:".to_string());
        let mut names: Vec<&str> = assignment.archetypes.iter().map(|a| a.as_str()).collect();
        names.sort();
        for name in names {
            lines.push(format!("  - {}", name));
        }
        lines.push(String::new());
    }

    let t0 = format_distance(assignment.ring_thresholds.inner());
    let t1 = format_distance(assignment.ring_thresholds.outer());
    lines.push("RING THRESHOLDS:".to_string());
    lines.push(format!("  Ring 0 (Core Comfort): distance <= {}", t0));
    lines.push(format!("  Ring 1 (Safe Stretch): {} < distance <= {}", t0, t1));
    lines.push(format!("  Ring 2 (Experimental): distance > {}", t1));
    lines.push(String::new());

    let p = &assignment.personality;
    lines.push("FOOD PERSONALITY:".to_string());
    lines.push(format!(
        "  Primary: {} (confidence: {})",
        p.primary.name(),
        format_percent(p.primary_confidence)
    ));
    lines.push(format!(
        "  Secondary: {} (confidence: {})",
        p.secondary.name(),
        format_percent(p.secondary_confidence)
    ));
    lines.push(format!("  Explanation: {}", p.explanation));
    lines.push(String::new());

    for ring in Ring::ALL {
        let foods = assignment.ring(ring);
        lines.push(rule());
        lines.push(format!(
            "RING {}: {} ({} foods)",
            ring.index(),
            ring.label(),
            foods.len()
        ));
        lines.push(rule());
        for fd in foods {
            lines.push(format!(
                "  {:<30} distance: {}",
                fd.food_name,
                format_distance(fd.distance)
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Why a single food landed in its ring.
pub fn explain_food_distance(
    food_name: &str,
    assignment: &RingAssignment,
    catalog: &Catalog,
) -> Result<String> {
    let fd = assignment
        .find(food_name)
        .ok_or_else(|| Error::UnknownFood(food_name.to_string()))?;
    let food = catalog
        .get(food_name)
        .ok_or_else(|| Error::UnknownFood(food_name.to_string()))?;

    let mut lines = vec![
        rule(),
        format!("DETAILED EXPLANATION: {}", food_name),
        rule(),
        String::new(),
        format!("Ring: {} ({})", fd.ring.index(), fd.ring.label()),
        format!("Total Distance: {}", format_distance(fd.distance)),
        String::new(),
        "DIMENSION CONTRIBUTIONS:".to_string(),
    ];

    // BTreeMap iteration is already key-sorted
    for (key, contribution) in &fd.contributions {
        lines.push(format!("  {:<35} {:.4}", key, contribution));
    }
    lines.push(String::new());

    lines.push("DIMENSION-BY-DIMENSION COMPARISON:".to_string());
    let user = &assignment.user_vector;
    for dimension in Dimension::ALL {
        let u = user.get(dimension);
        let f = food.get(dimension);
        lines.push(format!(
            "  {:<30} User: {:.1}  Food: {:.1}  Diff: {:.1}",
            dimension.as_str(),
            u,
            f,
            (u - f).abs()
        ));
    }
    lines.push(String::new());

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::assign_to_rings;
    use crate::types::{Archetype, TasteVector};
    use std::collections::BTreeSet;

    fn adventurous() -> (Catalog, RingAssignment) {
        let catalog = Catalog::builtin();
        let user = TasteVector::new(0.8, 0.8, 0.8, 0.5, 0.8);
        let dislikes: BTreeSet<String> = ["Cheeseburger".to_string()].into_iter().collect();
        let archetypes: BTreeSet<Archetype> = [Archetype::FlavorExplorer, Archetype::HeatSeeker]
            .into_iter()
            .collect();
        let assignment = assign_to_rings(&catalog, &user, &dislikes, &archetypes).unwrap();
        (catalog, assignment)
    }

    #[test]
    fn test_ring_report_sections() {
        let (_, assignment) = adventurous();
        let report = explain_ring_assignment(&assignment);

        assert!(report.contains("DISLIKES: Cheeseburger"));
        assert!(report.contains("  - flavor_explorer\n  - heat_seeker"));
        assert!(report.contains("RING THRESHOLDS:"));
        assert!(report.contains("Primary: Adventurous Eater"));
        assert!(report.contains("RING 2: Far Edge / Experimental"));
        assert_eq!(report.matches(" distance: ").count(), 18);
    }

    #[test]
    fn test_food_report_lists_contributions() {
        let (catalog, assignment) = adventurous();
        let report = explain_food_distance("Cheeseburger", &assignment, &catalog).unwrap();

        assert!(report.contains("DETAILED EXPLANATION: Cheeseburger"));
        assert!(report.contains("Ring: 2"));
        assert!(report.contains("dislike_penalty"));
        assert!(report.contains("heat_seeker_reduction"));
        assert!(report.contains("spice_intensity_damping"));
        assert!(report.contains("User: 0.8  Food: 0.2  Diff: 0.6"));
    }

    #[test]
    fn test_food_report_unknown_food() {
        let (catalog, assignment) = adventurous();
        let err = explain_food_distance("Lutefisk", &assignment, &catalog).unwrap_err();
        assert!(matches!(err, Error::UnknownFood(name) if name == "Lutefisk"));
    }
}
