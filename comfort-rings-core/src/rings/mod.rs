//! Comfort ring engine
//!
//! A pure, deterministic pipeline over a read-only catalog:
//!
//! - [`distance`]: adjusted user-to-food distance with a contribution breakdown
//! - [`thresholds`]: percentile cutoffs over the full distance distribution
//! - [`assign`]: partitioning into three ordered rings
//! - [`personality`]: food personality labels from the vector, archetypes and rings
//! - [`explain`]: text reports over a finished assignment
//!
//! No state is shared between calls, so independent requests can run on any
//! number of threads against the same [`crate::Catalog`].

pub mod assign;
pub mod distance;
pub mod explain;
pub mod personality;
pub mod thresholds;

pub use assign::{assign_to_rings, partition, Partition};
pub use distance::{compute_distance, euclidean_distance, AdjustedDistance};
pub use explain::{explain_food_distance, explain_ring_assignment};
pub use personality::{determine_personality, Personality, PersonalityProfile};
pub use thresholds::compute_ring_thresholds;
