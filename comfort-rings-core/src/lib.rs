//! # comfort-rings-core
//!
//! Core library for comfort-rings - a food personality and comfort ring engine.
//!
//! This library provides:
//! - Domain types for taste vectors, archetypes and rings
//! - The built-in food registry and catalog validation
//! - Distance, threshold, partition and personality computations
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Pipeline
//!
//! Each request runs the same deterministic steps:
//! - **Distance:** adjusted distance from the user to every catalog food
//! - **Thresholds:** two cut points from the distance distribution, shifted by archetypes
//! - **Rings:** every food lands in exactly one of three rings
//! - **Personality:** primary and secondary labels with confidences
//!
//! ## Example
//!
//! ```rust,no_run
//! use comfort_rings_core::{assign_to_rings, Catalog, TasteVector};
//! use std::collections::BTreeSet;
//!
//! let catalog = Catalog::builtin();
//! let user = TasteVector::new(0.2, 0.5, 0.2, 0.8, 0.2);
//!
//! let assignment = assign_to_rings(&catalog, &user, &BTreeSet::new(), &BTreeSet::new())
//!     .expect("valid user vector");
//! println!("{}", assignment.personality.primary);
//! ```

// Re-export commonly used items at the crate root
pub use api::{AssignRequest, AssignResponse};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use rings::{assign_to_rings, PersonalityProfile};
pub use types::*;

// Public modules
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod rings;
pub mod types;
