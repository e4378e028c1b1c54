//! Domain models for requirements documentation.
//!
//! This module contains the records rendered into the documentation
//! (non-functional requirements, use cases and their scenarios), the
//! identifier and anchor helpers used to cross-reference them, and
//! configuration.

mod catalogue;
pub use catalogue::{Catalogue, CatalogueError};

mod config;
pub use config::Config;

/// Displayed identifiers (`FR4.2`, `NFR11`, `UC3`) and FR cross-references.
pub mod identifier;
pub use identifier::{format_id, FrRef, Identifier, InvalidKindError, Kind};

mod requirement;
pub use requirement::{sorted_by_category, NonFunctionalRequirement};

mod anchor;
pub use anchor::{scenario_slug, slug};

/// Use cases and their scenarios.
pub mod use_case;
pub use use_case::{Scenario, ScenarioCategory, UseCase};
