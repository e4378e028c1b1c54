//! Requirements documentation rendering
//!
//! Renders non-functional requirements, use cases and test reports into
//! Markdown and HTML fragments for inclusion in a requirements document.

pub mod domain;
pub use domain::{Catalogue, Config, FrRef, Identifier, NonFunctionalRequirement, Scenario, UseCase};

pub mod render;

pub mod storage;
