use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use super::{NonFunctionalRequirement, UseCase};

const BUILTIN: &str = include_str!("../../data/catalogue.yaml");

/// The set of records rendered into the requirements document.
///
/// A catalogue is built once per run and passed explicitly to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Catalogue {
    /// Non-functional requirements, in catalogue order.
    pub requirements: Vec<NonFunctionalRequirement>,
    /// Use cases, in display order.
    pub use_cases: Vec<UseCase>,
}

/// Errors that can occur while loading a catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue: {0}")]
    Io(#[from] io::Error),

    /// The catalogue file is not a valid catalogue document.
    #[error("failed to parse catalogue: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Catalogue {
    /// The catalogue shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document fails to parse.
    pub fn builtin() -> Result<Self, CatalogueError> {
        Self::from_yaml(BUILTIN)
    }

    /// Parse a catalogue from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid catalogue.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogueError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a catalogue from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading catalogue");
        Self::from_yaml(&content)
    }
}

/// The serialized versions of the catalogue.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        requirements: Vec<NonFunctionalRequirement>,
        #[serde(default)]
        use_cases: Vec<UseCase>,
    },
}

impl From<Versions> for Catalogue {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                requirements,
                use_cases,
            } => Self {
                requirements,
                use_cases,
            },
        }
    }
}

impl From<Catalogue> for Versions {
    fn from(catalogue: Catalogue) -> Self {
        Self::V1 {
            requirements: catalogue.requirements,
            use_cases: catalogue.use_cases,
        }
    }
}
