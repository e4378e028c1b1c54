use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for rendering the requirements documentation.
///
/// The "before" offsets let generated sections be concatenated with
/// previously numbered sections of the same document without renumbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Number of functional requirements numbered before this document.
    ///
    /// The functional requirement with zero-based index `0` is displayed as
    /// `FR{fr_before + 1}`.
    pub fr_before: i64,

    /// Number of non-functional requirements numbered before this document.
    pub nfr_before: i64,

    /// Number of use cases numbered before this document.
    pub uc_before: i64,

    /// Path to a catalogue file, relative to the working directory.
    ///
    /// When unset, the catalogue shipped with the binary is used.
    pub catalogue: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fr_before: default_fr_before(),
            nfr_before: default_nfr_before(),
            uc_before: 0,
            catalogue: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration if the file exists, otherwise returns the
    /// default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }
}

const fn default_fr_before() -> i64 {
    3
}

const fn default_nfr_before() -> i64 {
    10
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_fr_before")]
        fr_before: i64,

        #[serde(default = "default_nfr_before")]
        nfr_before: i64,

        #[serde(default)]
        uc_before: i64,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        catalogue: Option<PathBuf>,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                fr_before,
                nfr_before,
                uc_before,
                catalogue,
            } => Self {
                fr_before,
                nfr_before,
                uc_before,
                catalogue,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            fr_before: config.fr_before,
            nfr_before: config.nfr_before,
            uc_before: config.uc_before,
            catalogue: config.catalogue,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nfr_before = 5\nnfr_before = 2\nuc_before = 7\ncatalogue = \"docs/catalogue.yaml\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.fr_before, 5);
        assert_eq!(config.nfr_before, 2);
        assert_eq!(config.uc_before, 7);
        assert_eq!(
            config.catalogue.as_deref(),
            Some(Path::new("docs/catalogue.yaml"))
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&tmp.path().join("reqdoc.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nfr_before = \"three\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("reqdoc.toml");
        let config = Config {
            uc_before: 4,
            ..Config::default()
        };

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
