use std::{fs, path::PathBuf};

use reqdoc::{Catalogue, Config};
use tracing::instrument;

use super::Workspace;

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Also write the built-in catalogue to this file (relative to the root)
    /// and point the configuration at it
    #[arg(long, value_name = "FILE")]
    catalogue: Option<PathBuf>,
}

impl Init {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let config_path = workspace.config_path();
        if config_path.exists() {
            anyhow::bail!(
                "Configuration already exists at {}",
                config_path.display()
            );
        }

        let mut config = Config::default();

        if let Some(catalogue_file) = self.catalogue {
            let path = workspace.path(&catalogue_file);
            if path.exists() {
                anyhow::bail!("Catalogue already exists at {}", path.display());
            }

            let yaml = serde_yaml::to_string(&Catalogue::builtin()?)
                .map_err(|e| anyhow::anyhow!("Failed to serialize catalogue: {e}"))?;
            fs::write(&path, yaml)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
            println!("  Created: {}", path.display());

            config.catalogue = Some(catalogue_file);
        }

        config
            .save(config_path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", config_path.display()))?;
        println!("  Created: {}", config_path.display());

        Ok(())
    }
}
