use std::path::PathBuf;

use reqdoc::render::render_requirements_document;
use tracing::instrument;

use super::Workspace;

#[derive(Debug, clap::Parser)]
pub struct Document {
    /// Output file, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "requirements.md")]
    output: PathBuf,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            output: PathBuf::from("requirements.md"),
        }
    }
}

impl Document {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let catalogue = workspace.catalogue()?;
        let lines = render_requirements_document(&catalogue, workspace.config());
        workspace.emit(Some(self.output.as_path()), &lines)
    }
}
