use std::path::PathBuf;

use reqdoc::render::{render_use_case_details, render_use_case_links, render_use_cases};
use tracing::instrument;

use super::Workspace;

#[derive(Debug, clap::Parser)]
pub struct UseCases {
    /// Render only the link outline ('links') or only the sections ('text').
    ///
    /// Without a mode, the outline is followed by the sections.
    #[arg(long)]
    mode: Option<String>,

    /// Output file, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "out.md")]
    output: PathBuf,
}

impl UseCases {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let catalogue = workspace.catalogue()?;
        let uc_before = workspace.config().uc_before;

        let lines = match self.mode.as_deref() {
            Some(mode) => render_use_cases(&catalogue.use_cases, mode, uc_before)?,
            None => {
                let mut lines = vec!["- Use cases".to_string()];
                lines.extend(render_use_case_links(&catalogue.use_cases, uc_before));
                lines.extend(std::iter::repeat_n(String::new(), 4));
                lines.extend(render_use_case_details(&catalogue.use_cases, uc_before));
                lines
            }
        };

        workspace.emit(Some(self.output.as_path()), &lines)
    }
}
