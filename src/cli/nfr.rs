use std::path::PathBuf;

use reqdoc::render::{render_nfr_table, NFR_TABLE_HEADER};
use tracing::instrument;

use super::Workspace;

#[derive(Debug, clap::Parser)]
pub struct Nfr {
    /// Emit the table header before the rows
    #[arg(long)]
    with_header: bool,

    /// Write to this file (relative to the root) instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Nfr {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let catalogue = workspace.catalogue()?;
        let config = workspace.config();

        let mut lines = Vec::new();
        if self.with_header {
            lines.extend(NFR_TABLE_HEADER.map(String::from));
        }
        lines.extend(render_nfr_table(
            &catalogue.requirements,
            config.fr_before,
            config.nfr_before,
        ));

        workspace.emit(self.output.as_deref(), &lines)
    }
}
