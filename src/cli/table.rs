use std::path::PathBuf;

use reqdoc::{
    render::{render_requirement_test_table, render_test_case_table, test_report::TEST_CASE_COLUMNS},
    storage,
};
use tracing::instrument;

use super::{terminal, Workspace};

#[derive(Debug, clap::Parser)]
pub struct Table1 {
    /// CSV file of test cases, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "table1.csv")]
    input: PathBuf,

    /// Output file, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "table1.md")]
    output: PathBuf,
}

impl Table1 {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let rows = storage::read_rows_from_path(&workspace.path(&self.input))?;

        let irregular = rows
            .iter()
            .filter(|row| row.len() != TEST_CASE_COLUMNS.len())
            .count();
        if irregular > 0 {
            eprintln!(
                "{}",
                terminal::irregular_rows(
                    irregular,
                    TEST_CASE_COLUMNS.len(),
                    terminal::color_enabled(supports_color::Stream::Stderr)
                )
            );
        }

        workspace.emit(Some(self.output.as_path()), &render_test_case_table(&rows))
    }
}

#[derive(Debug, clap::Parser)]
pub struct Table2 {
    /// CSV file mapping requirements to tests, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "table2.csv")]
    input: PathBuf,

    /// Output file, relative to the root
    #[arg(short, long, value_name = "FILE", default_value = "table2.md")]
    output: PathBuf,
}

impl Table2 {
    #[instrument(skip(workspace))]
    pub fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        let rows = storage::read_rows_from_path(&workspace.path(&self.input))?;
        workspace.emit(Some(self.output.as_path()), &render_requirement_test_table(&rows))
    }
}
