use std::path::{Path, PathBuf};

mod document;
mod init;
mod nfr;
mod table;
mod terminal;
mod use_cases;

use clap::ArgAction;
use document::Document;
use init::Init;
use nfr::Nfr;
use reqdoc::{storage, Catalogue, Config};
use table::{Table1, Table2};
use use_cases::UseCases;

/// The name of the configuration file looked up in the root directory.
const CONFIG_FILE: &str = "reqdoc.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The directory input files are read from and output files written to
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Path to the configuration file [default: <ROOT>/reqdoc.toml]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config_path = self
            .config
            .unwrap_or_else(|| self.root.join(CONFIG_FILE));

        let workspace = Workspace::load(self.root, config_path)?;
        self.command.unwrap_or_default().run(&workspace)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Write a default configuration file
    Init(Init),

    /// Render the non-functional requirements table rows
    Nfr(Nfr),

    /// Render the use case outline and sections
    UseCases(UseCases),

    /// Render the complete requirements document (default)
    Document(Document),

    /// Render the test case table from a CSV file
    Table1(Table1),

    /// Render the requirement coverage table from a CSV file
    Table2(Table2),
}

impl Default for Command {
    fn default() -> Self {
        Self::Document(Document::default())
    }
}

impl Command {
    fn run(self, workspace: &Workspace) -> anyhow::Result<()> {
        match self {
            Self::Init(command) => command.run(workspace)?,
            Self::Nfr(command) => command.run(workspace)?,
            Self::UseCases(command) => command.run(workspace)?,
            Self::Document(command) => command.run(workspace)?,
            Self::Table1(command) => command.run(workspace)?,
            Self::Table2(command) => command.run(workspace)?,
        }
        Ok(())
    }
}

/// The working directory and its configuration.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    config_path: PathBuf,
    config: Config,
}

impl Workspace {
    fn load(root: PathBuf, config_path: PathBuf) -> anyhow::Result<Self> {
        let config = Config::load_or_default(&config_path).map_err(|e| anyhow::anyhow!(e))?;
        tracing::debug!(?config, "loaded configuration");
        Ok(Self {
            root,
            config_path,
            config,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve a path relative to the root directory.
    pub fn path(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    /// Build the catalogue named by the configuration, or the built-in one.
    pub fn catalogue(&self) -> anyhow::Result<Catalogue> {
        let catalogue = match &self.config.catalogue {
            Some(path) => Catalogue::load(&self.path(path))?,
            None => Catalogue::builtin()?,
        };
        tracing::info!(
            requirements = catalogue.requirements.len(),
            use_cases = catalogue.use_cases.len(),
            "loaded catalogue"
        );
        Ok(catalogue)
    }

    /// Write rendered lines to `output` (relative to the root), or to stdout
    /// when no output is given.
    pub fn emit(&self, output: Option<&Path>, lines: &[String]) -> anyhow::Result<()> {
        match output {
            Some(output) => {
                let path = self.path(output);
                storage::save_lines(&path, lines)
                    .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?;
                println!(
                    "{}",
                    terminal::written(
                        &path,
                        lines.len(),
                        terminal::color_enabled(supports_color::Stream::Stdout)
                    )
                );
            }
            None => storage::write_lines(&mut std::io::stdout().lock(), lines)?,
        }
        Ok(())
    }
}
