mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use provisioner_lib::config::{Overrides, Settings};

use crate::output::{OutputFormat, print_error};

/// prov - Pick a stack, toggle provisions, review the change plan
#[derive(Parser)]
#[command(name = "prov")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Config file (default: <config dir>/provisioner/config.toml)
  #[arg(long, global = true, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Catalog JSON file (default: built-in sample catalog)
  #[arg(long, global = true, value_name = "PATH")]
  catalog: Option<PathBuf>,

  /// Session file (default: <data dir>/provisioner/provisioning-store.json)
  #[arg(long, global = true, value_name = "PATH")]
  session: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List the stacks in the catalog
  Stacks {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// List the provisions offered for a stack
  Provisions {
    /// Stack id (default: the selected stack)
    stack: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// List existing projects that can be loaded
  Projects {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Select a stack, replacing all current selections
  Select {
    /// Stack id
    stack: String,
  },

  /// Add a provision, or remove it if already selected
  Toggle {
    /// Provision id
    id: String,

    /// Version to select (default: the catalog default)
    #[arg(long)]
    version: Option<String>,

    /// Display label (default: the catalog label)
    #[arg(long)]
    label: Option<String>,
  },

  /// Change the version of a selected provision
  SetVersion {
    /// Provision id
    id: String,

    /// New version
    version: String,
  },

  /// Load an existing project's provisions for editing
  Load {
    /// Project id
    project: String,
  },

  /// Reset the session to a new, empty project
  Clear {
    /// Skip confirmation prompt
    #[arg(long)]
    force: bool,
  },

  /// Show the pending change plan
  Plan {
    /// Print plain plan lines without symbols or summary
    #[arg(long)]
    raw: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Show the current session
  Status {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  if let Err(e) = run(cli) {
    print_error(&format!("{:#}", e));
    std::process::exit(1);
  }
}

fn run(cli: Cli) -> Result<()> {
  let settings = Settings::resolve(Overrides {
    config: cli.config,
    catalog: cli.catalog,
    session: cli.session,
  })?;

  match cli.command {
    Commands::Stacks { output } => cmd::cmd_stacks(&settings, output),
    Commands::Provisions { stack, output } => cmd::cmd_provisions(&settings, stack, output),
    Commands::Projects { output } => cmd::cmd_projects(&settings, output),
    Commands::Select { stack } => cmd::cmd_select(&settings, &stack),
    Commands::Toggle { id, version, label } => cmd::cmd_toggle(&settings, &id, version, label),
    Commands::SetVersion { id, version } => cmd::cmd_set_version(&settings, &id, &version),
    Commands::Load { project } => cmd::cmd_load(&settings, &project),
    Commands::Clear { force } => cmd::cmd_clear(&settings, force),
    Commands::Plan { raw, output } => cmd::cmd_plan(&settings, raw, output),
    Commands::Status { output } => cmd::cmd_status(&settings, output),
  }
}
