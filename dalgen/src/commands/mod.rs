mod check;
mod completions;
mod generate;
mod init;
mod tables;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use tables::TablesCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dalgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dalgen")]
#[command(version)]
#[command(about = "Generate a C# data access layer from a schema catalog")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Tables(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create dalgen.toml, a sample catalog and editable templates
    Init(InitCommand),

    /// Generate entities, data context and repositories
    Generate(GenerateCommand),

    /// Validate dalgen.toml, the catalog and the templates
    Check(CheckCommand),

    /// List catalog tables with their mapped columns
    Tables(TablesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
