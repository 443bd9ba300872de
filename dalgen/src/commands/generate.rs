use std::path::PathBuf;

use clap::Args;
use dalgen_codegen::Config;
use dalgen_manifest::DalgenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to dalgen.toml (defaults to ./dalgen.toml)
    #[arg(short, long, default_value = "dalgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides dalgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write one file per table
    #[arg(long)]
    pub multi_file: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let dalgen_toml = DalgenToml::open(&self.config).unwrap_or_exit();

        let mut config = Config::from_manifest(dalgen_toml.manifest(), dalgen_toml.base_dir());
        if let Some(output) = &self.output {
            config = config.with_output_dir(output);
        }
        if self.multi_file {
            config = config.with_multi_file(true);
        }

        let report = ops::generate(
            config,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
