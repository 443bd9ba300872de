use std::path::PathBuf;

use clap::Args;
use dalgen_codegen::Config;
use dalgen_manifest::DalgenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TablesCommand {
    /// Path to dalgen.toml (defaults to ./dalgen.toml)
    #[arg(short, long, default_value = "dalgen.toml")]
    pub config: PathBuf,
}

impl TablesCommand {
    pub fn run(&self) -> Result<()> {
        let dalgen_toml = DalgenToml::open(&self.config).unwrap_or_exit();
        let config = Config::from_manifest(dalgen_toml.manifest(), dalgen_toml.base_dir());

        ops::tables(&config)?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
