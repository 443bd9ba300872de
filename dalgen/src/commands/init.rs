use std::path::PathBuf;

use clap::Args;
use dalgen_core::to_pascal_case;
use eyre::{Context, Result};

use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project directory (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Root namespace of the generated code (defaults to the directory name)
    #[arg(short, long)]
    pub namespace: Option<String>,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let namespace = match &self.namespace {
            Some(namespace) => namespace.clone(),
            None => self.default_namespace()?,
        };

        let report = ops::init(InitOptions {
            dir: &self.dir,
            namespace: &namespace,
        })?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn default_namespace(&self) -> Result<String> {
        let dir = if self.dir == PathBuf::from(".") {
            std::env::current_dir().wrap_err("Failed to get current directory")?
        } else {
            self.dir.clone()
        };
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| eyre::eyre!("'{}' has no usable directory name", dir.display()))?;
        Ok(to_pascal_case(name))
    }
}
