//! @acp:module "Init Command"
//! @acp:summary "Write a default options file"
//! @acp:domain primes
//! @acp:layer handler
//!
//! Implements `primes init`.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::{OptionsBuilder, DEFAULT_OPTIONS_FILE};

/// Options for the init command
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Where to write the options file
    pub path: PathBuf,
    /// Force overwrite existing file
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OPTIONS_FILE),
            force: false,
        }
    }
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if options.path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            options.path.display()
        );
    }

    OptionsBuilder::default().save(&options.path)?;
    println!(
        "{} Created {}",
        style("✓").green(),
        options.path.display()
    );
    Ok(())
}
