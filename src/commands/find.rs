//! @acp:module "Find Command"
//! @acp:summary "Run a prime search and print the result"
//! @acp:domain primes
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{OptionsBuilder, DEFAULT_OPTIONS_FILE};
use crate::finder::Finder;
use crate::search::SearchResult;

/// Options for the find command
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Options file; `None` means the default file, if present
    pub config: Option<PathBuf>,
    /// Overrides for values from the options file
    pub mode: Option<String>,
    pub quantity: Option<usize>,
    pub from: Option<i64>,
    pub to: Option<i64>,
    /// Print JSON instead of plain text
    pub json: bool,
}

impl FindOptions {
    /// Merge the options file (if any) with command-line overrides
    pub fn resolve(&self) -> Result<OptionsBuilder> {
        let mut builder = match &self.config {
            Some(path) => OptionsBuilder::load(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => {
                let default_path = PathBuf::from(DEFAULT_OPTIONS_FILE);
                if default_path.exists() {
                    tracing::debug!("Loading options from {}", default_path.display());
                    OptionsBuilder::load(&default_path)?
                } else {
                    OptionsBuilder::default()
                }
            }
        };

        if let Some(mode) = &self.mode {
            builder.mode = mode.clone();
        }
        if let Some(quantity) = self.quantity {
            builder.quantity = quantity;
        }
        if let Some(from) = self.from {
            builder.from = from;
        }
        if let Some(to) = self.to {
            builder.to = to;
        }
        Ok(builder)
    }
}

/// Format a result for output
pub fn render_result(result: &SearchResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(result)?);
    }
    Ok(result.to_string())
}

/// Execute the find command
pub fn execute_find(options: FindOptions) -> Result<()> {
    let builder = options.resolve()?;
    let finder = Finder::from_builder(&builder)?;
    let result = finder.find()?;

    println!("{}", render_result(&result, options.json)?);
    Ok(())
}
