//! @acp:module "Modes Command"
//! @acp:summary "List the available selection modes"
//! @acp:domain primes
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::config::Mode;

/// Render one line per mode
pub fn render_modes() -> String {
    Mode::all()
        .iter()
        .map(|mode| format!("{:<8} {}", mode.as_str(), mode.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute the modes command
pub fn execute_modes() -> Result<()> {
    println!("{}", style("Available modes:").bold());
    for line in render_modes().lines() {
        println!("  {}", line);
    }
    Ok(())
}
