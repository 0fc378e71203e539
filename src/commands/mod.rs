//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain primes
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod find;
pub mod init;
pub mod modes;

pub use find::{execute_find, render_result, FindOptions};
pub use init::{execute_init, InitOptions};
pub use modes::{execute_modes, render_modes};
