//! cleen installer library
//!
//! Downloads the prebuilt `cleen` binary, installs it into a target directory
//! (escalating privileges when needed) and checks that it runs.

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod logging;
pub mod utils;
