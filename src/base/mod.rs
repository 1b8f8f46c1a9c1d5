//! Implements the configuration and fixed constants of the diagnostics

mod config;
mod constants;
mod essential;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::essential::*;
