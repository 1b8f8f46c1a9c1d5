//! Implements the reduction engine and the diagnostics logger

mod diag_log;
mod kinetic_energy;
mod reduce;
pub use crate::post::diag_log::*;
pub use crate::post::kinetic_energy::*;
pub use crate::post::reduce::*;
