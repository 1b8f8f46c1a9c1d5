//! Vedrop computes diagnostics from saved snapshots of axisymmetric
//! two-phase viscoelastic flow simulations
//!
//! The crate restores an adaptive-mesh state from a snapshot file,
//! reduces it to scalar quantities (currently the kinetic energy of the
//! primary phase), and appends the results to a growing text log.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod amr;
pub mod base;
pub mod post;
pub mod prelude;
