//! Makes available common structures needed to run the diagnostics
//!
//! You may write `use vedrop::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::amr::{
    default_slots, Cell, FieldRole, FieldSlot, Fields, FlowState, Mesh, RestoreConfig, Samples,
    Snapshot,
};
pub use crate::base::{
    Config, Ebc, Essential, Side, BASE_LEVEL, DEFAULT_TEST_DIR, DOMAIN_SIDE, KINETIC_ENERGY_LOG,
    MAX_REFINEMENT_LEVEL,
};
pub use crate::post::{kinetic_energy, map_reduce_cells, DiagLog};
