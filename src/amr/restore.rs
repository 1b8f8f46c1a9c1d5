use super::{default_slots, FieldRole, FieldSlot, Fields, Mesh, Snapshot};
use crate::base::{Essential, BASE_LEVEL, DOMAIN_SIDE, MAX_REFINEMENT_LEVEL};
use crate::StrError;
use std::collections::HashSet;
use std::ffi::OsStr;

/// Holds the live restored simulation state
///
/// The state is read-only for the reduction stage; restoring the same
/// snapshot twice yields identical states.
#[derive(Clone, Debug)]
pub struct FlowState {
    /// Simulation time recorded in the snapshot
    pub time: f64,

    /// The restored adaptive mesh
    pub mesh: Mesh,

    /// The restored per-cell fields
    pub fields: Fields,
}

/// Configures the mesh engine prior to restoring a snapshot
///
/// The working grid (domain geometry and base resolution), the boundary
/// conditions the snapshot expects, and the field slots to populate are
/// all declared before the restore call.
pub struct RestoreConfig {
    /// Uniform working grid initialized before the restore
    pub base: Mesh,

    /// Maximum refinement level accepted from a snapshot
    pub max_level: u32,

    /// Boundary conditions the snapshot was produced with (not enforced here)
    pub essential: Essential,

    /// Field slots the restore populates
    pub slots: Vec<FieldSlot>,
}

impl RestoreConfig {
    /// Allocates the configuration of an axisymmetric two-phase snapshot
    ///
    /// Initializes the working grid at the fixed base resolution over
    /// the square domain centered at x = 0 with the axis of symmetry at
    /// y = 0, and declares the outflow conditions on the outer radial
    /// boundary.
    pub fn new() -> Result<Self, StrError> {
        let origin = [-DOMAIN_SIDE / 2.0, 0.0];
        let base = Mesh::new_base(DOMAIN_SIDE, origin, BASE_LEVEL)?;
        Ok(RestoreConfig {
            base,
            max_level: MAX_REFINEMENT_LEVEL,
            essential: Essential::outflow_right(),
            slots: default_slots(),
        })
    }

    /// Restores a fully populated state from a snapshot file
    ///
    /// The snapshot must have been saved against the configured domain
    /// geometry and base resolution; its cells must form a valid
    /// partition and every declared slot must be present with one value
    /// per cell. Any violation is fatal and no state is returned.
    pub fn restore<P>(&self, full_path: &P) -> Result<FlowState, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let snapshot = Snapshot::read_json(full_path)?;
        self.restore_snapshot(snapshot)
    }

    /// Builds the state from an in-memory snapshot
    pub fn restore_snapshot(&self, snapshot: Snapshot) -> Result<FlowState, StrError> {
        // structural compatibility with the working grid
        if snapshot.mesh.l0 != self.base.l0 || snapshot.mesh.origin != self.base.origin {
            return Err("snapshot domain does not match the configured domain");
        }
        if snapshot.mesh.base_level != self.base.base_level {
            return Err("snapshot base level does not match the configured level");
        }
        snapshot.mesh.check(self.max_level)?;

        // bind the declared slots
        let ncell = snapshot.mesh.ncell();
        let mut fields = Fields::new(ncell);
        let mut bound = HashSet::new();
        for slot in &self.slots {
            if !bound.insert(slot.role) {
                return Err("a field role is declared twice");
            }
            let values = snapshot
                .fields
                .get(&slot.name)
                .ok_or("snapshot is missing a declared field array")?;
            if values.len() != ncell {
                return Err("a field array does not have one value per cell");
            }
            let target = match slot.role {
                FieldRole::VolumeFraction => &mut fields.f,
                FieldRole::VelocityX => &mut fields.ux,
                FieldRole::VelocityY => &mut fields.uy,
                FieldRole::PolymerViscosity => &mut fields.mup,
                FieldRole::RelaxationTime => &mut fields.lambda,
                FieldRole::YieldStress => &mut fields.tau0,
            };
            target.clone_from(values);
        }
        if bound.len() != 6 {
            return Err("a field role is missing from the declared slots");
        }

        Ok(FlowState {
            time: snapshot.time,
            mesh: snapshot.mesh,
            fields,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
