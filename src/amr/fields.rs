use serde::{Deserialize, Serialize};

/// Defines the role of a per-cell scalar array in the restored state
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum FieldRole {
    /// Volume fraction of phase 1 (0 = ambient phase, 1 = working phase)
    VolumeFraction,

    /// Velocity component along the axis of symmetry
    VelocityX,

    /// Velocity component along the radial direction
    VelocityY,

    /// Polymer viscosity map of the constitutive model
    PolymerViscosity,

    /// Relaxation time map of the constitutive model
    RelaxationTime,

    /// Yield stress scale map of the constitutive model
    YieldStress,
}

/// Binds the name of a serialized array to the field it populates
///
/// The full list of slots passed to the restore call tells the engine
/// which arrays to unpack into which fields; this replaces the global
/// field bindings a solver configures before saving.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldSlot {
    /// Name of the array in the snapshot
    pub name: String,

    /// Field populated by the array
    pub role: FieldRole,
}

impl FieldSlot {
    /// Allocates a new instance
    pub fn new(name: &str, role: FieldRole) -> Self {
        FieldSlot {
            name: name.to_string(),
            role,
        }
    }
}

/// Returns the slots carried by an axisymmetric two-phase viscoelastic snapshot
pub fn default_slots() -> Vec<FieldSlot> {
    vec![
        FieldSlot::new("f", FieldRole::VolumeFraction),
        FieldSlot::new("u.x", FieldRole::VelocityX),
        FieldSlot::new("u.y", FieldRole::VelocityY),
        FieldSlot::new("mupv", FieldRole::PolymerViscosity),
        FieldSlot::new("lambdav", FieldRole::RelaxationTime),
        FieldSlot::new("tau0v", FieldRole::YieldStress),
    ]
}

/// Holds the per-cell field values of the restored state
///
/// All arrays have one entry per active leaf cell, in the same order as
/// the mesh's cell list. The three constitutive maps are restored and
/// validated but not consumed by the energy diagnostic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fields {
    /// Volume fraction of phase 1
    pub f: Vec<f64>,

    /// Velocity component along the axis of symmetry
    pub ux: Vec<f64>,

    /// Velocity component along the radial direction
    pub uy: Vec<f64>,

    /// Polymer viscosity map
    pub mup: Vec<f64>,

    /// Relaxation time map
    pub lambda: Vec<f64>,

    /// Yield stress scale map
    pub tau0: Vec<f64>,
}

impl Fields {
    /// Allocates zeroed arrays with one entry per cell
    pub fn new(ncell: usize) -> Self {
        Fields {
            f: vec![0.0; ncell],
            ux: vec![0.0; ncell],
            uy: vec![0.0; ncell],
            mup: vec![0.0; ncell],
            lambda: vec![0.0; ncell],
            tau0: vec![0.0; ncell],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
