use std::fmt;

/// Defines the sides of the square computational domain
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    /// Left boundary (minimum x)
    Left,

    /// Right boundary (maximum x; the outer radial boundary)
    Right,

    /// Bottom boundary (the axis of symmetry)
    Bottom,

    /// Top boundary (maximum y)
    Top,
}

/// Defines a boundary condition declared before restore
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ebc {
    /// Prescribed gradient of the velocity component normal to the boundary
    ///
    /// A zero value declares the usual no-flux (outflow) condition.
    VelocityNormalGradient(f64),

    /// Prescribed pressure on the boundary
    Pressure(f64),
}

/// Holds the boundary conditions the snapshot was produced with
///
/// The declarations are consumed by the restore configuration; the mesh
/// engine that generated the snapshot is responsible for enforcing them.
#[derive(Clone, Debug)]
pub struct Essential {
    /// All declared (side, condition) pairs
    pub all: Vec<(Side, Ebc)>,
}

impl Essential {
    /// Allocates a new instance
    pub fn new() -> Self {
        Essential { all: Vec::new() }
    }

    /// Declares a boundary condition on a side of the domain
    pub fn on(&mut self, side: Side, ebc: Ebc) -> &mut Self {
        self.all.push((side, ebc));
        self
    }

    /// Returns the declarations made for a given side
    pub fn on_side(&self, side: Side) -> Vec<&Ebc> {
        self.all
            .iter()
            .filter(|(s, _)| *s == side)
            .map(|(_, ebc)| ebc)
            .collect()
    }

    /// Returns the declarations expected by an axisymmetric two-phase snapshot
    ///
    /// Zero-gradient normal velocity and zero pressure on the outer
    /// radial boundary.
    pub fn outflow_right() -> Self {
        let mut essential = Essential::new();
        essential
            .on(Side::Right, Ebc::VelocityNormalGradient(0.0))
            .on(Side::Right, Ebc::Pressure(0.0));
        essential
    }
}

impl fmt::Display for Ebc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ebc::VelocityNormalGradient(value) => write!(f, "normal velocity gradient = {:?}", value),
            Ebc::Pressure(value) => write!(f, "pressure = {:?}", value),
        }
    }
}

impl fmt::Display for Essential {
    /// Prints a formatted summary of the boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Essential boundary conditions\n").unwrap();
        write!(f, "=============================\n").unwrap();
        for (side, ebc) in &self.all {
            write!(f, "{:?} : {}\n", side, ebc).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
