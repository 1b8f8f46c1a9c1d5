use super::{Cell, Mesh, Snapshot};

/// Holds sample meshes and snapshots for tests and documentation
pub struct Samples {}

impl Samples {
    /// Returns a mesh with a single active cell covering a 2 x 2 domain
    ///
    /// The cell has size 2 and its center sits at (1, 1).
    pub fn one_cell() -> Mesh {
        Mesh {
            l0: 2.0,
            origin: [0.0, 0.0],
            base_level: 0,
            cells: vec![Cell {
                level: 0,
                x: 1.0,
                y: 1.0,
            }],
        }
    }

    /// Returns a mixed-resolution mesh over a 2 x 2 domain
    ///
    /// Three cells at level 1 plus the top-right quadrant refined to
    /// level 2 (seven active cells in total).
    pub fn refined_quadrant() -> Mesh {
        Mesh {
            l0: 2.0,
            origin: [0.0, 0.0],
            base_level: 1,
            cells: vec![
                Cell {
                    level: 1,
                    x: 0.5,
                    y: 0.5,
                },
                Cell {
                    level: 1,
                    x: 1.5,
                    y: 0.5,
                },
                Cell {
                    level: 1,
                    x: 0.5,
                    y: 1.5,
                },
                Cell {
                    level: 2,
                    x: 1.25,
                    y: 1.25,
                },
                Cell {
                    level: 2,
                    x: 1.75,
                    y: 1.25,
                },
                Cell {
                    level: 2,
                    x: 1.25,
                    y: 1.75,
                },
                Cell {
                    level: 2,
                    x: 1.75,
                    y: 1.75,
                },
            ],
        }
    }

    /// Returns a snapshot with uniform fraction and velocity over a mesh
    ///
    /// All six arrays an axisymmetric two-phase viscoelastic snapshot
    /// carries are present; the constitutive maps hold arbitrary
    /// uniform values.
    pub fn uniform_snapshot(mesh: Mesh, time: f64, f: f64, vx: f64, vy: f64) -> Snapshot {
        let ncell = mesh.ncell();
        let mut snapshot = Snapshot::new(time, mesh);
        snapshot
            .set_field("f", vec![f; ncell])
            .set_field("u.x", vec![vx; ncell])
            .set_field("u.y", vec![vy; ncell])
            .set_field("mupv", vec![0.01; ncell])
            .set_field("lambdav", vec![0.2; ncell])
            .set_field("tau0v", vec![0.1; ncell]);
        snapshot
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
