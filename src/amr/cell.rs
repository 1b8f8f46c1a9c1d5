use serde::{Deserialize, Serialize};

/// Holds an active leaf cell of the adaptive mesh
///
/// The local size is derived from the refinement level and the domain
/// side length; see [crate::amr::Mesh::delta].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Refinement level (0 is a single cell spanning the whole domain)
    pub level: u32,

    /// Coordinate of the cell center along the axis of symmetry
    pub x: f64,

    /// Radial coordinate of the cell center
    pub y: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn derive_works() {
        let cell = Cell {
            level: 2,
            x: -0.5,
            y: 1.5,
        };
        let clone = cell.clone();
        let correct = "Cell { level: 2, x: -0.5, y: 1.5 }";
        assert_eq!(format!("{:?}", clone), correct);
        // serialize
        let json = serde_json::to_string(&cell).unwrap();
        // deserialize
        let read: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(format!("{:?}", read), correct);
    }
}
