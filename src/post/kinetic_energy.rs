use super::map_reduce_cells;
use crate::amr::FlowState;
use std::f64::consts::PI;

/// Computes the kinetic energy of phase 1 over the whole domain
///
/// Each active leaf cell of size Δ at radial offset y contributes
///
/// ```text
/// (2 π y) · 0.5 · f · (ux² + uy²) · Δ²
/// ```
///
/// where 2 π y Δ² is the volume element of the revolved cell and the
/// fraction f restricts the energy density to phase 1 (the ambient
/// phase carries no weight). The contributions are combined with an
/// associative sum, so the total is correct to solver-level tolerance
/// for any worker partitioning; see [map_reduce_cells] for the
/// reproducibility contract.
pub fn kinetic_energy(state: &FlowState) -> f64 {
    let mesh = &state.mesh;
    let fields = &state.fields;
    map_reduce_cells(
        mesh,
        0.0,
        |index, cell| {
            let delta = mesh.delta(cell);
            let speed2 = fields.ux[index] * fields.ux[index] + fields.uy[index] * fields.uy[index];
            (2.0 * PI * cell.y) * 0.5 * fields.f[index] * speed2 * delta * delta
        },
        |a, b| a + b,
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::kinetic_energy;
    use crate::amr::{default_slots, Fields, FlowState, Mesh, RestoreConfig, Samples};
    use crate::base::Essential;
    use russell_chk::assert_approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn zero_fraction_gives_zero_energy() {
        let mesh = Samples::refined_quadrant();
        let mut fields = Fields::new(mesh.ncell());
        fields.ux = vec![3.0; mesh.ncell()];
        fields.uy = vec![-2.0; mesh.ncell()];
        let state = FlowState {
            time: 0.0,
            mesh,
            fields,
        };
        assert_eq!(kinetic_energy(&state), 0.0);
    }

    #[test]
    fn single_cell_matches_closed_form() {
        let mesh = Samples::one_cell();
        let mut fields = Fields::new(1);
        fields.f[0] = 1.0;
        fields.ux[0] = 0.3;
        fields.uy[0] = -0.4;
        let state = FlowState {
            time: 0.0,
            mesh,
            fields,
        };
        // 2 pi y * 0.5 (vx^2 + vy^2) * delta^2 with y = 1 and delta = 2
        let correct = 2.0 * PI * 1.0 * 0.5 * (0.09 + 0.16) * 4.0;
        assert_approx_eq!(kinetic_energy(&state), correct, 1e-14);
    }

    #[test]
    fn mixed_resolution_matches_serial_sum() {
        let mesh = Samples::refined_quadrant();
        let ncell = mesh.ncell();
        let mut fields = Fields::new(ncell);
        for index in 0..ncell {
            fields.f[index] = 0.1 * (index as f64 + 1.0);
            fields.ux[index] = 0.5 - 0.05 * index as f64;
            fields.uy[index] = 0.02 * index as f64;
        }
        let mut correct = 0.0;
        for (index, cell) in mesh.cells.iter().enumerate() {
            let delta = mesh.delta(cell);
            let speed2 = fields.ux[index] * fields.ux[index] + fields.uy[index] * fields.uy[index];
            correct += (2.0 * PI * cell.y) * 0.5 * fields.f[index] * speed2 * delta * delta;
        }
        let state = FlowState {
            time: 0.0,
            mesh,
            fields,
        };
        assert_approx_eq!(kinetic_energy(&state), correct, 1e-13);
    }

    #[test]
    fn uniform_state_matches_closed_form() {
        // sum of 2 pi y delta^2 over the refined quadrant is 8 pi;
        // with f = 1 and |u|^2 = 0.25 the energy is pi
        let config = RestoreConfig {
            base: Mesh::new_base(2.0, [0.0, 0.0], 1).unwrap(),
            max_level: 12,
            essential: Essential::outflow_right(),
            slots: default_slots(),
        };
        let snapshot = Samples::uniform_snapshot(Samples::refined_quadrant(), 0.0, 1.0, 0.3, -0.4);
        let state = config.restore_snapshot(snapshot).unwrap();
        assert_approx_eq!(kinetic_energy(&state), PI, 1e-13);
    }
}
