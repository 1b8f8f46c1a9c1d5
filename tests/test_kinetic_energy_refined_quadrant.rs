use russell_chk::assert_approx_eq;
use std::f64::consts::PI;
use vedrop::{prelude::*, StrError};

#[test]
fn test_kinetic_energy_refined_quadrant() -> Result<(), StrError> {
    // snapshot over the mixed-resolution sample domain:
    // uniform f = 1 and |u|^2 = 0.25, so the energy is
    // 0.5 * 0.25 * sum(2 pi y delta^2) = 0.5 * 0.25 * 8 pi = pi
    let snapshot = Samples::uniform_snapshot(Samples::refined_quadrant(), 2.5, 1.0, 0.3, -0.4);
    let path = format!("{}/kinetic_energy_refined_quadrant.json", DEFAULT_TEST_DIR);
    snapshot.write_json(&path)?;

    // configure the engine against the sample geometry
    let mut restore = RestoreConfig::new()?;
    restore.base = Mesh::new_base(2.0, [0.0, 0.0], 1)?;

    // restore and reduce
    let state = restore.restore(&path)?;
    assert_eq!(state.time, 2.5);
    assert_eq!(state.mesh.ncell(), 7);
    let energy = kinetic_energy(&state);
    assert_approx_eq!(energy, PI, 1e-13);

    // the parallel reduction matches a serial traversal
    let mut correct = 0.0;
    for (index, cell) in state.mesh.cells.iter().enumerate() {
        let delta = state.mesh.delta(cell);
        let speed2 = state.fields.ux[index] * state.fields.ux[index]
            + state.fields.uy[index] * state.fields.uy[index];
        correct += (2.0 * PI * cell.y) * 0.5 * state.fields.f[index] * speed2 * delta * delta;
    }
    assert_approx_eq!(energy, correct, 1e-13);

    // restoring the same snapshot again yields the same energy
    let again = restore.restore(&path)?;
    assert_approx_eq!(kinetic_energy(&again), energy, 1e-15);
    Ok(())
}
