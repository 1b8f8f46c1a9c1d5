use log::info;
use structopt::StructOpt;
use vedrop::amr::RestoreConfig;
use vedrop::base::{Config, KINETIC_ENERGY_LOG};
use vedrop::post::{kinetic_energy, DiagLog};
use vedrop::StrError;

/// Parses a floating-point value, coercing malformed text to zero
fn parse_float_lossy(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "vedrop_kinetic_energy",
    about = "Restores a two-phase flow snapshot and appends the kinetic energy of phase 1 to the diagnostics log"
)]
struct Options {
    /// Path to the snapshot file
    snapshot: String,

    /// Label time written alongside the energy
    #[structopt(parse(from_str = parse_float_lossy))]
    time: f64,

    /// Solvent-to-total viscosity ratio
    #[structopt(parse(from_str = parse_float_lossy))]
    visc_ratio: f64,

    /// Inertial dimensionless number
    #[structopt(parse(from_str = parse_float_lossy))]
    inertial: f64,

    /// Deborah number
    #[structopt(parse(from_str = parse_float_lossy))]
    deborah: f64,
}

fn main() -> Result<(), StrError> {
    env_logger::init();

    // parse options
    let options = Options::from_args();
    let config = Config::new(
        &options.snapshot,
        options.time,
        options.visc_ratio,
        options.inertial,
        options.deborah,
    );
    info!("\n{}", config);

    // restore the saved state
    let restore = RestoreConfig::new()?;
    info!("\n{}", restore.essential);
    let state = restore.restore(&config.snapshot)?;
    info!("restored {} cells at t = {}", state.mesh.ncell(), state.time);

    // reduce and append the record
    let energy = kinetic_energy(&state);
    let mut diag = DiagLog::open(KINETIC_ENERGY_LOG)?;
    diag.write_record(config.time, energy)?;
    println!("{} {}", config.time, energy);
    Ok(())
}
