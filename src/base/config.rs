use std::fmt;

/// Holds the diagnostic configuration and the fixed physical constants
///
/// The configuration is created once at startup and never mutated. The
/// three dimensionless numbers label the physical regime the snapshot
/// was generated under; only the viscosity ratio enters the derived
/// constants.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to the snapshot file
    pub snapshot: String,

    /// Label time written alongside the computed energy
    ///
    /// Supplied by the caller; it does not need to match the internal
    /// time recorded in the snapshot.
    pub time: f64,

    /// Solvent-to-total viscosity ratio
    pub visc_ratio: f64,

    /// Inertial dimensionless number
    pub inertial: f64,

    /// Deborah number (dimensionless relaxation time)
    pub deborah: f64,

    /// Bond number (fixed)
    pub bond: f64,

    /// Density of phase 1 (the working fluid)
    pub rho1: f64,

    /// Solvent viscosity of phase 1
    pub mu1: f64,

    /// Density of phase 2 (the ambient fluid)
    pub rho2: f64,

    /// Viscosity of phase 2
    pub mu2: f64,

    /// Surface tension coefficient
    pub sigma: f64,
}

impl Config {
    /// Allocates a new instance from the five invocation values
    pub fn new(snapshot: &str, time: f64, visc_ratio: f64, inertial: f64, deborah: f64) -> Self {
        Config {
            snapshot: snapshot.to_string(),
            time,
            visc_ratio,
            inertial,
            deborah,
            bond: 0.001,
            rho1: 1.0,
            mu1: 0.01 * visc_ratio,
            rho2: 0.001,
            mu2: 0.0002,
            sigma: 1.0,
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Diagnostic configuration\n").unwrap();
        write!(f, "========================\n").unwrap();
        write!(f, "snapshot = {:?}\n", self.snapshot).unwrap();
        write!(f, "time = {:?}\n", self.time).unwrap();
        write!(f, "visc_ratio = {:?}\n", self.visc_ratio).unwrap();
        write!(f, "inertial = {:?}\n", self.inertial).unwrap();
        write!(f, "deborah = {:?}\n", self.deborah).unwrap();
        write!(f, "bond = {:?}\n", self.bond).unwrap();
        write!(f, "rho1 = {:?}, mu1 = {:?}\n", self.rho1, self.mu1).unwrap();
        write!(f, "rho2 = {:?}, mu2 = {:?}\n", self.rho2, self.mu2).unwrap();
        write!(f, "sigma = {:?}\n", self.sigma).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use russell_chk::assert_approx_eq;

    #[test]
    fn new_works() {
        let config = Config::new("dump-4.5", 4.5, 2.0, 0.1, 0.4);
        assert_eq!(config.snapshot, "dump-4.5");
        assert_eq!(config.time, 4.5);
        assert_eq!(config.visc_ratio, 2.0);
        assert_eq!(config.inertial, 0.1);
        assert_eq!(config.deborah, 0.4);
        assert_eq!(config.bond, 0.001);
        assert_eq!(config.rho1, 1.0);
        assert_approx_eq!(config.mu1, 0.02, 1e-15);
        assert_eq!(config.rho2, 0.001);
        assert_eq!(config.mu2, 0.0002);
        assert_eq!(config.sigma, 1.0);
    }

    #[test]
    fn display_works() {
        let config = Config::new("dump-1", 1.0, 1.0, 0.1, 0.4);
        assert_eq!(
            format!("{}", config),
            "Diagnostic configuration\n\
             ========================\n\
             snapshot = \"dump-1\"\n\
             time = 1.0\n\
             visc_ratio = 1.0\n\
             inertial = 0.1\n\
             deborah = 0.4\n\
             bond = 0.001\n\
             rho1 = 1.0, mu1 = 0.01\n\
             rho2 = 0.001, mu2 = 0.0002\n\
             sigma = 1.0\n"
        );
    }

    #[test]
    fn clone_and_debug_work() {
        let config = Config::new("dump-1", 1.0, 1.0, 0.1, 0.4).clone();
        assert!(format!("{:?}", config).contains("visc_ratio"));
    }
}
