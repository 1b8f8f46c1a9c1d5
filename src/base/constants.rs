/// Defines the physical side length of the square computational domain
pub const DOMAIN_SIDE: f64 = 8.0;

/// Defines the refinement level of the uniform working grid initialized before restore
pub const BASE_LEVEL: u32 = 8;

/// Defines the maximum refinement level a snapshot may carry
pub const MAX_REFINEMENT_LEVEL: u32 = 12;

/// Defines the name of the kinetic energy diagnostics log
pub const KINETIC_ENERGY_LOG: &str = "ke.txt";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/vedrop/test";
