use super::Mesh;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a serialized point-in-time capture of the mesh and field state
///
/// The named arrays carry one value per active leaf cell, in the same
/// order as the mesh's cell list. Captures are written by the solver
/// side (and by tests) and consumed through [crate::amr::RestoreConfig].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Simulation time at which the capture was taken
    pub time: f64,

    /// The adaptive mesh at the resolution active when saved
    pub mesh: Mesh,

    /// Named per-cell scalar arrays
    pub fields: HashMap<String, Vec<f64>>,
}

impl Snapshot {
    /// Allocates a new instance with no field arrays
    pub fn new(time: f64, mesh: Mesh) -> Self {
        Snapshot {
            time,
            mesh,
            fields: HashMap::new(),
        }
    }

    /// Sets a named field array
    pub fn set_field(&mut self, name: &str, values: Vec<f64>) -> &mut Self {
        self.fields.insert(name.to_string(), values);
        self
    }

    /// Reads a JSON file containing a snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open snapshot file")?;
        let buffered = BufReader::new(input);
        let snapshot = serde_json::from_reader(buffered).map_err(|_| "cannot parse snapshot file")?;
        Ok(snapshot)
    }

    /// Writes a JSON file with this snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            if !p.as_os_str().is_empty() {
                fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
            }
        }
        let mut file = File::create(&path).map_err(|_| "cannot create snapshot file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write snapshot file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
