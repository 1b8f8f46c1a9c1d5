use crate::StrError;
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Appends diagnostic records to a growing text log
///
/// The log accumulates one record per process invocation and spans many
/// invocations; opening never truncates previously written rows. There
/// is no locking across concurrent processes (the generating workflow
/// runs invocations sequentially).
pub struct DiagLog {
    /// The log file, opened in append mode
    file: File,
}

impl DiagLog {
    /// Opens (or creates) a log file in append mode
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn open<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            if !p.as_os_str().is_empty() {
                fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
            }
        }
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|_| "cannot open diagnostics log")?;
        Ok(DiagLog { file })
    }

    /// Appends one record as two whitespace-separated values
    ///
    /// The whole line is formatted first and written with a single call
    /// so the record reaches the file as one contiguous write.
    pub fn write_record(&mut self, time: f64, value: f64) -> Result<(), StrError> {
        let line = format!("{} {}\n", time, value);
        self.file
            .write_all(line.as_bytes())
            .map_err(|_| "cannot write to diagnostics log")?;
        self.file
            .flush()
            .map_err(|_| "cannot write to diagnostics log")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DiagLog;
    use crate::base::DEFAULT_TEST_DIR;
    use std::fs;

    #[test]
    fn open_and_write_record_work() {
        let path = format!("{}/diag_log_single.txt", DEFAULT_TEST_DIR);
        let _ = fs::remove_file(&path);
        let mut log = DiagLog::open(&path).unwrap();
        log.write_record(4.5, 0.125).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "4.5 0.125\n");
    }

    #[test]
    fn open_never_truncates() {
        let path = format!("{}/diag_log_append.txt", DEFAULT_TEST_DIR);
        let _ = fs::remove_file(&path);
        let labels = [0.5, 1.0, 1.5];
        for (k, time) in labels.iter().enumerate() {
            let mut log = DiagLog::open(&path).unwrap();
            log.write_record(*time, k as f64).unwrap();
        }
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        for (k, line) in lines.iter().enumerate() {
            let mut columns = line.split_whitespace();
            let time: f64 = columns.next().unwrap().parse().unwrap();
            let value: f64 = columns.next().unwrap().parse().unwrap();
            assert_eq!(time, labels[k]);
            assert_eq!(value, k as f64);
            assert_eq!(columns.next(), None);
        }
    }
}
