//! File sink implementation

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::Sink;
use crate::error::{LogError, LogResult};

/// A sink that appends to a file
///
/// The file is opened (or created) once, in append mode, and stays open until
/// the last handle to the sink is dropped.
///
/// # Example
///
/// ```no_run
/// use levelog::sink::FileSink;
///
/// let sink = FileSink::open("/var/log/myapp.log")?;
/// # Ok::<(), levelog::LogError>(())
/// ```
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open a file for appending, creating it if needed
    ///
    /// A trailing `/` on the path is ignored. Fails with
    /// `LogError::SinkUnavailable` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = normalize_path(path.as_ref());
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::sink_unavailable(&path, e))?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn normalize_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match raw.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => PathBuf::from(trimmed),
        _ => path.to_path_buf(),
    }
}

impl Sink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.file.lock().write_all(record)
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self.file.lock();
        file.flush()?;
        file.sync_data()
    }
}
