//! Rotating file writer for the trace export.
//!
//! Each write appends one line. Before writing, the current file is checked
//! against a size limit; once exceeded it is renamed with a timestamp suffix
//! and a fresh file is started. Only the newest few backups are kept.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
///
/// Backups are named `<file>.<UTC timestamp>`, e.g.
/// `movie-explorer-otlp.json.20261019T101500123`, so they sort by age.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    /// Opened on first write.
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default 10 MB / 3 backup limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if rotating, opening, or writing fails, or if the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *writer = None;
            self.rotate()?;
        }

        let file = match writer.as_mut() {
            Some(file) => file,
            None => writer.insert(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            ),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|metadata| metadata.len() > self.max_bytes)
    }

    fn backup_prefix(&self) -> io::Result<String> {
        self.file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::other("trace file has no valid name"))
    }

    /// Renames the full file to a timestamped backup and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%3f");
        let backup_path = self
            .file_path
            .with_file_name(format!("{}{stamp}", self.backup_prefix()?));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.prune_backups()
    }

    /// Deletes the oldest backups beyond the retention limit.
    ///
    /// Individual delete failures are ignored so one stuck file cannot stop
    /// the export.
    fn prune_backups(&self) -> io::Result<()> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::other("trace file has no parent directory"))?;
        let prefix = self.backup_prefix()?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically; newest first.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old_backup in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups_in(dir: &std::path::Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with("trace.json."))
            })
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_over_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(backups_in(dir.path()), 1);
    }

    #[test]
    fn prunes_old_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        for stamp in ["20240101T000000000", "20240102T000000000", "20240103T000000000"] {
            fs::write(dir.path().join(format!("trace.json.{stamp}")), "old").unwrap();
        }

        let writer = FileWriter::with_limits(path, 0, 2);
        writer.write_line("first").unwrap();
        writer.write_line("second").unwrap();

        assert_eq!(backups_in(dir.path()), 2);
        assert!(!dir.path().join("trace.json.20240101T000000000").exists());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("missing").join("trace.json"));
        assert!(writer.write_line("x").is_err());
    }
}
