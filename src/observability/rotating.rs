//! Size-rotated append-only file.
//!
//! Lines are appended to one active file. Once it grows past the size limit it
//! is renamed to `<file>.<utc timestamp>.<sequence>` and a fresh file is
//! started; only the newest backups are kept.
//!
//! Backup names sort in rotation order: the timestamp is UTC and fixed width,
//! and the sequence only ever increases for a given sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Default size threshold (10 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated backups to keep.
pub const DEFAULT_BACKUPS: usize = 3;

/// Thread-safe line sink with size-based rotation.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
    sequence: AtomicU64,
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

impl RotatingFile {
    /// Opens lazily on first write with the default limits.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
            sequence: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening or writing, and an error if
    /// the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let size = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if size > self.max_bytes {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }
        let file = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file unavailable"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn backup_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("trace");
        format!("{name}.")
    }

    fn backup_path(&self, stamp: &str) -> PathBuf {
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.path
            .with_file_name(format!("{}{stamp}.{seq:020}", self.backup_prefix()))
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ").to_string();
        let mut backup = self.backup_path(&stamp);
        while backup.exists() {
            backup = self.backup_path(&stamp);
        }

        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }
        self.prune()
    }

    /// Deletes all but the newest `backups` rotated files.
    fn prune(&self) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let prefix = self.backup_prefix();

        let mut rotated: Vec<PathBuf> = fs::read_dir(&dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // newest first
        rotated.sort_by(|a, b| b.cmp(a));
        for old in rotated.iter().skip(self.backups) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotated_count(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::new(dir.path().join("trace.json"));
        sink.write_line("{\"a\":1}").unwrap();
        sink.write_line("{\"b\":2}").unwrap();

        let text = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(text, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_and_keeps_limited_backups() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        for i in 0..6 {
            sink.write_line(&format!("line-number-{i}")).unwrap();
        }

        assert_eq!(rotated_count(dir.path()), 2);
        let active = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(active, "line-number-5\n");
    }

    #[test]
    fn pruning_keeps_the_most_recent_backups() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::with_limits(dir.path().join("trace.json"), 8, 2);

        // every write past the first rotates out the previous line
        for i in 0..40 {
            sink.write_line(&format!("line-number-{i}")).unwrap();
        }

        let mut kept: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("trace.json."))
            .map(|e| fs::read_to_string(e.path()).unwrap())
            .collect();
        kept.sort();

        assert_eq!(kept, ["line-number-37\n", "line-number-38\n"]);
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "line-number-39\n");
    }

    #[test]
    fn backup_names_sort_in_rotation_order() {
        let dir = tempfile::tempdir().unwrap();
        let sink = RotatingFile::with_limits(dir.path().join("trace.json"), 0, 10);

        for i in 0..5 {
            sink.write_line(&format!("{i}")).unwrap();
        }

        let mut names: Vec<PathBuf> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(std::result::Result::ok)
            .map(|e| e.path())
            .filter(|p| p.file_name().unwrap().to_string_lossy().starts_with("trace.json."))
            .collect();
        names.sort();

        let contents: Vec<String> = names
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(contents, ["0\n", "1\n", "2\n", "3\n"]);
    }
}
