//! Append-only history log
//!
//! One JSON object per line, oldest first.

use std::path::{Path, PathBuf};

use crate::error::{FilamentError, FilamentResult};
use crate::storage::file_io::{append_text, read_text};

use super::entry::AuditEntry;

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> FilamentResult<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        append_text(&self.log_path, &line)
    }

    /// Every entry in the log; a missing log is empty
    pub fn read_all(&self) -> FilamentResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let contents = read_text(&self.log_path)?;
        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    FilamentError::Json(format!(
                        "Failed to parse history entry on line {}: {}",
                        index + 1,
                        e
                    ))
                })
            })
            .collect()
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> FilamentResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{Change, Operation};
    use crate::models::SpoolRecord;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_logger() -> (TempDir, AuditLogger) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (temp_dir, logger)
    }

    fn added(color: &str) -> AuditEntry {
        AuditEntry::spool_added(&SpoolRecord::new("PLA", color, 1000))
    }

    #[test]
    fn test_log_and_read() {
        let (_temp_dir, logger) = create_test_logger();

        logger.log(&added("WHITE")).unwrap();
        logger.log(&AuditEntry::warning_level_changed(Some(250), 300)).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation(), Operation::Create);
        assert_eq!(
            entries[1].change,
            Change::WarningLevelChanged {
                previous: Some(250),
                current: 300
            }
        );
        assert_eq!(fs::read_to_string(logger.path()).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_read_recent() {
        let (_temp_dir, logger) = create_test_logger();

        for i in 0..10 {
            logger.log(&added(&format!("C{}", i))).unwrap();
        }

        let subjects: Vec<_> = logger
            .read_recent(3)
            .unwrap()
            .iter()
            .map(|e| e.change.subject())
            .collect();
        assert_eq!(subjects, vec!["PLA/C7", "PLA/C8", "PLA/C9"]);
        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (_temp_dir, logger) = create_test_logger();

        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
        assert!(!logger.path().exists());
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (_temp_dir, logger) = create_test_logger();
        logger.log(&added("WHITE")).unwrap();
        append_text(logger.path(), "{not json}\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
