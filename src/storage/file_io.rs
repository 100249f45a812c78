//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::FilamentError;

/// Read a whole text file
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, FilamentError> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(|e| FilamentError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FilamentError> {
    write_atomic(path.as_ref(), |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| FilamentError::Io(format!("Failed to write data: {}", e)))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FilamentError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(writer, data)
            .map_err(|e| FilamentError::Json(format!("Failed to serialize data: {}", e)))
    })
}

fn write_atomic<F>(path: &Path, write_body: F) -> Result<(), FilamentError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), FilamentError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FilamentError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| FilamentError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let result = write_body(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| FilamentError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| FilamentError::Io(format!("Failed to sync data: {}", e)))
        });

    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FilamentError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Append text to the end of a file, creating it if needed
///
/// If the existing content does not end with a newline, one is written first
/// so the appended text starts on its own line.
pub fn append_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FilamentError> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| FilamentError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let needs_newline = ends_without_newline(&mut file)
        .map_err(|e| FilamentError::Io(format!("Failed to inspect {}: {}", path.display(), e)))?;

    let mut buffer = String::with_capacity(contents.len() + 1);
    if needs_newline {
        buffer.push('\n');
    }
    buffer.push_str(contents);

    file.write_all(buffer.as_bytes())
        .map_err(|e| FilamentError::Io(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| FilamentError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn ends_without_newline(file: &mut File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
