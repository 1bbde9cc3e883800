//! File-backed slot implementation.
//!
//! # Responsibility
//! - Map the slot contract onto one JSON file under a data directory.
//! - Emit slot I/O logging events with duration and status.
//!
//! # Invariants
//! - An absent file reads as an absent slot, not an error.
//! - The parent directory is created before the first write.

use super::{SlotResult, StorageSlot, SLOT_KEY};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Slot stored as `<dir>/zen-todos.json`.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Creates a slot rooted in `dir`, addressed by [`SLOT_KEY`].
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SLOT_KEY}.json")),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> SlotResult<Option<String>> {
        let started_at = Instant::now();
        match fs::read_to_string(&self.path) {
            Ok(payload) => {
                info!(
                    "event=slot_read module=slot status=ok bytes={} duration_ms={}",
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Some(payload))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=slot_read module=slot status=absent duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(None)
            }
            Err(err) => {
                error!(
                    "event=slot_read module=slot status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    fn write(&self, payload: &str) -> SlotResult<()> {
        let started_at = Instant::now();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        match fs::write(&self.path, payload) {
            Ok(()) => {
                info!(
                    "event=slot_write module=slot status=ok bytes={} duration_ms={}",
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=slot_write module=slot status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
