//! In-memory slot implementation.
//!
//! # Responsibility
//! - Provide an ephemeral slot for tests and throwaway sessions.
//!
//! # Invariants
//! - A freshly constructed slot is absent until the first write.

use super::{SlotResult, StorageSlot};
use std::sync::Mutex;

/// Slot held in process memory. Starts absent.
#[derive(Debug, Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-loaded with `payload`, as if a prior session
    /// had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            cell: Mutex::new(Some(payload.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> SlotResult<Option<String>> {
        let cell = self
            .cell
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        Ok(cell.clone())
    }

    fn write(&self, payload: &str) -> SlotResult<()> {
        let mut cell = self
            .cell
            .lock()
            .unwrap_or_else(|poison| poison.into_inner());
        *cell = Some(payload.to_string());
        Ok(())
    }
}
