//! Persistent slot boundary and implementations.
//!
//! # Responsibility
//! - Define the key-value slot contract the store persists through.
//! - Keep file-system details behind the slot boundary.
//!
//! # Invariants
//! - `read` distinguishes an absent slot (`Ok(None)`) from transport errors.
//! - `write` is a full-replace overwrite of any prior payload.
//!
//! # See also
//! - docs/architecture/data-model.md

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key addressing the persisted task list.
pub const SLOT_KEY: &str = "zen-todos";

pub type SlotResult<T> = Result<T, SlotError>;

/// Transport error for slot reads and writes.
#[derive(Debug)]
pub enum SlotError {
    Io(std::io::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Key-value slot holding one serialized payload.
pub trait StorageSlot {
    /// Reads the current payload. `Ok(None)` when the slot is absent.
    fn read(&self) -> SlotResult<Option<String>>;

    /// Overwrites the slot with `payload`.
    fn write(&self, payload: &str) -> SlotResult<()>;
}

impl<S: StorageSlot + ?Sized> StorageSlot for &S {
    fn read(&self) -> SlotResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, payload: &str) -> SlotResult<()> {
        (**self).write(payload)
    }
}
