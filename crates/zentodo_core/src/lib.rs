//! Core domain logic for ZenTodo.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod slot;
pub mod store;
pub mod transition;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use slot::{FileSlot, MemorySlot, SlotError, SlotResult, StorageSlot, SLOT_KEY};
pub use store::task_store::{decode_tasks, encode_tasks, Progress, TaskStore};
pub use transition::{
    defer, DeferHandle, GatePass, InputGate, ADD_SETTLE_DELAY, REMOVE_SETTLE_DELAY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
