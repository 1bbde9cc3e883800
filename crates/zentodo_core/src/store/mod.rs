//! Task store layer.
//!
//! # Responsibility
//! - Own the authoritative in-memory task list.
//! - Keep the persisted mirror in sync after every mutation.
//!
//! # Invariants
//! - The mirror equals the in-memory list after every completed mutation.
//! - Store operations are total; they never surface errors to callers.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod task_store;
