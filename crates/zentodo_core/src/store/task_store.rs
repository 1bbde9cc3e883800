//! Authoritative task list plus its persisted mirror.
//!
//! # Responsibility
//! - Apply add/toggle/delete mutations to the ordered task list.
//! - Serialize the full list to the slot after every mutation.
//! - Derive completion progress for the surface to render.
//!
//! # Invariants
//! - New tasks are inserted at the front (newest-first order).
//! - Mutations are total: invalid input degrades to a no-op, never an error.
//! - A malformed persisted payload degrades to an empty list at load time.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::task::{Task, TaskId};
use crate::slot::StorageSlot;
use log::{info, warn};

/// Derived completion counters. Computed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Tasks with `completed == true`.
    pub completed: usize,
    /// Total tasks in the list.
    pub total: usize,
}

impl Progress {
    /// Completed share of the list, `0.0` for an empty list.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Owning container for the task list and its persistence logic.
pub struct TaskStore<S: StorageSlot> {
    slot: S,
    tasks: Vec<Task>,
}

impl<S: StorageSlot> TaskStore<S> {
    /// Opens the store over `slot`, loading any previously persisted list.
    ///
    /// # Degradation
    /// - Absent slot -> empty list.
    /// - Unreadable slot or malformed payload -> empty list, logged, no
    ///   error escapes to the caller.
    pub fn open(slot: S) -> Self {
        let tasks = match slot.read() {
            Ok(Some(payload)) => match decode_tasks(&payload) {
                Ok(tasks) => {
                    info!(
                        "event=store_load module=store status=ok tasks={}",
                        tasks.len()
                    );
                    tasks
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=degraded error_code=malformed_payload error={err}"
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("event=store_load module=store status=ok tasks=0 slot=absent");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=degraded error_code=slot_unreadable error={err}"
                );
                Vec::new()
            }
        };
        Self { slot, tasks }
    }

    /// Adds a task to the front of the list and returns the updated list.
    ///
    /// Empty or whitespace-only `text` is a no-op.
    pub fn add(&mut self, text: &str) -> &[Task] {
        match Task::new(text) {
            Ok(task) => {
                self.tasks.insert(0, task);
                self.persist();
            }
            Err(_) => {
                info!("event=store_add module=store status=noop reason=empty_text");
            }
        }
        &self.tasks
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns whether a task changed; an unknown id is a no-op.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            info!("event=store_toggle module=store status=noop id={id}");
            return false;
        };
        task.toggle();
        self.persist();
        true
    }

    /// Removes the task with `id`.
    ///
    /// Returns whether a task was removed; an unknown id is a no-op.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            info!("event=store_delete module=store status=noop id={id}");
            return false;
        }
        self.persist();
        true
    }

    /// Current list, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived completion counters.
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.tasks.iter().filter(|task| task.completed).count(),
            total: self.tasks.len(),
        }
    }

    // Full-replace write of the current list. Write failures are logged and
    // swallowed; the in-memory list stays authoritative for this session.
    fn persist(&self) {
        let payload = match encode_tasks(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(
                    "event=store_persist module=store status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.slot.write(&payload) {
            warn!(
                "event=store_persist module=store status=error error_code=slot_write_failed error={err}"
            );
        }
    }
}

/// Serializes a task list into the persisted wire form.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parses a persisted payload back into a task list.
pub fn decode_tasks(payload: &str) -> Result<Vec<Task>, serde_json::Error> {
    serde_json::from_str(payload)
}
