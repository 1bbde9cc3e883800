//! Task domain model.
//!
//! # Responsibility
//! - Define the sole entity of the system: one to-do item record.
//! - Enforce construction-time validation (trimmed, non-empty text).
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming.
//! - `created_at` is immutable for the task's lifetime.
//!
//! # See also
//! - docs/architecture/data-model.md

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Construction-time validation failures for [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Input text was empty or whitespace-only after trimming.
    EmptyText,
    /// Caller supplied the nil UUID as a task id.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text must not be empty after trimming"),
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item record.
///
/// Field names follow the persisted wire shape; `created_at` is serialized
/// as `createdAt` in RFC 3339 text so the stored form round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used only for lookup and removal.
    pub id: TaskId,
    /// Trimmed, non-empty item text.
    pub text: String,
    /// Completion flag. Starts `false`.
    pub completed: bool,
    /// Creation timestamp, used only for display formatting.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task with a generated stable id.
    ///
    /// Trims `text` and stamps the current time.
    ///
    /// # Errors
    /// - `EmptyText` when `text` trims to nothing.
    pub fn new(text: impl Into<String>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), text, false, Utc::now())
    }

    /// Creates a task with caller-provided identity and state.
    ///
    /// Used by load/import paths where identity already exists.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyText` when `text` trims to nothing.
    pub fn with_id(
        id: TaskId,
        text: impl Into<String>,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(TaskValidationError::EmptyText);
        }
        Ok(Self {
            id,
            text,
            completed,
            created_at,
        })
    }

    /// Flips the completion flag. The only mutation a task supports.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
