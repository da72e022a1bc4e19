//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record shared by store, service and FFI
//!   projections.
//! - Provide title normalization used by every insertion path.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty and carries no leading/trailing whitespace once a
//!   task exists.
//! - `done` starts as `false` and changes only through store toggling.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Random v4 generation keeps ids collision-free even for rapid successive
/// inserts within the same millisecond.
pub type TaskId = Uuid;

/// Validation failure for task records built from caller-provided parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The nil UUID is reserved and never a valid task identity.
    NilId,
    /// Title is empty or whitespace-only after trimming.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical record for one to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for toggling, deletion and UI keying.
    pub id: TaskId,
    /// Trimmed, non-empty display text. Immutable after creation.
    pub title: String,
    /// Completion flag, flipped by the store's toggle operation.
    pub done: bool,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    ///
    /// Callers must pass an already-normalized title; raw user input goes
    /// through [`normalize_title`] first.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
        }
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by callers where identity already exists externally, and by
    /// tests that need deterministic ids.
    ///
    /// # Errors
    /// - [`TaskValidationError::NilId`] for the nil UUID.
    /// - [`TaskValidationError::BlankTitle`] for blank titles.
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            done: false,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Normalizes raw user input into an insertable title.
///
/// Trims leading/trailing whitespace and returns `None` when nothing
/// remains. This is the single entry point for the "non-empty after
/// trimming" rule; the store treats `None` as a silent rejection.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
