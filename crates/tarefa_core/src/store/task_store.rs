//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative ordered task collection.
//! - Provide the three mutations (add, toggle, delete) plus snapshot reads.
//!
//! # Invariants
//! - Collection order is exactly the order of successful adds, with deleted
//!   tasks removed and no other reordering.
//! - All task ids in the collection are pairwise distinct.
//! - No operation returns an error or panics; blank titles and unknown ids
//!   are silent no-ops.

use crate::model::task::{normalize_title, Task, TaskId};
use log::debug;

/// Mutation and snapshot contract for the task collection.
///
/// Every mutation returns the resulting snapshot so callers can re-render
/// without a second read. There is no state for which an operation is
/// disallowed; invalid input leaves the collection untouched.
pub trait TaskStore {
    /// Trims `raw_title` and appends a new open task when non-blank.
    ///
    /// Blank input (empty or whitespace-only) changes nothing.
    fn add(&mut self, raw_title: &str) -> &[Task];

    /// Flips the `done` flag of the task with `id`, if present.
    ///
    /// Unknown ids change nothing. Order and all other tasks are untouched.
    fn toggle(&mut self, id: TaskId) -> &[Task];

    /// Removes the task with `id`, if present.
    ///
    /// Remaining tasks keep their relative order. Unknown ids change
    /// nothing.
    fn delete(&mut self, id: TaskId) -> &[Task];

    /// Current ordered collection.
    fn snapshot(&self) -> &[Task];
}

/// Vec-backed store with session lifetime and no persistence.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for InMemoryTaskStore {
    fn add(&mut self, raw_title: &str) -> &[Task] {
        // Titles are user text and never appear in log output.
        match normalize_title(raw_title) {
            Some(title) => {
                let task = Task::new(title);
                debug!(
                    "event=task_add module=store status=ok id={} count={}",
                    task.id,
                    self.tasks.len() + 1
                );
                self.tasks.push(task);
            }
            None => {
                debug!("event=task_add module=store status=noop reason=blank_title");
            }
        }
        &self.tasks
    }

    fn toggle(&mut self, id: TaskId) -> &[Task] {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.done = !task.done;
                debug!(
                    "event=task_toggle module=store status=ok id={} done={}",
                    id, task.done
                );
            }
            None => {
                debug!("event=task_toggle module=store status=noop reason=unknown_id id={id}");
            }
        }
        &self.tasks
    }

    fn delete(&mut self, id: TaskId) -> &[Task] {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_delete module=store status=noop reason=unknown_id id={id}");
        } else {
            debug!(
                "event=task_delete module=store status=ok id={} count={}",
                id,
                self.tasks.len()
            );
        }
        &self.tasks
    }

    fn snapshot(&self) -> &[Task] {
        &self.tasks
    }
}
