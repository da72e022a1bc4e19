//! Task use-case service.
//!
//! # Responsibility
//! - Provide stable add/toggle/delete/list entry points for core callers.
//! - Delegate collection mutation to store implementations.
//!
//! # Invariants
//! - Service APIs never bypass store normalization.
//! - The service owns exactly one store instance, passed in explicitly;
//!   core holds no ambient singletons.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::TaskStore;

/// Use-case facade over the task store.
///
/// Presentation layers hold one of these for the session and re-render
/// from whatever snapshot comes back.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds a task from raw user input; blank input is a silent no-op.
    pub fn add_task(&mut self, raw_title: &str) -> &[Task] {
        self.store.add(raw_title)
    }

    /// Flips completion state of one task; unknown ids are a no-op.
    pub fn toggle_task(&mut self, id: TaskId) -> &[Task] {
        self.store.toggle(id)
    }

    /// Removes one task; unknown ids are a no-op.
    pub fn delete_task(&mut self, id: TaskId) -> &[Task] {
        self.store.delete(id)
    }

    /// Current ordered snapshot.
    pub fn tasks(&self) -> &[Task] {
        self.store.snapshot()
    }
}
