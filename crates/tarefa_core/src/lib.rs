//! Core domain logic for Tarefa.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use service::task_service::TaskService;
pub use store::task_store::{InMemoryTaskStore, TaskStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
