//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hold the one session store the UI renders from.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation returns the resulting snapshot so the UI can re-render
//!   without a second call.
//! - Malformed input (blank title, unknown or unparseable id) degrades to a
//!   no-op, never an error.

use log::debug;
use std::sync::{Mutex, OnceLock, PoisonError};
use tarefa_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    InMemoryTaskStore, Task, TaskService,
};
use uuid::Uuid;

// The UI holds no Rust state of its own, so the session store lives behind
// the FFI boundary for the process lifetime. Core itself stays free of
// globals; this is the single owned instance handed to it.
static SESSION: OnceLock<Mutex<TaskService<InMemoryTaskStore>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Render model for one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Stable task ID in string form, used as the list key and echoed back
    /// by toggle/delete calls.
    pub id: String,
    /// Trimmed display text.
    pub title: String,
    /// Completion flag driving strike-through styling.
    pub done: bool,
}

/// Adds a task from raw input text and returns the new snapshot.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Trimming happens here in core; the UI passes text through raw.
/// - Blank input returns the unchanged snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String) -> Vec<TaskView> {
    with_session(|service| to_views(service.add_task(title.as_str())))
}

/// Flips completion state of one task and returns the new snapshot.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown or unparseable ids return the unchanged snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(id: String) -> Vec<TaskView> {
    match parse_task_id(&id, "task_toggle") {
        Some(task_id) => with_session(|service| to_views(service.toggle_task(task_id))),
        None => task_list(),
    }
}

/// Removes one task and returns the new snapshot.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Unknown or unparseable ids return the unchanged snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_delete(id: String) -> Vec<TaskView> {
    match parse_task_id(&id, "task_delete") {
        Some(task_id) => with_session(|service| to_views(service.delete_task(task_id))),
        None => task_list(),
    }
}

/// Returns the current snapshot in insertion order.
///
/// # FFI contract
/// - Sync call, in-memory execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn task_list() -> Vec<TaskView> {
    with_session(|service| to_views(service.tasks()))
}

fn with_session<T>(f: impl FnOnce(&mut TaskService<InMemoryTaskStore>) -> T) -> T {
    let session = SESSION.get_or_init(|| Mutex::new(TaskService::new(InMemoryTaskStore::new())));
    // Store operations cannot panic, but a poisoned lock must still never
    // propagate a panic across the FFI boundary.
    let mut guard = session.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn parse_task_id(id: &str, operation: &str) -> Option<Uuid> {
    match Uuid::parse_str(id.trim()) {
        Ok(task_id) => Some(task_id),
        Err(_) => {
            debug!("event={operation} module=ffi status=noop reason=invalid_id");
            None
        }
    }
}

fn to_views(tasks: &[Task]) -> Vec<TaskView> {
    tasks
        .iter()
        .map(|task| TaskView {
            id: task.id.to_string(),
            title: task.title.clone(),
            done: task.done,
        })
        .collect()
}
