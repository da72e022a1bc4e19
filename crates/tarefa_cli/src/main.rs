//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tarefa_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tarefa_core::{InMemoryTaskStore, TaskService};

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("tarefa_core ping={}", tarefa_core::ping());
    println!("tarefa_core version={}", tarefa_core::core_version());

    let mut service = TaskService::new(InMemoryTaskStore::new());
    service.add_task("smoke task");
    let count_after_add = service.tasks().len();
    let id = service.tasks()[0].id;
    service.toggle_task(id);
    let done_after_toggle = service.tasks()[0].done;
    service.delete_task(id);
    println!(
        "tarefa_core store add={count_after_add} toggle_done={done_after_toggle} delete_empty={}",
        service.tasks().is_empty()
    );
}
