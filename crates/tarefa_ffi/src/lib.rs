//! Flutter-facing FFI crate for Tarefa.
//!
//! # Responsibility
//! - Re-export the FRB API surface consumed by the Dart side.
//! - Keep presentation concerns out of `tarefa_core`.

pub mod api;
