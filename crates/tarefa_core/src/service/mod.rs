//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from collection bookkeeping.

pub mod task_service;
