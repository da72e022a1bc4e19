//! Store layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the collection-mutation contract the presentation layer
//!   programs against.
//! - Isolate collection bookkeeping from service/business orchestration.
//!
//! # Invariants
//! - Store writes go through `normalize_title` before any insertion.
//! - Store operations never fail; malformed input degrades to a no-op.

pub mod task_store;
