//! remixer-storage
//!
//! Saved-items persistence. Thin CRUD facade over a remote PostgREST table,
//! with an in-process backend for tests.

pub mod backend;
pub mod error;
pub mod memory;
pub mod postgrest;
pub mod store;
