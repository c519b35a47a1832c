//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage accessor contract (create, read-all, update, delete).
//! - Isolate SQLite query details from service/controller orchestration.
//!
//! # Invariants
//! - Write paths validate the record before any SQL mutation.
//! - Missing records surface as `NotFound`, never as silent upserts.

pub mod client_repo;
