//! Client record domain model.
//!
//! # Invariants
//! - Every stored record is identified by a storage-assigned `ClientId`.
//! - Records are replaced wholesale on update; there is no partial patch.

pub mod client;
