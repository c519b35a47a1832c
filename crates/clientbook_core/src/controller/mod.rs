//! Toolkit-free controllers for the listing/create and edit surfaces.
//!
//! # Responsibility
//! - Drive validation and persistence for form submissions.
//! - Produce render models (`ListingRow`) and navigation outcomes.
//!
//! # Invariants
//! - Storage failures are logged and degraded here; they never escape as
//!   errors to the presentation layer.
//! - Validation messages are the only user-visible failures.

pub mod edit;
pub mod form;
pub mod listing;

use crate::model::client::ClientId;

/// Destination a presentation layer should show after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Listing,
}

/// Result of submitting a create or edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was written.
    Blocked,
    /// Validation passed and a write was attempted.
    ///
    /// `persisted` is `None` when the write failed and was logged.
    Navigate {
        to: View,
        persisted: Option<ClientId>,
    },
}

impl SubmitOutcome {
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}
