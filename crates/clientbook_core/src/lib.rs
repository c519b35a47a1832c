//! Core domain logic for Clientbook, a local client contact store.
//! This crate owns record persistence, field validation and the
//! toolkit-free controllers any presentation layer drives.

pub mod controller;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use controller::edit::{parse_id_param, EditController};
pub use controller::form::ClientForm;
pub use controller::listing::{ListController, ListingRow};
pub use controller::{SubmitOutcome, View};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status};
pub use model::client::{ClientId, ClientRecord, NewClient};
pub use repo::client_repo::{
    ClientRepository, RepoError, RepoResult, SqliteClientRepository, UnavailableClientRepository,
};
pub use service::client_service::ClientService;
pub use validation::{
    check_field, check_input, ClientValidationError, FieldCheck, FieldRole, REQUIRED_MESSAGE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
