//! Listing/create controller.
//!
//! # Responsibility
//! - Render the stored clients as table rows.
//! - Drive the create form and delete-then-refresh sequence.
//!
//! # Invariants
//! - Every render clears previous rows first.
//! - An unreadable store renders as an empty listing.

use super::form::ClientForm;
use super::{SubmitOutcome, View};
use crate::model::client::{ClientId, ClientRecord};
use crate::repo::client_repo::ClientRepository;
use crate::service::client_service::ClientService;
use log::{error, info, warn};

/// One rendered listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub phone: String,
    pub company: String,
    /// Query string of the edit link, e.g. `id=3`.
    pub edit_query: String,
    /// Identifier the delete control is tagged with.
    pub delete_id: ClientId,
}

impl From<ClientRecord> for ListingRow {
    fn from(record: ClientRecord) -> Self {
        Self {
            name: record.client.name,
            phone: record.client.phone,
            company: record.client.company,
            edit_query: edit_query(record.id),
            delete_id: record.id,
        }
    }
}

/// Builds the edit-link query string for `id`.
pub fn edit_query(id: ClientId) -> String {
    format!("id={id}")
}

pub struct ListController<'svc, R: ClientRepository> {
    service: &'svc ClientService<R>,
    rows: Vec<ListingRow>,
    form: ClientForm,
}

impl<'svc, R: ClientRepository> ListController<'svc, R> {
    pub fn new(service: &'svc ClientService<R>) -> Self {
        Self {
            service,
            rows: Vec::new(),
            form: ClientForm::new(),
        }
    }

    /// Clears rendered rows and renders one row per stored client.
    pub fn refresh(&mut self) -> &[ListingRow] {
        self.rows.clear();
        match self.service.list_clients() {
            Ok(records) => {
                self.rows.extend(records.into_iter().map(ListingRow::from));
                info!(
                    "event=client_list module=controller status=ok count={}",
                    self.rows.len()
                );
            }
            Err(err) => {
                error!(
                    "event=client_list module=controller status=error error_code=read_failed error={err}"
                );
            }
        }
        &self.rows
    }

    /// Deletes `id`, then re-renders the listing.
    pub fn delete(&mut self, id: ClientId) -> &[ListingRow] {
        match self.service.delete_client(id) {
            Ok(()) => info!("event=client_delete module=controller status=ok id={id}"),
            Err(err) => error!(
                "event=client_delete module=controller status=error id={id} error_code=delete_failed error={err}"
            ),
        }
        self.refresh()
    }

    pub fn form(&self) -> &ClientForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ClientForm {
        &mut self.form
    }

    /// Create-form submission: validates all fields, then persists.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.validate_all() {
            warn!("event=client_create module=controller status=blocked reason=validation");
            return SubmitOutcome::Blocked;
        }

        let persisted = match self.service.create_client(self.form.values()) {
            Ok(id) => {
                info!("event=client_create module=controller status=ok id={id}");
                Some(id)
            }
            Err(err) => {
                error!(
                    "event=client_create module=controller status=error error_code=create_failed error={err}"
                );
                None
            }
        };

        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted,
        }
    }
}
