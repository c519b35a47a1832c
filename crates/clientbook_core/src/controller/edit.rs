//! Edit controller.
//!
//! # Responsibility
//! - Pre-populate the edit form from an existing record.
//! - Drive the update flow keyed by the hidden id.
//!
//! # Invariants
//! - A missing record leaves the form empty and is only logged.
//! - Updates never create records; a vanished id is logged and degraded.

use super::form::ClientForm;
use super::{SubmitOutcome, View};
use crate::model::client::ClientId;
use crate::repo::client_repo::ClientRepository;
use crate::service::client_service::ClientService;
use log::{error, info, warn};

/// Reads the `id` parameter from a `?key=value&...` query string.
///
/// Values are form-urlencoded decoded (`id=%31` is 1) and the first `id`
/// wins. Leading digits are parsed and trailing garbage ignored (`"12abc"` is
/// 12). Missing, non-numeric or zero values yield `None`.
pub fn parse_id_param(query: &str) -> Option<ClientId> {
    let raw = form_urlencoded::parse(query.trim().trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value)?;
    let value = raw.trim();

    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    let parsed = digits[..end].parse::<ClientId>().ok()?;
    let id = if negative { -parsed } else { parsed };

    (id != 0).then_some(id)
}

pub struct EditController<'svc, R: ClientRepository> {
    service: &'svc ClientService<R>,
    form: ClientForm,
}

impl<'svc, R: ClientRepository> EditController<'svc, R> {
    pub fn new(service: &'svc ClientService<R>) -> Self {
        Self {
            service,
            form: ClientForm::new(),
        }
    }

    /// Bootstraps from a page query string; loads only when `id` parses.
    pub fn load_from_query(&mut self, query: &str) -> bool {
        match parse_id_param(query) {
            Some(id) => self.load(id),
            None => false,
        }
    }

    /// Populates the form from the record at `id`.
    ///
    /// Returns whether a record was found. Read failures and missing records
    /// leave the form untouched.
    pub fn load(&mut self, id: ClientId) -> bool {
        match self.service.find_client(id) {
            Ok(Some(record)) => {
                self.form.populate(&record);
                info!("event=client_load module=controller status=ok id={id}");
                true
            }
            Ok(None) => {
                warn!(
                    "event=client_load module=controller status=error id={id} error_code=not_found"
                );
                false
            }
            Err(err) => {
                error!(
                    "event=client_load module=controller status=error id={id} error_code=read_failed error={err}"
                );
                false
            }
        }
    }

    pub fn form(&self) -> &ClientForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ClientForm {
        &mut self.form
    }

    /// Edit-form submission: validates all fields, then replaces the record
    /// named by the hidden id.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.validate_all() {
            warn!("event=client_update module=controller status=blocked reason=validation");
            return SubmitOutcome::Blocked;
        }

        let persisted = match self.form.hidden_id() {
            Some(id) => match self.service.update_client(id, self.form.values()) {
                Ok(()) => {
                    info!("event=client_update module=controller status=ok id={id}");
                    Some(id)
                }
                Err(err) => {
                    error!(
                        "event=client_update module=controller status=error id={id} error_code=update_failed error={err}"
                    );
                    None
                }
            },
            None => {
                error!(
                    "event=client_update module=controller status=error error_code=missing_id"
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
