//! Client record model.
//!
//! # Responsibility
//! - Define the record shape shared by storage, validation and controllers.
//! - Keep the persisted field names (`nombre`, `telefono`, `empresa`) on the
//!   serialized form.
//!
//! # Invariants
//! - `id` is assigned by storage on create and never changes afterwards.
//! - Field values are kept exactly as provided; validation trims only for
//!   checking.

use crate::validation::{validate_client, ClientValidationError, FieldRole};
use serde::{Deserialize, Serialize};

/// Storage-assigned integer identifier.
pub type ClientId = i64;

/// Client fields without an identifier, as submitted by the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            company: company.into(),
        }
    }

    /// Returns the raw value bound to `role`.
    pub fn field(&self, role: FieldRole) -> &str {
        match role {
            FieldRole::Name => &self.name,
            FieldRole::Email => &self.email,
            FieldRole::Phone => &self.phone,
            FieldRole::Company => &self.company,
        }
    }

    /// Replaces the raw value bound to `role`.
    pub fn set_field(&mut self, role: FieldRole, value: impl Into<String>) {
        let slot = match role {
            FieldRole::Name => &mut self.name,
            FieldRole::Email => &mut self.email,
            FieldRole::Phone => &mut self.phone,
            FieldRole::Company => &mut self.company,
        };
        *slot = value.into();
    }

    /// Checks every field against the rule table.
    ///
    /// # Errors
    /// - Returns the first failing field in `FieldRole::ALL` order.
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        validate_client(self)
    }
}

/// A stored client: identifier plus the full field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: ClientId,
    #[serde(flatten)]
    pub client: NewClient,
}

impl ClientRecord {
    pub fn new(id: ClientId, client: NewClient) -> Self {
        Self { id, client }
    }
}
