//! Form state with inline per-field error messages.

use crate::model::client::{ClientId, ClientRecord, NewClient};
use crate::validation::{check_field, FieldCheck, FieldRole};
use std::collections::BTreeMap;

/// Editable client form: four inputs, an optional hidden id, and the inline
/// error currently shown next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    values: NewClient,
    hidden_id: Option<ClientId>,
    errors: BTreeMap<FieldRole, &'static str>,
}

impl ClientForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: NewClient) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &NewClient {
        &self.values
    }

    pub fn hidden_id(&self) -> Option<ClientId> {
        self.hidden_id
    }

    /// Sets the input named `input_name`; names without a field are ignored.
    ///
    /// Returns whether the name matched a form field.
    pub fn set_input(&mut self, input_name: &str, value: impl Into<String>) -> bool {
        match FieldRole::from_input_name(input_name) {
            Some(role) => {
                self.values.set_field(role, value);
                true
            }
            None => false,
        }
    }

    /// Fills all inputs and the hidden id from a stored record.
    pub fn populate(&mut self, record: &ClientRecord) {
        self.values = record.client.clone();
        self.hidden_id = Some(record.id);
        self.errors.clear();
    }

    /// Loss-of-focus handler: validates one input and shows or clears its
    /// inline message.
    ///
    /// Unknown input names have no rule and report valid.
    pub fn blur(&mut self, input_name: &str) -> bool {
        match FieldRole::from_input_name(input_name) {
            Some(role) => self.validate_field(role),
            None => true,
        }
    }

    /// Validates one field and updates its inline message.
    pub fn validate_field(&mut self, role: FieldRole) -> bool {
        match check_field(role, self.values.field(role)) {
            FieldCheck::Valid => {
                self.errors.remove(&role);
                true
            }
            FieldCheck::Invalid(message) => {
                self.errors.insert(role, message);
                false
            }
        }
    }

    /// Validates every field without short-circuiting so each failing input
    /// gets its message.
    pub fn validate_all(&mut self) -> bool {
        FieldRole::ALL
            .into_iter()
            .fold(true, |all_valid, role| self.validate_field(role) && all_valid)
    }

    /// Inline message currently shown for `role`.
    pub fn error(&self, role: FieldRole) -> Option<&'static str> {
        self.errors.get(&role).copied()
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldRole, &'static str)> + '_ {
        self.errors.iter().map(|(role, message)| (*role, *message))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::ClientForm;
    use crate::model::client::{ClientRecord, NewClient};
    use crate::validation::{FieldRole, REQUIRED_MESSAGE};

    #[test]
    fn blur_shows_then_clears_inline_error() {
        let mut form = ClientForm::new();
        assert!(!form.blur("telefono"));
        assert_eq!(form.error(FieldRole::Phone), Some(REQUIRED_MESSAGE));

        form.set_input("telefono", "612345678");
        assert!(form.blur("telefono"));
        assert_eq!(form.error(FieldRole::Phone), None);
    }

    #[test]
    fn validate_all_marks_every_failing_field() {
        let mut form = ClientForm::with_values(NewClient::new("An", "", "123", "Acme"));
        assert!(!form.validate_all());

        let failing = form.errors().map(|(role, _)| role).collect::<Vec<_>>();
        assert_eq!(
            failing,
            vec![FieldRole::Name, FieldRole::Email, FieldRole::Phone]
        );
    }

    #[test]
    fn unknown_inputs_are_ignored_and_valid() {
        let mut form = ClientForm::new();
        assert!(!form.set_input("id", "3"));
        assert!(form.blur("id"));
        assert!(!form.has_errors());
    }

    #[test]
    fn populate_sets_hidden_id_and_clears_errors() {
        let mut form = ClientForm::new();
        form.validate_all();
        assert!(form.has_errors());

        let record = ClientRecord::new(
            4,
            NewClient::new("Ana Lopez", "ana@example.com", "612345678", "Acme"),
        );
        form.populate(&record);

        assert_eq!(form.hidden_id(), Some(4));
        assert_eq!(form.values(), &record.client);
        assert!(!form.has_errors());
    }
}
