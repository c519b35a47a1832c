use clientbook_core::db::open_db_in_memory;
use clientbook_core::{
    ClientForm, ClientRecord, ClientRepository, ClientService, EditController, FieldRole,
    ListController, NewClient, SqliteClientRepository, SubmitOutcome, UnavailableClientRepository,
    View, REQUIRED_MESSAGE,
};

fn fill(form: &mut ClientForm, inputs: &[(&str, &str)]) {
    for (name, value) in inputs {
        assert!(form.set_input(name, *value), "unknown input {name}");
    }
}

#[test]
fn valid_create_submission_persists_one_record_and_navigates() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let mut list = ListController::new(&service);

    fill(
        list.form_mut(),
        &[
            ("nombre", "Juan Perez"),
            ("email", "juan@example.com"),
            ("telefono", "612345678"),
            ("empresa", "Acme Corp"),
        ],
    );
    let outcome = list.submit();

    let records = service.list_clients().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted: Some(records[0].id),
        }
    );
    assert_eq!(records[0].client.name, "Juan Perez");
}

#[test]
fn missing_email_blocks_submission_with_required_message() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let mut list = ListController::new(&service);

    fill(
        list.form_mut(),
        &[
            ("nombre", "Juan Perez"),
            ("telefono", "612345678"),
            ("empresa", "Acme Corp"),
        ],
    );
    let outcome = list.submit();

    assert!(outcome.is_blocked());
    assert!(service.list_clients().unwrap().is_empty());
    assert_eq!(list.form().error(FieldRole::Email), Some(REQUIRED_MESSAGE));
    assert_eq!(list.form().error(FieldRole::Name), None);
}

#[test]
fn listing_renders_rows_and_refreshes_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClientRepository::try_new(&conn).unwrap();
    let first = repo
        .create_client(&NewClient::new(
            "Juan Perez",
            "juan@example.com",
            "612345678",
            "Acme Corp",
        ))
        .unwrap();
    let second = repo
        .create_client(&NewClient::new(
            "Ana Lopez",
            "ana@example.org",
            "698765432",
            "Globex",
        ))
        .unwrap();
    let service = ClientService::new(repo);
    let mut list = ListController::new(&service);

    let rows = list.refresh().to_vec();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Juan Perez");
    assert_eq!(rows[0].phone, "612345678");
    assert_eq!(rows[0].company, "Acme Corp");
    assert_eq!(rows[0].edit_query, format!("id={first}"));
    assert_eq!(rows[1].delete_id, second);

    // Re-rendering does not duplicate rows.
    assert_eq!(list.refresh().len(), 2);

    let after_delete = list.delete(first);
    assert_eq!(after_delete.len(), 1);
    assert_eq!(after_delete[0].delete_id, second);
}

#[test]
fn edit_flow_loads_record_and_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let id = service
        .create_client(&NewClient::new(
            "Juan Perez",
            "juan@example.com",
            "612345678",
            "Acme Corp",
        ))
        .unwrap();

    let mut edit = EditController::new(&service);
    assert!(edit.load_from_query(&format!("?id={id}")));
    assert_eq!(edit.form().hidden_id(), Some(id));
    assert_eq!(edit.form().values().email, "juan@example.com");

    edit.form_mut().set_input("empresa", "Initech");
    let outcome = edit.submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted: Some(id),
        }
    );
    let records = service.list_clients().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].client.company, "Initech");
}

#[test]
fn edit_load_of_unknown_id_leaves_form_empty() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let mut edit = EditController::new(&service);

    assert!(!edit.load(77));
    assert!(!edit.load_from_query("?id=abc"));
    assert_eq!(edit.form().hidden_id(), None);
    assert_eq!(edit.form().values(), &NewClient::default());
    assert!(!edit.form().has_errors());
}

#[test]
fn edit_submit_with_invalid_field_is_blocked() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let original = NewClient::new("Juan Perez", "juan@example.com", "612345678", "Acme Corp");
    let id = service.create_client(&original).unwrap();

    let mut edit = EditController::new(&service);
    edit.load(id);
    edit.form_mut().set_input("telefono", "61234567a");

    assert!(edit.submit().is_blocked());
    assert!(edit.form().error(FieldRole::Phone).is_some());
    assert_eq!(service.list_clients().unwrap()[0].client, original);
}

#[test]
fn edit_submit_after_record_vanished_degrades_without_upsert() {
    let conn = open_db_in_memory().unwrap();
    let service = ClientService::new(SqliteClientRepository::try_new(&conn).unwrap());
    let id = service
        .create_client(&NewClient::new(
            "Juan Perez",
            "juan@example.com",
            "612345678",
            "Acme Corp",
        ))
        .unwrap();

    let mut edit = EditController::new(&service);
    assert!(edit.load(id));
    service.delete_client(id).unwrap();

    let outcome = edit.submit();
    assert_eq!(
        outcome,
        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted: None,
        }
    );
    assert!(service.list_clients().unwrap().is_empty());
}

fn unavailable_service() -> ClientService<UnavailableClientRepository> {
    ClientService::new(UnavailableClientRepository::new("unable to open database file"))
}

#[test]
fn unreadable_store_renders_empty_listing_and_delete_still_refreshes() {
    let service = unavailable_service();
    let mut list = ListController::new(&service);

    assert!(list.refresh().is_empty());
    assert!(list.delete(3).is_empty());
}

#[test]
fn unreadable_store_leaves_edit_form_untouched() {
    let service = unavailable_service();
    let mut edit = EditController::new(&service);

    assert!(!edit.load(3));
    assert!(!edit.load_from_query("?id=3"));
    assert_eq!(edit.form(), &ClientForm::new());
}

#[test]
fn failed_create_write_navigates_without_persisted_id() {
    let service = unavailable_service();
    let mut list = ListController::new(&service);
    fill(
        list.form_mut(),
        &[
            ("nombre", "Juan Perez"),
            ("email", "juan@example.com"),
            ("telefono", "612345678"),
            ("empresa", "Acme Corp"),
        ],
    );

    assert_eq!(
        list.submit(),
        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted: None,
        }
    );
}

#[test]
fn failed_update_write_navigates_without_persisted_id() {
    let service = unavailable_service();
    let mut edit = EditController::new(&service);
    edit.form_mut().populate(&ClientRecord::new(
        8,
        NewClient::new("Juan Perez", "juan@example.com", "612345678", "Acme Corp"),
    ));

    assert_eq!(
        edit.submit(),
        SubmitOutcome::Navigate {
            to: View::Listing,
            persisted: None,
        }
    );
}

#[test]
fn unreadable_store_still_blocks_invalid_submission() {
    let service = unavailable_service();
    let mut list = ListController::new(&service);

    assert!(list.submit().is_blocked());
    assert_eq!(list.form().error(FieldRole::Name), Some(REQUIRED_MESSAGE));
}
