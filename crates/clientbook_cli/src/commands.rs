//! Subcommand dispatch against an explicitly opened client service.
//!
//! # Invariants
//! - Storage failures, including a store that cannot be opened, are handled
//!   inside the core controllers; only blocked submissions and failed
//!   `check` validations produce a failing exit status.

use crate::args::{Command, FieldArgs};
use crate::render::{render_errors, render_form, render_table};
use anyhow::Result;
use clientbook_core::db::open_db;
use clientbook_core::{
    check_input, ClientForm, ClientRepository, ClientService, EditController, FieldCheck,
    ListController, SqliteClientRepository, SubmitOutcome, UnavailableClientRepository,
};
use log::{debug, error};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

/// Opens the store at `db_path` once and runs `command` against it.
///
/// A store that fails to open or bootstrap is replaced by an
/// `UnavailableClientRepository`, so the command degrades instead of failing.
pub fn run_with_store(
    db_path: &Path,
    command: Command,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let conn = open_db(db_path);
    let repo = match &conn {
        Ok(conn) => SqliteClientRepository::try_new(conn).map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    match repo {
        Ok(repo) => run(&ClientService::new(repo), command, out),
        Err(reason) => {
            error!(
                "event=db_open module=cli status=error error_code=db_open_failed path={} error={reason}",
                db_path.display()
            );
            let service = ClientService::new(UnavailableClientRepository::new(reason));
            run(&service, command, out)
        }
    }
}

/// Runs `check` without touching the store.
pub fn run_check(field: &str, value: &str, out: &mut impl Write) -> Result<ExitCode> {
    match check_input(field, value) {
        FieldCheck::Valid => {
            writeln!(out, "{field}: ok")?;
            Ok(ExitCode::SUCCESS)
        }
        FieldCheck::Invalid(message) => {
            writeln!(out, "{field}: {message}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn run<R: ClientRepository>(
    service: &ClientService<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<ExitCode> {
    match command {
        Command::List { json } => list(service, json, out),
        Command::Add(fields) => add(service, &fields, out),
        Command::Edit { query, fields } => edit(service, &query, &fields, out),
        Command::Show { query } => show(service, &query, out),
        Command::Delete { id } => {
            let mut listing = ListController::new(service);
            let rows = listing.delete(id);
            write!(out, "{}", render_table(rows))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { field, value } => run_check(&field, &value, out),
    }
}

fn list<R: ClientRepository>(
    service: &ClientService<R>,
    json: bool,
    out: &mut impl Write,
) -> Result<ExitCode> {
    if json {
        // Same degradation as the table: unreadable store prints `[]`.
        let records = service.list_clients().unwrap_or_else(|err| {
            error!("event=client_list module=cli status=error error={err}");
            Vec::new()
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
    } else {
        let mut listing = ListController::new(service);
        write!(out, "{}", render_table(listing.refresh()))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn add<R: ClientRepository>(
    service: &ClientService<R>,
    fields: &FieldArgs,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let mut listing = ListController::new(service);
    apply_inputs(listing.form_mut(), fields);
    let outcome = listing.submit();
    finish(service, outcome, listing.form(), out)
}

fn edit<R: ClientRepository>(
    service: &ClientService<R>,
    query: &str,
    fields: &FieldArgs,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let mut editor = EditController::new(service);
    if !editor.load_from_query(query) {
        debug!("event=client_load module=cli status=skipped query={query}");
    }
    apply_inputs(editor.form_mut(), fields);
    let outcome = editor.submit();
    finish(service, outcome, editor.form(), out)
}

fn show<R: ClientRepository>(
    service: &ClientService<R>,
    query: &str,
    out: &mut impl Write,
) -> Result<ExitCode> {
    let mut editor = EditController::new(service);
    editor.load_from_query(query);
    write!(out, "{}", render_form(editor.form()))?;
    Ok(ExitCode::SUCCESS)
}

fn apply_inputs(form: &mut ClientForm, fields: &FieldArgs) {
    for (name, value) in fields.inputs() {
        form.set_input(name, value);
        form.blur(name);
    }
}

fn finish<R: ClientRepository>(
    service: &ClientService<R>,
    outcome: SubmitOutcome,
    form: &ClientForm,
    out: &mut impl Write,
) -> Result<ExitCode> {
    match outcome {
        SubmitOutcome::Blocked => {
            write!(out, "{}", render_errors(form))?;
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Navigate { .. } => {
            let mut listing = ListController::new(service);
            write!(out, "{}", render_table(listing.refresh()))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
