//! Plain-text rendering for listing rows and forms.

use clientbook_core::{ClientForm, FieldRole, ListingRow};
use std::fmt::Write as _;

const HEADERS: [&str; 5] = ["ID", "NAME", "PHONE", "COMPANY", "EDIT"];

/// Renders rows as an aligned table; an empty listing renders a notice.
pub fn render_table(rows: &[ListingRow]) -> String {
    if rows.is_empty() {
        return "No clients.\n".to_string();
    }

    let cells = rows
        .iter()
        .map(|row| {
            [
                row.delete_id.to_string(),
                row.name.clone(),
                row.phone.clone(),
                row.company.clone(),
                format!("?{}", row.edit_query),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Renders form inputs with any inline error below the matching input.
pub fn render_form(form: &ClientForm) -> String {
    let mut out = String::new();
    if let Some(id) = form.hidden_id() {
        let _ = writeln!(out, "id: {id}");
    }
    for role in FieldRole::ALL {
        let _ = writeln!(out, "{role}: {}", form.values().field(role));
        if let Some(message) = form.error(role) {
            let _ = writeln!(out, "  ! {message}");
        }
    }
    out
}

/// Renders only the inline errors, one per failing input.
pub fn render_errors(form: &ClientForm) -> String {
    let mut out = String::new();
    for (role, message) in form.errors() {
        let _ = writeln!(out, "{role}: {message}");
    }
    out
}
