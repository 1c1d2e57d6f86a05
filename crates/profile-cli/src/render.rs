//! Terminal and JSON rendering of form state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use profile_model::{FieldId, FormErrors, FormSnapshot, FormState, Gender};
use profile_validate::{Blocker, FieldRule, GateReport};

/// Machine-readable view of the form after a run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub state: &'a FormState,
    pub errors: &'a FormErrors,
    pub ready: bool,
    pub blockers: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(snapshot: &'a FormSnapshot, gate: &GateReport) -> Self {
        Self {
            state: &snapshot.state,
            errors: &snapshot.errors,
            ready: gate.is_ready(),
            blockers: gate.blockers.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One line per field followed by the gate status and its blockers.
pub fn plain_report(snapshot: &FormSnapshot, gate: &GateReport) -> String {
    let mut lines = Vec::with_capacity(FieldId::ALL.len() + gate.blockers.len() + 1);
    for field in FieldId::ALL {
        let mut line = format!(
            "{} ({}): \"{}\"",
            field.label(),
            field,
            snapshot.state.value(field)
        );
        if let Some(message) = snapshot.errors.get(field).message() {
            line.push_str(" ! ");
            line.push_str(message);
        }
        lines.push(line);
    }
    if gate.is_ready() {
        lines.push("gate: ready".to_string());
    } else {
        lines.push("gate: blocked".to_string());
        lines.extend(gate.blockers.iter().map(|blocker| format!("- {blocker}")));
    }
    lines.join("\n")
}

/// Field, value, and error table.
pub fn state_table(snapshot: &FormSnapshot) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("項目"),
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    for field in FieldId::ALL {
        let value = snapshot.state.value(field);
        let value_cell = match field {
            FieldId::Gender => gender_cell(snapshot.state.gender()),
            _ if value.is_empty() => dim_cell("-"),
            _ => Cell::new(value),
        };
        let error_cell = match snapshot.errors.get(field).message() {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(field.label()).add_attribute(Attribute::Bold),
            Cell::new(field.as_str()),
            value_cell,
            error_cell,
        ]);
    }
    table
}

/// Gate status and blockers.
pub fn gate_table(gate: &GateReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Blocker")]);
    apply_table_style(&mut table);
    for blocker in &gate.blockers {
        let reason = match blocker {
            Blocker::Missing(_) => Cell::new("未入力").fg(Color::Yellow),
            Blocker::Invalid(_, error) => Cell::new(error.message()).fg(Color::Red),
        };
        table.add_row(vec![Cell::new(blocker.field().as_str()), reason]);
    }
    table
}

/// Every field with its section, label, and rule.
pub fn fields_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Rule"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for field in FieldId::ALL {
        let rule = FieldRule::for_field(field);
        let message = match rule.failure() {
            Some(error) => Cell::new(error.message()),
            None => dim_cell("-"),
        };
        let rule_cell = match field {
            FieldId::Gender => Cell::new(format!(
                "{rule} ({})",
                Gender::ALL.map(|gender| gender.as_str()).join("/")
            )),
            _ => Cell::new(rule.as_str()),
        };
        table.add_row(vec![
            Cell::new(field.section().title()),
            Cell::new(field.as_str()).fg(Color::Blue),
            Cell::new(field.label()),
            rule_cell,
            message,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn gender_cell(gender: Option<Gender>) -> Cell {
    match gender {
        Some(gender) => Cell::new(format!("{} ({})", gender.label(), gender.as_str())),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
