//! Subcommand implementations.
//!
//! Each `run_*` writes its report to `out` and returns a result the binary
//! maps to an exit status.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use profile_form::{ProfileForm, SubmitOutcome};
use profile_model::{ControlKind, FieldChange, FieldId, FormState, Gender};

use crate::cli::{CheckArgs, ControlArg, ReplayArgs};
use crate::events::load_events;
use crate::logging::redact_value;
use crate::render::{JsonReport, fields_table, gate_table, plain_report, state_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub has_error: bool,
}

impl CheckResult {
    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayResult {
    pub ready: bool,
    /// `None` unless a submit was requested.
    pub outcome: Option<SubmitOutcome>,
}

impl ReplayResult {
    /// 1 only when a requested submit found the form not ready.
    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            Some(SubmitOutcome::NotReady) => 1,
            Some(SubmitOutcome::Completed) | None => 0,
        }
    }
}

pub fn run_fields(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", fields_table())?;
    Ok(())
}

pub fn run_check(args: &CheckArgs, out: &mut impl Write) -> Result<CheckResult> {
    let field: FieldId = args
        .field
        .parse()
        .with_context(|| format!("parse field name {:?}", args.field))?;
    if field == FieldId::Gender {
        Gender::parse_selection(&args.value).context("parse gender option")?;
    }
    let change = FieldChange::new(field, args.value.clone(), control_kind(args.control));
    trace!(%field, value = redact_value(&change.value), "checking value");

    let mut form = ProfileForm::new();
    let snapshot = form.apply(&change);
    let error = snapshot.errors.get(field);

    writeln!(out, "field:  {} ({})", field, field.label())?;
    writeln!(out, "stored: \"{}\"", snapshot.state.value(field))?;
    match error.message() {
        Some(message) => writeln!(out, "error:  {message}")?,
        None => writeln!(out, "error:  -")?,
    }
    Ok(CheckResult {
        has_error: error.is_present(),
    })
}

pub fn run_replay(args: &ReplayArgs, out: &mut impl Write) -> Result<ReplayResult> {
    let events = load_events(&args.events)
        .with_context(|| format!("load events from {}", args.events.display()))?;
    let span = info_span!("replay", events = events.len());
    let _guard = span.enter();
    info!("replaying input events");

    let mut form = ProfileForm::new();
    for (index, change) in events.iter().enumerate() {
        trace!(
            index,
            field = %change.field,
            control = %change.control,
            value = redact_value(&change.value),
            "input event"
        );
        form.apply(change);
    }

    let gate = form.gate();
    debug!(ready = gate.is_ready(), "replay finished");

    if args.json {
        let report = JsonReport::new(form.snapshot(), &gate);
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        writeln!(out, "{json}")?;
    } else if args.plain {
        writeln!(out, "{}", plain_report(form.snapshot(), &gate))?;
    } else {
        writeln!(out, "{}", state_table(form.snapshot()))?;
        if gate.is_ready() {
            writeln!(out, "Ready to submit.")?;
        } else {
            writeln!(out, "Not ready:")?;
            writeln!(out, "{}", gate_table(&gate))?;
        }
    }

    let mut completed = false;
    let outcome = args
        .submit
        .then(|| form.submit(|_: &FormState| completed = true));
    if completed {
        writeln!(out, "complete")?;
    }
    Ok(ReplayResult {
        ready: gate.is_ready(),
        outcome,
    })
}

fn control_kind(arg: ControlArg) -> ControlKind {
    match arg {
        ControlArg::Text => ControlKind::Text,
        ControlArg::Number => ControlKind::Number,
        ControlArg::Radio => ControlKind::Radio,
    }
}
