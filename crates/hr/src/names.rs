//! Timesheet display names.
//!
//! Dates render as dd/MM/yyyy throughout.

use crate::timesheet::{Timesheet, TimesheetLine};

const DATE_FORMAT: &str = "%d/%m/%Y";

/// Display name of a timesheet.
///
/// Rules: no employee contact partner ⇒ `""`; the contact partner name alone
/// when no `from_date`; `"{name} {from}"` with a from date; `"{name}
/// {from}-{to}"` with both dates. A `to_date` without a `from_date`
/// contributes nothing.
pub fn compute_timesheet_full_name(timesheet: &Timesheet) -> String {
    let name = timesheet
        .employee()
        .and_then(|e| e.contact_partner())
        .map(|p| p.full_name().to_string())
        .unwrap_or_default();

    if name.is_empty() {
        return String::new();
    }

    let Some(from) = timesheet.from_date() else {
        return name;
    };

    match timesheet.to_date() {
        Some(to) => format!(
            "{name} {}-{}",
            from.format(DATE_FORMAT),
            to.format(DATE_FORMAT)
        ),
        None => format!("{name} {}", from.format(DATE_FORMAT)),
    }
}

/// Display name of a single line: project label and date, whichever exist.
pub fn compute_line_full_name(line: &TimesheetLine) -> String {
    match (line.project.as_deref(), line.date) {
        (Some(project), Some(date)) => format!("{project} {}", date.format(DATE_FORMAT)),
        (Some(project), None) => project.to_string(),
        (None, Some(date)) => date.format(DATE_FORMAT).to_string(),
        (None, None) => String::new(),
    }
}
